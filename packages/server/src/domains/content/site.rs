//! Seeded site content.
//!
//! Everything the marketing pages and the help center render: FAQs,
//! testimonials, selling points, blog teasers, and the option lists the
//! property filter sidebar offers.

use serde::{Deserialize, Serialize};

use crate::common::BlogPostId;
use crate::domains::catalog::RoomType;

/// A help-center question and its canned answer.
///
/// Also the grounding context for the FAQ assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub quote: String,
    pub image_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WhyChooseUsItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub author: String,
    /// Publication date as displayed, e.g. "July 15, 2024"
    pub date: String,
    pub excerpt: String,
    pub image_id: String,
}

/// Option lists offered by the property filter sidebar.
///
/// The city and amenity lists are curated for the filter UI and
/// intentionally wider than what the seeded catalog contains; cities
/// without listings simply filter down to nothing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub amenities: Vec<String>,
    pub room_types: Vec<RoomType>,
    pub price: PriceBounds,
}

/// Slider bounds for the price filter, in whole rupees.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceBounds {
    pub min: u32,
    pub max: u32,
}

/// The in-memory site content snapshot.
pub struct SiteContent {
    faqs: Vec<Faq>,
    testimonials: Vec<Testimonial>,
    why_choose_us: Vec<WhyChooseUsItem>,
    blog_posts: Vec<BlogPost>,
    filter_options: FilterOptions,
}

impl SiteContent {
    pub fn seed() -> Self {
        Self {
            faqs: seed_faqs(),
            testimonials: seed_testimonials(),
            why_choose_us: seed_why_choose_us(),
            blog_posts: seed_blog_posts(),
            filter_options: seed_filter_options(),
        }
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn why_choose_us(&self) -> &[WhyChooseUsItem] {
        &self.why_choose_us
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }
}

fn seed_faqs() -> Vec<Faq> {
    let entries = [
        (
            "What is the booking process?",
            "You can browse properties, select a room, fill in your details, and book online. \
             Our team will then contact you to complete the verification and move-in process.",
        ),
        (
            "Is there a security deposit?",
            "Yes, most properties require a security deposit, which is typically equivalent to \
             one or two months' rent. It is fully refundable at the end of your stay, provided \
             there are no damages.",
        ),
        (
            "Can I visit the property before booking?",
            "Absolutely! We encourage you to schedule a visit to the property. You can book a \
             visit directly from the property page or contact our support team.",
        ),
        (
            "What is included in the rent?",
            "Inclusions vary by property, but most of our all-inclusive plans cover rent, \
             utilities (electricity, water), Wi-Fi, housekeeping, and access to all listed \
             amenities.",
        ),
        (
            "How do I raise a maintenance request?",
            "You can easily raise a maintenance request through your tenant dashboard. Our \
             maintenance team will address the issue at the earliest.",
        ),
    ];

    entries
        .into_iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Anjali Sharma".to_string(),
            location: "Student in Pune".to_string(),
            quote: "RoomVerse made finding a PG a breeze! The property was exactly as shown, \
                    and the amenities are fantastic. Highly recommended for students."
                .to_string(),
            image_id: "testimonial-1".to_string(),
        },
        Testimonial {
            name: "Rohan Verma".to_string(),
            location: "IT Professional, Mumbai".to_string(),
            quote: "Moved to Mumbai for a new job and found a great shared flat through \
                    RoomVerse. The process was smooth and the tenant dashboard is super \
                    convenient."
                .to_string(),
            image_id: "testimonial-2".to_string(),
        },
        Testimonial {
            name: "Priya Singh".to_string(),
            location: "Designer in Delhi".to_string(),
            quote: "I love my new place! It's clean, well-maintained, and the community is \
                    great. RoomVerse really understands what young professionals need."
                .to_string(),
            image_id: "testimonial-3".to_string(),
        },
    ]
}

fn seed_why_choose_us() -> Vec<WhyChooseUsItem> {
    vec![
        WhyChooseUsItem {
            title: "Verified Properties".to_string(),
            description: "Every property is handpicked and verified by our team to ensure \
                          quality and safety."
                .to_string(),
        },
        WhyChooseUsItem {
            title: "Transparent Pricing".to_string(),
            description: "No hidden costs. What you see is what you pay. All-inclusive \
                          pricing for your convenience."
                .to_string(),
        },
        WhyChooseUsItem {
            title: "Community & Events".to_string(),
            description: "Join a vibrant community of like-minded people and enjoy exclusive \
                          events and workshops."
                .to_string(),
        },
    ]
}

fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "10 Tips for Your First Time Living in a PG".to_string(),
            author: "RoomVerse Team".to_string(),
            date: "July 15, 2024".to_string(),
            excerpt: "Moving into a PG for the first time? Here are 10 essential tips to \
                      make your transition smooth and enjoyable..."
                .to_string(),
            image_id: "blog-post-1".to_string(),
        },
        BlogPost {
            id: "2".into(),
            title: "A Guide to the Best Cafes for Students in Pune".to_string(),
            author: "Ananya Desai".to_string(),
            date: "July 10, 2024".to_string(),
            excerpt: "Explore the best student-friendly cafes in Pune for studying, hanging \
                      out, and grabbing a great cup of coffee."
                .to_string(),
            image_id: "blog-post-2".to_string(),
        },
        BlogPost {
            id: "3".into(),
            title: "The Benefits of Co-living for Young Professionals".to_string(),
            author: "RoomVerse Team".to_string(),
            date: "July 5, 2024".to_string(),
            excerpt: "Co-living is more than just sharing a space. Discover how it can boost \
                      your career and social life."
                .to_string(),
            image_id: "blog-post-3".to_string(),
        },
    ]
}

fn seed_filter_options() -> FilterOptions {
    FilterOptions {
        cities: [
            "Pune",
            "Mumbai",
            "Delhi",
            "Bangalore",
            "Hyderabad",
            "Noida",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        amenities: [
            "Wifi",
            "AC",
            "Power Backup",
            "Housekeeping",
            "Laundry",
            "Meals",
            "Common Kitchen",
            "TV",
            "Parking",
            "Gym",
            "Security",
            "Fully Furnished",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        room_types: vec![
            RoomType::Private,
            RoomType::SharedTwo,
            RoomType::SharedThreePlus,
        ],
        price: PriceBounds {
            min: 5000,
            max: 50000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_site_sections() {
        let content = SiteContent::seed();
        assert_eq!(content.faqs().len(), 5);
        assert_eq!(content.testimonials().len(), 3);
        assert_eq!(content.why_choose_us().len(), 3);
        assert_eq!(content.blog_posts().len(), 3);
    }

    #[test]
    fn filter_options_cover_the_sidebar() {
        let content = SiteContent::seed();
        let options = content.filter_options();

        assert_eq!(options.cities.len(), 6);
        assert_eq!(options.amenities.len(), 12);
        assert_eq!(options.room_types.len(), 3);
        assert_eq!(options.price.min, 5000);
        assert_eq!(options.price.max, 50000);
    }

    #[test]
    fn room_types_serialize_to_display_labels() {
        let content = SiteContent::seed();
        let json = serde_json::to_value(content.filter_options()).unwrap();
        assert_eq!(json["roomTypes"][1], "Shared (2 beds)");
    }
}
