//! Content domain - marketing copy, help-center FAQs, and filter options.

pub mod site;

pub use site::{
    BlogPost, Faq, FilterOptions, PriceBounds, SiteContent, Testimonial, WhyChooseUsItem,
};
