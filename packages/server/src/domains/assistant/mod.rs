//! Assistant domain - AI-backed FAQ answers and listing copy.

pub mod describe;
pub mod faq;

pub use describe::{generate_property_description, DescriptionInput, GeneratedDescription};
pub use faq::{answer_faq_question, build_faq_context, FaqAnswer, FaqQuestionInput};
