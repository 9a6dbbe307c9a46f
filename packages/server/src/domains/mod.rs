// Business domains
pub mod assistant;
pub mod booking;
pub mod catalog;
pub mod content;
pub mod dashboard;
pub mod identity;
