//! Booking domain - quotes for reserving a room.

pub mod quote;

pub use quote::{BookingQuote, PaymentMethod, QuoteError};
