//! Booking quotes.
//!
//! A quote itemizes what moving into a room costs up front: first month's
//! rent plus the security deposit. Actual payment collection happens
//! offline, so the quote also lists the accepted payment methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::common::{PropertyId, RoomId};
use crate::domains::catalog::{Property, RoomType};

/// Deposit charged up front, as a multiple of monthly rent.
const DEPOSIT_MONTHS: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("Room is not available")]
    RoomUnavailable,
}

/// Payment methods offered at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Pay with Card / UPI")]
    CardOrUpi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Pay at Property")]
    PayAtProperty,
}

impl PaymentMethod {
    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::CardOrUpi,
            PaymentMethod::BankTransfer,
            PaymentMethod::PayAtProperty,
        ]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CardOrUpi => write!(f, "Pay with Card / UPI"),
            PaymentMethod::BankTransfer => write!(f, "Bank Transfer"),
            PaymentMethod::PayAtProperty => write!(f, "Pay at Property"),
        }
    }
}

/// An itemized booking quote for one room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub property_id: PropertyId,
    pub property_title: String,
    pub room_id: RoomId,
    pub room_type: RoomType,
    /// Monthly rent in whole rupees
    pub monthly_rent: u32,
    /// Refundable deposit, two months' rent
    pub security_deposit: u32,
    /// Due at move-in: first month plus deposit
    pub total_payable: u32,
    pub payment_methods: Vec<PaymentMethod>,
}

impl BookingQuote {
    /// Quote a specific room on a property.
    ///
    /// Occupied rooms cannot be quoted; the booking page only offers
    /// available ones, and a direct request for an occupied room is a
    /// conflict the caller has to surface.
    pub fn for_room(property: &Property, room_id: &RoomId) -> Result<Self, QuoteError> {
        let room = property.room(room_id).ok_or(QuoteError::RoomNotFound)?;
        if !room.is_available {
            return Err(QuoteError::RoomUnavailable);
        }

        let monthly_rent = room.price;
        let security_deposit = monthly_rent * DEPOSIT_MONTHS;

        Ok(Self {
            property_id: property.id.clone(),
            property_title: property.title.clone(),
            room_id: room.id.clone(),
            room_type: room.room_type,
            monthly_rent,
            security_deposit,
            total_payable: monthly_rent + security_deposit,
            payment_methods: PaymentMethod::all().to_vec(),
        })
    }
}
