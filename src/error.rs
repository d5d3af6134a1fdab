// Error types for the reservation ledger
use thiserror::Error;

use crate::model::ReservationId;

// Business-rule rejections returned by the ledger. None of these are transient,
// so callers should report them rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationError {
    #[error("Guest listed more than once in the request: {}", .names.join(", "))]
    DuplicateGuestInRequest { names: Vec<String> },

    #[error("Guest already holds an active reservation: {}", .names.join(", "))]
    GuestAlreadyReserved { names: Vec<String> },

    #[error("Reservation {0} not found")]
    ReservationNotFound(ReservationId),

    #[error("A reservation needs at least one guest")]
    EmptyGuestList,

    #[error("Invalid stay length: {0} days")]
    InvalidStayDays(u32),

    #[error("Guest name must not be empty")]
    EmptyGuestName,

    #[error("No reservation ids left to assign")]
    IdsExhausted,
}

impl ReservationError {
    // Names carried by the duplicate kinds, empty for everything else
    pub fn duplicate_names(&self) -> &[String] {
        match self {
            ReservationError::DuplicateGuestInRequest { names }
            | ReservationError::GuestAlreadyReserved { names } => names,
            _ => &[],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid pricing configuration: {0}")]
    InvalidPricing(String),

    #[error("Invalid first reservation id: {0}")]
    InvalidFirstId(ReservationId),
}
