// In-memory hotel reservation ledger

pub mod error;
pub mod ledger;
pub mod model;
pub mod pricing;

// Re-export key types for convenience
pub use error::{ConfigError, ReservationError};
pub use ledger::{
    HotelReservationLedger, LedgerConfig, LedgerStats, LedgerStatsReport, ReservationManager,
};
pub use model::{Guest, Reservation, ReservationId};
pub use pricing::{calculate_price, PricingPolicy};
