// Data structures for guests and reservations
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReservationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Guest {
    pub name: String,
    pub age: u32,
}

impl Guest {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

// A reservation as held by the ledger. Callers only ever get clones, so
// nothing here can reach back into ledger state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub hotel_name: String,
    pub guests: Vec<Guest>,
    pub stay_days: u32,
    pub breakfast_included: bool,
    pub price: f64,
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn has_guest(&self, name: &str) -> bool {
        self.guests.iter().any(|g| g.name == name)
    }

    pub fn guest_names(&self) -> impl Iterator<Item = &str> {
        self.guests.iter().map(|g| g.name.as_str())
    }
}
