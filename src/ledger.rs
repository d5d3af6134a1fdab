// Hotel reservation ledger
// Holds the active reservations behind a single lock: a primary index keyed by
// id and a secondary index from guest name to the id that guest is booked under.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ReservationError};
use crate::model::{Guest, Reservation, ReservationId};
use crate::pricing::PricingPolicy;

// Counters kept outside the state lock
#[derive(Debug, Default)]
pub struct LedgerStats {
    pub created_count: AtomicUsize,
    pub cancelled_count: AtomicUsize,
    pub rejected_count: AtomicUsize,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LedgerStatsReport {
    pub created_count: usize,
    pub cancelled_count: usize,
    pub rejected_count: usize,
    pub active_count: usize,
    pub next_id: ReservationId,
}

// Ledger configuration options
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub pricing: PricingPolicy,
    pub first_id: ReservationId,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            pricing: PricingPolicy::default(),
            first_id: 1,
        }
    }
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_id == 0 {
            return Err(ConfigError::InvalidFirstId(self.first_id));
        }
        self.pricing.validate()
    }
}

pub trait ReservationManager: Send + Sync + 'static {
    fn new(config: LedgerConfig) -> Self
    where
        Self: Sized;

    // Validate and store a new reservation. Every check runs before anything
    // is written, so a rejected request leaves the ledger untouched.
    fn create_reservation(
        &self,
        hotel_name: &str,
        guests: Vec<Guest>,
        stay_days: u32,
        breakfast_included: bool,
    ) -> Result<Reservation, ReservationError>;

    // Remove a reservation and release its guests. The id is never handed out again.
    fn cancel_reservation(&self, id: ReservationId) -> Result<ReservationId, ReservationError>;

    // All active reservations, ascending by id
    fn list_active(&self) -> Vec<Reservation>;

    fn get(&self, id: ReservationId) -> Option<Reservation>;

    fn reservation_for_guest(&self, name: &str) -> Option<Reservation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> LedgerStatsReport;
}

struct LedgerState {
    by_id: BTreeMap<ReservationId, Reservation>,
    by_guest_name: HashMap<String, ReservationId>,
    next_id: ReservationId,
}

impl LedgerState {
    fn new(first_id: ReservationId) -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_guest_name: HashMap::new(),
            next_id: first_id,
        }
    }

    fn check_request(&self, guests: &[Guest], stay_days: u32) -> Result<(), ReservationError> {
        let mut seen = HashSet::new();
        let mut repeated: Vec<String> = Vec::new();
        for guest in guests {
            if !seen.insert(guest.name.as_str()) && !repeated.contains(&guest.name) {
                repeated.push(guest.name.clone());
            }
        }
        if !repeated.is_empty() {
            return Err(ReservationError::DuplicateGuestInRequest { names: repeated });
        }

        let already_reserved: Vec<String> = guests
            .iter()
            .filter(|g| self.by_guest_name.contains_key(&g.name))
            .map(|g| g.name.clone())
            .collect();
        if !already_reserved.is_empty() {
            return Err(ReservationError::GuestAlreadyReserved {
                names: already_reserved,
            });
        }

        if guests.is_empty() {
            return Err(ReservationError::EmptyGuestList);
        }
        if guests.iter().any(|g| g.name.is_empty()) {
            return Err(ReservationError::EmptyGuestName);
        }
        if stay_days == 0 {
            return Err(ReservationError::InvalidStayDays(stay_days));
        }
        Ok(())
    }

    fn insert(&mut self, reservation: Reservation) {
        for guest in &reservation.guests {
            self.by_guest_name.insert(guest.name.clone(), reservation.id);
        }
        self.by_id.insert(reservation.id, reservation);
    }

    fn remove(&mut self, id: ReservationId) -> Option<Reservation> {
        let reservation = self.by_id.remove(&id)?;
        for guest in &reservation.guests {
            self.by_guest_name.remove(&guest.name);
        }
        Some(reservation)
    }
}

pub struct HotelReservationLedger {
    state: Mutex<LedgerState>,
    pricing: PricingPolicy,
    stats: LedgerStats,
}

impl HotelReservationLedger {
    pub fn try_new(config: LedgerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(<Self as ReservationManager>::new(config))
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    fn reject(&self, err: ReservationError) -> ReservationError {
        self.stats.rejected_count.fetch_add(1, Ordering::SeqCst);
        warn!(error = %err, "Reservation request rejected");
        err
    }
}

impl Default for HotelReservationLedger {
    fn default() -> Self {
        <Self as ReservationManager>::new(LedgerConfig::default())
    }
}

impl ReservationManager for HotelReservationLedger {
    // An invalid config falls back to the defaults so ids stay positive and
    // prices non-negative. Use try_new to surface the error instead.
    fn new(config: LedgerConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(error = %err, "Invalid ledger config, using defaults");
                LedgerConfig::default()
            }
        };
        Self {
            state: Mutex::new(LedgerState::new(config.first_id)),
            pricing: config.pricing,
            stats: LedgerStats::default(),
        }
    }

    fn create_reservation(
        &self,
        hotel_name: &str,
        guests: Vec<Guest>,
        stay_days: u32,
        breakfast_included: bool,
    ) -> Result<Reservation, ReservationError> {
        // Held across check and insert so overlapping requests cannot both pass
        let mut state = self.state.lock();
        if let Err(err) = state.check_request(&guests, stay_days) {
            return Err(self.reject(err));
        }
        let Some(following_id) = state.next_id.checked_add(1) else {
            return Err(self.reject(ReservationError::IdsExhausted));
        };

        let reservation = Reservation {
            id: state.next_id,
            hotel_name: hotel_name.to_string(),
            price: self
                .pricing
                .price(guests.len(), stay_days, breakfast_included),
            guests,
            stay_days,
            breakfast_included,
            booked_at: Utc::now(),
        };
        state.next_id = following_id;
        state.insert(reservation.clone());
        drop(state);

        self.stats.created_count.fetch_add(1, Ordering::SeqCst);
        info!(
            id = reservation.id,
            hotel = %reservation.hotel_name,
            guests = reservation.guest_count(),
            price = reservation.price,
            "Reservation created"
        );
        Ok(reservation)
    }

    fn cancel_reservation(&self, id: ReservationId) -> Result<ReservationId, ReservationError> {
        let removed = self.state.lock().remove(id);
        match removed {
            Some(reservation) => {
                self.stats.cancelled_count.fetch_add(1, Ordering::SeqCst);
                info!(
                    id,
                    hotel = %reservation.hotel_name,
                    "Reservation cancelled"
                );
                Ok(reservation.id)
            }
            None => Err(self.reject(ReservationError::ReservationNotFound(id))),
        }
    }

    fn list_active(&self) -> Vec<Reservation> {
        let state = self.state.lock();
        debug!(count = state.by_id.len(), "Listing active reservations");
        state.by_id.values().cloned().collect()
    }

    fn get(&self, id: ReservationId) -> Option<Reservation> {
        self.state.lock().by_id.get(&id).cloned()
    }

    fn reservation_for_guest(&self, name: &str) -> Option<Reservation> {
        let state = self.state.lock();
        let id = state.by_guest_name.get(name)?;
        state.by_id.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.state.lock().by_id.len()
    }

    fn stats(&self) -> LedgerStatsReport {
        let (active_count, next_id) = {
            let state = self.state.lock();
            (state.by_id.len(), state.next_id)
        };
        LedgerStatsReport {
            created_count: self.stats.created_count.load(Ordering::SeqCst),
            cancelled_count: self.stats.cancelled_count.load(Ordering::SeqCst),
            rejected_count: self.stats.rejected_count.load(Ordering::SeqCst),
            active_count,
            next_id,
        }
    }
}
