// Pricing policy for reservations
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_PRICE_PER_GUEST: f64 = 20.0;
pub const DEFAULT_BREAKFAST_MULTIPLIER: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PricingPolicy {
    pub base_price_per_guest: f64,
    pub breakfast_multiplier: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_price_per_guest: DEFAULT_BASE_PRICE_PER_GUEST,
            breakfast_multiplier: DEFAULT_BREAKFAST_MULTIPLIER,
        }
    }
}

impl PricingPolicy {
    pub fn new(base_price_per_guest: f64, breakfast_multiplier: f64) -> Result<Self, ConfigError> {
        let policy = Self {
            base_price_per_guest,
            breakfast_multiplier,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_price_per_guest.is_finite() || self.base_price_per_guest < 0.0 {
            return Err(ConfigError::InvalidPricing(format!(
                "base price per guest must be a non-negative number, got {}",
                self.base_price_per_guest
            )));
        }
        if !self.breakfast_multiplier.is_finite() || self.breakfast_multiplier < 1.0 {
            return Err(ConfigError::InvalidPricing(format!(
                "breakfast multiplier must be at least 1.0, got {}",
                self.breakfast_multiplier
            )));
        }
        Ok(())
    }

    // guests x days x base, then the breakfast surcharge on top. The surcharge
    // is applied last so the breakfast price is exactly multiplier x plain price.
    pub fn price(&self, guest_count: usize, stay_days: u32, breakfast_included: bool) -> f64 {
        let total = guest_count as f64 * stay_days as f64 * self.base_price_per_guest;
        if breakfast_included {
            total * self.breakfast_multiplier
        } else {
            total
        }
    }
}

// Price under the default policy
pub fn calculate_price(guest_count: usize, stay_days: u32, breakfast_included: bool) -> f64 {
    PricingPolicy::default().price(guest_count, stay_days, breakfast_included)
}
