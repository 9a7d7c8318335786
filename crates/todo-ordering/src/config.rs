//! Configuration for list ordering

use serde::{Deserialize, Serialize};

use crate::domain::errors::OrderingError;

/// Largest accepted gap (2^53). Keeps `index * gap` finite and exact for
/// any realistic list length.
pub const MAX_GAP: f64 = 9_007_199_254_740_992.0;

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Spacing for prepend/append and rebalanced lists
    pub gap: f64,
    /// Position of the first item in an empty list
    pub base: f64,
    /// Rebalance once a new key would sit closer than this to a neighbor
    pub epsilon: f64,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            gap: 1024.0,
            base: 1024.0,
            epsilon: 1.0,
        }
    }
}

impl OrderingConfig {
    /// Reject values the engine cannot work with.
    ///
    /// `epsilon` must stay below `gap / 2`, otherwise a midpoint between two
    /// freshly rebalanced neighbors would itself trigger a rebalance.
    pub fn validate(&self) -> Result<(), OrderingError> {
        if !self.gap.is_finite() || self.gap <= 0.0 || self.gap > MAX_GAP {
            return Err(OrderingError::InvalidConfig(format!(
                "gap must be in (0, {}], got {}",
                MAX_GAP, self.gap
            )));
        }
        if !self.base.is_finite() {
            return Err(OrderingError::InvalidConfig(format!(
                "base must be finite, got {}",
                self.base
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(OrderingError::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if self.epsilon >= self.gap / 2.0 {
            return Err(OrderingError::InvalidConfig(format!(
                "epsilon {} must be below half the gap ({})",
                self.epsilon,
                self.gap / 2.0
            )));
        }
        Ok(())
    }
}
