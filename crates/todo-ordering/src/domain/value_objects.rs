//! Value objects for list ordering

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::errors::OrderingError;

/// Opaque item identifier, stable for the item's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Sort key of an item. Always finite.
///
/// Only the relative order of positions carries meaning; they are not
/// counts or timestamps.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Position(f64);

impl Position {
    pub fn new(value: f64) -> Result<Self, OrderingError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(OrderingError::NonFinitePosition(value))
        }
    }

    /// Caller guarantees `value` is finite.
    pub(crate) fn from_finite(value: f64) -> Self {
        debug_assert!(value.is_finite());
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Arithmetic midpoint. May equal either bound once the two are
    /// adjacent floats.
    pub fn midpoint(a: Position, b: Position) -> Position {
        // a/2 + b/2 cannot overflow where (a + b)/2 can
        Self(a.0 / 2.0 + b.0 / 2.0)
    }

    /// Shift by `delta`; `None` if the result is not finite.
    pub fn offset(self, delta: f64) -> Option<Position> {
        let value = self.0 + delta;
        value.is_finite().then_some(Self(value))
    }
}

impl TryFrom<f64> for Position {
    type Error = OrderingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Position> for f64 {
    fn from(value: Position) -> Self {
        value.0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 must compare equal so they count as a collision
        if self.0 == other.0 {
            Ordering::Equal
        } else {
            self.0.total_cmp(&other.0)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a new item goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// New item becomes first
    #[default]
    Prepend,
    /// New item becomes last
    Append,
}

/// Visible subset of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ListFilter {
    pub fn admits(self, completed: bool) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Active => !completed,
            ListFilter::Completed => completed,
        }
    }
}

/// Which side of the drop target the dragged item lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}
