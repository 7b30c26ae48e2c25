//! Record type, rank key and the [`Ranked`] trait.

use super::error::ValidationError;
use std::cmp::Reverse;
use std::fmt;

/// Lowest accepted urgency (low).
pub const MIN_URGENCY: i32 = 1;

/// Highest accepted urgency (high).
pub const MAX_URGENCY: i32 = 3;

/// Strict "ranks higher than" relation used by the heap.
///
/// Implementations must be irreflexive (`a.ranks_higher_than(a)` is
/// `false`) and transitive. Two values where neither ranks higher than the
/// other are treated as equivalent; the heap keeps both and makes no
/// promise about their relative order.
///
/// # Examples
///
/// ```
/// use u_loadheap::record::{LoadRecord, Ranked};
///
/// let urgent = LoadRecord::new(1, 1, 3, 10, "medical");
/// let routine = LoadRecord::new(2, 1, 1, 10, "paper");
/// assert!(urgent.ranks_higher_than(&routine));
/// assert!(!routine.ranks_higher_than(&urgent));
/// ```
pub trait Ranked {
    /// Returns `true` when `self` must come out of the heap before `other`.
    fn ranks_higher_than(&self, other: &Self) -> bool;
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn ranks_higher_than(&self, other: &Self) -> bool {
        (**self).ranks_higher_than(*other)
    }
}

/// Sort key realizing the record rank as a derived total order.
///
/// Field order matters: priority, then urgency, then weight, then the
/// *reversed* identifier so that a smaller id compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    pub priority: i64,
    pub urgency: i32,
    pub weight: i32,
    pub id: Reverse<i32>,
}

/// The five raw fields of a load, before validation.
///
/// This is what the loader parses out of a CSV line and what the serde
/// representation of a [`LoadRecord`] deserializes through.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordFields {
    pub id: i32,
    pub category: i32,
    pub urgency: i32,
    pub weight: i32,
    pub description: String,
}

impl RecordFields {
    /// Checks urgency and weight against their accepted domains.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_urgency(self.urgency)?;
        validate_weight(self.weight)
    }
}

/// An immutable load with its derived priority.
///
/// The priority is computed once in [`LoadRecord::new`] and never
/// recomputed; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RecordFields")
)]
pub struct LoadRecord {
    id: i32,
    category: i32,
    urgency: i32,
    weight: i32,
    description: String,
    priority: i64,
}

impl LoadRecord {
    /// Creates a record without validating its fields.
    ///
    /// The heap accepts any record built this way; range checks belong to
    /// whoever produces the fields (see [`LoadRecord::try_new`]).
    pub fn new(
        id: i32,
        category: i32,
        urgency: i32,
        weight: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            urgency,
            weight,
            description: description.into(),
            priority: compute_priority(urgency, weight, category),
        }
    }

    /// Creates a record after checking urgency ∈ {1, 2, 3} and weight ≥ 0.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found, urgency checked first.
    pub fn try_new(
        id: i32,
        category: i32,
        urgency: i32,
        weight: i32,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        validate_urgency(urgency)?;
        validate_weight(weight)?;
        Ok(Self::new(id, category, urgency, weight, description))
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn urgency(&self) -> i32 {
        self.urgency
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Derived priority score. Higher sorts first.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Returns the key whose natural order is the record rank.
    pub fn rank_key(&self) -> RankKey {
        RankKey {
            priority: self.priority,
            urgency: self.urgency,
            weight: self.weight,
            id: Reverse(self.id),
        }
    }
}

impl Ranked for LoadRecord {
    fn ranks_higher_than(&self, other: &Self) -> bool {
        self.rank_key() > other.rank_key()
    }
}

impl TryFrom<RecordFields> for LoadRecord {
    type Error = ValidationError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        fields.validate()?;
        Ok(Self::new(
            fields.id,
            fields.category,
            fields.urgency,
            fields.weight,
            fields.description,
        ))
    }
}

impl fmt::Display for LoadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} | {:<4} | {:<8} | {:<4} | {:<10} | {}",
            self.id, self.category, self.urgency, self.weight, self.priority, self.description
        )
    }
}

// Widened to i64 so extreme i32 inputs cannot overflow.
fn compute_priority(urgency: i32, weight: i32, category: i32) -> i64 {
    i64::from(urgency) * 10 + i64::from(weight) * 2 + i64::from(category) * 5
}

fn validate_urgency(urgency: i32) -> Result<(), ValidationError> {
    if (MIN_URGENCY..=MAX_URGENCY).contains(&urgency) {
        Ok(())
    } else {
        Err(ValidationError::UrgencyOutOfRange(urgency))
    }
}

fn validate_weight(weight: i32) -> Result<(), ValidationError> {
    if weight >= 0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeWeight(weight))
    }
}
