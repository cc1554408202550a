//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommitId`] - Validated simulated commit identifier
//! - [`UtcTimestamp`] - RFC3339 timestamp
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use revlog::core::types::CommitId;
//!
//! // Valid constructions
//! let id = CommitId::new(4242).unwrap();
//! assert_eq!(id.value(), 4242);
//!
//! // Invalid constructions fail at creation time
//! assert!(CommitId::new(100_000).is_err());
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("commit id out of range: {0}")]
    IdOutOfRange(u32),
}

/// A validated simulated commit identifier.
///
/// Commit ids stand in for content hashes. They are drawn pseudo-randomly
/// from the half-open range `[0, 100000)` and carry no uniqueness guarantee:
/// collisions between records are permitted and never detected.
///
/// # Example
///
/// ```
/// use revlog::core::types::CommitId;
///
/// let id = CommitId::new(99_999).unwrap();
/// assert_eq!(id.to_string(), "99999");
///
/// // Out-of-range values are rejected
/// assert!(CommitId::new(100_000).is_err());
///
/// // Arbitrary integers can be folded into the valid range
/// let wrapped = CommitId::wrapping(100_001);
/// assert_eq!(wrapped.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CommitId(u32);

impl CommitId {
    /// Exclusive upper bound of the simulated id space.
    pub const LIMIT: u32 = 100_000;

    /// Create a new validated commit id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::IdOutOfRange` if the value is not below
    /// [`CommitId::LIMIT`].
    pub fn new(value: u32) -> Result<Self, TypeError> {
        if value >= Self::LIMIT {
            return Err(TypeError::IdOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a commit id from an arbitrary integer, wrapping into the
    /// valid range.
    pub fn wrapping(value: u32) -> Self {
        // In range by construction
        Self(value % Self::LIMIT)
    }

    /// Draw a pseudo-random commit id from the given generator.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use revlog::core::types::CommitId;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let id = CommitId::random(&mut rng);
    /// assert!(id.value() < CommitId::LIMIT);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // In range by construction
        Self(rng.random_range(0..Self::LIMIT))
    }

    /// Get the raw identifier value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CommitId {
    type Error = TypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommitId> for u32 {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use revlog::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod commit_id {
        use super::*;

        #[test]
        fn valid_ids() {
            assert!(CommitId::new(0).is_ok());
            assert!(CommitId::new(1).is_ok());
            assert!(CommitId::new(54_321).is_ok());
            assert!(CommitId::new(CommitId::LIMIT - 1).is_ok());
        }

        #[test]
        fn out_of_range_rejected() {
            assert_eq!(
                CommitId::new(CommitId::LIMIT),
                Err(TypeError::IdOutOfRange(CommitId::LIMIT))
            );
            assert!(CommitId::new(u32::MAX).is_err());
        }

        #[test]
        fn wrapping_folds_into_range() {
            assert_eq!(CommitId::wrapping(0).value(), 0);
            assert_eq!(CommitId::wrapping(CommitId::LIMIT).value(), 0);
            assert_eq!(CommitId::wrapping(CommitId::LIMIT + 17).value(), 17);
        }

        #[test]
        fn random_is_in_range() {
            use rand::SeedableRng;

            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            for _ in 0..1_000 {
                assert!(CommitId::random(&mut rng).value() < CommitId::LIMIT);
            }
        }

        #[test]
        fn display_is_the_raw_value() {
            let id = CommitId::new(7).unwrap();
            assert_eq!(id.to_string(), "7");
        }

        #[test]
        fn error_message_names_the_value() {
            let err = CommitId::new(200_000).unwrap_err();
            assert!(err.to_string().contains("out of range"));
            assert!(err.to_string().contains("200000"));
        }

        #[test]
        fn serde_roundtrip() {
            let id = CommitId::new(12_345).unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "12345");
            let parsed: CommitId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, parsed);
        }

        #[test]
        fn serde_rejects_out_of_range() {
            let result: Result<CommitId, _> = serde_json::from_str("100000");
            assert!(result.is_err());
        }
    }

    mod utc_timestamp {
        use super::*;

        #[test]
        fn now_works() {
            let ts = UtcTimestamp::now();
            assert!(ts.to_string().contains('T'));
        }

        #[test]
        fn from_datetime_preserves_instant() {
            let dt = chrono::Utc::now();
            let ts = UtcTimestamp::from_datetime(dt);
            assert_eq!(ts.as_datetime(), &dt);
        }

        #[test]
        fn serde_roundtrip() {
            let ts = UtcTimestamp::now();
            let json = serde_json::to_string(&ts).unwrap();
            let parsed: UtcTimestamp = serde_json::from_str(&json).unwrap();
            assert_eq!(ts, parsed);
        }
    }
}
