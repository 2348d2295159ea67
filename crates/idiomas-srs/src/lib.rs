//! SRS (Spaced Repetition System) library for App Idiomas
//!
//! This crate provides the simplified review scheduler: a fixed table mapping a
//! review grade to a wait duration, and a uniform random pick of the next card.
//! It keeps no state between calls.

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

/// Wait applied to grades outside the table.
pub const DEFAULT_INTERVAL_SECS: u64 = 600;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrsError {
    #[error("no words available to review")]
    NoDataAvailable,
}

/// Review outcome reported by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl Grade {
    /// Wait before the card should be shown again, in seconds.
    pub const fn interval_secs(self) -> u64 {
        match self {
            Self::Again => 30,
            Self::Hard => 5 * 60,
            Self::Good => 25 * 60,
            Self::Easy => 12 * 60 * 60,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl TryFrom<i64> for Grade {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Again),
            1 => Ok(Self::Hard),
            2 => Ok(Self::Good),
            3 => Ok(Self::Easy),
            other => Err(other),
        }
    }
}

/// Get the wait interval in seconds for a raw grade value.
///
/// # Arguments
///
/// * `grade` - The grade submitted by the learner (0 again, 1 hard, 2 good, 3 easy)
///
/// # Returns
///
/// The interval in seconds as a `u64`
///
/// # Note
///
/// Values outside `0..=3` are normally rejected before reaching the scheduler.
/// Any that slip through get [`DEFAULT_INTERVAL_SECS`].
pub fn interval_for_grade(grade: i64) -> u64 {
    Grade::try_from(grade).map_or(DEFAULT_INTERVAL_SECS, Grade::interval_secs)
}

/// Result of scheduling a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled<'a, T> {
    /// Seconds until the reviewed card is due again
    pub next_due_seconds: u64,
    /// Card to show next
    pub next: &'a T,
}

/// Schedule a review and choose the next card.
///
/// The next card is drawn uniformly from all `candidates`: it is not filtered
/// by theme, may be the card just reviewed, and successive calls are
/// independent.
///
/// # Errors
///
/// Returns [`SrsError::NoDataAvailable`] when `candidates` is empty.
pub fn schedule<'a, T, R>(
    candidates: &'a [T],
    grade: i64,
    rng: &mut R,
) -> Result<Scheduled<'a, T>, SrsError>
where
    R: Rng + ?Sized,
{
    let next = candidates.choose(rng).ok_or(SrsError::NoDataAvailable)?;

    Ok(Scheduled {
        next_due_seconds: interval_for_grade(grade),
        next,
    })
}
