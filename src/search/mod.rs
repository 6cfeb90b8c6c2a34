//! Dynamic search: typed criteria compiled into an explicit predicate tree.
//!
//! Criteria are built per request from validated input, compiled once into a
//! [`Predicate`] and then either lowered to SQL by the repository or
//! evaluated in memory.

use chrono::NaiveDate;
use thiserror::Error;

pub mod animal;
pub mod predicate;
pub mod recruitment;

pub use animal::{AnimalCriteria, AnimalField};
pub use predicate::{
    Comparison, Condition, Field, Predicate, PredicateError, Record, Value, ValueKind,
};
pub use recruitment::{RecruitmentCriteria, RecruitmentField};

/// Criteria that are contradictory and must be rejected before searching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Trims a raw keyword; blank keywords count as absent.
pub fn normalize_keyword(keyword: Option<String>) -> Option<String> {
    keyword
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keyword_trims_and_drops_blank() {
        assert_eq!(normalize_keyword(Some("  Cat ".into())), Some("Cat".into()));
        assert_eq!(normalize_keyword(Some("   ".into())), None);
        assert_eq!(normalize_keyword(None), None);
    }
}
