//! Recruitment search criteria and their predicate.

use std::iter;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::recruitment::RecruitmentListing;
use crate::domain::types::ShelterId;
use crate::search::predicate::{Field, Predicate, PredicateError, Record, Value, ValueKind, tolerant};
use crate::search::{CriteriaError, normalize_keyword};

/// Searchable columns of a recruitment listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecruitmentField {
    Title,
    Content,
    /// Name of the owning shelter.
    ShelterName,
    ShelterId,
    IsClosed,
    StartTime,
}

impl Field for RecruitmentField {
    fn kind(self) -> ValueKind {
        match self {
            RecruitmentField::Title | RecruitmentField::Content | RecruitmentField::ShelterName => {
                ValueKind::Text
            }
            RecruitmentField::ShelterId => ValueKind::Integer,
            RecruitmentField::IsClosed => ValueKind::Bool,
            RecruitmentField::StartTime => ValueKind::DateTime,
        }
    }
}

impl Record<RecruitmentField> for RecruitmentListing {
    fn value(&self, field: RecruitmentField) -> Option<Value> {
        let recruitment = &self.recruitment;
        Some(match field {
            RecruitmentField::Title => recruitment.title.as_str().into(),
            RecruitmentField::Content => recruitment.content.as_str().into(),
            RecruitmentField::ShelterName => self.shelter.name.as_str().into(),
            RecruitmentField::ShelterId => recruitment.shelter_id.get().into(),
            RecruitmentField::IsClosed => recruitment.is_closed.into(),
            RecruitmentField::StartTime => recruitment.start_time.into(),
        })
    }
}

/// Filter over recruitments. Absent values impose no constraint.
///
/// The `title`, `content` and `shelter_name` selectors pick the fields the
/// keyword is matched against; with no selector enabled the keyword is
/// ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecruitmentCriteria {
    pub keyword: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_closed: Option<bool>,
    pub title: bool,
    pub content: bool,
    pub shelter_name: bool,
    pub shelter_id: Option<ShelterId>,
}

impl RecruitmentCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = normalize_keyword(Some(keyword.into()));
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn closed(mut self, is_closed: bool) -> Self {
        self.is_closed = Some(is_closed);
        self
    }

    pub fn match_title(mut self, enabled: bool) -> Self {
        self.title = enabled;
        self
    }

    pub fn match_content(mut self, enabled: bool) -> Self {
        self.content = enabled;
        self
    }

    pub fn match_shelter_name(mut self, enabled: bool) -> Self {
        self.shelter_name = enabled;
        self
    }

    pub fn shelter(mut self, shelter_id: ShelterId) -> Self {
        self.shelter_id = Some(shelter_id);
        self
    }

    /// Rejects contradictory criteria.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(CriteriaError::InvertedDateRange { start, end });
        }
        Ok(())
    }

    /// Compiles the criteria into a predicate.
    ///
    /// Keyword leaves are OR-ed together, every other present filter is
    /// AND-ed. The date range covers `start_date 00:00` up to, but not
    /// including, the midnight after `end_date`.
    pub fn to_predicate(&self) -> Predicate<RecruitmentField> {
        let selectors = [
            (self.title, RecruitmentField::Title),
            (self.content, RecruitmentField::Content),
            (self.shelter_name, RecruitmentField::ShelterName),
        ];
        let keyword_group = Predicate::any(
            selectors
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .filter_map(|(_, field)| {
                    let keyword = self.keyword.as_deref()?;
                    tolerant(Predicate::contains(field, keyword))
                }),
        );

        let filters = [
            self.is_closed
                .map(|closed| Predicate::equals(RecruitmentField::IsClosed, closed)),
            self.start_date.map(|date| {
                Predicate::ge(RecruitmentField::StartTime, date.and_time(NaiveTime::MIN))
            }),
            self.end_date.map(|date| {
                let next_day = date.succ_opt().ok_or(PredicateError::OutOfRange)?;
                Predicate::lt(RecruitmentField::StartTime, next_day.and_time(NaiveTime::MIN))
            }),
            self.shelter_id
                .map(|id| Predicate::equals(RecruitmentField::ShelterId, id.get())),
        ];

        Predicate::all(
            iter::once(keyword_group).chain(filters.into_iter().flatten().filter_map(tolerant)),
        )
    }
}
