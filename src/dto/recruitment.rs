use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::recruitment::RecruitmentListing;
use crate::domain::types::ShelterId;
use crate::pagination::{Page, PageInfo};
use crate::search::RecruitmentCriteria;

/// Query of `GET /api/volunteers/recruitments`.
///
/// Absent keyword selectors default to enabled.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindRecruitmentsParams {
    pub keyword: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_closed: Option<bool>,
    pub title: Option<bool>,
    pub content: Option<bool>,
    pub shelter_name: Option<bool>,
    /// Zero-based page number.
    pub page_number: Option<usize>,
    #[validate(range(min = 1))]
    pub page_size: Option<usize>,
}

impl FindRecruitmentsParams {
    pub fn to_criteria(&self) -> RecruitmentCriteria {
        let mut criteria = RecruitmentCriteria::new()
            .match_title(self.title.unwrap_or(true))
            .match_content(self.content.unwrap_or(true))
            .match_shelter_name(self.shelter_name.unwrap_or(true));
        if let Some(keyword) = &self.keyword {
            criteria = criteria.keyword(keyword.as_str());
        }
        if let Some(date) = self.start_date {
            criteria = criteria.start_date(date);
        }
        if let Some(date) = self.end_date {
            criteria = criteria.end_date(date);
        }
        if let Some(closed) = self.is_closed {
            criteria = criteria.closed(closed);
        }
        criteria
    }
}

/// Query of `GET /api/shelters/{shelter_id}/recruitments`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindShelterRecruitmentsParams {
    pub keyword: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub title: Option<bool>,
    pub content: Option<bool>,
    pub page_number: Option<usize>,
    #[validate(range(min = 1))]
    pub page_size: Option<usize>,
}

impl FindShelterRecruitmentsParams {
    pub fn to_criteria(&self, shelter_id: ShelterId) -> RecruitmentCriteria {
        let mut criteria = RecruitmentCriteria::new()
            .shelter(shelter_id)
            .match_title(self.title.unwrap_or(true))
            .match_content(self.content.unwrap_or(true));
        if let Some(keyword) = &self.keyword {
            criteria = criteria.keyword(keyword.as_str());
        }
        if let Some(date) = self.start_date {
            criteria = criteria.start_date(date);
        }
        if let Some(date) = self.end_date {
            criteria = criteria.end_date(date);
        }
        criteria
    }
}

/// Query of `GET /api/volunteers/{volunteer_id}/recruitments/completed`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<usize>,
    #[validate(range(min = 1))]
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentSummary {
    pub recruitment_id: i32,
    pub recruitment_title: String,
    pub recruitment_start_time: NaiveDateTime,
    pub recruitment_end_time: NaiveDateTime,
    pub recruitment_deadline: NaiveDateTime,
    pub recruitment_is_closed: bool,
    pub recruitment_applicant_count: usize,
    pub recruitment_capacity: i32,
    pub shelter_id: i32,
    pub shelter_name: String,
    pub shelter_image_url: Option<String>,
}

impl From<RecruitmentListing> for RecruitmentSummary {
    fn from(listing: RecruitmentListing) -> Self {
        let RecruitmentListing {
            recruitment,
            shelter,
            applicant_count,
        } = listing;
        Self {
            recruitment_id: recruitment.id.get(),
            recruitment_title: recruitment.title.into_inner(),
            recruitment_start_time: recruitment.start_time,
            recruitment_end_time: recruitment.end_time,
            recruitment_deadline: recruitment.deadline,
            recruitment_is_closed: recruitment.is_closed,
            recruitment_applicant_count: applicant_count,
            recruitment_capacity: recruitment.capacity.get(),
            shelter_id: shelter.id.get(),
            shelter_name: shelter.name.into_inner(),
            shelter_image_url: shelter.image_url.map(|url| url.into_inner()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRecruitmentsResponse {
    pub recruitments: Vec<RecruitmentSummary>,
    pub page_info: PageInfo,
}

impl FindRecruitmentsResponse {
    pub fn from_page(page: Page<RecruitmentListing>) -> Self {
        let page_info = page.page_info();
        Self {
            recruitments: page.content.into_iter().map(Into::into).collect(),
            page_info,
        }
    }
}

/// Row of a shelter's own recruitment list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecruitmentSummary {
    pub recruitment_id: i32,
    pub recruitment_title: String,
    pub recruitment_start_time: NaiveDateTime,
    pub recruitment_end_time: NaiveDateTime,
    pub recruitment_deadline: NaiveDateTime,
    pub recruitment_is_closed: bool,
    pub recruitment_applicant_count: usize,
    pub recruitment_capacity: i32,
}

impl From<RecruitmentListing> for ShelterRecruitmentSummary {
    fn from(listing: RecruitmentListing) -> Self {
        let recruitment = listing.recruitment;
        Self {
            recruitment_id: recruitment.id.get(),
            recruitment_title: recruitment.title.into_inner(),
            recruitment_start_time: recruitment.start_time,
            recruitment_end_time: recruitment.end_time,
            recruitment_deadline: recruitment.deadline,
            recruitment_is_closed: recruitment.is_closed,
            recruitment_applicant_count: listing.applicant_count,
            recruitment_capacity: recruitment.capacity.get(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindShelterRecruitmentsResponse {
    pub recruitments: Vec<ShelterRecruitmentSummary>,
    pub page_info: PageInfo,
}

impl FindShelterRecruitmentsResponse {
    pub fn from_page(page: Page<RecruitmentListing>) -> Self {
        let page_info = page.page_info();
        Self {
            recruitments: page.content.into_iter().map(Into::into).collect(),
            page_info,
        }
    }
}

/// Row of a volunteer's attended recruitments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedRecruitmentSummary {
    pub recruitment_id: i32,
    pub recruitment_title: String,
    pub recruitment_start_time: NaiveDateTime,
    pub shelter_id: i32,
    pub shelter_name: String,
}

impl From<RecruitmentListing> for CompletedRecruitmentSummary {
    fn from(listing: RecruitmentListing) -> Self {
        Self {
            recruitment_id: listing.recruitment.id.get(),
            recruitment_title: listing.recruitment.title.into_inner(),
            recruitment_start_time: listing.recruitment.start_time,
            shelter_id: listing.shelter.id.get(),
            shelter_name: listing.shelter.name.into_inner(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindCompletedRecruitmentsResponse {
    pub recruitments: Vec<CompletedRecruitmentSummary>,
    pub page_info: PageInfo,
}

impl FindCompletedRecruitmentsResponse {
    pub fn from_page(page: Page<RecruitmentListing>) -> Self {
        let page_info = page.page_info();
        Self {
            recruitments: page.content.into_iter().map(Into::into).collect(),
            page_info,
        }
    }
}
