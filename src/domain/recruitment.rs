use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::shelter::Shelter;
use crate::domain::types::{
    Capacity, ImageUrl, RecruitmentContent, RecruitmentId, RecruitmentTitle, ShelterId,
    TypeConstraintError, image_urls,
};

/// Upper bound on images attached to a recruitment.
pub const RECRUITMENT_IMAGE_URLS_MAX: usize = 5;

/// Volunteer opportunity posted by a shelter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recruitment {
    pub id: RecruitmentId,
    pub shelter_id: ShelterId,
    pub title: RecruitmentTitle,
    pub content: RecruitmentContent,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub capacity: Capacity,
    pub is_closed: bool,
    /// Image urls in upload order.
    pub image_urls: Vec<ImageUrl>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A recruitment joined with its owning shelter and current applicant count.
#[derive(Clone, Debug, PartialEq)]
pub struct RecruitmentListing {
    pub recruitment: Recruitment,
    pub shelter: Shelter,
    pub applicant_count: usize,
}

#[derive(Clone, Debug)]
pub struct NewRecruitment {
    pub shelter_id: ShelterId,
    pub title: RecruitmentTitle,
    pub content: RecruitmentContent,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub capacity: Capacity,
    pub image_urls: Vec<ImageUrl>,
}

impl NewRecruitment {
    /// Validates raw input into a recruitment registration.
    ///
    /// The volunteering window must be non-empty and applications must close
    /// no later than it starts.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        shelter_id: ShelterId,
        title: impl Into<String>,
        content: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        deadline: NaiveDateTime,
        capacity: i32,
        urls: Vec<String>,
    ) -> Result<Self, TypeConstraintError> {
        if start_time >= end_time {
            return Err(TypeConstraintError::InvalidValue(
                "start time must be before end time".to_string(),
            ));
        }
        if deadline > start_time {
            return Err(TypeConstraintError::InvalidValue(
                "deadline must not be after start time".to_string(),
            ));
        }

        Ok(Self {
            shelter_id,
            title: RecruitmentTitle::new(title)?,
            content: RecruitmentContent::new(content)?,
            start_time,
            end_time,
            deadline,
            capacity: Capacity::new(capacity)?,
            image_urls: image_urls(urls, 0, RECRUITMENT_IMAGE_URLS_MAX)?,
        })
    }
}
