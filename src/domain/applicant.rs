use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ApplicantId, ApplicantStatus, RecruitmentId, VolunteerId};

/// A volunteer's application to a recruitment and its attendance state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Applicant {
    pub id: ApplicantId,
    pub recruitment_id: RecruitmentId,
    pub volunteer_id: VolunteerId,
    pub status: ApplicantStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewApplicant {
    pub recruitment_id: RecruitmentId,
    pub volunteer_id: VolunteerId,
}

impl NewApplicant {
    #[must_use]
    pub fn new(recruitment_id: RecruitmentId, volunteer_id: VolunteerId) -> Self {
        Self {
            recruitment_id,
            volunteer_id,
        }
    }
}
