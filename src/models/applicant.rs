//! Diesel models for volunteer applications.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::applicant::{Applicant as DomainApplicant, NewApplicant as DomainNewApplicant};
use crate::domain::types::{ApplicantId, RecruitmentId, TypeConstraintError, VolunteerId};
use crate::models::recruitment::Recruitment;
use crate::models::volunteer::Volunteer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Recruitment, foreign_key = recruitment_id))]
#[diesel(belongs_to(Volunteer, foreign_key = volunteer_id))]
#[diesel(table_name = crate::schema::applicants)]
pub struct Applicant {
    pub id: i32,
    pub recruitment_id: i32,
    pub volunteer_id: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::applicants)]
pub struct NewApplicant {
    pub recruitment_id: i32,
    pub volunteer_id: i32,
}

impl TryFrom<Applicant> for DomainApplicant {
    type Error = TypeConstraintError;

    fn try_from(applicant: Applicant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ApplicantId::new(applicant.id)?,
            recruitment_id: RecruitmentId::new(applicant.recruitment_id)?,
            volunteer_id: VolunteerId::new(applicant.volunteer_id)?,
            status: applicant.status.parse()?,
            created_at: applicant.created_at,
            updated_at: applicant.updated_at,
        })
    }
}

impl From<&DomainNewApplicant> for NewApplicant {
    fn from(applicant: &DomainNewApplicant) -> Self {
        Self {
            recruitment_id: applicant.recruitment_id.get(),
            volunteer_id: applicant.volunteer_id.get(),
        }
    }
}
