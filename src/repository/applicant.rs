//! Repository implementation for volunteer applications.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::applicant::{Applicant, NewApplicant};
use crate::domain::types::{ApplicantId, ApplicantStatus};
use crate::models::applicant::{Applicant as DbApplicant, NewApplicant as DbNewApplicant};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ApplicantWriter, DieselRepository};

impl ApplicantWriter for DieselRepository {
    fn create_applicant(&self, applicant: &NewApplicant) -> RepositoryResult<Applicant> {
        use crate::schema::applicants;

        let mut conn = self.conn()?;
        let db_new_applicant: DbNewApplicant = applicant.into();

        let db_applicant = diesel::insert_into(applicants::table)
            .values(&db_new_applicant)
            .get_result::<DbApplicant>(&mut conn)?;

        Applicant::try_from(db_applicant).map_err(RepositoryError::data_integrity)
    }

    fn update_applicant_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> RepositoryResult<Applicant> {
        use crate::schema::applicants;

        let mut conn = self.conn()?;
        let db_applicant = diesel::update(applicants::table.find(id.get()))
            .set((
                applicants::status.eq(status.as_str()),
                applicants::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbApplicant>(&mut conn)?;

        Applicant::try_from(db_applicant).map_err(RepositoryError::data_integrity)
    }
}
