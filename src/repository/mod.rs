//! Storage traits and their Diesel implementation.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`]
//! implements all of them on top of the SQLite pool.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::applicant::{Applicant, NewApplicant};
use crate::domain::recruitment::{NewRecruitment, Recruitment, RecruitmentListing};
use crate::domain::shelter::{NewShelter, Shelter};
use crate::domain::types::{
    AnimalId, ApplicantId, ApplicantStatus, RecruitmentId, ShelterId, VolunteerId,
};
use crate::domain::volunteer::{NewVolunteer, Volunteer};
use crate::pagination::PageRequest;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::search::{AnimalField, Predicate, RecruitmentField};

pub mod animal;
pub mod applicant;
pub mod errors;
pub mod filter;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod recruitment;
pub mod shelter;
pub mod volunteer;

/// Diesel-backed repository shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// `LIMIT` and `OFFSET` values for `page`.
fn page_bounds(page: &PageRequest) -> RepositoryResult<(i64, i64)> {
    let limit = i64::try_from(page.size)
        .map_err(|_| RepositoryError::ValidationError("page size too large".to_string()))?;
    let offset = i64::try_from(page.offset)
        .map_err(|_| RepositoryError::ValidationError("page offset too large".to_string()))?;
    Ok((limit, offset))
}

pub trait RecruitmentReader {
    fn get_recruitment_by_id(
        &self,
        id: RecruitmentId,
    ) -> RepositoryResult<Option<RecruitmentListing>>;
    /// Page of recruitments matching `predicate`, newest first.
    fn list_recruitments(
        &self,
        predicate: &Predicate<RecruitmentField>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<RecruitmentListing>>;
    fn count_recruitments(&self, predicate: &Predicate<RecruitmentField>)
    -> RepositoryResult<usize>;
    /// Page of recruitments the volunteer attended, newest first.
    fn list_completed_recruitments(
        &self,
        volunteer_id: VolunteerId,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<RecruitmentListing>>;
    fn count_completed_recruitments(&self, volunteer_id: VolunteerId) -> RepositoryResult<usize>;
}

pub trait RecruitmentWriter {
    fn create_recruitment(&self, recruitment: &NewRecruitment) -> RepositoryResult<Recruitment>;
    fn close_recruitment(&self, id: RecruitmentId) -> RepositoryResult<Recruitment>;
}

pub trait AnimalReader {
    fn get_animal_by_id(&self, id: AnimalId) -> RepositoryResult<Option<Animal>>;
    /// Page of animals matching `predicate` with their shelter, newest first.
    fn list_animals(
        &self,
        predicate: &Predicate<AnimalField>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<(Animal, Shelter)>>;
    fn count_animals(&self, predicate: &Predicate<AnimalField>) -> RepositoryResult<usize>;
}

pub trait AnimalWriter {
    fn create_animal(&self, animal: &NewAnimal) -> RepositoryResult<Animal>;
}

pub trait ShelterReader {
    fn get_shelter_by_id(&self, id: ShelterId) -> RepositoryResult<Option<Shelter>>;
}

pub trait ShelterWriter {
    fn create_shelter(&self, shelter: &NewShelter) -> RepositoryResult<Shelter>;
}

pub trait VolunteerReader {
    fn get_volunteer_by_id(&self, id: VolunteerId) -> RepositoryResult<Option<Volunteer>>;
}

pub trait VolunteerWriter {
    fn create_volunteer(&self, volunteer: &NewVolunteer) -> RepositoryResult<Volunteer>;
}

pub trait ApplicantWriter {
    fn create_applicant(&self, applicant: &NewApplicant) -> RepositoryResult<Applicant>;
    fn update_applicant_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> RepositoryResult<Applicant>;
}
