//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::applicant::{Applicant, NewApplicant};
use crate::domain::recruitment::{NewRecruitment, Recruitment, RecruitmentListing};
use crate::domain::shelter::{NewShelter, Shelter};
use crate::domain::types::{
    AnimalId, ApplicantId, ApplicantStatus, RecruitmentId, ShelterId, VolunteerId,
};
use crate::domain::volunteer::{NewVolunteer, Volunteer};
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AnimalReader, AnimalWriter, ApplicantWriter, RecruitmentReader, RecruitmentWriter,
    ShelterReader, ShelterWriter, VolunteerReader, VolunteerWriter,
};
use crate::search::{AnimalField, Predicate, RecruitmentField};

mock! {
    pub Repository {}

    impl RecruitmentReader for Repository {
        fn get_recruitment_by_id(
            &self,
            id: RecruitmentId,
        ) -> RepositoryResult<Option<RecruitmentListing>>;
        fn list_recruitments(
            &self,
            predicate: &Predicate<RecruitmentField>,
            page: &PageRequest,
        ) -> RepositoryResult<Vec<RecruitmentListing>>;
        fn count_recruitments(
            &self,
            predicate: &Predicate<RecruitmentField>,
        ) -> RepositoryResult<usize>;
        fn list_completed_recruitments(
            &self,
            volunteer_id: VolunteerId,
            page: &PageRequest,
        ) -> RepositoryResult<Vec<RecruitmentListing>>;
        fn count_completed_recruitments(&self, volunteer_id: VolunteerId) -> RepositoryResult<usize>;
    }

    impl RecruitmentWriter for Repository {
        fn create_recruitment(&self, recruitment: &NewRecruitment) -> RepositoryResult<Recruitment>;
        fn close_recruitment(&self, id: RecruitmentId) -> RepositoryResult<Recruitment>;
    }

    impl AnimalReader for Repository {
        fn get_animal_by_id(&self, id: AnimalId) -> RepositoryResult<Option<Animal>>;
        fn list_animals(
            &self,
            predicate: &Predicate<AnimalField>,
            page: &PageRequest,
        ) -> RepositoryResult<Vec<(Animal, Shelter)>>;
        fn count_animals(&self, predicate: &Predicate<AnimalField>) -> RepositoryResult<usize>;
    }

    impl AnimalWriter for Repository {
        fn create_animal(&self, animal: &NewAnimal) -> RepositoryResult<Animal>;
    }

    impl ShelterReader for Repository {
        fn get_shelter_by_id(&self, id: ShelterId) -> RepositoryResult<Option<Shelter>>;
    }

    impl ShelterWriter for Repository {
        fn create_shelter(&self, shelter: &NewShelter) -> RepositoryResult<Shelter>;
    }

    impl VolunteerReader for Repository {
        fn get_volunteer_by_id(&self, id: VolunteerId) -> RepositoryResult<Option<Volunteer>>;
    }

    impl VolunteerWriter for Repository {
        fn create_volunteer(&self, volunteer: &NewVolunteer) -> RepositoryResult<Volunteer>;
    }

    impl ApplicantWriter for Repository {
        fn create_applicant(&self, applicant: &NewApplicant) -> RepositoryResult<Applicant>;
        fn update_applicant_status(
            &self,
            id: ApplicantId,
            status: ApplicantStatus,
        ) -> RepositoryResult<Applicant>;
    }
}
