//! Animal search use cases.

use chrono::{NaiveDate, Utc};

use crate::domain::animal::Animal;
use crate::domain::shelter::Shelter;
use crate::domain::types::ShelterId;
use crate::dto::animal::{FindAnimalsParams, FindAnimalsResponse, FindShelterAnimalsResponse};
use crate::pagination::{Page, PageLimits, PageRequest, fetch_page};
use crate::repository::{AnimalReader, ShelterReader};
use crate::search::AnimalCriteria;
use crate::services::{ServiceError, ServiceResult, validate_params};

/// Runs `criteria` against the store; ages are resolved against `today`.
pub fn find_animals<R>(
    repo: &R,
    criteria: &AnimalCriteria,
    request: PageRequest,
    today: NaiveDate,
) -> ServiceResult<Page<(Animal, Shelter)>>
where
    R: AnimalReader + ?Sized,
{
    if request.size == 0 {
        return Err(ServiceError::Validation("page size must be positive".into()));
    }

    let predicate = criteria.to_predicate(today);
    let page = fetch_page(
        request,
        |request| repo.list_animals(&predicate, request),
        || repo.count_animals(&predicate),
    )?;
    Ok(page)
}

/// Volunteer-facing animal search.
pub fn search_animals<R>(
    repo: &R,
    params: &FindAnimalsParams,
    limits: &PageLimits,
) -> ServiceResult<FindAnimalsResponse>
where
    R: AnimalReader + ?Sized,
{
    validate_params(params)?;
    let request = limits.request(params.page_number, params.page_size)?;
    let today = Utc::now().date_naive();

    let page = find_animals(repo, &params.to_criteria(), request, today)?;
    Ok(FindAnimalsResponse::from_page(page))
}

/// Animal search within one shelter.
pub fn search_shelter_animals<R>(
    repo: &R,
    shelter_id: i32,
    params: &FindAnimalsParams,
    limits: &PageLimits,
) -> ServiceResult<FindShelterAnimalsResponse>
where
    R: AnimalReader + ShelterReader + ?Sized,
{
    validate_params(params)?;
    let request = limits.request(params.page_number, params.page_size)?;
    let shelter_id = ShelterId::new(shelter_id)?;

    if repo.get_shelter_by_id(shelter_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let today = Utc::now().date_naive();
    let page = find_animals(repo, &params.to_shelter_criteria(shelter_id), request, today)?;
    Ok(FindShelterAnimalsResponse::from_page(page))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::{
        AnimalActive, AnimalBreed, AnimalGender, AnimalId, AnimalName, AnimalSize, AnimalType,
        Email, ImageUrl, PhoneNumber, ShelterAddress, ShelterName, Weight,
    };
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::search::{AnimalField, Predicate};

    fn shelter() -> Shelter {
        let now = Utc::now().naive_utc();
        Shelter {
            id: ShelterId::new(1).unwrap(),
            name: ShelterName::new("Happy Paws").unwrap(),
            email: Email::new("paws@example.com").unwrap(),
            address: ShelterAddress::new("1 Shelter Road").unwrap(),
            address_detail: String::new(),
            phone_number: PhoneNumber::new("02-1234-5678").unwrap(),
            spare_phone_number: PhoneNumber::new("010-1234-5678").unwrap(),
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn animal(id: i32, name: &str) -> Animal {
        let now = Utc::now().naive_utc();
        Animal {
            id: AnimalId::new(id).unwrap(),
            shelter_id: ShelterId::new(1).unwrap(),
            name: AnimalName::new(name).unwrap(),
            birth_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            animal_type: AnimalType::Dog,
            breed: AnimalBreed::new("Jindo").unwrap(),
            gender: AnimalGender::Male,
            is_neutered: true,
            active: AnimalActive::Active,
            weight: Weight::new(12.0).unwrap(),
            information: String::new(),
            is_adopted: false,
            image_urls: vec![ImageUrl::new(format!("https://img.example.com/{id}.png")).unwrap()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn search_compiles_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_animals()
            .withf(|predicate, _| {
                *predicate
                    == Predicate::all([
                        Predicate::equals(AnimalField::Type, "DOG").unwrap(),
                        Predicate::ge(AnimalField::Weight, 7.0).unwrap(),
                        Predicate::lt(AnimalField::Weight, 25.0).unwrap(),
                    ])
            })
            .returning(|_, _| Ok(vec![(animal(1, "Bori"), shelter())]));
        repo.expect_count_animals().returning(|_| Ok(1));

        let params = FindAnimalsParams {
            animal_type: Some(AnimalType::Dog),
            size: Some(AnimalSize::Medium),
            ..Default::default()
        };
        let response = search_animals(&repo, &params, &PageLimits::default()).unwrap();

        assert_eq!(response.animals.len(), 1);
        assert_eq!(response.animals[0].shelter_name, "Happy Paws");
        assert_eq!(
            response.animals[0].animal_image_url.as_deref(),
            Some("https://img.example.com/1.png")
        );
        assert!(!response.page_info.has_next);
    }

    #[test]
    fn count_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.expect_list_animals().returning(|_, _| Ok(vec![]));
        repo.expect_count_animals()
            .returning(|_| Err(RepositoryError::DatabaseError("database is locked".into())));

        let result = search_animals(&repo, &FindAnimalsParams::default(), &PageLimits::default());
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }

    #[test]
    fn shelter_search_requires_existing_shelter() {
        let mut repo = MockRepository::new();
        repo.expect_get_shelter_by_id().returning(|_| Ok(None));
        repo.expect_list_animals().times(0);

        let result = search_shelter_animals(
            &repo,
            5,
            &FindAnimalsParams::default(),
            &PageLimits::default(),
        );
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn shelter_search_keeps_keyword() {
        let mut repo = MockRepository::new();
        repo.expect_get_shelter_by_id()
            .returning(|_| Ok(Some(shelter())));
        repo.expect_list_animals()
            .withf(|predicate, _| {
                *predicate
                    == Predicate::all([
                        Predicate::contains(AnimalField::Name, "Bo").unwrap(),
                        Predicate::equals(AnimalField::ShelterId, 1).unwrap(),
                    ])
            })
            .returning(|_, _| Ok(vec![(animal(1, "Bori"), shelter())]));
        repo.expect_count_animals().returning(|_| Ok(1));

        let params = FindAnimalsParams {
            keyword: Some("Bo".into()),
            ..Default::default()
        };
        let response =
            search_shelter_animals(&repo, 1, &params, &PageLimits::default()).unwrap();
        assert_eq!(response.animals[0].animal_name, "Bori");
        assert!(!response.animals[0].adoption_status);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let repo = MockRepository::new();
        let result = find_animals(
            &repo,
            &AnimalCriteria::new(),
            PageRequest::new(0, 0),
            Utc::now().date_naive(),
        );
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
