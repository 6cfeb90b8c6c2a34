use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::animal::Animal;
use crate::domain::shelter::Shelter;
use crate::domain::types::{
    AnimalActive, AnimalAge, AnimalGender, AnimalNeuteredFilter, AnimalSize, AnimalType,
    ShelterId,
};
use crate::dto::thumbnail_url;
use crate::pagination::{Page, PageInfo};
use crate::search::AnimalCriteria;

/// Query of the animal search endpoints.
///
/// `keyword` only applies to the shelter-scoped search.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindAnimalsParams {
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub animal_type: Option<AnimalType>,
    pub gender: Option<AnimalGender>,
    pub neutered_filter: Option<AnimalNeuteredFilter>,
    pub active: Option<AnimalActive>,
    pub size: Option<AnimalSize>,
    pub age: Option<AnimalAge>,
    pub page_number: Option<usize>,
    #[validate(range(min = 1))]
    pub page_size: Option<usize>,
}

impl FindAnimalsParams {
    fn categorical_criteria(&self) -> AnimalCriteria {
        AnimalCriteria {
            animal_type: self.animal_type,
            gender: self.gender,
            neutered: self.neutered_filter,
            active: self.active,
            size: self.size,
            age: self.age,
            ..AnimalCriteria::default()
        }
    }

    /// Criteria of the volunteer-facing search.
    pub fn to_criteria(&self) -> AnimalCriteria {
        self.categorical_criteria()
    }

    /// Criteria of the search within one shelter, keyword included.
    pub fn to_shelter_criteria(&self, shelter_id: ShelterId) -> AnimalCriteria {
        let criteria = self.categorical_criteria().shelter(shelter_id);
        match &self.keyword {
            Some(keyword) => criteria.keyword(keyword.as_str()),
            None => criteria,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSummary {
    pub animal_id: i32,
    pub animal_name: String,
    pub shelter_name: String,
    pub shelter_address: String,
    pub animal_image_url: Option<String>,
}

impl From<(Animal, Shelter)> for AnimalSummary {
    fn from((animal, shelter): (Animal, Shelter)) -> Self {
        let animal_image_url = thumbnail_url(animal.thumbnail(), &format!("animal {}", animal.id));
        Self {
            animal_id: animal.id.get(),
            animal_name: animal.name.into_inner(),
            shelter_name: shelter.name.into_inner(),
            shelter_address: shelter.address.into_inner(),
            animal_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindAnimalsResponse {
    pub animals: Vec<AnimalSummary>,
    pub page_info: PageInfo,
}

impl FindAnimalsResponse {
    pub fn from_page(page: Page<(Animal, Shelter)>) -> Self {
        let page_info = page.page_info();
        Self {
            animals: page.content.into_iter().map(Into::into).collect(),
            page_info,
        }
    }
}

/// Row of a shelter's own animal list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterAnimalSummary {
    pub animal_id: i32,
    pub animal_name: String,
    pub animal_image_url: Option<String>,
    pub animal_type: AnimalType,
    pub animal_gender: AnimalGender,
    pub animal_birth_date: NaiveDate,
    pub adoption_status: bool,
}

impl From<Animal> for ShelterAnimalSummary {
    fn from(animal: Animal) -> Self {
        let animal_image_url = thumbnail_url(animal.thumbnail(), &format!("animal {}", animal.id));
        Self {
            animal_id: animal.id.get(),
            animal_name: animal.name.into_inner(),
            animal_image_url,
            animal_type: animal.animal_type,
            animal_gender: animal.gender,
            animal_birth_date: animal.birth_date,
            adoption_status: animal.is_adopted,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindShelterAnimalsResponse {
    pub animals: Vec<ShelterAnimalSummary>,
    pub page_info: PageInfo,
}

impl FindShelterAnimalsResponse {
    pub fn from_page(page: Page<(Animal, Shelter)>) -> Self {
        let page_info = page.page_info();
        Self {
            animals: page
                .content
                .into_iter()
                .map(|(animal, _)| animal.into())
                .collect(),
            page_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{
        AnimalBreed, AnimalId, AnimalName, Email, ImageUrl, PhoneNumber, ShelterAddress,
        ShelterName, Weight,
    };
    use crate::pagination::PageRequest;

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

    fn animal(image_urls: Vec<ImageUrl>) -> Animal {
        let now = Utc::now().naive_utc();
        Animal {
            id: AnimalId::new(7).unwrap(),
            shelter_id: ShelterId::new(1).unwrap(),
            name: AnimalName::new("Nabi").unwrap(),
            birth_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            animal_type: AnimalType::Cat,
            breed: AnimalBreed::new("Korean shorthair").unwrap(),
            gender: AnimalGender::Female,
            is_neutered: true,
            active: AnimalActive::Quiet,
            weight: Weight::new(3.5).unwrap(),
            information: String::new(),
            is_adopted: false,
            image_urls,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn summary_uses_first_image() {
        let urls = vec![
            ImageUrl::new("https://img.example.com/first.png").unwrap(),
            ImageUrl::new("https://img.example.com/second.png").unwrap(),
        ];
        let summary = AnimalSummary::from((animal(urls), shelter()));
        assert_eq!(
            summary.animal_image_url.as_deref(),
            Some("https://img.example.com/first.png")
        );
        assert_eq!(summary.shelter_address, "1 Shelter Road");
    }

    #[test]
    fn missing_images_serialize_as_null() {
        let page = Page::new(vec![(animal(vec![]), shelter())], 1, PageRequest::default());
        let json = serde_json::to_value(FindAnimalsResponse::from_page(page)).unwrap();
        assert!(json["animals"][0]["animalImageUrl"].is_null());
        assert_eq!(json["pageInfo"]["totalElements"], 1);
        assert_eq!(json["pageInfo"]["hasNext"], false);
    }

    #[test]
    fn keyword_only_applies_to_shelter_search() {
        let params = FindAnimalsParams {
            keyword: Some("Nabi".into()),
            animal_type: Some(AnimalType::Cat),
            ..Default::default()
        };
        assert_eq!(params.to_criteria().keyword, None);
        let scoped = params.to_shelter_criteria(ShelterId::new(1).unwrap());
        assert_eq!(scoped.keyword.as_deref(), Some("Nabi"));
        assert_eq!(scoped.animal_type, Some(AnimalType::Cat));
    }
}
