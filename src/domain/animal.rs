use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AnimalActive, AnimalBreed, AnimalGender, AnimalId, AnimalName, AnimalType, ImageUrl,
    ShelterId, TypeConstraintError, Weight, image_urls,
};

pub const ANIMAL_IMAGE_URLS_MIN: usize = 1;
pub const ANIMAL_IMAGE_URLS_MAX: usize = 5;

/// Animal registered by a shelter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    pub id: AnimalId,
    pub shelter_id: ShelterId,
    pub name: AnimalName,
    pub birth_date: NaiveDate,
    pub animal_type: AnimalType,
    pub breed: AnimalBreed,
    pub gender: AnimalGender,
    pub is_neutered: bool,
    pub active: AnimalActive,
    pub weight: Weight,
    pub information: String,
    pub is_adopted: bool,
    /// Image urls in upload order.
    pub image_urls: Vec<ImageUrl>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Animal {
    /// First uploaded image, used as the listing thumbnail.
    pub fn thumbnail(&self) -> Option<&ImageUrl> {
        self.image_urls.first()
    }
}

#[derive(Clone, Debug)]
pub struct NewAnimal {
    pub shelter_id: ShelterId,
    pub name: AnimalName,
    pub birth_date: NaiveDate,
    pub animal_type: AnimalType,
    pub breed: AnimalBreed,
    pub gender: AnimalGender,
    pub is_neutered: bool,
    pub active: AnimalActive,
    pub weight: Weight,
    pub information: String,
    pub image_urls: Vec<ImageUrl>,
}

impl NewAnimal {
    /// Validates raw input into an animal registration.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        shelter_id: ShelterId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        animal_type: AnimalType,
        breed: impl Into<String>,
        gender: AnimalGender,
        is_neutered: bool,
        active: AnimalActive,
        weight: f64,
        information: impl Into<String>,
        urls: Vec<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            shelter_id,
            name: AnimalName::new(name)?,
            birth_date,
            animal_type,
            breed: AnimalBreed::new(breed)?,
            gender,
            is_neutered,
            active,
            weight: Weight::new(weight)?,
            information: information.into().trim().to_string(),
            image_urls: image_urls(urls, ANIMAL_IMAGE_URLS_MIN, ANIMAL_IMAGE_URLS_MAX)?,
        })
    }
}
