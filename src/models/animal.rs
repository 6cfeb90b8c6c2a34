use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::animal::{Animal as DomainAnimal, NewAnimal as DomainNewAnimal};
use crate::domain::types::{
    AnimalBreed, AnimalId, AnimalName, ImageUrl, ShelterId, TypeConstraintError, Weight,
};
use crate::models::shelter::Shelter;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Shelter, foreign_key = shelter_id))]
#[diesel(table_name = crate::schema::animals)]
pub struct Animal {
    pub id: i32,
    pub shelter_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub animal_type: String,
    pub breed: String,
    pub gender: String,
    pub is_neutered: bool,
    pub active: String,
    pub weight: f64,
    pub information: String,
    pub is_adopted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Animal, foreign_key = animal_id))]
#[diesel(table_name = crate::schema::animal_images)]
pub struct AnimalImage {
    pub id: i32,
    pub animal_id: i32,
    pub image_url: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::animals)]
pub struct NewAnimal<'a> {
    pub shelter_id: i32,
    pub name: &'a str,
    pub birth_date: NaiveDate,
    pub animal_type: &'a str,
    pub breed: &'a str,
    pub gender: &'a str,
    pub is_neutered: bool,
    pub active: &'a str,
    pub weight: f64,
    pub information: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::animal_images)]
pub struct NewAnimalImage<'a> {
    pub animal_id: i32,
    pub image_url: &'a str,
    pub position: i32,
}

impl Animal {
    /// Builds the domain animal from the row and its images.
    ///
    /// Images are ordered by their stored position. An animal whose image
    /// rows are missing still converts, with an empty image list.
    pub fn into_domain(
        self,
        mut images: Vec<AnimalImage>,
    ) -> Result<DomainAnimal, TypeConstraintError> {
        images.sort_by_key(|image| image.position);
        Ok(DomainAnimal {
            id: AnimalId::new(self.id)?,
            shelter_id: ShelterId::new(self.shelter_id)?,
            name: AnimalName::new(self.name)?,
            birth_date: self.birth_date,
            animal_type: self.animal_type.parse()?,
            breed: AnimalBreed::new(self.breed)?,
            gender: self.gender.parse()?,
            is_neutered: self.is_neutered,
            active: self.active.parse()?,
            weight: Weight::new(self.weight)?,
            information: self.information,
            is_adopted: self.is_adopted,
            image_urls: images
                .into_iter()
                .map(|image| ImageUrl::new(image.image_url))
                .collect::<Result<_, _>>()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewAnimal> for NewAnimal<'a> {
    fn from(animal: &'a DomainNewAnimal) -> Self {
        Self {
            shelter_id: animal.shelter_id.get(),
            name: animal.name.as_str(),
            birth_date: animal.birth_date,
            animal_type: animal.animal_type.as_str(),
            breed: animal.breed.as_str(),
            gender: animal.gender.as_str(),
            is_neutered: animal.is_neutered,
            active: animal.active.as_str(),
            weight: animal.weight.get(),
            information: animal.information.as_str(),
        }
    }
}

pub fn new_animal_images(animal_id: i32, urls: &[ImageUrl]) -> Vec<NewAnimalImage<'_>> {
    urls.iter()
        .zip(0..)
        .map(|(url, position)| NewAnimalImage {
            animal_id,
            image_url: url.as_str(),
            position,
        })
        .collect()
}
