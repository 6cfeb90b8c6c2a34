//! Repository implementation for animals.

use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::shelter::Shelter;
use crate::domain::types::AnimalId;
use crate::models::animal::{
    Animal as DbAnimal, AnimalImage as DbAnimalImage, NewAnimal as DbNewAnimal, new_animal_images,
};
use crate::models::shelter::Shelter as DbShelter;
use crate::pagination::PageRequest;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::filter::animal_filter;
use crate::repository::{AnimalReader, AnimalWriter, DieselRepository, page_bounds};
use crate::search::{AnimalField, Predicate};

fn load_images(
    conn: &mut SqliteConnection,
    animal_ids: Vec<i32>,
) -> RepositoryResult<HashMap<i32, Vec<DbAnimalImage>>> {
    use crate::schema::animal_images;

    let mut image_map: HashMap<i32, Vec<DbAnimalImage>> = HashMap::new();
    for image in animal_images::table
        .filter(animal_images::animal_id.eq_any(animal_ids))
        .load::<DbAnimalImage>(conn)?
    {
        image_map.entry(image.animal_id).or_default().push(image);
    }
    Ok(image_map)
}

impl AnimalReader for DieselRepository {
    fn get_animal_by_id(&self, id: AnimalId) -> RepositoryResult<Option<Animal>> {
        use crate::schema::animals;

        let mut conn = self.conn()?;
        let row = animals::table
            .find(id.get())
            .first::<DbAnimal>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };
        let images = load_images(&mut conn, vec![row.id])?
            .remove(&row.id)
            .unwrap_or_default();
        let animal = row
            .into_domain(images)
            .map_err(RepositoryError::data_integrity)?;
        Ok(Some(animal))
    }

    fn list_animals(
        &self,
        predicate: &Predicate<AnimalField>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<(Animal, Shelter)>> {
        use crate::schema::{animals, shelters};

        let mut conn = self.conn()?;
        let (limit, offset) = page_bounds(page)?;

        let rows = animals::table
            .into_boxed::<Sqlite>()
            .filter(animal_filter(predicate)?)
            .order((animals::created_at.desc(), animals::id.desc()))
            .limit(limit)
            .offset(offset)
            .load::<DbAnimal>(&mut conn)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let shelter_ids: HashSet<i32> = rows.iter().map(|row| row.shelter_id).collect();
        let shelter_map: HashMap<i32, DbShelter> = shelters::table
            .filter(shelters::id.eq_any(shelter_ids.into_iter().collect::<Vec<_>>()))
            .load::<DbShelter>(&mut conn)?
            .into_iter()
            .map(|shelter| (shelter.id, shelter))
            .collect();

        let mut image_map = load_images(&mut conn, rows.iter().map(|row| row.id).collect())?;

        rows.into_iter()
            .map(|row| {
                let db_shelter = shelter_map.get(&row.shelter_id).cloned().ok_or_else(|| {
                    RepositoryError::DataIntegrity(format!(
                        "animal {} references missing shelter {}",
                        row.id, row.shelter_id
                    ))
                })?;
                let shelter =
                    Shelter::try_from(db_shelter).map_err(RepositoryError::data_integrity)?;
                let images = image_map.remove(&row.id).unwrap_or_default();
                let animal = row
                    .into_domain(images)
                    .map_err(RepositoryError::data_integrity)?;
                Ok((animal, shelter))
            })
            .collect()
    }

    fn count_animals(&self, predicate: &Predicate<AnimalField>) -> RepositoryResult<usize> {
        use crate::schema::animals;

        let mut conn = self.conn()?;
        let total = animals::table
            .into_boxed::<Sqlite>()
            .filter(animal_filter(predicate)?)
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl AnimalWriter for DieselRepository {
    fn create_animal(&self, animal: &NewAnimal) -> RepositoryResult<Animal> {
        use crate::schema::{animal_images, animals};

        let mut conn = self.conn()?;
        let db_new_animal: DbNewAnimal = animal.into();

        let (row, images) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let row = diesel::insert_into(animals::table)
                .values(&db_new_animal)
                .get_result::<DbAnimal>(conn)?;

            if !animal.image_urls.is_empty() {
                diesel::insert_into(animal_images::table)
                    .values(new_animal_images(row.id, &animal.image_urls))
                    .execute(conn)?;
            }

            let images = animal_images::table
                .filter(animal_images::animal_id.eq(row.id))
                .load::<DbAnimalImage>(conn)?;
            Ok((row, images))
        })?;

        row.into_domain(images)
            .map_err(RepositoryError::data_integrity)
    }
}
