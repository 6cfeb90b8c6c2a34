//! Repository implementation for shelters.

use diesel::prelude::*;

use crate::domain::shelter::{NewShelter, Shelter};
use crate::domain::types::ShelterId;
use crate::models::shelter::{NewShelter as DbNewShelter, Shelter as DbShelter};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ShelterReader, ShelterWriter};

impl ShelterReader for DieselRepository {
    fn get_shelter_by_id(&self, id: ShelterId) -> RepositoryResult<Option<Shelter>> {
        use crate::schema::shelters;

        let mut conn = self.conn()?;
        let db_shelter = shelters::table
            .find(id.get())
            .first::<DbShelter>(&mut conn)
            .optional()?;

        match db_shelter {
            Some(db_shelter) => Ok(Some(
                Shelter::try_from(db_shelter).map_err(RepositoryError::data_integrity)?,
            )),
            None => Ok(None),
        }
    }
}

impl ShelterWriter for DieselRepository {
    fn create_shelter(&self, shelter: &NewShelter) -> RepositoryResult<Shelter> {
        use crate::schema::shelters;

        let mut conn = self.conn()?;
        let db_new_shelter: DbNewShelter = shelter.into();

        let db_shelter = diesel::insert_into(shelters::table)
            .values(&db_new_shelter)
            .get_result::<DbShelter>(&mut conn)?;

        Shelter::try_from(db_shelter).map_err(RepositoryError::data_integrity)
    }
}
