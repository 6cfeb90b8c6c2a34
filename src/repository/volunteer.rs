//! Repository implementation for volunteers.

use diesel::prelude::*;

use crate::domain::types::VolunteerId;
use crate::domain::volunteer::{NewVolunteer, Volunteer};
use crate::models::volunteer::{NewVolunteer as DbNewVolunteer, Volunteer as DbVolunteer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, VolunteerReader, VolunteerWriter};

impl VolunteerReader for DieselRepository {
    fn get_volunteer_by_id(&self, id: VolunteerId) -> RepositoryResult<Option<Volunteer>> {
        use crate::schema::volunteers;

        let mut conn = self.conn()?;
        let db_volunteer = volunteers::table
            .find(id.get())
            .first::<DbVolunteer>(&mut conn)
            .optional()?;

        db_volunteer
            .map(|v| Volunteer::try_from(v).map_err(RepositoryError::data_integrity))
            .transpose()
    }
}

impl VolunteerWriter for DieselRepository {
    fn create_volunteer(&self, volunteer: &NewVolunteer) -> RepositoryResult<Volunteer> {
        use crate::schema::volunteers;

        let mut conn = self.conn()?;
        let db_new_volunteer: DbNewVolunteer = volunteer.into();

        let db_volunteer = diesel::insert_into(volunteers::table)
            .values(&db_new_volunteer)
            .get_result::<DbVolunteer>(&mut conn)?;

        Volunteer::try_from(db_volunteer).map_err(RepositoryError::data_integrity)
    }
}
