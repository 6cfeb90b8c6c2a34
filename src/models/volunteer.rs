use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{Email, TypeConstraintError, VolunteerId, VolunteerName};
use crate::domain::volunteer::{NewVolunteer as DomainNewVolunteer, Volunteer as DomainVolunteer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::volunteers)]
pub struct Volunteer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::volunteers)]
pub struct NewVolunteer<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl TryFrom<Volunteer> for DomainVolunteer {
    type Error = TypeConstraintError;

    fn try_from(volunteer: Volunteer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VolunteerId::new(volunteer.id)?,
            name: VolunteerName::new(volunteer.name)?,
            email: Email::new(volunteer.email)?,
            created_at: volunteer.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewVolunteer> for NewVolunteer<'a> {
    fn from(volunteer: &'a DomainNewVolunteer) -> Self {
        Self {
            name: volunteer.name.as_str(),
            email: volunteer.email.as_str(),
        }
    }
}
