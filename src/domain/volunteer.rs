use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, TypeConstraintError, VolunteerId, VolunteerName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: VolunteerName,
    pub email: Email,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewVolunteer {
    pub name: VolunteerName,
    pub email: Email,
}

impl NewVolunteer {
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: VolunteerName::new(name)?,
            email: Email::new(email)?,
        })
    }
}
