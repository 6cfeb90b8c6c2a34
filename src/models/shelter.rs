use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shelter::{NewShelter as DomainNewShelter, Shelter as DomainShelter};
use crate::domain::types::{
    Email, ImageUrl, PhoneNumber, ShelterAddress, ShelterId, ShelterName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::shelters)]
/// Diesel model for [`crate::domain::shelter::Shelter`].
pub struct Shelter {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub address_detail: String,
    pub phone_number: String,
    pub spare_phone_number: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shelters)]
pub struct NewShelter<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub address_detail: &'a str,
    pub phone_number: &'a str,
    pub spare_phone_number: &'a str,
    pub image_url: Option<&'a str>,
}

impl TryFrom<Shelter> for DomainShelter {
    type Error = TypeConstraintError;

    fn try_from(shelter: Shelter) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ShelterId::new(shelter.id)?,
            name: ShelterName::new(shelter.name)?,
            email: Email::new(shelter.email)?,
            address: ShelterAddress::new(shelter.address)?,
            address_detail: shelter.address_detail,
            phone_number: PhoneNumber::new(&shelter.phone_number)?,
            spare_phone_number: PhoneNumber::new(&shelter.spare_phone_number)?,
            image_url: shelter.image_url.map(ImageUrl::new).transpose()?,
            created_at: shelter.created_at,
            updated_at: shelter.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewShelter> for NewShelter<'a> {
    fn from(shelter: &'a DomainNewShelter) -> Self {
        Self {
            name: shelter.name.as_str(),
            email: shelter.email.as_str(),
            address: shelter.address.as_str(),
            address_detail: shelter.address_detail.as_str(),
            phone_number: shelter.phone_number.as_str(),
            spare_phone_number: shelter.spare_phone_number.as_str(),
            image_url: shelter.image_url.as_ref().map(ImageUrl::as_str),
        }
    }
}
