use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Email, ImageUrl, PhoneNumber, ShelterAddress, ShelterId, ShelterName, TypeConstraintError,
};

/// Animal shelter publishing recruitments and animals.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shelter {
    pub id: ShelterId,
    pub name: ShelterName,
    pub email: Email,
    pub address: ShelterAddress,
    pub address_detail: String,
    pub phone_number: PhoneNumber,
    pub spare_phone_number: PhoneNumber,
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for registering a shelter.
#[derive(Clone, Debug)]
pub struct NewShelter {
    pub name: ShelterName,
    pub email: Email,
    pub address: ShelterAddress,
    pub address_detail: String,
    pub phone_number: PhoneNumber,
    pub spare_phone_number: PhoneNumber,
    pub image_url: Option<ImageUrl>,
}

impl NewShelter {
    /// Validates raw input into a shelter registration.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        address_detail: impl Into<String>,
        phone_number: &str,
        spare_phone_number: &str,
        image_url: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: ShelterName::new(name)?,
            email: Email::new(email)?,
            address: ShelterAddress::new(address)?,
            address_detail: address_detail.into().trim().to_string(),
            phone_number: PhoneNumber::new(phone_number)?,
            spare_phone_number: PhoneNumber::new(spare_phone_number)?,
            image_url: image_url
                .filter(|url| !url.trim().is_empty())
                .map(ImageUrl::new)
                .transpose()?,
        })
    }
}
