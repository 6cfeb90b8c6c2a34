use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::recruitment::{
    NewRecruitment as DomainNewRecruitment, Recruitment as DomainRecruitment,
};
use crate::domain::types::{
    Capacity, ImageUrl, RecruitmentContent, RecruitmentId, RecruitmentTitle, ShelterId,
    TypeConstraintError,
};
use crate::models::shelter::Shelter;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Shelter, foreign_key = shelter_id))]
#[diesel(table_name = crate::schema::recruitments)]
pub struct Recruitment {
    pub id: i32,
    pub shelter_id: i32,
    pub title: String,
    pub content: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub capacity: i32,
    pub is_closed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Recruitment, foreign_key = recruitment_id))]
#[diesel(table_name = crate::schema::recruitment_images)]
pub struct RecruitmentImage {
    pub id: i32,
    pub recruitment_id: i32,
    pub image_url: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recruitments)]
pub struct NewRecruitment<'a> {
    pub shelter_id: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub deadline: NaiveDateTime,
    pub capacity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recruitment_images)]
pub struct NewRecruitmentImage<'a> {
    pub recruitment_id: i32,
    pub image_url: &'a str,
    pub position: i32,
}

impl Recruitment {
    /// Builds the domain recruitment from the row and its images.
    ///
    /// Images are ordered by their stored position.
    pub fn into_domain(
        self,
        mut images: Vec<RecruitmentImage>,
    ) -> Result<DomainRecruitment, TypeConstraintError> {
        images.sort_by_key(|image| image.position);
        Ok(DomainRecruitment {
            id: RecruitmentId::new(self.id)?,
            shelter_id: ShelterId::new(self.shelter_id)?,
            title: RecruitmentTitle::new(self.title)?,
            content: RecruitmentContent::new(self.content)?,
            start_time: self.start_time,
            end_time: self.end_time,
            deadline: self.deadline,
            capacity: Capacity::new(self.capacity)?,
            is_closed: self.is_closed,
            image_urls: images
                .into_iter()
                .map(|image| ImageUrl::new(image.image_url))
                .collect::<Result<_, _>>()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewRecruitment> for NewRecruitment<'a> {
    fn from(recruitment: &'a DomainNewRecruitment) -> Self {
        Self {
            shelter_id: recruitment.shelter_id.get(),
            title: recruitment.title.as_str(),
            content: recruitment.content.as_str(),
            start_time: recruitment.start_time,
            end_time: recruitment.end_time,
            deadline: recruitment.deadline,
            capacity: recruitment.capacity.get(),
        }
    }
}

/// Insertable image rows for `urls`, numbered in order.
pub fn new_recruitment_images(recruitment_id: i32, urls: &[ImageUrl]) -> Vec<NewRecruitmentImage<'_>> {
    urls.iter()
        .zip(0..)
        .map(|(url, position)| NewRecruitmentImage {
            recruitment_id,
            image_url: url.as_str(),
            position,
        })
        .collect()
}
