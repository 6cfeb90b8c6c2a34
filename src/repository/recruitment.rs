//! Repository implementation for recruitments.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::recruitment::{NewRecruitment, Recruitment, RecruitmentListing};
use crate::domain::shelter::Shelter;
use crate::domain::types::{ApplicantStatus, RecruitmentId, VolunteerId};
use crate::models::recruitment::{
    NewRecruitment as DbNewRecruitment, Recruitment as DbRecruitment,
    RecruitmentImage as DbRecruitmentImage, new_recruitment_images,
};
use crate::models::shelter::Shelter as DbShelter;
use crate::pagination::PageRequest;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::filter::recruitment_filter;
use crate::repository::{DieselRepository, RecruitmentReader, RecruitmentWriter, page_bounds};
use crate::search::{Predicate, RecruitmentField};

/// Loads the images, shelter and applicant count of each recruitment.
///
/// The input order is preserved.
fn into_listings(
    conn: &mut SqliteConnection,
    rows: Vec<DbRecruitment>,
) -> RepositoryResult<Vec<RecruitmentListing>> {
    use crate::schema::{applicants, recruitment_images, shelters};

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let recruitment_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let shelter_ids: Vec<i32> = rows
        .iter()
        .map(|r| r.shelter_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let db_shelters = shelters::table
        .filter(shelters::id.eq_any(shelter_ids))
        .load::<DbShelter>(conn)?;
    let mut shelter_map: HashMap<i32, Shelter> = HashMap::with_capacity(db_shelters.len());
    for db_shelter in db_shelters {
        let id = db_shelter.id;
        let shelter = Shelter::try_from(db_shelter).map_err(RepositoryError::data_integrity)?;
        shelter_map.insert(id, shelter);
    }

    let mut image_map: HashMap<i32, Vec<DbRecruitmentImage>> = HashMap::new();
    for image in recruitment_images::table
        .filter(recruitment_images::recruitment_id.eq_any(recruitment_ids.clone()))
        .load::<DbRecruitmentImage>(conn)?
    {
        image_map.entry(image.recruitment_id).or_default().push(image);
    }

    let applicant_counts: HashMap<i32, i64> = applicants::table
        .filter(applicants::recruitment_id.eq_any(recruitment_ids))
        .group_by(applicants::recruitment_id)
        .select((applicants::recruitment_id, diesel::dsl::count_star()))
        .load::<(i32, i64)>(conn)?
        .into_iter()
        .collect();

    rows.into_iter()
        .map(|row| {
            let shelter = shelter_map.get(&row.shelter_id).cloned().ok_or_else(|| {
                RepositoryError::DataIntegrity(format!(
                    "recruitment {} references missing shelter {}",
                    row.id, row.shelter_id
                ))
            })?;
            let applicant_count = applicant_counts.get(&row.id).copied().unwrap_or(0);
            let images = image_map.remove(&row.id).unwrap_or_default();
            let recruitment = row
                .into_domain(images)
                .map_err(RepositoryError::data_integrity)?;
            Ok(RecruitmentListing {
                recruitment,
                shelter,
                applicant_count: usize::try_from(applicant_count).unwrap_or(0),
            })
        })
        .collect()
}

/// Ids of the recruitments `volunteer_id` attended.
fn attended_by(
    volunteer_id: VolunteerId,
) -> crate::schema::applicants::BoxedQuery<'static, Sqlite, diesel::sql_types::Integer> {
    use crate::schema::applicants;

    applicants::table
        .filter(applicants::volunteer_id.eq(volunteer_id.get()))
        .filter(applicants::status.eq(ApplicantStatus::Attendance.as_str()))
        .select(applicants::recruitment_id)
        .into_boxed()
}

impl RecruitmentReader for DieselRepository {
    fn get_recruitment_by_id(
        &self,
        id: RecruitmentId,
    ) -> RepositoryResult<Option<RecruitmentListing>> {
        use crate::schema::recruitments;

        let mut conn = self.conn()?;
        let row = recruitments::table
            .find(id.get())
            .first::<DbRecruitment>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(into_listings(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_recruitments(
        &self,
        predicate: &Predicate<RecruitmentField>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<RecruitmentListing>> {
        use crate::schema::recruitments;

        let mut conn = self.conn()?;
        let (limit, offset) = page_bounds(page)?;

        let rows = recruitments::table
            .into_boxed::<Sqlite>()
            .filter(recruitment_filter(predicate)?)
            .order((recruitments::created_at.desc(), recruitments::id.desc()))
            .limit(limit)
            .offset(offset)
            .load::<DbRecruitment>(&mut conn)?;

        into_listings(&mut conn, rows)
    }

    fn count_recruitments(
        &self,
        predicate: &Predicate<RecruitmentField>,
    ) -> RepositoryResult<usize> {
        use crate::schema::recruitments;

        let mut conn = self.conn()?;
        let total = recruitments::table
            .into_boxed::<Sqlite>()
            .filter(recruitment_filter(predicate)?)
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }

    fn list_completed_recruitments(
        &self,
        volunteer_id: VolunteerId,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<RecruitmentListing>> {
        use crate::schema::recruitments;

        let mut conn = self.conn()?;
        let (limit, offset) = page_bounds(page)?;

        let rows = recruitments::table
            .into_boxed::<Sqlite>()
            .filter(recruitments::id.eq_any(attended_by(volunteer_id)))
            .order((recruitments::created_at.desc(), recruitments::id.desc()))
            .limit(limit)
            .offset(offset)
            .load::<DbRecruitment>(&mut conn)?;

        into_listings(&mut conn, rows)
    }

    fn count_completed_recruitments(&self, volunteer_id: VolunteerId) -> RepositoryResult<usize> {
        use crate::schema::recruitments;

        let mut conn = self.conn()?;
        let total = recruitments::table
            .filter(recruitments::id.eq_any(attended_by(volunteer_id)))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl RecruitmentWriter for DieselRepository {
    fn create_recruitment(&self, recruitment: &NewRecruitment) -> RepositoryResult<Recruitment> {
        use crate::schema::{recruitment_images, recruitments};

        let mut conn = self.conn()?;
        let db_new_recruitment: DbNewRecruitment = recruitment.into();

        let (row, images) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let row = diesel::insert_into(recruitments::table)
                .values(&db_new_recruitment)
                .get_result::<DbRecruitment>(conn)?;

            if !recruitment.image_urls.is_empty() {
                diesel::insert_into(recruitment_images::table)
                    .values(new_recruitment_images(row.id, &recruitment.image_urls))
                    .execute(conn)?;
            }

            let images = recruitment_images::table
                .filter(recruitment_images::recruitment_id.eq(row.id))
                .load::<DbRecruitmentImage>(conn)?;
            Ok((row, images))
        })?;

        row.into_domain(images)
            .map_err(RepositoryError::data_integrity)
    }

    fn close_recruitment(&self, id: RecruitmentId) -> RepositoryResult<Recruitment> {
        use crate::schema::{recruitment_images, recruitments};

        let mut conn = self.conn()?;
        let row = diesel::update(recruitments::table.find(id.get()))
            .set((
                recruitments::is_closed.eq(true),
                recruitments::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbRecruitment>(&mut conn)?;

        let images = recruitment_images::table
            .filter(recruitment_images::recruitment_id.eq(row.id))
            .load::<DbRecruitmentImage>(&mut conn)?;

        row.into_domain(images)
            .map_err(RepositoryError::data_integrity)
    }
}
