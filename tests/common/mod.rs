#![allow(dead_code)]

use anifriends_search::db::{DbPool, establish_connection_pool};
use anifriends_search::domain::animal::{Animal, NewAnimal};
use anifriends_search::domain::recruitment::{NewRecruitment, Recruitment};
use anifriends_search::domain::shelter::{NewShelter, Shelter};
use anifriends_search::domain::types::{
    AnimalActive, AnimalGender, AnimalType, RecruitmentId, ShelterId,
};
use anifriends_search::repository::{AnimalWriter, DieselRepository, RecruitmentWriter, ShelterWriter};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        {
            let mut conn = pool.get().expect("get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    /// Overrides the creation time of a recruitment to control ordering.
    pub fn set_recruitment_created_at(&self, id: RecruitmentId, at: NaiveDateTime) {
        use anifriends_search::schema::recruitments;

        let mut conn = self.pool.get().expect("get connection");
        diesel::update(recruitments::table.find(id.get()))
            .set(recruitments::created_at.eq(at))
            .execute(&mut conn)
            .expect("update created_at");
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

pub fn create_shelter(repo: &DieselRepository, name: &str, email: &str) -> Shelter {
    let new_shelter = NewShelter::try_new(
        name,
        email,
        "1 Shelter Road",
        "Building 2",
        "02-1234-5678",
        "010-1234-5678",
        Some("https://img.example.com/shelter.png".to_string()),
    )
    .expect("valid shelter");
    repo.create_shelter(&new_shelter).expect("create shelter")
}

pub fn create_recruitment(
    repo: &DieselRepository,
    shelter_id: ShelterId,
    title: &str,
    content: &str,
    start_time: NaiveDateTime,
) -> Recruitment {
    let new_recruitment = NewRecruitment::try_new(
        shelter_id,
        title,
        content,
        start_time,
        start_time + Duration::hours(3),
        start_time - Duration::days(1),
        10,
        vec!["https://img.example.com/recruitment.png".to_string()],
    )
    .expect("valid recruitment");
    repo.create_recruitment(&new_recruitment)
        .expect("create recruitment")
}

pub fn create_animal(
    repo: &DieselRepository,
    shelter_id: ShelterId,
    name: &str,
    animal_type: AnimalType,
    weight: f64,
    birth_date: NaiveDate,
) -> Animal {
    let new_animal = NewAnimal::try_new(
        shelter_id,
        name,
        birth_date,
        animal_type,
        "Mixed",
        AnimalGender::Female,
        true,
        AnimalActive::Normal,
        weight,
        "Friendly",
        vec![
            format!("https://img.example.com/{name}-1.png"),
            format!("https://img.example.com/{name}-2.png"),
        ],
    )
    .expect("valid animal");
    repo.create_animal(&new_animal).expect("create animal")
}
