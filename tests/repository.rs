use anifriends_search::domain::applicant::NewApplicant;
use anifriends_search::domain::recruitment::RecruitmentListing;
use anifriends_search::domain::types::{
    AnimalAge, AnimalSize, AnimalType, ApplicantStatus, RecruitmentId, ShelterId,
};
use anifriends_search::domain::volunteer::NewVolunteer;
use anifriends_search::pagination::{Page, PageRequest};
use anifriends_search::repository::errors::RepositoryError;
use anifriends_search::repository::{
    AnimalReader, ApplicantWriter, RecruitmentReader, RecruitmentWriter, ShelterReader,
    VolunteerWriter,
};
use anifriends_search::search::{AnimalCriteria, Predicate, RecruitmentCriteria};
use anifriends_search::services::recruitment::find_recruitments;
use chrono::{Months, NaiveDate, Utc};

mod common;

use common::{at, create_animal, create_recruitment, create_shelter};

fn titles(page: &Page<RecruitmentListing>) -> Vec<String> {
    page.content
        .iter()
        .map(|listing| listing.recruitment.title.as_str().to_string())
        .collect()
}

#[test]
fn test_empty_criteria_returns_everything_newest_first() {
    let test_db = common::TestDb::new("test_empty_criteria.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    for (i, title) in ["First", "Second", "Third"].iter().enumerate() {
        let recruitment =
            create_recruitment(&repo, shelter.id, title, "Help out", at(2024, 5, 10, 9, 0));
        test_db.set_recruitment_created_at(recruitment.id, at(2024, 4, 1 + i as u32, 12, 0));
    }

    let page = find_recruitments(&repo, &RecruitmentCriteria::new(), PageRequest::new(0, 10))
        .expect("search");

    assert_eq!(titles(&page), vec!["Third", "Second", "First"]);
    assert_eq!(page.total_elements, 3);
    assert!(!page.has_next());
}

#[test]
fn test_closed_filter_returns_only_closed() {
    let test_db = common::TestDb::new("test_closed_filter.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    let open = create_recruitment(&repo, shelter.id, "Open", "Help out", at(2024, 5, 10, 9, 0));
    let closed = create_recruitment(&repo, shelter.id, "Closed", "Help out", at(2024, 5, 10, 9, 0));
    let closed = repo.close_recruitment(closed.id).expect("close");
    assert!(closed.is_closed);

    let page = find_recruitments(
        &repo,
        &RecruitmentCriteria::new().closed(true),
        PageRequest::new(0, 10),
    )
    .expect("search");
    assert_eq!(titles(&page), vec!["Closed"]);

    let page = find_recruitments(
        &repo,
        &RecruitmentCriteria::new().closed(false),
        PageRequest::new(0, 10),
    )
    .expect("search");
    assert_eq!(page.content[0].recruitment.id, open.id);
    assert_eq!(page.total_elements, 1);
}

#[test]
fn test_single_selector_matches_only_that_field() {
    let test_db = common::TestDb::new("test_single_selector.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    create_recruitment(&repo, shelter.id, "Cat care", "Brush fur", at(2024, 5, 10, 9, 0));
    create_recruitment(&repo, shelter.id, "Dog walk", "Cat friendly dogs", at(2024, 5, 10, 9, 0));

    let criteria = RecruitmentCriteria::new().keyword("Cat").match_title(true);
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");
    assert_eq!(titles(&page), vec!["Cat care"]);

    let criteria = RecruitmentCriteria::new().keyword("Cat").match_content(true);
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");
    assert_eq!(titles(&page), vec!["Dog walk"]);
}

#[test]
fn test_multiple_selectors_use_or() {
    let test_db = common::TestDb::new("test_multiple_selectors.db");
    let repo = test_db.repo();
    let paws = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let haven = create_shelter(&repo, "Cat Haven", "haven@example.com");

    create_recruitment(&repo, paws.id, "Cat care", "Brush fur", at(2024, 5, 10, 9, 0));
    create_recruitment(&repo, haven.id, "Dog walk", "Morning walk", at(2024, 5, 10, 9, 0));
    create_recruitment(&repo, paws.id, "Yard cleanup", "Rake leaves", at(2024, 5, 10, 9, 0));

    let criteria = RecruitmentCriteria::new()
        .keyword("Cat")
        .match_title(true)
        .match_shelter_name(true);
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");

    assert_eq!(titles(&page), vec!["Dog walk", "Cat care"]);
    assert_eq!(page.content[0].shelter.name.as_str(), "Cat Haven");
}

#[test]
fn test_has_next_and_page_bounds() {
    let test_db = common::TestDb::new("test_has_next.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    for i in 0..5 {
        create_recruitment(
            &repo,
            shelter.id,
            &format!("Shift {i}"),
            "Help out",
            at(2024, 5, 10, 9, 0),
        );
    }

    let criteria = RecruitmentCriteria::new();
    let first = find_recruitments(&repo, &criteria, PageRequest::new(0, 2)).expect("page 0");
    assert!(first.content.len() <= 2);
    assert_eq!(first.content.len(), 2);
    assert!(first.has_next());

    let last = find_recruitments(&repo, &criteria, PageRequest::new(2, 2)).expect("page 2");
    assert_eq!(last.content.len(), 1);
    assert!(!last.has_next());

    let exact = find_recruitments(&repo, &criteria, PageRequest::new(0, 5)).expect("exact");
    assert_eq!(exact.total_elements, 5);
    assert!(!exact.has_next());

    let beyond = find_recruitments(&repo, &criteria, PageRequest::new(10, 2)).expect("beyond");
    assert!(beyond.content.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[test]
fn test_date_range_is_inclusive_of_whole_end_date() {
    let test_db = common::TestDb::new("test_date_range.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    create_recruitment(&repo, shelter.id, "Before", "x", at(2024, 4, 30, 23, 59));
    create_recruitment(&repo, shelter.id, "Start midnight", "x", at(2024, 5, 1, 0, 0));
    create_recruitment(&repo, shelter.id, "Late on end", "x", at(2024, 5, 10, 23, 59));
    create_recruitment(&repo, shelter.id, "Next midnight", "x", at(2024, 5, 11, 0, 0));

    let criteria = RecruitmentCriteria::new()
        .start_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");

    let mut found = titles(&page);
    found.sort();
    assert_eq!(found, vec!["Late on end", "Start midnight"]);
}

#[test]
fn test_cat_keyword_end_to_end() {
    let test_db = common::TestDb::new("test_cat_keyword.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    let care = create_recruitment(&repo, shelter.id, "Cat care", "x", at(2024, 5, 10, 9, 0));
    let walk = create_recruitment(&repo, shelter.id, "Dog walk", "x", at(2024, 5, 10, 9, 0));
    let feeding = create_recruitment(&repo, shelter.id, "Cat feeding", "x", at(2024, 5, 10, 9, 0));
    test_db.set_recruitment_created_at(care.id, at(2024, 4, 1, 8, 0));
    test_db.set_recruitment_created_at(walk.id, at(2024, 4, 2, 8, 0));
    test_db.set_recruitment_created_at(feeding.id, at(2024, 4, 3, 8, 0));

    let criteria = RecruitmentCriteria::new().keyword("Cat").match_title(true);
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");

    assert_eq!(titles(&page), vec!["Cat feeding", "Cat care"]);
    assert_eq!(page.total_elements, 2);

    let lowercase = RecruitmentCriteria::new().keyword("cat").match_title(true);
    let page = find_recruitments(&repo, &lowercase, PageRequest::new(0, 10)).expect("search");
    assert!(page.content.is_empty());
}

#[test]
fn test_like_wildcards_are_literal() {
    let test_db = common::TestDb::new("test_like_wildcards.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    create_recruitment(&repo, shelter.id, "100% fun", "x", at(2024, 5, 10, 9, 0));
    create_recruitment(&repo, shelter.id, "1000 treats", "x", at(2024, 5, 10, 9, 0));

    let criteria = RecruitmentCriteria::new().keyword("100%").match_title(true);
    let page = find_recruitments(&repo, &criteria, PageRequest::new(0, 10)).expect("search");
    assert_eq!(titles(&page), vec!["100% fun"]);
}

#[test]
fn test_sql_results_agree_with_in_memory_evaluation() {
    let test_db = common::TestDb::new("test_sql_agrees.db");
    let repo = test_db.repo();
    let paws = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let haven = create_shelter(&repo, "Cat Haven", "haven@example.com");

    create_recruitment(&repo, paws.id, "Cat care", "Brush fur", at(2024, 5, 1, 9, 0));
    create_recruitment(&repo, haven.id, "Dog walk", "Cat friendly", at(2024, 5, 5, 9, 0));
    let closed = create_recruitment(&repo, haven.id, "Kennel wash", "Soap", at(2024, 5, 9, 9, 0));
    repo.close_recruitment(closed.id).expect("close");
    create_recruitment(&repo, paws.id, "cat nap duty", "Quiet", at(2024, 6, 1, 9, 0));

    let everything = repo
        .list_recruitments(&Predicate::Always, &PageRequest::new(0, 100))
        .expect("list all");
    assert_eq!(everything.len(), 4);

    let criteria_set = [
        RecruitmentCriteria::new().keyword("Cat").match_title(true),
        RecruitmentCriteria::new()
            .keyword("Cat")
            .match_content(true)
            .match_shelter_name(true),
        RecruitmentCriteria::new().closed(false).start_date(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()),
        RecruitmentCriteria::new().shelter(haven.id).end_date(NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()),
    ];

    for criteria in criteria_set {
        let predicate = criteria.to_predicate();
        let mut expected: Vec<RecruitmentId> = everything
            .iter()
            .filter(|listing| predicate.matches(*listing))
            .map(|listing| listing.recruitment.id)
            .collect();
        let mut actual: Vec<RecruitmentId> = repo
            .list_recruitments(&predicate, &PageRequest::new(0, 100))
            .expect("list")
            .into_iter()
            .map(|listing| listing.recruitment.id)
            .collect();
        expected.sort_by_key(|id| id.get());
        actual.sort_by_key(|id| id.get());
        assert_eq!(actual, expected, "criteria {criteria:?}");
        assert_eq!(
            repo.count_recruitments(&predicate).expect("count"),
            expected.len()
        );
    }
}

#[test]
fn test_listing_carries_images_and_applicant_count() {
    let test_db = common::TestDb::new("test_listing_details.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let recruitment = create_recruitment(&repo, shelter.id, "Cat care", "x", at(2024, 5, 10, 9, 0));

    for (name, email) in [("Minji", "minji@example.com"), ("Jisoo", "jisoo@example.com")] {
        let volunteer = repo
            .create_volunteer(&NewVolunteer::try_new(name, email).unwrap())
            .expect("create volunteer");
        repo.create_applicant(&NewApplicant::new(recruitment.id, volunteer.id))
            .expect("apply");
    }

    let listing = repo
        .get_recruitment_by_id(recruitment.id)
        .expect("get")
        .expect("exists");
    assert_eq!(listing.applicant_count, 2);
    assert_eq!(listing.recruitment.image_urls.len(), 1);
    assert_eq!(listing.shelter.id, shelter.id);

    assert!(
        repo.get_recruitment_by_id(RecruitmentId::new(999).unwrap())
            .expect("get")
            .is_none()
    );
}

#[test]
fn test_completed_recruitments_only_include_attendance() {
    let test_db = common::TestDb::new("test_completed.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let volunteer = repo
        .create_volunteer(&NewVolunteer::try_new("Minji", "minji@example.com").unwrap())
        .expect("create volunteer");

    let attended = create_recruitment(&repo, shelter.id, "Attended", "x", at(2024, 5, 1, 9, 0));
    let pending = create_recruitment(&repo, shelter.id, "Pending", "x", at(2024, 5, 2, 9, 0));

    let applicant = repo
        .create_applicant(&NewApplicant::new(attended.id, volunteer.id))
        .expect("apply");
    assert_eq!(applicant.status, ApplicantStatus::Pending);
    let applicant = repo
        .update_applicant_status(applicant.id, ApplicantStatus::Attendance)
        .expect("mark attended");
    assert_eq!(applicant.status, ApplicantStatus::Attendance);
    repo.create_applicant(&NewApplicant::new(pending.id, volunteer.id))
        .expect("apply");

    let listings = repo
        .list_completed_recruitments(volunteer.id, &PageRequest::new(0, 10))
        .expect("completed");
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].recruitment.id, attended.id);
    assert_eq!(
        repo.count_completed_recruitments(volunteer.id)
            .expect("count completed"),
        1
    );
}

#[test]
fn test_duplicate_application_is_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_application.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let volunteer = repo
        .create_volunteer(&NewVolunteer::try_new("Minji", "minji@example.com").unwrap())
        .expect("create volunteer");
    let recruitment = create_recruitment(&repo, shelter.id, "Cat care", "x", at(2024, 5, 1, 9, 0));

    repo.create_applicant(&NewApplicant::new(recruitment.id, volunteer.id))
        .expect("apply");
    let duplicate = repo.create_applicant(&NewApplicant::new(recruitment.id, volunteer.id));
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_animal_filters() {
    let test_db = common::TestDb::new("test_animal_filters.db");
    let repo = test_db.repo();
    let paws = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let haven = create_shelter(&repo, "Cat Haven", "haven@example.com");
    let today = Utc::now().date_naive();
    let months_ago = |months: u32| today.checked_sub_months(Months::new(months)).unwrap();

    create_animal(&repo, paws.id, "Bori", AnimalType::Dog, 12.0, months_ago(36));
    create_animal(&repo, paws.id, "Nabi", AnimalType::Cat, 3.5, months_ago(2));
    create_animal(&repo, haven.id, "Kong", AnimalType::Dog, 30.0, months_ago(120));

    let everything = repo
        .list_animals(&Predicate::Always, &PageRequest::new(0, 10))
        .expect("list all");
    assert_eq!(everything.len(), 3);
    assert_eq!(everything[0].0.name.as_str(), "Kong");

    let criteria_set = [
        (AnimalCriteria::new().animal_type(AnimalType::Dog), vec!["Bori", "Kong"]),
        (AnimalCriteria::new().size(AnimalSize::Small), vec!["Nabi"]),
        (AnimalCriteria::new().size(AnimalSize::Large), vec!["Kong"]),
        (AnimalCriteria::new().age(AnimalAge::Baby), vec!["Nabi"]),
        (AnimalCriteria::new().age(AnimalAge::Senior), vec!["Kong"]),
        (AnimalCriteria::new().age(AnimalAge::Adult).size(AnimalSize::Medium), vec!["Bori"]),
        (AnimalCriteria::new().shelter(haven.id), vec!["Kong"]),
        (AnimalCriteria::new().shelter(paws.id).keyword("Na"), vec!["Nabi"]),
    ];

    for (criteria, expected) in criteria_set {
        let predicate = criteria.to_predicate(today);
        let mut names: Vec<String> = repo
            .list_animals(&predicate, &PageRequest::new(0, 10))
            .expect("list")
            .into_iter()
            .map(|(animal, _)| animal.name.as_str().to_string())
            .collect();
        names.sort();
        assert_eq!(names, expected, "criteria {criteria:?}");
        assert_eq!(repo.count_animals(&predicate).expect("count"), expected.len());

        let in_memory = everything
            .iter()
            .filter(|(animal, _)| predicate.matches(animal))
            .count();
        assert_eq!(in_memory, expected.len(), "criteria {criteria:?}");
    }
}

#[test]
fn test_animal_images_keep_upload_order() {
    let test_db = common::TestDb::new("test_animal_images.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");
    let created = create_animal(
        &repo,
        shelter.id,
        "Bori",
        AnimalType::Dog,
        12.0,
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    );

    let animal = repo
        .get_animal_by_id(created.id)
        .expect("get")
        .expect("exists");
    assert_eq!(
        animal.thumbnail().map(|url| url.as_str()),
        Some("https://img.example.com/Bori-1.png")
    );
    assert_eq!(animal.image_urls.len(), 2);
}

#[test]
fn test_shelter_round_trip() {
    let test_db = common::TestDb::new("test_shelter_round_trip.db");
    let repo = test_db.repo();
    let shelter = create_shelter(&repo, "Happy Paws", "paws@example.com");

    let loaded = repo
        .get_shelter_by_id(shelter.id)
        .expect("get")
        .expect("exists");
    assert_eq!(loaded, shelter);
    assert!(
        repo.get_shelter_by_id(ShelterId::new(999).unwrap())
            .expect("get")
            .is_none()
    );
}
