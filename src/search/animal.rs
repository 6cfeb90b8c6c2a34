//! Animal search criteria and their predicate.

use chrono::{Months, NaiveDate};

use crate::domain::animal::Animal;
use crate::domain::types::{
    AnimalActive, AnimalAge, AnimalGender, AnimalNeuteredFilter, AnimalSize, AnimalType,
    ShelterId,
};
use crate::search::normalize_keyword;
use crate::search::predicate::{Field, Predicate, PredicateError, Record, Value, ValueKind, tolerant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimalField {
    Name,
    ShelterId,
    Type,
    Gender,
    IsNeutered,
    Active,
    Weight,
    BirthDate,
}

impl Field for AnimalField {
    fn kind(self) -> ValueKind {
        match self {
            AnimalField::Name | AnimalField::Type | AnimalField::Gender | AnimalField::Active => {
                ValueKind::Text
            }
            AnimalField::ShelterId => ValueKind::Integer,
            AnimalField::IsNeutered => ValueKind::Bool,
            AnimalField::Weight => ValueKind::Float,
            AnimalField::BirthDate => ValueKind::Date,
        }
    }
}

impl Record<AnimalField> for Animal {
    fn value(&self, field: AnimalField) -> Option<Value> {
        Some(match field {
            AnimalField::Name => self.name.as_str().into(),
            AnimalField::ShelterId => self.shelter_id.get().into(),
            AnimalField::Type => self.animal_type.as_str().into(),
            AnimalField::Gender => self.gender.as_str().into(),
            AnimalField::IsNeutered => self.is_neutered.into(),
            AnimalField::Active => self.active.as_str().into(),
            AnimalField::Weight => self.weight.get().into(),
            AnimalField::BirthDate => self.birth_date.into(),
        })
    }
}

/// Filter over animals. Absent values impose no constraint; the keyword is
/// matched against the animal name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimalCriteria {
    pub keyword: Option<String>,
    pub shelter_id: Option<ShelterId>,
    pub animal_type: Option<AnimalType>,
    pub gender: Option<AnimalGender>,
    pub neutered: Option<AnimalNeuteredFilter>,
    pub active: Option<AnimalActive>,
    pub size: Option<AnimalSize>,
    pub age: Option<AnimalAge>,
}

impl AnimalCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = normalize_keyword(Some(keyword.into()));
        self
    }

    pub fn shelter(mut self, shelter_id: ShelterId) -> Self {
        self.shelter_id = Some(shelter_id);
        self
    }

    pub fn animal_type(mut self, animal_type: AnimalType) -> Self {
        self.animal_type = Some(animal_type);
        self
    }

    pub fn gender(mut self, gender: AnimalGender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn neutered(mut self, neutered: AnimalNeuteredFilter) -> Self {
        self.neutered = Some(neutered);
        self
    }

    pub fn active(mut self, active: AnimalActive) -> Self {
        self.active = Some(active);
        self
    }

    pub fn size(mut self, size: AnimalSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn age(mut self, age: AnimalAge) -> Self {
        self.age = Some(age);
        self
    }

    /// Compiles the criteria into a predicate; every present filter is
    /// AND-ed. Ages are resolved to birth date bounds relative to `today`.
    pub fn to_predicate(&self, today: NaiveDate) -> Predicate<AnimalField> {
        let mut leaves = vec![
            self.keyword
                .as_deref()
                .map(|keyword| Predicate::contains(AnimalField::Name, keyword)),
            self.shelter_id
                .map(|id| Predicate::equals(AnimalField::ShelterId, id.get())),
            self.animal_type
                .map(|t| Predicate::equals(AnimalField::Type, t.as_str())),
            self.gender
                .map(|g| Predicate::equals(AnimalField::Gender, g.as_str())),
            self.neutered
                .map(|n| Predicate::equals(AnimalField::IsNeutered, n.is_neutered())),
            self.active
                .map(|a| Predicate::equals(AnimalField::Active, a.as_str())),
        ];

        if let Some(size) = self.size {
            let (min, max) = size.weight_range();
            leaves.push(Some(Predicate::ge(AnimalField::Weight, min)));
            leaves.push(max.map(|max| Predicate::lt(AnimalField::Weight, max)));
        }

        if let Some(age) = self.age {
            let (min, max) = age.month_range();
            leaves.push(Some(
                months_before(today, min).and_then(|born| Predicate::le(AnimalField::BirthDate, born)),
            ));
            leaves.push(max.map(|max| {
                months_before(today, max).and_then(|born| Predicate::gt(AnimalField::BirthDate, born))
            }));
        }

        Predicate::all(leaves.into_iter().flatten().filter_map(tolerant))
    }
}

fn months_before(date: NaiveDate, months: u32) -> Result<NaiveDate, PredicateError> {
    date.checked_sub_months(Months::new(months))
        .ok_or(PredicateError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{AnimalBreed, AnimalId, AnimalName, ImageUrl, Weight};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn animal(birth_date: NaiveDate, weight: f64) -> Animal {
        let now = Utc::now().naive_utc();
        Animal {
            id: AnimalId::new(1).unwrap(),
            shelter_id: ShelterId::new(2).unwrap(),
            name: AnimalName::new("Bori").unwrap(),
            birth_date,
            animal_type: AnimalType::Dog,
            breed: AnimalBreed::new("Jindo").unwrap(),
            gender: AnimalGender::Male,
            is_neutered: true,
            active: AnimalActive::Active,
            weight: Weight::new(weight).unwrap(),
            information: String::new(),
            is_adopted: false,
            image_urls: vec![ImageUrl::new("https://img.example.com/bori.png").unwrap()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_criteria_is_always() {
        assert_eq!(AnimalCriteria::new().to_predicate(today()), Predicate::Always);
    }

    #[test]
    fn categorical_filters_match_in_memory() {
        let bori = animal(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), 12.0);

        let matching = AnimalCriteria::new()
            .animal_type(AnimalType::Dog)
            .gender(AnimalGender::Male)
            .neutered(AnimalNeuteredFilter::IsNeutered)
            .active(AnimalActive::Active)
            .shelter(ShelterId::new(2).unwrap())
            .keyword("Bo");
        assert!(matching.to_predicate(today()).matches(&bori));

        let other_type = AnimalCriteria::new().animal_type(AnimalType::Cat);
        assert!(!other_type.to_predicate(today()).matches(&bori));

        let not_neutered = AnimalCriteria::new().neutered(AnimalNeuteredFilter::IsNotNeutered);
        assert!(!not_neutered.to_predicate(today()).matches(&bori));
    }

    #[test]
    fn size_uses_half_open_weight_ranges() {
        let born = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let small = AnimalCriteria::new().size(AnimalSize::Small).to_predicate(today());
        let medium = AnimalCriteria::new().size(AnimalSize::Medium).to_predicate(today());
        let large = AnimalCriteria::new().size(AnimalSize::Large).to_predicate(today());

        assert!(small.matches(&animal(born, 6.9)));
        assert!(!small.matches(&animal(born, 7.0)));
        assert!(medium.matches(&animal(born, 7.0)));
        assert!(!medium.matches(&animal(born, 25.0)));
        assert!(large.matches(&animal(born, 25.0)));
    }

    #[test]
    fn age_resolves_to_birth_date_bounds() {
        let baby = AnimalCriteria::new().age(AnimalAge::Baby).to_predicate(today());
        let junior = AnimalCriteria::new().age(AnimalAge::Junior).to_predicate(today());
        let senior = AnimalCriteria::new().age(AnimalAge::Senior).to_predicate(today());

        let three_months = animal(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 2.0);
        let exactly_six_months = animal(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(), 2.0);
        let ten_years = animal(NaiveDate::from_ymd_opt(2014, 6, 15).unwrap(), 20.0);

        assert!(baby.matches(&three_months));
        assert!(!baby.matches(&exactly_six_months));
        assert!(junior.matches(&exactly_six_months));
        assert!(senior.matches(&ten_years));
        assert!(!senior.matches(&three_months));
    }

    #[test]
    fn unrepresentable_age_bound_is_dropped() {
        let predicate = AnimalCriteria::new()
            .age(AnimalAge::Senior)
            .to_predicate(NaiveDate::MIN);
        assert_eq!(predicate, Predicate::Always);
    }
}
