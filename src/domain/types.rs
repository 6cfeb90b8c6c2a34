//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, bounded text) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use phonenumber::{Mode, country};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than allowed.
    #[error("value must be at most {0} characters")]
    TooLong(usize),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Image list is shorter or longer than allowed.
    #[error("expected between {min} and {max} images, got {actual}")]
    ImageCount {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ShelterId, "Unique identifier for a shelter.");
id_newtype!(VolunteerId, "Unique identifier for a volunteer.");
id_newtype!(RecruitmentId, "Unique identifier for a recruitment listing.");
id_newtype!(AnimalId, "Unique identifier for a sheltered animal.");
id_newtype!(ApplicantId, "Unique identifier for a volunteer application.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trims the input, rejects empty values and values longer than `max` chars.
fn bounded_string<S: Into<String>>(value: S, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong(max));
    }
    Ok(trimmed)
}

macro_rules! bounded_string_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_LEN: usize = $max;

            /// Constructs a trimmed, non-empty, length-bounded value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(bounded_string(value, Self::MAX_LEN)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string_newtype!(ShelterName, 50, "Shelter display name.");
bounded_string_newtype!(ShelterAddress, 100, "Shelter street address.");
bounded_string_newtype!(VolunteerName, 50, "Volunteer display name.");
bounded_string_newtype!(RecruitmentTitle, 100, "Recruitment listing title.");
bounded_string_newtype!(AnimalName, 20, "Name given to a sheltered animal.");
bounded_string_newtype!(AnimalBreed, 20, "Free-form breed description.");

/// Recruitment body text, sanitized from any HTML markup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecruitmentContent(String);

impl RecruitmentContent {
    /// Maximum number of characters accepted after sanitizing.
    pub const MAX_LEN: usize = 1000;

    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        Ok(Self(bounded_string(sanitized, Self::MAX_LEN)?))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RecruitmentContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RecruitmentContent {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of volunteers a recruitment accepts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Capacity(i32);

impl Capacity {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 99;

    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "capacity must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Capacity {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Animal weight in kilograms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value > 0.0 && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "weight must be in (0, {}] kg",
                Self::MAX
            )))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Korean landline or mobile number normalized to national format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses the number as a Korean phone number and normalizes it.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let parsed = phonenumber::parse(Some(country::Id::KR), trimmed)
            .map_err(|_| TypeConstraintError::InvalidPhone)?;
        if !phonenumber::is_valid(&parsed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(parsed.format().mode(Mode::National).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Absolute URL of an uploaded image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.validate_url() {
            Ok(Self(trimmed))
        } else {
            Err(TypeConstraintError::InvalidUrl)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validates a list of image urls against an inclusive size range.
pub fn image_urls<I, S>(urls: I, min: usize, max: usize) -> Result<Vec<ImageUrl>, TypeConstraintError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let urls = urls
        .into_iter()
        .map(ImageUrl::new)
        .collect::<Result<Vec<_>, _>>()?;
    if urls.len() < min || urls.len() > max {
        return Err(TypeConstraintError::ImageCount {
            min,
            max,
            actual: urls.len(),
        });
    }
    Ok(urls)
}

/// Declares a closed enum stored as its SCREAMING_SNAKE_CASE name.
macro_rules! text_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $text:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Stored and serialized representation.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(format!(
                        "unknown {}: {other}",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

text_enum!(AnimalType, "Species group of a sheltered animal.", {
    Dog => "DOG",
    Cat => "CAT",
    Etc => "ETC",
});

text_enum!(AnimalGender, "Sex of a sheltered animal.", {
    Male => "MALE",
    Female => "FEMALE",
});

text_enum!(AnimalActive, "Temperament of a sheltered animal.", {
    Active => "ACTIVE",
    Quiet => "QUIET",
    Normal => "NORMAL",
    Shy => "SHY",
});

text_enum!(AnimalNeuteredFilter, "Search filter on the neutered flag.", {
    IsNeutered => "IS_NEUTERED",
    IsNotNeutered => "IS_NOT_NEUTERED",
});

text_enum!(AnimalSize, "Weight class used by animal search.", {
    Small => "SMALL",
    Medium => "MEDIUM",
    Large => "LARGE",
});

text_enum!(AnimalAge, "Age class used by animal search.", {
    Baby => "BABY",
    Junior => "JUNIOR",
    Adult => "ADULT",
    Senior => "SENIOR",
});

text_enum!(ApplicantStatus, "Progress of a volunteer application.", {
    Pending => "PENDING",
    Refused => "REFUSED",
    Approved => "APPROVED",
    Attendance => "ATTENDANCE",
    NoShow => "NO_SHOW",
});

impl AnimalNeuteredFilter {
    /// Value of the `is_neutered` flag selected by this filter.
    pub const fn is_neutered(self) -> bool {
        matches!(self, Self::IsNeutered)
    }
}

impl AnimalSize {
    /// Weight range in kg as `[min, max)`; `None` means unbounded.
    pub const fn weight_range(self) -> (f64, Option<f64>) {
        match self {
            Self::Small => (0.0, Some(7.0)),
            Self::Medium => (7.0, Some(25.0)),
            Self::Large => (25.0, None),
        }
    }
}

impl AnimalAge {
    /// Age range in months as `[min, max)`; `None` means unbounded.
    pub const fn month_range(self) -> (u32, Option<u32>) {
        match self {
            Self::Baby => (0, Some(6)),
            Self::Junior => (6, Some(12)),
            Self::Adult => (12, Some(84)),
            Self::Senior => (84, None),
        }
    }
}
