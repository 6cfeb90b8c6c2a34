//! Database models shared across the search repository.

pub mod animal;
pub mod applicant;
#[cfg(feature = "server")]
pub mod config;
pub mod recruitment;
pub mod shelter;
pub mod volunteer;
