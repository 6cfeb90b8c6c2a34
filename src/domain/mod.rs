//! Domain aggregates exposed by the search service layer.

pub mod animal;
pub mod applicant;
pub mod recruitment;
pub mod shelter;
pub mod types;
pub mod volunteer;
