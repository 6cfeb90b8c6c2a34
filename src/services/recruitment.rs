//! Recruitment search use cases.

use crate::domain::recruitment::RecruitmentListing;
use crate::domain::types::{ShelterId, VolunteerId};
use crate::dto::recruitment::{
    FindCompletedRecruitmentsResponse, FindRecruitmentsParams, FindRecruitmentsResponse,
    FindShelterRecruitmentsParams, FindShelterRecruitmentsResponse, PageParams,
};
use crate::pagination::{Page, PageLimits, PageRequest, fetch_page};
use crate::repository::{RecruitmentReader, ShelterReader, VolunteerReader};
use crate::search::RecruitmentCriteria;
use crate::services::{ServiceError, ServiceResult, validate_params};

/// Runs `criteria` against the store and returns one page of listings.
///
/// Contradictory criteria and empty pages are rejected before any query.
pub fn find_recruitments<R>(
    repo: &R,
    criteria: &RecruitmentCriteria,
    request: PageRequest,
) -> ServiceResult<Page<RecruitmentListing>>
where
    R: RecruitmentReader + ?Sized,
{
    criteria.validate()?;
    if request.size == 0 {
        return Err(ServiceError::Validation("page size must be positive".into()));
    }

    let predicate = criteria.to_predicate();
    let page = fetch_page(
        request,
        |request| repo.list_recruitments(&predicate, request),
        || repo.count_recruitments(&predicate),
    )?;
    Ok(page)
}

/// Volunteer-facing recruitment search.
pub fn search_recruitments<R>(
    repo: &R,
    params: &FindRecruitmentsParams,
    limits: &PageLimits,
) -> ServiceResult<FindRecruitmentsResponse>
where
    R: RecruitmentReader + ?Sized,
{
    validate_params(params)?;
    let request = limits.request(params.page_number, params.page_size)?;

    let page = find_recruitments(repo, &params.to_criteria(), request)?;
    Ok(FindRecruitmentsResponse::from_page(page))
}

/// Recruitment search within one shelter.
pub fn search_shelter_recruitments<R>(
    repo: &R,
    shelter_id: i32,
    params: &FindShelterRecruitmentsParams,
    limits: &PageLimits,
) -> ServiceResult<FindShelterRecruitmentsResponse>
where
    R: RecruitmentReader + ShelterReader + ?Sized,
{
    validate_params(params)?;
    let request = limits.request(params.page_number, params.page_size)?;
    let shelter_id = ShelterId::new(shelter_id)?;

    if repo.get_shelter_by_id(shelter_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let page = find_recruitments(repo, &params.to_criteria(shelter_id), request)?;
    Ok(FindShelterRecruitmentsResponse::from_page(page))
}

/// Recruitments the volunteer attended.
pub fn list_completed_recruitments<R>(
    repo: &R,
    volunteer_id: i32,
    params: &PageParams,
    limits: &PageLimits,
) -> ServiceResult<FindCompletedRecruitmentsResponse>
where
    R: RecruitmentReader + VolunteerReader + ?Sized,
{
    validate_params(params)?;
    let request = limits.request(params.page_number, params.page_size)?;
    let volunteer_id = VolunteerId::new(volunteer_id)?;

    if repo.get_volunteer_by_id(volunteer_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let page = fetch_page(
        request,
        |request| repo.list_completed_recruitments(volunteer_id, request),
        || repo.count_completed_recruitments(volunteer_id),
    )?;
    Ok(FindCompletedRecruitmentsResponse::from_page(page))
}
