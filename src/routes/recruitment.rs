use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::recruitment::{FindRecruitmentsParams, FindShelterRecruitmentsParams, PageParams};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::recruitment as recruitment_service;

#[get("/volunteers/recruitments")]
pub async fn find_recruitments(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<FindRecruitmentsParams>,
) -> impl Responder {
    match recruitment_service::search_recruitments(
        repo.get_ref(),
        &params,
        &server_config.page_limits(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "search recruitments"),
    }
}

#[get("/shelters/{shelter_id}/recruitments")]
pub async fn find_shelter_recruitments(
    shelter_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<FindShelterRecruitmentsParams>,
) -> impl Responder {
    match recruitment_service::search_shelter_recruitments(
        repo.get_ref(),
        shelter_id.into_inner(),
        &params,
        &server_config.page_limits(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "search shelter recruitments"),
    }
}

#[get("/volunteers/{volunteer_id}/recruitments/completed")]
pub async fn find_completed_recruitments(
    volunteer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<PageParams>,
) -> impl Responder {
    match recruitment_service::list_completed_recruitments(
        repo.get_ref(),
        volunteer_id.into_inner(),
        &params,
        &server_config.page_limits(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "list completed recruitments"),
    }
}
