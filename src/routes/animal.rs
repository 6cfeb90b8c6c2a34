use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::animal::FindAnimalsParams;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::animal as animal_service;

#[get("/volunteers/animals")]
pub async fn find_animals(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<FindAnimalsParams>,
) -> impl Responder {
    match animal_service::search_animals(repo.get_ref(), &params, &server_config.page_limits()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "search animals"),
    }
}

#[get("/shelters/{shelter_id}/animals")]
pub async fn find_shelter_animals(
    shelter_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<FindAnimalsParams>,
) -> impl Responder {
    match animal_service::search_shelter_animals(
        repo.get_ref(),
        shelter_id.into_inner(),
        &params,
        &server_config.page_limits(),
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "search shelter animals"),
    }
}
