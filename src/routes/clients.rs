use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::dto::clients::{
    ClientResponse, CreateClientPayload, ListClientsQuery, PaginatedClientsResponse,
    UpdateClientPayload, UpdateResultResponse, UpdateSelectionPayload,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::clients as clients_service;

fn parse_client_id(raw: &str) -> Result<ClientId, HttpResponse> {
    raw.parse::<ClientId>()
        .map_err(|_| HttpResponse::BadRequest().json(json!({"message": "Invalid client id"})))
}

#[get("")]
pub async fn list_clients(
    params: web::Query<ListClientsQuery>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(err) = params.validate() {
        return HttpResponse::BadRequest().json(json!({"message": err.to_string()}));
    }

    match clients_service::list_clients(repo.get_ref(), params.into()) {
        Ok(page) => HttpResponse::Ok().json(PaginatedClientsResponse::from(page)),
        Err(err) => error_response(err),
    }
}

#[post("")]
pub async fn create_client(
    payload: web::Json<CreateClientPayload>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({"message": err.to_string()}));
    }

    let new_client: NewClient = match payload.try_into() {
        Ok(new_client) => new_client,
        Err(err) => return HttpResponse::BadRequest().json(json!({"message": err.to_string()})),
    };

    match clients_service::create_client(repo.get_ref(), new_client) {
        Ok(client) => HttpResponse::Created().json(ClientResponse::from(client)),
        Err(err) => error_response(err),
    }
}

#[patch("/selection")]
pub async fn update_selection(
    payload: web::Json<UpdateSelectionPayload>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::update_all_selections(repo.get_ref(), payload.is_selected) {
        Ok(affected) => HttpResponse::Ok().json(UpdateResultResponse { affected }),
        Err(err) => error_response(err),
    }
}

#[get("/{client_id}")]
pub async fn get_client(
    client_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let client_id = match parse_client_id(&client_id) {
        Ok(client_id) => client_id,
        Err(response) => return response,
    };

    match clients_service::get_client_detail(repo.get_ref(), client_id) {
        Ok(client) => HttpResponse::Ok().json(ClientResponse::from(client)),
        Err(err) => error_response(err),
    }
}

#[patch("/{client_id}")]
pub async fn update_client(
    client_id: web::Path<String>,
    payload: web::Json<UpdateClientPayload>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let client_id = match parse_client_id(&client_id) {
        Ok(client_id) => client_id,
        Err(response) => return response,
    };

    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({"message": err.to_string()}));
    }

    let updates: UpdateClient = match payload.try_into() {
        Ok(updates) => updates,
        Err(err) => return HttpResponse::BadRequest().json(json!({"message": err.to_string()})),
    };

    match clients_service::update_client(repo.get_ref(), client_id, &updates) {
        Ok(client) => HttpResponse::Ok().json(ClientResponse::from(client)),
        Err(err) => error_response(err),
    }
}

#[delete("/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let client_id = match parse_client_id(&client_id) {
        Ok(client_id) => client_id,
        Err(response) => return response,
    };

    match clients_service::remove_client(repo.get_ref(), client_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
