use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::metrics::{DashboardResponse, MonthlyGrowthResponse};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::metrics as metrics_service;

#[get("/dashboard")]
pub async fn dashboard(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match metrics_service::dashboard_data(repo.get_ref()) {
        Ok(data) => HttpResponse::Ok().json(DashboardResponse::from(data)),
        Err(err) => error_response(err),
    }
}

#[get("/growth")]
pub async fn growth(_user: AuthenticatedUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match metrics_service::growth_metrics(repo.get_ref()) {
        Ok(growth) => HttpResponse::Ok().json(
            growth
                .into_iter()
                .map(MonthlyGrowthResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err),
    }
}
