//! Wire shapes exposed by the `/metrics` endpoints.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::metric::{DashboardData, MonthlyGrowth, TopClient};
use crate::domain::types::ClientId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopClientResponse {
    pub id: ClientId,
    pub name: String,
    pub views: i32,
    pub company_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TopClient> for TopClientResponse {
    fn from(client: TopClient) -> Self {
        Self {
            id: client.id,
            name: client.name,
            views: client.views,
            company_value: client.company_value,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_clients: i64,
    pub total_company_value: f64,
    pub average_salary: f64,
    pub top_viewed_clients: Vec<TopClientResponse>,
}

impl From<DashboardData> for DashboardResponse {
    fn from(data: DashboardData) -> Self {
        Self {
            total_clients: data.total_clients,
            total_company_value: data.total_company_value,
            average_salary: data.average_salary,
            top_viewed_clients: data
                .top_viewed_clients
                .into_iter()
                .map(TopClientResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGrowthResponse {
    pub month: String,
    pub count: i64,
    pub total_company_value: f64,
}

impl From<MonthlyGrowth> for MonthlyGrowthResponse {
    fn from(growth: MonthlyGrowth) -> Self {
        Self {
            month: growth.month,
            count: growth.count,
            total_company_value: growth.total_company_value,
        }
    }
}
