//! Wire shapes exposed by the `/clients` endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::metric::ClientMetric;
use crate::domain::types::{ClientId, ClientName, NonNegativeAmount, TypeConstraintError};
use crate::services::clients::{ClientsPage, ListClientsParams};

/// Query parameters accepted by the client listing endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ListClientsQuery {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    pub selected: Option<bool>,
}

impl From<ListClientsQuery> for ListClientsParams {
    fn from(query: ListClientsQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            selected: query.selected,
        }
    }
}

/// Body accepted when creating a client.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    #[validate(range(min = 0.0))]
    pub company_value: f64,
    #[serde(default)]
    pub is_selected: bool,
}

impl TryFrom<CreateClientPayload> for NewClient {
    type Error = TypeConstraintError;

    fn try_from(payload: CreateClientPayload) -> Result<Self, Self::Error> {
        Ok(NewClient::new(
            ClientName::new(payload.name)?,
            NonNegativeAmount::new(payload.salary)?,
            NonNegativeAmount::new(payload.company_value)?,
            payload.is_selected,
        ))
    }
}

/// Body accepted when patching a client; absent fields keep their value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClientPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    #[validate(range(min = 0.0))]
    pub company_value: Option<f64>,
    pub is_selected: Option<bool>,
}

impl TryFrom<UpdateClientPayload> for UpdateClient {
    type Error = TypeConstraintError;

    fn try_from(payload: UpdateClientPayload) -> Result<Self, Self::Error> {
        Ok(UpdateClient {
            name: payload.name.map(ClientName::new).transpose()?,
            salary: payload.salary.map(NonNegativeAmount::new).transpose()?,
            company_value: payload
                .company_value
                .map(NonNegativeAmount::new)
                .transpose()?,
            is_selected: payload.is_selected,
        })
    }
}

/// Body accepted by the bulk selection endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSelectionPayload {
    pub is_selected: bool,
}

/// Affected-row count reported by set-based updates.
#[derive(Debug, Serialize)]
pub struct UpdateResultResponse {
    pub affected: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResponse {
    pub client_id: ClientId,
    pub views: i32,
    pub last_viewed_at: NaiveDateTime,
}

impl From<ClientMetric> for MetricResponse {
    fn from(metric: ClientMetric) -> Self {
        Self {
            client_id: metric.client_id,
            views: metric.views,
            last_viewed_at: metric.last_viewed_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: ClientId,
    pub name: String,
    pub salary: f64,
    pub company_value: f64,
    pub is_selected: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricResponse>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            salary: client.salary,
            company_value: client.company_value,
            is_selected: client.is_selected,
            created_at: client.created_at,
            updated_at: client.updated_at,
            metric: client.metric.map(MetricResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub last_page: usize,
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct PaginatedClientsResponse {
    pub data: Vec<ClientResponse>,
    pub meta: PageMeta,
}

impl From<ClientsPage> for PaginatedClientsResponse {
    fn from(page: ClientsPage) -> Self {
        Self {
            data: page.clients.into_iter().map(ClientResponse::from).collect(),
            meta: PageMeta {
                total: page.total,
                page: page.page,
                last_page: page.last_page,
                limit: page.limit,
            },
        }
    }
}
