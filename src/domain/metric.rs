use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// View-tracking record attached one-to-one to a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientMetric {
    pub client_id: ClientId,
    pub views: i32,
    pub last_viewed_at: NaiveDateTime,
}

/// Aggregate figures computed over all live clients.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardTotals {
    pub total_clients: i64,
    pub total_company_value: f64,
    pub average_salary: f64,
}

/// A most-viewed client as surfaced on the dashboard.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TopClient {
    pub id: ClientId,
    pub name: String,
    pub views: i32,
    pub company_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full dashboard payload: totals plus the most-viewed clients.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub total_clients: i64,
    pub total_company_value: f64,
    pub average_salary: f64,
    pub top_viewed_clients: Vec<TopClient>,
}

/// One calendar-month bucket of the client growth series.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MonthlyGrowth {
    /// Calendar month in `YYYY-MM` format.
    pub month: String,
    pub count: i64,
    pub total_company_value: f64,
}
