use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::metric::ClientMetric;
use crate::domain::types::{ClientId, ClientName, NonNegativeAmount};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub salary: f64,
    pub company_value: f64,
    pub is_selected: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// View metric, present when the relation was loaded.
    pub metric: Option<ClientMetric>,
}

#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: ClientName,
    pub salary: NonNegativeAmount,
    pub company_value: NonNegativeAmount,
    pub is_selected: bool,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        salary: NonNegativeAmount,
        company_value: NonNegativeAmount,
        is_selected: bool,
    ) -> Self {
        Self {
            name,
            salary,
            company_value,
            is_selected,
        }
    }
}

/// Partial update applied to a client. Fields left as `None` keep their
/// current value.
#[derive(Clone, Debug, Default)]
pub struct UpdateClient {
    pub name: Option<ClientName>,
    pub salary: Option<NonNegativeAmount>,
    pub company_value: Option<NonNegativeAmount>,
    pub is_selected: Option<bool>,
}
