use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, UpdateClient as DomainUpdateClient};
use crate::domain::types::{ClientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub company_value: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub is_selected: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub salary: f64,
    pub company_value: f64,
    pub is_selected: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when patching a [`Client`] record. `None` fields are skipped.
pub struct UpdateClientChangeset<'a> {
    pub name: Option<&'a str>,
    pub salary: Option<f64>,
    pub company_value: Option<f64>,
    pub is_selected: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl<'a> UpdateClientChangeset<'a> {
    pub fn new(updates: &'a DomainUpdateClient, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_ref().map(|name| name.as_str()),
            salary: updates.salary.map(|amount| amount.get()),
            company_value: updates.company_value.map(|amount| amount.get()),
            is_selected: updates.is_selected,
            updated_at,
        }
    }
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: client.id.parse::<ClientId>()?,
            name: client.name,
            salary: client.salary,
            company_value: client.company_value,
            is_selected: client.is_selected,
            created_at: client.created_at,
            updated_at: client.updated_at,
            metric: None,
        })
    }
}
