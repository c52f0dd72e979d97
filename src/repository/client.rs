//! Repository implementation for client records.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::metric::ClientMetric;
use crate::domain::types::ClientId;
use crate::models::client::{
    Client as DbClient, NewClient as DbNewClient, UpdateClientChangeset,
};
use crate::models::metric::ClientMetric as DbClientMetric;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter, DieselRepository};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::{client_metrics, clients};

        let mut conn = self.conn()?;
        let row = clients::table
            .left_join(client_metrics::table)
            .filter(clients::id.eq(id.to_string()))
            .filter(clients::deleted_at.is_null())
            .select((
                clients::all_columns,
                client_metrics::all_columns.nullable(),
            ))
            .first::<(DbClient, Option<DbClientMetric>)>(&mut conn)
            .optional()?;

        match row {
            Some((db_client, db_metric)) => {
                let mut client = Client::try_from(db_client).map_err(RepositoryError::from)?;
                client.metric = db_metric
                    .map(ClientMetric::try_from)
                    .transpose()
                    .map_err(RepositoryError::from)?;
                Ok(Some(client))
            }
            None => Ok(None),
        }
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let total: i64 = match query.selected {
            Some(selected) => clients::table
                .filter(clients::deleted_at.is_null())
                .filter(clients::is_selected.eq(selected))
                .count()
                .get_result(&mut conn)?,
            None => clients::table
                .filter(clients::deleted_at.is_null())
                .count()
                .get_result(&mut conn)?,
        };

        let mut items_query = clients::table
            .filter(clients::deleted_at.is_null())
            .order(clients::created_at.desc())
            .into_boxed();

        if let Some(selected) = query.selected {
            items_query = items_query.filter(clients::is_selected.eq(selected));
        }

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items_query = items_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = items_query
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(|db_client| Client::try_from(db_client).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<Client>>>()?;

        Ok((total as usize, items))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let id = ClientId::new().to_string();
        let now = Utc::now().naive_utc();
        let insertable = DbNewClient {
            id: &id,
            name: new_client.name.as_str(),
            salary: new_client.salary.get(),
            company_value: new_client.company_value.get(),
            is_selected: new_client.is_selected,
            created_at: now,
            updated_at: now,
        };

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(created).map_err(RepositoryError::from)
    }

    fn update_client(&self, id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let changeset = UpdateClientChangeset::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(
            clients::table
                .filter(clients::id.eq(id.to_string()))
                .filter(clients::deleted_at.is_null()),
        )
        .set(&changeset)
        .get_result::<DbClient>(&mut conn)?;

        Client::try_from(updated).map_err(RepositoryError::from)
    }

    fn set_selection_for_all(&self, is_selected: bool) -> RepositoryResult<usize> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        // Only the complement set is touched, so converged rows keep their
        // updated_at timestamp.
        let affected = diesel::update(
            clients::table
                .filter(clients::is_selected.eq(!is_selected))
                .filter(clients::deleted_at.is_null()),
        )
        .set((
            clients::is_selected.eq(is_selected),
            clients::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn soft_delete_client(&self, id: ClientId) -> RepositoryResult<usize> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            clients::table
                .filter(clients::id.eq(id.to_string()))
                .filter(clients::deleted_at.is_null()),
        )
        .set(clients::deleted_at.eq(Utc::now().naive_utc()))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
