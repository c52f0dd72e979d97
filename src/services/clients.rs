//! Services coordinating client record workflows.

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter, MetricWriter};
use crate::services::metrics;
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

/// Listing parameters after boundary validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListClientsParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub selected: Option<bool>,
}

/// One page of clients together with its pagination metadata.
#[derive(Debug)]
pub struct ClientsPage {
    pub clients: Vec<Client>,
    pub total: usize,
    pub page: usize,
    pub last_page: usize,
    pub limit: usize,
}

/// Returns the requested page of live clients, newest first. Out-of-range
/// pages yield an empty page with correct metadata.
pub fn list_clients<R>(repo: &R, params: ListClientsParams) -> ServiceResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PER_PAGE).max(1);

    let mut query = ClientListQuery::new().paginate(page, limit);
    if let Some(selected) = params.selected {
        query = query.selected(selected);
    }

    let (total, clients) = repo.list_clients(query).map_err(ServiceError::from)?;

    Ok(ClientsPage {
        clients,
        total,
        page,
        last_page: total.div_ceil(limit),
        limit,
    })
}

/// Persists a new client and seeds its metric row with zero views. The metric
/// write is best-effort; the created client is returned regardless.
pub fn create_client<R>(repo: &R, new_client: NewClient) -> ServiceResult<Client>
where
    R: ClientWriter + MetricWriter + ?Sized,
{
    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to create client: {err}");
        ServiceError::from(err)
    })?;

    let _ = metrics::create_for_client(repo, client.id, 0);

    Ok(client)
}

/// Loads a client with its metric relation, counting the access as a view.
pub fn get_client_detail<R>(repo: &R, client_id: ClientId) -> ServiceResult<Client>
where
    R: ClientReader + MetricWriter + ?Sized,
{
    let _ = metrics::record_view(repo, client_id);

    repo.get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Applies a partial update to a client, last write winning per field, and
/// returns the updated entity with its metric relation.
pub fn update_client<R>(
    repo: &R,
    client_id: ClientId,
    updates: &UpdateClient,
) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if repo
        .get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.update_client(client_id, updates).map_err(|err| {
        log::error!("Failed to update client {client_id}: {err}");
        ServiceError::from(err)
    })?;

    repo.get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Soft-deletes a client. Reports `NotFound` when the id does not resolve to
/// a live record.
pub fn remove_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let affected = repo
        .soft_delete_client(client_id)
        .map_err(ServiceError::from)?;

    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    Ok(())
}

/// Flips every live client holding the opposite selection value to the
/// requested one, returning the affected-row count.
pub fn update_all_selections<R>(repo: &R, is_selected: bool) -> ServiceResult<usize>
where
    R: ClientWriter + ?Sized,
{
    repo.set_selection_for_all(is_selected)
        .map_err(ServiceError::from)
}
