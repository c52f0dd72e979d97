use crate::db::{DbConnection, DbPool};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::metric::{ClientMetric, DashboardTotals, MonthlyGrowth, TopClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
pub mod metric;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    /// Restrict to clients whose selection flag equals this value.
    pub selected: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    /// Loads a live client together with its metric relation.
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Lists live clients ordered by creation time, newest first. Returns the
    /// total matching count alongside the requested page.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client>;
    /// Assigns the selection flag to every live client currently holding the
    /// opposite value. Returns the number of rows touched.
    fn set_selection_for_all(&self, is_selected: bool) -> RepositoryResult<usize>;
    /// Marks a live client as deleted. Returns the number of rows touched.
    fn soft_delete_client(&self, id: ClientId) -> RepositoryResult<usize>;
}

pub trait MetricReader {
    fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals>;
    /// Metric rows with the highest view counts, joined to their live client.
    fn top_viewed_clients(&self, limit: i64) -> RepositoryResult<Vec<TopClient>>;
    /// Per-month creation buckets over live clients, newest month first.
    fn monthly_growth(&self, months: i64) -> RepositoryResult<Vec<MonthlyGrowth>>;
}

pub trait MetricWriter {
    fn create_metric(&self, client_id: ClientId, initial_views: i32)
    -> RepositoryResult<ClientMetric>;
    /// Bumps the view counter by one. Returns the number of rows touched;
    /// zero means no metric row exists yet.
    fn increment_metric_views(&self, client_id: ClientId) -> RepositoryResult<usize>;
}
