//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::metric::{ClientMetric, DashboardTotals, MonthlyGrowth, TopClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter, MetricReader, MetricWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(&self, id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client>;
        fn set_selection_for_all(&self, is_selected: bool) -> RepositoryResult<usize>;
        fn soft_delete_client(&self, id: ClientId) -> RepositoryResult<usize>;
    }

    impl MetricReader for Repository {
        fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals>;
        fn top_viewed_clients(&self, limit: i64) -> RepositoryResult<Vec<TopClient>>;
        fn monthly_growth(&self, months: i64) -> RepositoryResult<Vec<MonthlyGrowth>>;
    }

    impl MetricWriter for Repository {
        fn create_metric(
            &self,
            client_id: ClientId,
            initial_views: i32,
        ) -> RepositoryResult<ClientMetric>;
        fn increment_metric_views(&self, client_id: ClientId) -> RepositoryResult<usize>;
    }
}
