//! Services maintaining per-client view metrics and dashboard reads.

use crate::domain::metric::{DashboardData, MonthlyGrowth};
use crate::domain::types::ClientId;
use crate::repository::{MetricReader, MetricWriter};
use crate::services::{ServiceError, ServiceResult};

/// Number of clients surfaced in the dashboard's most-viewed list.
const TOP_VIEWED_LIMIT: i64 = 5;
/// Number of calendar months covered by the growth series.
const GROWTH_MONTHS: i64 = 12;

/// Best-effort creation of the metric row for a client.
///
/// Failures are logged and swallowed so the caller's primary operation never
/// depends on it; a missing row self-heals on the next view. Returns whether
/// the row was written.
pub fn create_for_client<R>(repo: &R, client_id: ClientId, initial_views: i32) -> bool
where
    R: MetricWriter + ?Sized,
{
    match repo.create_metric(client_id, initial_views) {
        Ok(_) => true,
        Err(err) => {
            log::error!("Failed to create metric for client {client_id}: {err}");
            false
        }
    }
}

/// Best-effort view bump for a client.
///
/// Increments the counter in place; when no metric row exists yet, falls back
/// to creating one with a single view. Failures are logged and swallowed so
/// views-counting never blocks the read path. Returns whether a row was
/// written.
pub fn record_view<R>(repo: &R, client_id: ClientId) -> bool
where
    R: MetricWriter + ?Sized,
{
    match repo.increment_metric_views(client_id) {
        Ok(0) => create_for_client(repo, client_id, 1),
        Ok(_) => true,
        Err(err) => {
            log::error!("Failed to increment views for client {client_id}: {err}");
            false
        }
    }
}

/// Computes the dashboard summary over all live clients.
pub fn dashboard_data<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: MetricReader + ?Sized,
{
    let totals = repo.dashboard_totals().map_err(ServiceError::from)?;
    let top_viewed_clients = repo
        .top_viewed_clients(TOP_VIEWED_LIMIT)
        .map_err(ServiceError::from)?;

    Ok(DashboardData {
        total_clients: totals.total_clients,
        total_company_value: totals.total_company_value,
        average_salary: totals.average_salary,
        top_viewed_clients,
    })
}

/// Returns the month-bucketed growth series, newest month first.
pub fn growth_metrics<R>(repo: &R) -> ServiceResult<Vec<MonthlyGrowth>>
where
    R: MetricReader + ?Sized,
{
    repo.monthly_growth(GROWTH_MONTHS).map_err(ServiceError::from)
}
