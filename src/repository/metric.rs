//! Repository implementation for client view metrics and dashboard reads.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::metric::{ClientMetric, DashboardTotals, MonthlyGrowth, TopClient};
use crate::domain::types::ClientId;
use crate::models::metric::{
    ClientMetric as DbClientMetric, MonthlyGrowthRow, NewClientMetric as DbNewClientMetric,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MetricReader, MetricWriter};

impl MetricWriter for DieselRepository {
    fn create_metric(
        &self,
        client_id: ClientId,
        initial_views: i32,
    ) -> RepositoryResult<ClientMetric> {
        use crate::schema::client_metrics;

        let mut conn = self.conn()?;

        let id = client_id.to_string();
        let insertable = DbNewClientMetric {
            client_id: &id,
            views: initial_views,
            last_viewed_at: Utc::now().naive_utc(),
        };

        let created = diesel::insert_into(client_metrics::table)
            .values(&insertable)
            .get_result::<DbClientMetric>(&mut conn)?;

        ClientMetric::try_from(created).map_err(RepositoryError::from)
    }

    fn increment_metric_views(&self, client_id: ClientId) -> RepositoryResult<usize> {
        use crate::schema::client_metrics;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            client_metrics::table.filter(client_metrics::client_id.eq(client_id.to_string())),
        )
        .set((
            client_metrics::views.eq(client_metrics::views + 1),
            client_metrics::last_viewed_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }
}

impl MetricReader for DieselRepository {
    fn dashboard_totals(&self) -> RepositoryResult<DashboardTotals> {
        use crate::schema::clients;
        use diesel::dsl::{avg, count_star, sum};

        let mut conn = self.conn()?;

        let (total_clients, total_company_value, average_salary) = clients::table
            .filter(clients::deleted_at.is_null())
            .select((
                count_star(),
                sum(clients::company_value),
                avg(clients::salary),
            ))
            .get_result::<(i64, Option<f64>, Option<f64>)>(&mut conn)?;

        Ok(DashboardTotals {
            total_clients,
            total_company_value: total_company_value.unwrap_or(0.0),
            average_salary: average_salary.unwrap_or(0.0),
        })
    }

    fn top_viewed_clients(&self, limit: i64) -> RepositoryResult<Vec<TopClient>> {
        use crate::schema::{client_metrics, clients};

        let mut conn = self.conn()?;

        // Inner join drops metrics whose client is gone or soft-deleted.
        let rows = client_metrics::table
            .inner_join(clients::table)
            .filter(clients::deleted_at.is_null())
            .order(client_metrics::views.desc())
            .limit(limit)
            .select((
                clients::id,
                clients::name,
                client_metrics::views,
                clients::company_value,
                clients::created_at,
                clients::updated_at,
            ))
            .load::<(String, String, i32, f64, NaiveDateTime, NaiveDateTime)>(&mut conn)?;

        rows.into_iter()
            .map(|(id, name, views, company_value, created_at, updated_at)| {
                let id = id.parse::<ClientId>().map_err(RepositoryError::from)?;
                Ok(TopClient {
                    id,
                    name,
                    views,
                    company_value,
                    created_at,
                    updated_at,
                })
            })
            .collect()
    }

    fn monthly_growth(&self, months: i64) -> RepositoryResult<Vec<MonthlyGrowth>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(
            "SELECT strftime('%Y-%m', created_at) AS month, \
                    COUNT(*) AS count, \
                    SUM(\"companyValue\") AS total_company_value \
             FROM clients \
             WHERE deleted_at IS NULL \
             GROUP BY month \
             ORDER BY month DESC \
             LIMIT ?",
        )
        .bind::<diesel::sql_types::BigInt, _>(months)
        .load::<MonthlyGrowthRow>(&mut conn)?;

        Ok(rows.into_iter().map(MonthlyGrowth::from).collect())
    }
}
