use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text};

use crate::domain::metric::{ClientMetric as DomainClientMetric, MonthlyGrowth};
use crate::domain::types::{ClientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::client_metrics)]
#[diesel(primary_key(client_id))]
/// Diesel model for [`crate::domain::metric::ClientMetric`].
pub struct ClientMetric {
    pub client_id: String,
    pub views: i32,
    pub last_viewed_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_metrics)]
/// Insertable form of [`ClientMetric`].
pub struct NewClientMetric<'a> {
    pub client_id: &'a str,
    pub views: i32,
    pub last_viewed_at: NaiveDateTime,
}

/// Row shape returned by the raw monthly-growth aggregation query.
#[derive(QueryableByName)]
pub struct MonthlyGrowthRow {
    #[diesel(sql_type = Text)]
    pub month: String,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
    #[diesel(sql_type = Double)]
    pub total_company_value: f64,
}

impl TryFrom<ClientMetric> for DomainClientMetric {
    type Error = TypeConstraintError;

    fn try_from(metric: ClientMetric) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: metric.client_id.parse::<ClientId>()?,
            views: metric.views,
            last_viewed_at: metric.last_viewed_at,
        })
    }
}

impl From<MonthlyGrowthRow> for MonthlyGrowth {
    fn from(row: MonthlyGrowthRow) -> Self {
        Self {
            month: row.month,
            count: row.count,
            total_company_value: row.total_company_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn metric_row_into_domain() {
        let id = ClientId::new();
        let now = Utc::now().naive_utc();
        let row = ClientMetric {
            client_id: id.to_string(),
            views: 7,
            last_viewed_at: now,
        };

        let domain = DomainClientMetric::try_from(row).expect("valid row");
        assert_eq!(domain.client_id, id);
        assert_eq!(domain.views, 7);
        assert_eq!(domain.last_viewed_at, now);
    }

    #[test]
    fn growth_row_into_domain() {
        let row = MonthlyGrowthRow {
            month: "2026-07".to_string(),
            count: 5,
            total_company_value: 10_000.0,
        };

        let growth = MonthlyGrowth::from(row);
        assert_eq!(growth.month, "2026-07");
        assert_eq!(growth.count, 5);
        assert_eq!(growth.total_company_value, 10_000.0);
    }
}
