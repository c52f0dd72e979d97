//! Seeds the database with a year of demo clients and view metrics.
//!
//! Five clients are created for each of the last twelve calendar months so
//! the dashboard and growth charts have something to show. Running the seeder
//! twice is a no-op: it backs off when demo rows already exist.

use std::env;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use config::Config;
use diesel::prelude::*;
use dotenvy::dotenv;
use rand::Rng;

use clientdesk::db::establish_connection_pool;
use clientdesk::domain::types::ClientId;
use clientdesk::models::client::NewClient as DbNewClient;
use clientdesk::models::config::ServerConfig;
use clientdesk::models::metric::NewClientMetric as DbNewClientMetric;
use clientdesk::schema::{client_metrics, clients};

const DEMO_NAME_PREFIX: &str = "Demo Client";
const MONTHS: u32 = 12;
const CLIENTS_PER_MONTH: u32 = 5;

struct SeedRow {
    id: String,
    name: String,
    salary: f64,
    company_value: f64,
    created_at: NaiveDateTime,
    views: i32,
}

fn month_start(today: NaiveDate, months_back: u32) -> NaiveDate {
    let mut year = today.year();
    let mut month = today.month() as i32 - months_back as i32;
    while month <= 0 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).expect("valid month start")
}

fn build_rows() -> Vec<SeedRow> {
    let mut rng = rand::rng();
    let today = Utc::now().date_naive();
    let mut rows = Vec::new();

    for month_offset in 0..MONTHS {
        let start = month_start(today, month_offset);

        for i in 0..CLIENTS_PER_MONTH {
            let day: u32 = rng.random_range(1..=28);
            let created_at = start
                .with_day(day)
                .expect("day within month")
                .and_hms_opt(12, 0, 0)
                .expect("valid time");

            rows.push(SeedRow {
                id: ClientId::new().to_string(),
                name: format!("{DEMO_NAME_PREFIX} {month_offset}-{i}"),
                salary: rng.random_range(2_000..17_000) as f64,
                company_value: rng.random_range(100_000..2_100_000) as f64,
                created_at,
                views: rng.random_range(0..200),
            });
        }
    }

    rows
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()
        .expect("Failed to load settings");

    let server_config = settings
        .try_deserialize::<ServerConfig>()
        .expect("Failed to load server config");

    let pool = establish_connection_pool(&server_config.database_url)
        .expect("Failed to establish database connection");
    let mut conn = pool.get().expect("Failed to get a pooled connection");

    let existing: i64 = clients::table
        .filter(clients::name.like(format!("{DEMO_NAME_PREFIX}%")))
        .count()
        .get_result(&mut conn)
        .expect("Failed to count demo clients");

    if existing > 0 {
        log::info!("Demo clients already present, skipping seed");
        return;
    }

    log::info!("Seeding {} demo clients", MONTHS * CLIENTS_PER_MONTH);

    let rows = build_rows();

    let client_rows: Vec<DbNewClient> = rows
        .iter()
        .map(|row| DbNewClient {
            id: &row.id,
            name: &row.name,
            salary: row.salary,
            company_value: row.company_value,
            is_selected: false,
            created_at: row.created_at,
            updated_at: row.created_at,
        })
        .collect();

    diesel::insert_into(clients::table)
        .values(&client_rows)
        .execute(&mut conn)
        .expect("Failed to insert demo clients");

    let metric_rows: Vec<DbNewClientMetric> = rows
        .iter()
        .map(|row| DbNewClientMetric {
            client_id: &row.id,
            views: row.views,
            last_viewed_at: row.created_at,
        })
        .collect();

    diesel::insert_into(client_metrics::table)
        .values(&metric_rows)
        .execute(&mut conn)
        .expect("Failed to insert demo metrics");

    log::info!("Seed complete");
}
