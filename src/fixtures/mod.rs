//! Hand-authored sample data standing in for a real backend.

use chrono::{DateTime, NaiveDate, Utc};

pub mod customers;
pub mod dashboard;
pub mod generator;
pub mod projects;
pub mod users;

pub use customers::fixture_customers;
pub use dashboard::fixture_dashboard_stats;
pub use generator::MockCustomerGenerator;
pub use projects::fixture_projects;
pub use users::{DEMO_PASSWORD, DEMO_USERNAME, FixtureUser, fixture_users};

/// Number of synthetic customers appended to `GET /customers`.
pub const GENERATED_CUSTOMER_COUNT: usize = 20;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
