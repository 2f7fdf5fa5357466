//! Tenant plans and companies.

use chrono::{DateTime, Utc};

use super::ActiveStatus;

/// A subscription plan companies can be placed on.
#[derive(Debug, Clone)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub status: ActiveStatus,
    pub created_at: DateTime<Utc>,
}

/// A tenant company.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub plan_id: Option<i64>,
    pub plan_name: Option<String>,
    pub status: ActiveStatus,
    pub created_at: DateTime<Utc>,
}

/// Filters for the plan listing. `None` fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFilter {
    /// Case-insensitive substring match on the plan name.
    pub name: Option<String>,
    pub status: Option<ActiveStatus>,
}

/// Filters for the company listing. Text fields are case-insensitive
/// substring matches, `plan_id` is exact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub plan_id: Option<i64>,
}
