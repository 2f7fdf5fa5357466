//! DTOs for tenant plan and company listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};

use super::pagination::PaginationParams;
use crate::domain::entities::{ActiveStatus, Company, CompanyFilter, Plan, PlanFilter};
use crate::error::AppError;

/// Query of `GET /tenants/plan/index`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PlanListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,

    /// `active` or `inactive`.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl PlanListParams {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown `status`.
    pub fn filter(&self) -> Result<PlanFilter, AppError> {
        let status = match self.status.as_deref() {
            None => None,
            Some(raw) => Some(ActiveStatus::parse(raw).ok_or_else(|| {
                AppError::bad_request(
                    "Status must be 'active' or 'inactive'",
                    json!({"status": raw}),
                )
            })?),
        };

        Ok(PlanFilter {
            name: self.name.clone(),
            status,
        })
    }
}

/// Query of `GET /tenants/company/index`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CompanyListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub email: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub address: Option<String>,

    /// Exact plan id.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub plan: Option<i64>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl CompanyListParams {
    pub fn filter(&self) -> CompanyFilter {
        CompanyFilter {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            plan_id: self.plan,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Plan> for PlanItem {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            price: plan.price,
            status: plan.status.to_string(),
            created_at: plan.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyItem {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub plan_id: Option<i64>,
    pub plan_name: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyItem {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            address: company.address,
            plan_id: company.plan_id,
            plan_name: company.plan_name,
            status: company.status.to_string(),
            created_at: company.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_filter_status() {
        let params = PlanListParams {
            status: Some("Inactive".to_string()),
            ..Default::default()
        };
        assert_eq!(params.filter().unwrap().status, Some(ActiveStatus::Inactive));

        let params = PlanListParams {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.filter(), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_company_filter() {
        let params = CompanyListParams {
            name: Some("acme".to_string()),
            plan: Some(2),
            ..Default::default()
        };

        assert_eq!(
            params.filter(),
            CompanyFilter {
                name: Some("acme".to_string()),
                email: None,
                address: None,
                plan_id: Some(2),
            }
        );
    }
}
