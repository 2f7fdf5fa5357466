//! Repository trait for tenant plans and companies.

use crate::domain::entities::{Company, CompanyFilter, Plan, PlanFilter};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Paginated read access to `tenant_plan` and `tenant_company`.
///
/// Results are ordered by id ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_plans(
        &self,
        filter: &PlanFilter,
        request: PageRequest,
    ) -> Result<Page<Plan>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_companies(
        &self,
        filter: &CompanyFilter,
        request: PageRequest,
    ) -> Result<Page<Company>, AppError>;
}
