//! Tenant plan and company listings.

use std::sync::Arc;

use crate::domain::entities::{Company, CompanyFilter, Plan, PlanFilter};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TenantRepository;
use crate::error::AppError;

pub struct TenantService<R: TenantRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TenantRepository + ?Sized> TenantService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of plans ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_plans(
        &self,
        filter: PlanFilter,
        request: PageRequest,
    ) -> Result<Page<Plan>, AppError> {
        self.repository.list_plans(&filter, request).await
    }

    /// Lists one page of companies ordered by id, with their plan names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_companies(
        &self,
        filter: CompanyFilter,
        request: PageRequest,
    ) -> Result<Page<Company>, AppError> {
        self.repository.list_companies(&filter, request).await
    }
}
