//! Handlers for tenant plan and company listings.

use axum::extract::{Query, State, rejection::QueryRejection};

use crate::api::dto::envelope::{Envelope, PaginatedData};
use crate::api::dto::tenant::{CompanyItem, CompanyListParams, PlanItem, PlanListParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists subscription plans.
///
/// # Endpoint
///
/// `GET /tenants/plan/index`
///
/// # Query Parameters
///
/// - `name` (optional): Case-insensitive substring of the plan name
/// - `status` (optional): `active` or `inactive`
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 10, max: 1000)
///
/// # Response
///
/// ```json
/// {
///   "code": 200,
///   "msg": "Success",
///   "data": {
///     "total_records": 12, "total_pages": 2, "current_page": 1, "page_size": 10,
///     "lists": [{ "id": 1, "name": "Basic", "price": 9.9, "status": "active", "created_at": "..." }]
///   }
/// }
/// ```
pub async fn plan_index_handler(
    State(state): State<AppState>,
    params: Result<Query<PlanListParams>, QueryRejection>,
) -> Result<Envelope<PaginatedData<PlanItem>>, AppError> {
    let Query(params) = params?;
    let request = params.pagination.to_request()?;

    let page = state
        .tenant_service
        .list_plans(params.filter()?, request)
        .await?;

    Ok(Envelope::success(page.into()))
}

/// Lists tenant companies with their plan names.
///
/// # Endpoint
///
/// `GET /tenants/company/index`
///
/// # Query Parameters
///
/// - `name`, `email`, `address` (optional): Case-insensitive substrings
/// - `plan` (optional): Exact plan id
/// - `page`, `page_size` (optional): As for plans
pub async fn company_index_handler(
    State(state): State<AppState>,
    params: Result<Query<CompanyListParams>, QueryRejection>,
) -> Result<Envelope<PaginatedData<CompanyItem>>, AppError> {
    let Query(params) = params?;
    let request = params.pagination.to_request()?;

    let page = state
        .tenant_service
        .list_companies(params.filter(), request)
        .await?;

    Ok(Envelope::success(page.into()))
}
