//! PostgreSQL implementation of tenant repository.
//!
//! Plans are listed with the structured [`paginate`] variant, companies with
//! the raw [`paginate_sql`] variant because the listing joins the plan name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::pagination::{Filter, Listable, SqlArg, SqlQuery, like_pattern, paginate, paginate_sql};
use crate::domain::entities::{ActiveStatus, Company, CompanyFilter, Plan, PlanFilter};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TenantRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PlanRow {
    id: i64,
    name: String,
    price: f64,
    is_active: String,
    created_at: DateTime<Utc>,
}

impl Listable for PlanRow {
    const TABLE: &'static str = "tenant_plan";
    const COLUMNS: &'static str = "id, name, price, is_active, created_at";
}

impl From<PlanRow> for Plan {
    fn from(row: PlanRow) -> Self {
        Plan {
            id: row.id,
            name: row.name,
            price: row.price,
            status: ActiveStatus::from_db(&row.is_active),
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    email: Option<String>,
    address: Option<String>,
    plan_id: Option<i64>,
    plan_name: Option<String>,
    is_active: String,
    created_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            email: row.email,
            address: row.address,
            plan_id: row.plan_id,
            plan_name: row.plan_name,
            status: ActiveStatus::from_db(&row.is_active),
            created_at: row.created_at,
        }
    }
}

const COMPANY_BASE_SQL: &str = r#"
    SELECT c.id, c.name, c.email, c.address, c.plan_id, p.name AS plan_name,
           c.is_active, c.created_at
    FROM tenant_company c
    LEFT JOIN tenant_plan p ON p.id = c.plan_id
    WHERE 1 = 1"#;

fn plan_filters(filter: &PlanFilter) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(name) = &filter.name {
        filters.push(Filter::ILike("name", name.clone()));
    }
    if let Some(status) = filter.status {
        filters.push(Filter::Eq("is_active", SqlArg::from(status.as_str())));
    }
    filters
}

fn company_query(filter: &CompanyFilter) -> SqlQuery {
    let mut query = SqlQuery::new(COMPANY_BASE_SQL);
    if let Some(name) = &filter.name {
        query.push(" AND c.name ILIKE ").push_bind(like_pattern(name));
    }
    if let Some(email) = &filter.email {
        query.push(" AND c.email ILIKE ").push_bind(like_pattern(email));
    }
    if let Some(address) = &filter.address {
        query.push(" AND c.address ILIKE ").push_bind(like_pattern(address));
    }
    if let Some(plan_id) = filter.plan_id {
        query.push(" AND c.plan_id = ").push_bind(plan_id);
    }
    query
}

/// PostgreSQL repository for tenant listings.
pub struct PgTenantRepository {
    pool: Arc<PgPool>,
}

impl PgTenantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn list_plans(
        &self,
        filter: &PlanFilter,
        request: PageRequest,
    ) -> Result<Page<Plan>, AppError> {
        let page = paginate::<PlanRow>(self.pool.as_ref(), &plan_filters(filter), request).await?;
        Ok(page.map(Plan::from))
    }

    async fn list_companies(
        &self,
        filter: &CompanyFilter,
        request: PageRequest,
    ) -> Result<Page<Company>, AppError> {
        let page =
            paginate_sql::<CompanyRow>(self.pool.as_ref(), &company_query(filter), request).await?;
        Ok(page.map(Company::from))
    }
}
