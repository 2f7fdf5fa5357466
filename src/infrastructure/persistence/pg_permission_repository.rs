//! PostgreSQL implementation of permission repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ActiveStatus, GroupRules, PermissionGroup, PermissionRule};
use crate::domain::repositories::PermissionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct GroupRow {
    id: i64,
    name: String,
    rules: String,
    is_active: String,
}

impl From<GroupRow> for PermissionGroup {
    fn from(row: GroupRow) -> Self {
        PermissionGroup {
            id: row.id,
            name: row.name,
            rules: GroupRules::parse(&row.rules),
            is_active: ActiveStatus::from_db(&row.is_active).is_active(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct RuleRow {
    id: i64,
    name: String,
    route: String,
    is_active: String,
}

impl From<RuleRow> for PermissionRule {
    fn from(row: RuleRow) -> Self {
        PermissionRule {
            id: row.id,
            name: row.name,
            route: row.route,
            is_active: ActiveStatus::from_db(&row.is_active).is_active(),
        }
    }
}

/// PostgreSQL repository for permission groups, memberships and rules.
///
/// The `rules` column is parsed into [`GroupRules`] as rows are loaded.
pub struct PgPermissionRepository {
    pool: Arc<PgPool>,
}

impl PgPermissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionRepository for PgPermissionRepository {
    async fn active_groups_for(
        &self,
        employee_id: i64,
    ) -> Result<Vec<PermissionGroup>, AppError> {
        let rows = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT pg.id, pg.name, pg.rules, pg.is_active
            FROM permission_group_access pga
            JOIN permission_group pg ON pga.group_id = pg.id
            WHERE pga.uid = $1
              AND pg.is_active = 'active'
            ORDER BY pg.id
            "#,
        )
        .bind(employee_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PermissionGroup::from).collect())
    }

    async fn find_rules(&self, rule_ids: &[i64]) -> Result<Vec<PermissionRule>, AppError> {
        if rule_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, RuleRow>(
            r#"
            SELECT id, name, route, is_active
            FROM permission_rule
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(rule_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PermissionRule::from).collect())
    }

    async fn create_rule(&self, name: &str, route: &str) -> Result<PermissionRule, AppError> {
        let row = sqlx::query_as::<_, RuleRow>(
            r#"
            INSERT INTO permission_rule (name, route)
            VALUES ($1, $2)
            RETURNING id, name, route, is_active
            "#,
        )
        .bind(name)
        .bind(route)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn create_group(
        &self,
        name: &str,
        rules: &GroupRules,
    ) -> Result<PermissionGroup, AppError> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            INSERT INTO permission_group (name, rules)
            VALUES ($1, $2)
            RETURNING id, name, rules, is_active
            "#,
        )
        .bind(name)
        .bind(rules.to_db())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn assign_group(&self, employee_id: i64, group_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO permission_group_access (uid, group_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(employee_id)
        .bind(group_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
