#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tenant_admin::state::AppState;

pub const TEST_PASSWORD: &str = "correct-horse";

/// Inserts an employee with `TEST_PASSWORD` and returns its id.
pub async fn create_employee(pool: &PgPool, username: &str, token: Option<&str>) -> i64 {
    let hash = bcrypt::hash(TEST_PASSWORD, 4).unwrap();
    sqlx::query_scalar(
        "INSERT INTO hr_employee (name, username, password, app_token) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username.to_uppercase())
    .bind(username)
    .bind(hash)
    .bind(token)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_rule(pool: &PgPool, route: &str, is_active: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO permission_rule (name, route, is_active) VALUES ($1, $1, $2) RETURNING id",
    )
    .bind(route)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_group(pool: &PgPool, name: &str, rules: &str, is_active: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO permission_group (name, rules, is_active) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(rules)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn assign(pool: &PgPool, employee_id: i64, group_id: i64) {
    sqlx::query("INSERT INTO permission_group_access (uid, group_id) VALUES ($1, $2)")
        .bind(employee_id)
        .bind(group_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_plan(pool: &PgPool, name: &str, price: f64, is_active: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tenant_plan (name, price, is_active) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_company(pool: &PgPool, name: &str, email: &str, plan_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tenant_company (name, email, address, plan_id) VALUES ($1, $2, 'Phnom Penh', $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(plan_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), vec!["/auths/login".to_string()])
}
