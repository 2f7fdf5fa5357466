mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tenant_admin::domain::entities::{ActiveStatus, CompanyFilter, PlanFilter};
use tenant_admin::domain::pagination::PageRequest;
use tenant_admin::domain::repositories::TenantRepository;
use tenant_admin::infrastructure::persistence::PgTenantRepository;

async fn seed_plans(pool: &PgPool, count: usize) {
    for i in 1..=count {
        let status = if i % 5 == 0 { "inactive" } else { "active" };
        common::create_plan(pool, &format!("Plan {i:03}"), i as f64, status).await;
    }
}

#[sqlx::test]
async fn test_plan_pages_over_95_rows(pool: PgPool) {
    seed_plans(&pool, 95).await;
    let repo = PgTenantRepository::new(Arc::new(pool));

    let first = repo
        .list_plans(&PlanFilter::default(), PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.total_records, 95);
    assert_eq!(first.total_pages, 10);
    assert!(first.rows.windows(2).all(|w| w[0].id < w[1].id));

    let last = repo
        .list_plans(&PlanFilter::default(), PageRequest::new(10, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(last.rows.len(), 5);
    assert_eq!(last.rows[4].name, "Plan 095");
}

#[sqlx::test]
async fn test_plan_filters(pool: PgPool) {
    seed_plans(&pool, 20).await;
    let repo = PgTenantRepository::new(Arc::new(pool));

    let inactive = repo
        .list_plans(
            &PlanFilter {
                name: None,
                status: Some(ActiveStatus::Inactive),
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(inactive.total_records, 4);

    let by_name = repo
        .list_plans(
            &PlanFilter {
                name: Some("plan 01".to_string()),
                status: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_name.total_records, 10);
}

#[sqlx::test]
async fn test_like_wildcards_are_literal(pool: PgPool) {
    common::create_plan(&pool, "50% off", 1.0, "active").await;
    common::create_plan(&pool, "500 seats", 2.0, "active").await;
    let repo = PgTenantRepository::new(Arc::new(pool));

    let page = repo
        .list_plans(
            &PlanFilter {
                name: Some("50%".to_string()),
                status: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();

    assert_eq!(page.total_records, 1);
    assert_eq!(page.rows[0].name, "50% off");
}

#[sqlx::test]
async fn test_company_listing_joins_plan_name(pool: PgPool) {
    let gold = common::create_plan(&pool, "Gold", 99.0, "active").await;
    for i in 1..=12 {
        let plan = (i % 2 == 0).then_some(gold);
        common::create_company(&pool, &format!("Company {i}"), &format!("c{i}@acme.io"), plan)
            .await;
    }
    let repo = PgTenantRepository::new(Arc::new(pool));

    let all = repo
        .list_companies(&CompanyFilter::default(), PageRequest::new(2, 5).unwrap())
        .await
        .unwrap();
    assert_eq!(all.total_records, 12);
    assert_eq!(all.total_pages, 3);
    assert_eq!(all.rows.len(), 5);

    let on_gold = repo
        .list_companies(
            &CompanyFilter {
                plan_id: Some(gold),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(on_gold.total_records, 6);
    assert!(on_gold.rows.iter().all(|c| c.plan_name.as_deref() == Some("Gold")));

    let by_email = repo
        .list_companies(
            &CompanyFilter {
                email: Some("C1".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    // c1, c10, c11, c12
    assert_eq!(by_email.total_records, 4);
}
