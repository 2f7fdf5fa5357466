//! Generic SQL pagination.
//!
//! Two entry points share one contract, returning a [`Page`] whose rows are
//! ordered by `id` ascending:
//!
//! - [`paginate`] - structured filters against a [`Listable`] table
//! - [`paginate_sql`] - an arbitrary base query ([`SqlQuery`]) wrapped in a
//!   `COUNT(*)` subquery for the total and an ordered subquery for the rows
//!
//! User-supplied values are always bound as parameters, never spliced into SQL
//! text.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;

/// A bound query argument.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl SqlArg {
    fn bind_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            SqlArg::Int(v) => {
                qb.push_bind(*v);
            }
            SqlArg::Text(v) => {
                qb.push_bind(v.clone());
            }
            SqlArg::Bool(v) => {
                qb.push_bind(*v);
            }
        }
    }
}

impl From<i64> for SqlArg {
    fn from(v: i64) -> Self {
        SqlArg::Int(v)
    }
}

impl From<String> for SqlArg {
    fn from(v: String) -> Self {
        SqlArg::Text(v)
    }
}

impl From<&str> for SqlArg {
    fn from(v: &str) -> Self {
        SqlArg::Text(v.to_string())
    }
}

impl From<bool> for SqlArg {
    fn from(v: bool) -> Self {
        SqlArg::Bool(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SqlPart {
    Sql(String),
    Arg(SqlArg),
}

/// Raw base query text interleaved with bound arguments.
///
/// The query must expose an `id` column; pagination orders by it.
///
/// ```ignore
/// let mut query = SqlQuery::new("SELECT id, name FROM tenant_company WHERE 1 = 1");
/// query.push(" AND name ILIKE ").push_bind(like_pattern("acme"));
/// let page: Page<CompanyRow> = paginate_sql(&pool, &query, request).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlQuery {
    parts: Vec<SqlPart>,
}

impl SqlQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            parts: vec![SqlPart::Sql(sql.into())],
        }
    }

    /// Appends SQL text verbatim.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.parts.push(SqlPart::Sql(sql.to_string()));
        self
    }

    /// Appends a bound argument (rendered as `$n`).
    pub fn push_bind(&mut self, arg: impl Into<SqlArg>) -> &mut Self {
        self.parts.push(SqlPart::Arg(arg.into()));
        self
    }

    fn write_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        for part in &self.parts {
            match part {
                SqlPart::Sql(sql) => {
                    qb.push(sql);
                }
                SqlPart::Arg(arg) => arg.bind_to(qb),
            }
        }
    }
}

/// A table that can be listed by [`paginate`].
pub trait Listable: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Select list; must include `id`.
    const COLUMNS: &'static str;
}

/// A structured `WHERE` condition. Column names are compile-time identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq(&'static str, SqlArg),
    /// Case-insensitive substring match, `column ILIKE '%value%'`.
    ILike(&'static str, String),
}

impl Filter {
    fn write_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Filter::Eq(column, arg) => {
                qb.push(*column).push(" = ");
                arg.bind_to(qb);
            }
            Filter::ILike(column, needle) => {
                qb.push(*column).push(" ILIKE ");
                qb.push_bind(like_pattern(needle));
            }
        }
    }
}

/// Wraps `needle` for a substring `LIKE`/`ILIKE`, escaping `%`, `_` and `\`.
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn push_where(qb: &mut QueryBuilder<'static, Postgres>, filters: &[Filter]) {
    for (i, filter) in filters.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        filter.write_to(qb);
    }
}

fn push_page(qb: &mut QueryBuilder<'static, Postgres>, request: PageRequest) {
    qb.push(" ORDER BY id OFFSET ");
    qb.push_bind(request.offset());
    qb.push(" LIMIT ");
    qb.push_bind(request.limit());
}

fn count_query<T: Listable>(filters: &[Filter]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", T::TABLE));
    push_where(&mut qb, filters);
    qb
}

fn select_query<T: Listable>(
    filters: &[Filter],
    request: PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", T::COLUMNS, T::TABLE));
    push_where(&mut qb, filters);
    push_page(&mut qb, request);
    qb
}

fn count_sql_query(base: &SqlQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM (");
    base.write_to(&mut qb);
    qb.push(") AS count_subquery");
    qb
}

fn page_sql_query(base: &SqlQuery, request: PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM (");
    base.write_to(&mut qb);
    qb.push(") AS page_source");
    push_page(&mut qb, request);
    qb
}

/// Lists one page of `T` matching all `filters`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] on database errors.
pub async fn paginate<T: Listable>(
    pool: &PgPool,
    filters: &[Filter],
    request: PageRequest,
) -> Result<Page<T>, AppError> {
    let mut count = count_query::<T>(filters);
    let total_records: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut select = select_query::<T>(filters, request);
    let rows = select.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page::new(rows, total_records, request))
}

/// Lists one page of rows produced by a raw base query.
///
/// # Errors
///
/// Returns [`AppError::Internal`] on database errors.
pub async fn paginate_sql<T>(
    pool: &PgPool,
    base: &SqlQuery,
    request: PageRequest,
) -> Result<Page<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count = count_sql_query(base);
    let total_records: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut select = page_sql_query(base, request);
    let rows = select.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page::new(rows, total_records, request))
}
