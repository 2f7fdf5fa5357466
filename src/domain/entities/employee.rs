//! Employee identity resolved from an app token.

/// An authenticated caller.
///
/// Inserted into request extensions by the access gate so handlers can read
/// who is calling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub username: String,
}

/// Login material for an employee. Never leaves the application layer.
#[derive(Debug, Clone)]
pub struct EmployeeCredentials {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
}

/// Input data for creating a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub username: String,
    pub password_hash: String,
}
