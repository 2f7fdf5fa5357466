//! Activity flag shared by employees, permission records and tenants.

use std::fmt;

/// Text-encoded activity flag stored in `is_active` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        }
    }

    /// Reads a stored flag. Anything other than `active` counts as inactive.
    pub fn from_db(value: &str) -> Self {
        if value == "active" {
            ActiveStatus::Active
        } else {
            ActiveStatus::Inactive
        }
    }

    /// Parses a user-supplied filter value, `None` when unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(ActiveStatus::Active),
            "inactive" => Some(ActiveStatus::Inactive),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        self == ActiveStatus::Active
    }
}

impl fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_db() {
        assert_eq!(ActiveStatus::from_db("active"), ActiveStatus::Active);
        assert_eq!(ActiveStatus::from_db("inactive"), ActiveStatus::Inactive);
        assert_eq!(ActiveStatus::from_db("ACTIVE"), ActiveStatus::Inactive);
    }

    #[test]
    fn test_parse_filter_value() {
        assert_eq!(ActiveStatus::parse(" Active "), Some(ActiveStatus::Active));
        assert_eq!(ActiveStatus::parse("inactive"), Some(ActiveStatus::Inactive));
        assert_eq!(ActiveStatus::parse("deleted"), None);
    }
}
