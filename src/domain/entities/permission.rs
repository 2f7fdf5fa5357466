//! Permission groups and the route rules they grant.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Marker in `permission_group.rules` granting every route.
pub const WILDCARD: char = '*';

/// A rule id fragment must be plain ASCII digits.
static RULE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parsed form of the `permission_group.rules` column.
///
/// The column holds either a wildcard or a comma separated list of
/// `permission_rule` ids. It is parsed once when the group is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRules {
    /// Any route is allowed.
    Unrestricted,
    /// Only routes of the listed rules are allowed.
    RuleIds(BTreeSet<i64>),
}

impl GroupRules {
    /// Parses the raw column value.
    ///
    /// Any value containing `*` is [`GroupRules::Unrestricted`]. Otherwise each
    /// comma separated fragment must match `^[0-9]+$` and fit in an `i64`;
    /// fragments that don't are skipped with a warning. Empty fragments are
    /// ignored silently.
    pub fn parse(raw: &str) -> Self {
        if raw.contains(WILDCARD) {
            return GroupRules::Unrestricted;
        }

        let mut ids = BTreeSet::new();
        for fragment in raw.split(',') {
            if fragment.is_empty() {
                continue;
            }

            if !RULE_ID_REGEX.is_match(fragment) {
                tracing::warn!(fragment, rules = raw, "Skipping non-numeric permission rule id");
                continue;
            }

            match fragment.parse::<i64>() {
                Ok(id) => {
                    ids.insert(id);
                }
                Err(e) => {
                    tracing::warn!(fragment, error = %e, "Skipping out-of-range permission rule id");
                }
            }
        }

        GroupRules::RuleIds(ids)
    }

    /// Fragments [`GroupRules::parse`] would skip, in input order.
    ///
    /// Lets callers reject malformed input instead of silently dropping ids.
    pub fn invalid_fragments(raw: &str) -> Vec<&str> {
        if raw.contains(WILDCARD) {
            return Vec::new();
        }

        raw.split(',')
            .filter(|fragment| !fragment.is_empty())
            .filter(|fragment| {
                !RULE_ID_REGEX.is_match(fragment) || fragment.parse::<i64>().is_err()
            })
            .collect()
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, GroupRules::Unrestricted)
    }

    /// Serializes back into the column format.
    pub fn to_db(&self) -> String {
        match self {
            GroupRules::Unrestricted => WILDCARD.to_string(),
            GroupRules::RuleIds(ids) => ids
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// A named bundle of access rules assigned to employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGroup {
    pub id: i64,
    pub name: String,
    pub rules: GroupRules,
    pub is_active: bool,
}

/// Maps a rule id to one literal route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRule {
    pub id: i64,
    pub name: String,
    pub route: String,
    pub is_active: bool,
}
