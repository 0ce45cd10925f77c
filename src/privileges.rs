use std::collections::HashSet;

use serde::Serialize;

use crate::error::ConfigError;

/// One human-presentable permission and the authorization scope backing it.
///
/// The scope is opaque here; the backend enforces it and the UI matches it
/// against the scopes granted to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrivilegeEntry {
    pub privilege: &'static str,
    pub scope: &'static str,
}

impl PrivilegeEntry {
    pub const fn new(privilege: &'static str, scope: &'static str) -> Self {
        Self { privilege, scope }
    }
}

/// Privileges shown in user management, in display order
pub static USER_PRIVILEGES: &[PrivilegeEntry] = &[
    PrivilegeEntry::new("View subject requests", "privacy-request:read"),
    PrivilegeEntry::new("Approve subject requests", "privacy-request:review"),
    PrivilegeEntry::new("Resume subject requests", "privacy-request:resume"),
    PrivilegeEntry::new("View datastore connections", "connection:read"),
    PrivilegeEntry::new(
        "Create or Update datastore connections",
        "connection:create_or_update",
    ),
    PrivilegeEntry::new(
        "Instantiate connections to SaaS datastores",
        "connection:instantiate",
    ),
    PrivilegeEntry::new("Read connection types", "connection_type:read"),
    PrivilegeEntry::new("Delete datastore connections", "connection:delete"),
    PrivilegeEntry::new("View user consent preferences", "consent:read"),
    PrivilegeEntry::new("View Datasets", "dataset:read"),
    PrivilegeEntry::new("Create or Update Datasets", "dataset:create_or_update"),
    PrivilegeEntry::new("Delete Datasets", "dataset:delete"),
    PrivilegeEntry::new("View policies", "policy:read"),
    PrivilegeEntry::new("Create policies", "policy:create_or_update"),
    PrivilegeEntry::new("View users", "user:read"),
    PrivilegeEntry::new("Create users", "user:create"),
    PrivilegeEntry::new("Create roles", "user-permission:create"),
    PrivilegeEntry::new("View roles", "user-permission:read"),
    PrivilegeEntry::new("Upload privacy request data", "privacy-request:upload_data"),
    PrivilegeEntry::new("View privacy request data", "privacy-request:view_data"),
    PrivilegeEntry::new("Create manual webhooks", "webhook:create_or_update"),
    PrivilegeEntry::new("Read manual webhooks", "webhook:read"),
    PrivilegeEntry::new("Delete manual webhooks", "webhook:delete"),
];

/// Find the catalog entry for a scope string
pub fn find_by_scope(scope: &str) -> Option<&'static PrivilegeEntry> {
    USER_PRIVILEGES.iter().find(|entry| entry.scope == scope)
}

/// Catalog entries whose scope has been granted, in catalog order.
///
/// Granted scopes with no catalog entry are ignored.
pub fn privileges_for_scopes<'a, I>(granted: I) -> Vec<&'static PrivilegeEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let granted: HashSet<&str> = granted.into_iter().collect();
    USER_PRIVILEGES
        .iter()
        .filter(|entry| granted.contains(entry.scope))
        .collect()
}

fn is_scope_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_lowercase() || c == '-' || c == '_')
        }
        _ => false,
    }
}

fn is_well_formed_scope(scope: &str) -> bool {
    match scope.split_once(':') {
        Some((resource, action)) => is_scope_token(resource) && is_scope_token(action),
        None => false,
    }
}

/// Check labels are non-empty, scopes look like `resource:action`, and
/// neither labels nor scopes repeat. Stops at the first violation.
pub fn validate_catalog(entries: &[PrivilegeEntry]) -> Result<(), ConfigError> {
    let mut scopes = HashSet::with_capacity(entries.len());
    let mut labels = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.privilege.trim().is_empty() {
            return Err(ConfigError::EmptyPrivilegeLabel {
                index,
                scope: entry.scope.to_string(),
            });
        }

        if !is_well_formed_scope(entry.scope) {
            return Err(ConfigError::MalformedScope {
                privilege: entry.privilege.to_string(),
                scope: entry.scope.to_string(),
            });
        }

        if !scopes.insert(entry.scope) {
            return Err(ConfigError::DuplicateScope(entry.scope.to_string()));
        }

        if !labels.insert(entry.privilege) {
            return Err(ConfigError::DuplicatePrivilege(entry.privilege.to_string()));
        }
    }

    tracing::debug!("Privilege catalog validated: {} entries", entries.len());
    Ok(())
}
