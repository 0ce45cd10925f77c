use thiserror::Error;

/// Errors raised while validating the privilege catalog or resolving routes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Entry at the given catalog position has an empty label
    #[error("privilege at position {index} has an empty label (scope '{scope}')")]
    EmptyPrivilegeLabel { index: usize, scope: String },

    /// Scope is not of the form `resource:action`
    #[error("privilege '{privilege}' has malformed scope '{scope}': expected 'resource:action'")]
    MalformedScope { privilege: String, scope: String },

    /// Scope already used by an earlier catalog entry
    #[error("scope '{0}' appears more than once in the privilege catalog")]
    DuplicateScope(String),

    /// Label already used by an earlier catalog entry
    #[error("privilege label '{0}' appears more than once in the privilege catalog")]
    DuplicatePrivilege(String),

    /// Route name that matches no known route
    #[error("unknown route name: '{0}'")]
    UnknownRoute(String),
}
