//! Static configuration for the fidesops admin UI: API base URL, credential
//! storage key, the privilege catalog and client-side routes.

pub mod config;
pub mod error;
pub mod models;
pub mod privileges;
pub mod routes;

pub use config::AdminUiConfig;
pub use error::ConfigError;
pub use privileges::{PrivilegeEntry, USER_PRIVILEGES};
pub use routes::{Route, RouteGroup};
