// Route path constants - single source of truth for all admin UI paths

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

pub const BASE_API_PATH: &str = "/api/v1";

// API routes
pub const INDEX_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const USER_MANAGEMENT_ROUTE: &str = "/user-management";
pub const CONNECTION_ROUTE: &str = "/connection";
pub const CONNECTION_TYPE_ROUTE: &str = "/connection_type";

// UI routes
pub const DATASTORE_CONNECTION_ROUTE: &str = "/datastore-connection";

/// Which section of the route table a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteGroup {
    Api,
    Ui,
}

/// A named client-side route.
///
/// Routes are looked up by variant, so a misspelled route name fails to
/// compile. [`Route::from_str`] exists for tooling that receives names as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Login,
    UserManagement,
    Connection,
    ConnectionType,
    DatastoreConnection,
}

impl Route {
    /// Every route, in declaration order.
    pub const ALL: [Route; 6] = [
        Route::Index,
        Route::Login,
        Route::UserManagement,
        Route::Connection,
        Route::ConnectionType,
        Route::DatastoreConnection,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Index => INDEX_ROUTE,
            Route::Login => LOGIN_ROUTE,
            Route::UserManagement => USER_MANAGEMENT_ROUTE,
            Route::Connection => CONNECTION_ROUTE,
            Route::ConnectionType => CONNECTION_TYPE_ROUTE,
            Route::DatastoreConnection => DATASTORE_CONNECTION_ROUTE,
        }
    }

    /// Symbolic kebab-case name, e.g. `user-management`
    pub const fn name(self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Login => "login",
            Route::UserManagement => "user-management",
            Route::Connection => "connection",
            Route::ConnectionType => "connection-type",
            Route::DatastoreConnection => "datastore-connection",
        }
    }

    pub const fn group(self) -> RouteGroup {
        match self {
            Route::DatastoreConnection => RouteGroup::Ui,
            _ => RouteGroup::Api,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| ConfigError::UnknownRoute(s.to_string()))
    }
}
