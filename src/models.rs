use serde::Serialize;

use crate::privileges::PrivilegeEntry;
use crate::routes::{Route, RouteGroup};

/// Serialisable view of the whole configuration surface
#[derive(Debug, Serialize)]
pub struct ConfigSnapshot {
    pub base_api_path: &'static str,
    pub base_url: String,
    pub credentials_storage_key: &'static str,
    pub routes: Vec<RouteEntry>,
    pub privileges: &'static [PrivilegeEntry],
}

/// Individual route in the snapshot
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub group: RouteGroup,
}

impl From<Route> for RouteEntry {
    fn from(route: Route) -> Self {
        RouteEntry {
            name: route.name(),
            path: route.path(),
            group: route.group(),
        }
    }
}
