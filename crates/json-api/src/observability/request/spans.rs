//! Route labels for spans and metrics.

use salvo::http::StatusCode;
use uuid::Uuid;

/// Collections whose next path segment is a record identifier.
const COLLECTIONS: [&str; 1] = ["companies"];

/// Label used for every request that matched no route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Collapses identifier segments so every company shares one label.
pub(super) fn route_label(path: &str) -> String {
    let mut previous = "";

    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let label = if COLLECTIONS.contains(&previous) || Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            };

            previous = segment;

            label
        })
        .collect();

    format!("/{}", segments.join("/"))
}

/// Bounded metric label: arbitrary 404 paths all share [`UNMATCHED_ROUTE`].
pub(super) fn metric_route_label(route: &str, status: StatusCode) -> &str {
    if status == StatusCode::NOT_FOUND && !route.ends_with("/{id}") {
        UNMATCHED_ROUTE
    } else {
        route
    }
}
