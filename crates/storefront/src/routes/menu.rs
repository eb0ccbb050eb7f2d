//! Menu catalogue route.

use axum::Json;

use crate::menu::{self, MenuItem};

/// List the menu catalogue.
///
/// GET /menu
pub async fn index() -> Json<&'static [MenuItem]> {
    Json(menu::items())
}
