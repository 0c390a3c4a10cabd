//! Read side of the starfield.
//!
//! A single route, `GET /stars`, which re-reads the full store contents on
//! every call and returns them as a JSON array. There is no caching and no
//! pagination; the frontend draws whatever comes back.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/stars";

/// Configures and returns the Actix scope for star listing.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
