//! Accepts confessions, the system's single write path.
//!
//! A confession arrives as a JSON payload with one `text` field and leaves
//! as a fully formed star: the submission handler samples a random position,
//! derives a color from the text, appends the record to the configured store
//! and echoes the stored result back to the client.
//!
//! ## Sub-modules:
//! - `classify`: keyword-based mapping from confession text to one of four
//!   fixed color codes.
//! - `position`: random placement of a star inside the visible volume.
//! - `submit`: the HTTP handler tying the two together with the store.
//!
//! The provided route is:
//! - `POST /confess`: expects `{"text": "..."}`. A missing or non-string
//!   `text` field is rejected by the JSON extractor before the handler runs,
//!   so nothing is stored in that case.

mod classify;
mod position;
mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/confess";

/// Configures and returns the Actix scope for confession submission.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(submit::process))
}
