use serde::{Deserialize, Serialize};

/// A persisted confession, enriched into a "star" for the frontend starfield.
///
/// Stars are created exactly once, when a confession is submitted, and are
/// never updated or deleted afterwards. The backend echoes the full record
/// back to the client on submission and returns the complete set on listing,
/// so this struct is the wire shape of both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Star {
    /// Canonical string identifier, unique within one store.
    ///
    /// The list and file backends count upwards from 1; the document
    /// database backend derives it from the generated document identifier.
    /// Either way the native form never leaves the store layer.
    pub id: String,
    /// The submitted confession text, verbatim.
    pub text: String,
    /// `[x, y, z]` coordinates, sampled once at creation.
    /// x lies in [-10, 10], y and z in [-5, 5].
    pub position: [f64; 3],
    /// One of the four fixed color codes derived from the text content.
    pub color: String,
}
