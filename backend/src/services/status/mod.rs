use actix_web::{HttpResponse, Responder};

/// Liveness probe for `GET /`. The frontend shows this message as its
/// connection status line.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "honowa Systems Online" }))
}
