use crate::store::StarStore;
use actix_web::{web, Responder};

pub(crate) async fn process(store: web::Data<dyn StarStore>) -> impl Responder {
    match store.list_all().await {
        Ok(stars) => actix_web::HttpResponse::Ok().json(stars),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing stars: {}", e)),
    }
}
