use crate::services::confessions::{classify, position};
use crate::store::{StarStore, StoreError};
use actix_web::{web, HttpResponse, Responder};
use common::model::star::Star;
use common::requests::Confession;
use log::info;

/// The Actix web handler for `POST /confess`.
///
/// Receives a `Confession` payload, turns it into a star and stores it.
/// The JSON extractor has already rejected payloads whose `text` field is
/// missing or not a string by the time this runs.
///
/// # Returns
/// - `200 OK` with a confirmation message and the stored star on success.
/// - `503 Service Unavailable` with an error message if the store fails.
pub async fn process(
    store: web::Data<dyn StarStore>,
    payload: web::Json<Confession>,
) -> impl Responder {
    match submit_confession(store.get_ref(), payload.into_inner()).await {
        Ok(star) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Confession received via Deep Space Network",
            "star": star,
        })),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error storing confession: {}", e)),
    }
}

/// Enriches a confession into a star and appends it to the store.
///
/// The position and color are computed exactly once here; the store returns
/// the record with its assigned identifier, which is echoed to the client.
async fn submit_confession(
    store: &dyn StarStore,
    confession: Confession,
) -> Result<Star, StoreError> {
    info!("Received confession: {}", confession.text);

    let position = position::random_position();
    let color = classify::classify(&confession.text);
    store.append(confession.text, position, color).await
}

#[cfg(test)]
mod tests {
    use crate::services;
    use crate::store::{MemoryStore, StarStore};
    use actix_web::{test, web, App};
    use std::sync::Arc;

    fn memory_store() -> web::Data<dyn StarStore> {
        let store: Arc<dyn StarStore> = Arc::new(MemoryStore::new());
        web::Data::from(store)
    }

    #[actix_web::test]
    async fn sad_confession_comes_back_as_a_blue_star() {
        let app = test::init_service(
            App::new()
                .app_data(memory_store())
                .service(services::confessions::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/confess")
            .set_json(serde_json::json!({ "text": "I feel so lost and sad" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Confession received via Deep Space Network");
        let star = &body["star"];
        assert_eq!(star["color"], "#4facfe");
        assert_eq!(star["text"], "I feel so lost and sad");
        assert!(!star["id"].as_str().unwrap().is_empty());

        let position = star["position"].as_array().unwrap();
        assert!((-10.0..=10.0).contains(&position[0].as_f64().unwrap()));
        assert!((-5.0..=5.0).contains(&position[1].as_f64().unwrap()));
        assert!((-5.0..=5.0).contains(&position[2].as_f64().unwrap()));
    }

    #[actix_web::test]
    async fn happy_confession_comes_back_gold() {
        let app = test::init_service(
            App::new()
                .app_data(memory_store())
                .service(services::confessions::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/confess")
            .set_json(serde_json::json!({ "text": "I am so happy and in love" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["star"]["color"], "#fddb92");
    }

    #[actix_web::test]
    async fn neutral_confession_comes_back_pink() {
        let app = test::init_service(
            App::new()
                .app_data(memory_store())
                .service(services::confessions::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/confess")
            .set_json(serde_json::json!({ "text": "purely neutral statement" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["star"]["color"], "#ff007f");
    }

    #[actix_web::test]
    async fn submitted_star_shows_up_in_the_listing() {
        let store = memory_store();
        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .service(services::confessions::configure_routes())
                .service(services::stars::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/confess")
            .set_json(serde_json::json!({ "text": "cast into the void" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let submitted = body["star"].clone();

        let req = test::TestRequest::get().uri("/stars").to_request();
        let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0], submitted);
    }

    #[actix_web::test]
    async fn missing_text_is_rejected_and_stores_nothing() {
        let store = memory_store();
        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .service(services::confessions::configure_routes())
                .service(services::stars::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/confess")
            .set_json(serde_json::json!({ "confession": "wrong field" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());

        let req = test::TestRequest::get().uri("/stars").to_request();
        let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn sequential_submissions_get_distinct_ids() {
        let app = test::init_service(
            App::new()
                .app_data(memory_store())
                .service(services::confessions::configure_routes()),
        )
        .await;

        let mut ids = Vec::new();
        for i in 0..4 {
            let req = test::TestRequest::post()
                .uri("/confess")
                .set_json(serde_json::json!({ "text": format!("entry {}", i) }))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            ids.push(body["star"]["id"].as_str().unwrap().to_string());
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
