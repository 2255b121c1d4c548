//! Stateless echo endpoint.
//!
//! Runs the same body checks as note creation and sends the fields back
//! without storing anything. Handy for client smoke tests.

use actix_web::{web, HttpResponse, Responder};
use notes_types::NoteFields;

use super::{decode_fields, method_not_allowed, require_fields};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/echo")
            .route(web::post().to(echo))
            .default_service(web::to(method_not_allowed)),
    );
}

// POST /echo
async fn echo(body: Result<web::Json<NoteFields>, actix_web::Error>) -> impl Responder {
    let fields = match decode_fields(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    if let Err(resp) = require_fields(&fields) {
        return resp;
    }

    HttpResponse::Ok().json(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::json_config;
    use actix_web::{http::StatusCode, test, App};
    use notes_types::Detail;

    #[actix_web::test]
    async fn test_echo_returns_fields() {
        let app = test::init_service(App::new().app_data(json_config(1024)).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(NoteFields::new("hello", "world"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: NoteFields = test::read_body_json(resp).await;
        assert_eq!(body, NoteFields::new("hello", "world"));
    }

    #[actix_web::test]
    async fn test_echo_rejects_empty_name() {
        let app = test::init_service(App::new().app_data(json_config(1024)).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(serde_json::json!({"text": "only text"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Detail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "name is required");
    }

    #[actix_web::test]
    async fn test_echo_rejects_bad_json() {
        let app = test::init_service(App::new().app_data(json_config(1024)).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Detail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "invalid JSON");
    }

    #[actix_web::test]
    async fn test_echo_wrong_method() {
        let app = test::init_service(App::new().app_data(json_config(1024)).configure(config)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/echo").to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
