use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(ping)));
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
    cfg.service(web::resource("/api/version").route(web::get().to(get_version)));
}

async fn ping() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello, notes server!\n")
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": VERSION,
        "notes": state.notes.len(),
        "max_body_bytes": state.config.max_body_bytes,
        "uptime_secs": state.started_at.elapsed().as_secs()
    }))
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": VERSION
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_ping() {
        let app = test::init_service(App::new().configure(config_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello, notes server!\n");
    }

    #[actix_web::test]
    async fn test_health_reports_note_count() {
        let state = web::Data::new(AppState::new(Config::default()));
        state.notes.create("a", "b");

        let app = test::init_service(App::new().app_data(state.clone()).configure(config_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], VERSION);
        assert_eq!(body["notes"], 1);
        assert_eq!(body["max_body_bytes"], 1024 * 1024);
        assert!(body["uptime_secs"].is_u64());
    }

    #[actix_web::test]
    async fn test_version() {
        let app = test::init_service(App::new().configure(config_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/version").to_request()).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["version"], VERSION);
    }
}
