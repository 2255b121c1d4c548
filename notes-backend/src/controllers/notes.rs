//! Notes REST API — create, list, read, update and delete in-memory notes.
//!
//! `POST /note` and `PUT /note/{id}` take `{"name", "text"}` bodies. Creation
//! requires both fields; update only overwrites the non-empty ones.

use actix_web::{http::header, web, HttpResponse, Responder};
use notes_types::{NoteFields, StatusResponse};

use super::{decode_fields, method_not_allowed, not_found, require_fields};
use crate::AppState;

/// Parse the `{id}` path segment. Anything that is not an integer is treated
/// as an unknown route rather than an unknown note.
fn parse_note_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn unknown_route() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("404 page not found\n")
}

// POST /note
async fn create_note(
    data: web::Data<AppState>,
    body: Result<web::Json<NoteFields>, actix_web::Error>,
) -> impl Responder {
    let fields = match decode_fields(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    if let Err(resp) = require_fields(&fields) {
        return resp;
    }

    let created = data.notes.create(fields.name, fields.text);
    log::info!("[NOTES] Note {} created", created.id);

    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/note/{}", created.id)))
        .json(created)
}

// GET /notes
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.notes.list())
}

// GET /note/{id}
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return unknown_route();
    };

    match data.notes.get(id) {
        Some(note) => HttpResponse::Ok().json(note),
        None => not_found("note not found"),
    }
}

// PUT /note/{id}
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Result<web::Json<NoteFields>, actix_web::Error>,
) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return unknown_route();
    };

    let patch = match decode_fields(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match data.notes.update(id, &patch) {
        Some(note) => {
            log::info!("[NOTES] Note {} updated", id);
            HttpResponse::Ok().json(note)
        }
        None => not_found("note not found"),
    }
}

// DELETE /note/{id}
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return unknown_route();
    };

    if !data.notes.delete(id) {
        return not_found("note not found");
    }

    log::info!("[NOTES] Note {} deleted", id);
    HttpResponse::Ok().json(StatusResponse::ok())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/note")
            .route(web::post().to(create_note))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/notes")
            .route(web::get().to(list_notes))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/note/{id}")
            .route(web::get().to(get_note))
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note))
            .default_service(web::to(method_not_allowed)),
    );
}
