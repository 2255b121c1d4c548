pub mod echo;
pub mod health;
pub mod notes;

use actix_web::{web, HttpResponse};
use notes_types::{Detail, NoteFields};

/// JSON body settings shared by every controller.
///
/// Clients are not required to send a JSON content type. Handlers take the
/// body as `Result<web::Json<_>, _>` and map failures themselves through
/// [`decode_fields`], so no error handler is installed here.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .content_type_required(false)
}

/// `{"detail": msg}` with the given status builder.
fn detail(mut builder: actix_web::HttpResponseBuilder, msg: &str) -> HttpResponse {
    builder.json(Detail::new(msg))
}

pub(crate) fn bad_request(msg: &str) -> HttpResponse {
    detail(HttpResponse::BadRequest(), msg)
}

pub(crate) fn not_found(msg: &str) -> HttpResponse {
    detail(HttpResponse::NotFound(), msg)
}

/// Fallback for any method a resource does not serve.
pub(crate) async fn method_not_allowed() -> HttpResponse {
    detail(HttpResponse::MethodNotAllowed(), "method not allowed")
}

/// Unwrap a JSON body or produce the 400 `invalid JSON` response.
pub(crate) fn decode_fields(
    body: Result<web::Json<NoteFields>, actix_web::Error>,
) -> Result<NoteFields, HttpResponse> {
    body.map(web::Json::into_inner).map_err(|e| {
        log::debug!("Rejecting request body: {}", e);
        bad_request("invalid JSON")
    })
}

/// Reject fields that must both be non-empty.
pub(crate) fn require_fields(fields: &NoteFields) -> Result<(), HttpResponse> {
    match fields.missing_field() {
        Some(field) => Err(bad_request(&format!("{} is required", field))),
        None => Ok(()),
    }
}
