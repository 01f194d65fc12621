//! Coaster proxy endpoint handlers.
//!
//! Each handler translates one inbound call into one upstream call via
//! [`CoasterProxy`] and relays the outcome: a decoded entity on success,
//! the upstream's own status code and reason phrase on upstream failure,
//! and a generic 500 on transport or decode failure.

use crate::{
    models::{CoasterIdQuery, CoasterSearchQuery},
    services::coaster::{CoasterProxy, ProxyError},
};
use actix_web::{http::StatusCode, web, Error, HttpResponse, Result};
use paperclip::actix::api_v2_operation;
use serde::Serialize;

/// Coaster listing endpoint
///
/// Returns the fixed first page (offset 0, limit 300) of the upstream
/// coaster listing together with its pagination block.
#[api_v2_operation(
    summary = "Coaster Listing Endpoint",
    description = "Returns the first page of the upstream coaster listing (offset 0, limit 300) with pagination information.",
    tags("Coasters"),
    responses(
        (status = 200, description = "Successful response"),
        (status = 500, description = "Internal Server Error - Upstream unreachable")
    )
)]
pub async fn get_coasters(proxy: web::Data<CoasterProxy>) -> Result<HttpResponse, Error> {
    relay("list", proxy.list_coasters().await)
}

/// Coaster by-id endpoint
///
/// Looks up a single coaster by its numeric upstream identifier.
#[api_v2_operation(
    summary = "Coaster By Id Endpoint",
    description = "Returns a single coaster looked up by its numeric identifier (e.g., ?Id=4027).",
    tags("Coasters"),
    responses(
        (status = 200, description = "Successful response"),
        (status = 400, description = "Bad Request - Missing or non-numeric Id parameter"),
        (status = 404, description = "Not Found - No coaster with that id upstream"),
        (status = 500, description = "Internal Server Error - Upstream unreachable")
    )
)]
pub async fn get_coaster_by_id(
    proxy: web::Data<CoasterProxy>,
    query: web::Query<CoasterIdQuery>,
) -> Result<HttpResponse, Error> {
    relay("by-id", proxy.coaster_by_id(query.id).await)
}

/// Random coaster endpoint
///
/// Returns a coaster chosen by the upstream at random.
#[api_v2_operation(
    summary = "Random Coaster Endpoint",
    description = "Returns a coaster chosen at random by the upstream API.",
    tags("Coasters"),
    responses(
        (status = 200, description = "Successful response"),
        (status = 500, description = "Internal Server Error - Upstream unreachable")
    )
)]
pub async fn get_coaster_random(proxy: web::Data<CoasterProxy>) -> Result<HttpResponse, Error> {
    relay("random", proxy.random_coaster().await)
}

/// Coaster search endpoint
///
/// Searches coasters by free-text query. Double quotes are stripped from
/// the query before it is embedded in the upstream URL.
#[api_v2_operation(
    summary = "Coaster Search Endpoint",
    description = "Searches coasters by free-text query (e.g., ?query=vengeance) and returns matches with a total count.",
    tags("Coasters"),
    responses(
        (status = 200, description = "Successful response"),
        (status = 400, description = "Bad Request - Missing query parameter"),
        (status = 500, description = "Internal Server Error - Upstream unreachable")
    )
)]
pub async fn get_coaster_search(
    proxy: web::Data<CoasterProxy>,
    query: web::Query<CoasterSearchQuery>,
) -> Result<HttpResponse, Error> {
    relay("search", proxy.search_coasters(&query.query).await)
}

/// Map one proxy outcome to an inbound response.
///
/// Upstream failures keep their status code and carry the reason phrase
/// as a plain-text body; transport and decode failures are logged and
/// collapsed into a generic 500.
fn relay<T: Serialize>(operation: &str, result: Result<T, ProxyError>) -> Result<HttpResponse, Error> {
    match result {
        Ok(entity) => Ok(HttpResponse::Ok().json(entity)),
        Err(ProxyError::Upstream { status, reason }) => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(reason))
        }
        Err(err) => {
            tracing::error!("Coaster upstream error during {}: {}", operation, err);
            Err(actix_web::error::ErrorInternalServerError(
                "Coaster service temporarily unavailable",
            ))
        }
    }
}
