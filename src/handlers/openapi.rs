//! OpenAPI specification generation and app factory.

use crate::{
    handlers::{get_coaster_by_id, get_coaster_random, get_coaster_search, get_coasters, health, version},
    services::coaster::CoasterProxy,
};
use actix_web::App;
use paperclip::actix::{web, OpenApiExt};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Coaster API".into(),
            version: "1.0.0".into(),
            description: Some(
                "A pass-through API over an upstream roller-coaster data service.\n\n\
                Each endpoint forwards one request upstream and relays the result:\n\
                - `/GetCoasters`: first page of the full coaster listing\n\
                - `/GetCoasterById?Id=...`: a single coaster by numeric id\n\
                - `/GetCoasterRandom`: a coaster chosen at random upstream\n\
                - `/GetCoasterSearch?query=...`: free-text coaster search\n\
                \n\
                On upstream failure the response carries the upstream's own\n\
                status code with its reason phrase as a plain-text body.\n\
                \n\
                **Configuration:**\n\
                - Set `COASTER_API_URL` to the upstream base URL (required)".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a basic app with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - The four coaster pass-through endpoints
/// - Health and version endpoints
/// - OpenAPI specification
///
/// The proxy holds the shared upstream HTTP client; cloning it per worker
/// reuses the same connection pool. This can be used both for testing and
/// as a base for the main application.
pub fn create_base_app(
    proxy: CoasterProxy,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(proxy))
        .service(web::resource("/GetCoasters").route(web::get().to(get_coasters)))
        .service(web::resource("/GetCoasterById").route(web::get().to(get_coaster_by_id)))
        .service(web::resource("/GetCoasterRandom").route(web::get().to(get_coaster_random)))
        .service(web::resource("/GetCoasterSearch").route(web::get().to(get_coaster_search)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
