pub mod error;
pub mod extract;
mod handlers;
pub mod response;

use std::any::Any;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyCors, CorsLayer},
    trace::TraceLayer,
};

use crate::service::TodoService;
use error::ApiError;

/// Router with permissive CORS.
pub fn create_router(todos: TodoService) -> Router {
    create_router_with_cors(todos, None)
}

/// Router that only allows the given CORS origins. `None` allows any origin.
pub fn create_router_with_cors(todos: TodoService, cors_origins: Option<&[String]>) -> Router {
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(todos)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AnyCors)
        .allow_headers(AnyCors)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Internal.into_response()
}
