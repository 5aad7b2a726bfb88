//! Axum adapter for the route table
//!
//! Every request goes through a single fallback handler that consults the
//! [`RouteTable`], so Axum's own router never decides which handler runs.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::routing::{allow_header_value, RouteMatch, RouteTable};

/// JSON body returned for unmatched requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Build the Axum application serving `table`
pub fn build_router(table: RouteTable) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(Arc::new(table))
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(State(table): State<Arc<RouteTable>>, method: Method, uri: Uri) -> Response {
    let path = uri.path();

    match table.match_request(&method, path) {
        RouteMatch::Matched { route, params } => {
            debug!(%method, path, route = route.template(), "Route matched");
            route.handle(&params)
        }
        RouteMatch::MethodNotAllowed { allowed } if method == Method::OPTIONS => {
            (StatusCode::OK, [(header::ALLOW, allow_header_value(&allowed))]).into_response()
        }
        RouteMatch::MethodNotAllowed { allowed } => {
            debug!(%method, path, ?allowed, "Method not allowed");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, allow_header_value(&allowed))],
                Json(ErrorBody {
                    error: "Method Not Allowed",
                    message: format!("Method {} is not allowed for {}", method, path),
                }),
            )
                .into_response()
        }
        RouteMatch::NotFound => {
            debug!(%method, path, "No route matched");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Not Found",
                    message: format!("No route matches {} {}", method, path),
                }),
            )
                .into_response()
        }
    }
}
