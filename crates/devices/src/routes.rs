//! Route table of the mock instrument service

use axum::{http::Method, Router};
use server::{build_router, RouteTable};

use crate::handlers::{get_hemostasis_results, get_poct_results, post_poct_calibration};

pub const HEMOSTASIS_RESULTS: &str = "/hemostasis/device/{device_id}/results";
pub const POCT_RESULTS: &str = "/poct/device/{device_id}/results";
pub const POCT_CALIBRATION: &str = "/poct/device/{device_id}/calibration";

/// Create the device route table
///
/// Routes, in match order:
/// - GET  /hemostasis/device/{device_id}/results - Hemostasis test results
/// - GET  /poct/device/{device_id}/results       - POCT test results
/// - POST /poct/device/{device_id}/calibration   - POCT calibration
pub fn device_routes() -> server::Result<RouteTable> {
    RouteTable::new()
        .route(Method::GET, HEMOSTASIS_RESULTS, get_hemostasis_results)?
        .route(Method::GET, POCT_RESULTS, get_poct_results)?
        .route(Method::POST, POCT_CALIBRATION, post_poct_calibration)
}

/// Create the Axum application serving the device routes
pub fn router() -> server::Result<Router> {
    Ok(build_router(device_routes()?))
}
