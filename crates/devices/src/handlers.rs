//! Route handlers for the mock instruments
//!
//! Handlers never fail: the device id is echoed as captured and the rest of
//! the payload is fixed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use server::PathParams;
use tracing::debug;

use crate::payloads::{calibrate_poct, hemostasis_results, poct_results};

/// Path parameter carrying the device identifier
pub const DEVICE_ID: &str = "device_id";

fn device_id(params: &PathParams) -> &str {
    params.get(DEVICE_ID).unwrap_or_default()
}

/// Hemostasis analyzer test results
pub fn get_hemostasis_results(params: &PathParams) -> Response {
    let device_id = device_id(params);
    debug!(device_id, "Serving hemostasis results");
    (StatusCode::OK, Json(hemostasis_results(device_id))).into_response()
}

/// POCT analyzer test results
pub fn get_poct_results(params: &PathParams) -> Response {
    let device_id = device_id(params);
    debug!(device_id, "Serving POCT results");
    (StatusCode::OK, Json(poct_results(device_id))).into_response()
}

/// POCT calibration; the request body is ignored
pub fn post_poct_calibration(params: &PathParams) -> Response {
    let device_id = device_id(params);
    debug!(device_id, "Calibrating POCT device");
    (StatusCode::OK, Json(calibrate_poct(device_id))).into_response()
}
