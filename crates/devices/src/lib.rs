//! Mock laboratory instrument endpoints
//!
//! Three stateless endpoints simulating instrument APIs:
//!
//! | Method | Path | Payload |
//! |---|---|---|
//! | GET | `/hemostasis/device/{device_id}/results` | [`HemostasisResults`] |
//! | GET | `/poct/device/{device_id}/results` | [`PoctResults`] |
//! | POST | `/poct/device/{device_id}/calibration` | [`CalibrationResult`] |
//!
//! The device id is echoed back exactly as captured from the path; everything
//! else in each payload is fixed.

pub mod handlers;
pub mod payloads;
pub mod routes;

pub use payloads::{
    calibrate_poct, hemostasis_results, poct_results, CalibrationResult, HemostasisResults,
    HemostasisTests, PoctResults, PoctTests,
};
pub use routes::{device_routes, router};
