//! Response payloads of the mock instruments
//!
//! Field declaration order is the JSON key order on the wire.

use serde::{Deserialize, Serialize};

/// Hemostasis analyzer model reported by the results endpoint
pub const HEMOSTASIS_DEVICE: &str = "ACL TOP Family";

/// POCT analyzer model reported by the results endpoint
pub const POCT_DEVICE: &str = "GEM Premier 5000";

pub const STATUS_COMPLETED: &str = "completed";

pub const CALIBRATION_SUCCESS: &str = "success";

pub const CALIBRATION_MESSAGE: &str = "Device has been calibrated successfully";

/// `GET /hemostasis/device/{device_id}/results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemostasisResults {
    pub device: String,
    pub device_id: String,
    pub tests: HemostasisTests,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemostasisTests {
    #[serde(rename = "D-Dimer")]
    pub d_dimer: f64,
    #[serde(rename = "Fibrinogen")]
    pub fibrinogen: f64,
    #[serde(rename = "PT/INR")]
    pub pt_inr: f64,
}

impl Default for HemostasisTests {
    fn default() -> Self {
        Self {
            d_dimer: 0.35,
            fibrinogen: 3.2,
            pt_inr: 1.1,
        }
    }
}

/// `GET /poct/device/{device_id}/results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoctResults {
    pub device: String,
    pub device_id: String,
    pub tests: PoctTests,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoctTests {
    #[serde(rename = "Blood Gas")]
    pub blood_gas: f64,
    #[serde(rename = "Lactate")]
    pub lactate: f64,
}

impl Default for PoctTests {
    fn default() -> Self {
        Self {
            blood_gas: 7.4,
            lactate: 1.8,
        }
    }
}

/// `POST /poct/device/{device_id}/calibration`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    pub device_id: String,
    pub calibration_status: String,
    pub message: String,
}

/// Build the hemostasis results payload for `device_id`
pub fn hemostasis_results(device_id: &str) -> HemostasisResults {
    HemostasisResults {
        device: HEMOSTASIS_DEVICE.to_string(),
        device_id: device_id.to_string(),
        tests: HemostasisTests::default(),
        status: STATUS_COMPLETED.to_string(),
    }
}

/// Build the POCT results payload for `device_id`
pub fn poct_results(device_id: &str) -> PoctResults {
    PoctResults {
        device: POCT_DEVICE.to_string(),
        device_id: device_id.to_string(),
        tests: PoctTests::default(),
        status: STATUS_COMPLETED.to_string(),
    }
}

/// Build the calibration payload for `device_id`; calibration always succeeds
pub fn calibrate_poct(device_id: &str) -> CalibrationResult {
    CalibrationResult {
        device_id: device_id.to_string(),
        calibration_status: CALIBRATION_SUCCESS.to_string(),
        message: CALIBRATION_MESSAGE.to_string(),
    }
}
