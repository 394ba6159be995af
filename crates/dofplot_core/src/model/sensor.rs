use serde::Serialize;

use crate::error::ParseError;
use crate::optics::circle_of_confusion;

/// Sensor format with its crop factor and diagonal.
///
/// Crop factor and diagonal are catalogued independently; neither is derived
/// from the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sensor {
    pub label: &'static str,
    pub crop_factor: f64,
    pub diagonal_mm: f64,
}

impl Sensor {
    /// Circle of confusion for this sensor in millimeters
    #[must_use]
    pub fn circle_of_confusion_mm(&self) -> f64 {
        circle_of_confusion(self.diagonal_mm)
    }

    /// Convert a full-frame-equivalent focal length to this sensor's focal length
    #[must_use]
    pub fn actual_focal_mm(&self, equivalent_mm: f64) -> f64 {
        equivalent_mm / self.crop_factor
    }
}

/// Built-in sensor formats, full frame first
pub static SENSORS: [Sensor; 7] = [
    Sensor {
        label: "full frame",
        crop_factor: 1.0,
        diagonal_mm: 43.2,
    },
    Sensor {
        label: "APS-C",
        crop_factor: 1.53,
        diagonal_mm: 28.3,
    },
    Sensor {
        label: "Canon APS-C",
        crop_factor: 1.61,
        diagonal_mm: 26.82,
    },
    Sensor {
        label: "Four Thirds",
        crop_factor: 2.0,
        diagonal_mm: 22.5,
    },
    Sensor {
        label: "1 inch",
        crop_factor: 2.72,
        diagonal_mm: 15.86,
    },
    Sensor {
        label: "1/2.3 inch",
        crop_factor: 5.64,
        diagonal_mm: 7.66,
    },
    Sensor {
        label: "1/3 inch",
        crop_factor: 7.21,
        diagonal_mm: 6.0,
    },
];

/// Find a catalog index by label (case-insensitive)
pub fn sensor_index(label: &str) -> Result<usize, ParseError> {
    let label = label.trim();
    SENSORS
        .iter()
        .position(|s| s.label.eq_ignore_ascii_case(label))
        .ok_or_else(|| ParseError::UnknownSensor(label.to_string()))
}

/// Find a catalog sensor by label (case-insensitive)
pub fn find_sensor(label: &str) -> Result<&'static Sensor, ParseError> {
    sensor_index(label).map(|i| &SENSORS[i])
}
