use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_PRECISION;

/// WGS84 coordinate stored as fixed-point degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedPointCoordinate {
    pub lat: i32,
    pub lon: i32,
}

impl FixedPointCoordinate {
    pub fn new(lat: i32, lon: i32) -> Self {
        FixedPointCoordinate { lat, lon }
    }

    /// Out-of-range degrees saturate in the cast and fail `is_valid`. NaN maps
    /// to 0, so callers must reject it before converting.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        FixedPointCoordinate {
            lat: (lat * COORDINATE_PRECISION).round() as i32,
            lon: (lon * COORDINATE_PRECISION).round() as i32,
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat as f64 / COORDINATE_PRECISION
    }

    pub fn lon(&self) -> f64 {
        self.lon as f64 / COORDINATE_PRECISION
    }

    pub fn is_valid(&self) -> bool {
        let max_lat = (90.0 * COORDINATE_PRECISION) as i32;
        let max_lon = (180.0 * COORDINATE_PRECISION) as i32;

        (-max_lat..=max_lat).contains(&self.lat) && (-max_lon..=max_lon).contains(&self.lon)
    }
}

impl From<FixedPointCoordinate> for geo_types::Point<f64> {
    fn from(value: FixedPointCoordinate) -> Self {
        geo_types::Point::new(value.lon(), value.lat())
    }
}

impl From<geo_types::Point<f64>> for FixedPointCoordinate {
    fn from(value: geo_types::Point<f64>) -> Self {
        FixedPointCoordinate::from_degrees(value.y(), value.x())
    }
}
