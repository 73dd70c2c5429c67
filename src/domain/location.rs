// ============================================================
// Layer 3 — Location and Feature Encoding
// ============================================================
// A geographic location and the encodings that turn it into
// the fixed-width feature vector consumed by SDMNet.
//
// Encodings:
//   Wrap → [sin(π·lon/180), cos(π·lon/180), sin(π·lat/90), cos(π·lat/90)]
//   Raw  → [lon/180, lat/90]
//
// Wrap keeps the date line continuous: lon = -180 and lon = 180
// map to the same features.

use std::f64::consts::PI;

use crate::domain::error::SdmError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocEncoding {
    Wrap,
    Raw,
}

impl LocEncoding {
    /// Width of the feature vector this encoding produces
    pub fn num_features(self) -> usize {
        match self {
            LocEncoding::Wrap => 4,
            LocEncoding::Raw  => 2,
        }
    }
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Result<Self, SdmError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(SdmError::InvalidLocation { lat, lon, reason: "coordinates must be finite" });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SdmError::InvalidLocation { lat, lon, reason: "latitude outside [-90, 90]" });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(SdmError::InvalidLocation { lat, lon, reason: "longitude outside [-180, 180]" });
        }
        Ok(Self { lat, lon })
    }

    pub fn encode(&self, encoding: LocEncoding) -> Vec<f32> {
        let lon = self.lon / 180.0;
        let lat = self.lat / 90.0;
        match encoding {
            LocEncoding::Wrap => vec![
                (PI * lon).sin() as f32,
                (PI * lon).cos() as f32,
                (PI * lat).sin() as f32,
                (PI * lat).cos() as f32,
            ],
            LocEncoding::Raw => vec![lon as f32, lat as f32],
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f32], b: &[f32]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-6, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_wrap_encoding_origin() {
        let loc = Location::new(0.0, 0.0).unwrap();
        assert_close(&loc.encode(LocEncoding::Wrap), &[0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_wrap_encoding_is_continuous_across_date_line() {
        let west = Location::new(12.5, -180.0).unwrap();
        let east = Location::new(12.5, 180.0).unwrap();
        assert_close(&west.encode(LocEncoding::Wrap), &east.encode(LocEncoding::Wrap));
    }

    #[test]
    fn test_raw_encoding_scales_to_unit_range() {
        let loc = Location::new(-45.0, 90.0).unwrap();
        assert_close(&loc.encode(LocEncoding::Raw), &[0.5, -0.5]);
    }

    #[test]
    fn test_encoding_width_matches_num_features() {
        let loc = Location::new(51.5, -0.12).unwrap();
        for enc in [LocEncoding::Wrap, LocEncoding::Raw] {
            assert_eq!(loc.encode(enc).len(), enc.num_features());
        }
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        assert!(matches!(
            Location::new(90.5, 0.0),
            Err(SdmError::InvalidLocation { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        assert!(Location::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_rejects_nan() {
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }
}
