use crate::drawing::ShapeKind;
use crate::math::Point;
use serde::{Deserialize, Serialize};

/// Interaction tuning. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scale_factor_per_notch: f32,
    pub rotation_deg_per_notch: f32,
    pub translation_px_per_notch: f32,
    /// Pixel scroll distance counted as one wheel notch.
    pub pixels_per_notch: f32,
    /// Screen-space displacement of the object origin from the window centre.
    pub origin: Point,
    pub initial_shape: ShapeKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_factor_per_notch: 1.1,
            rotation_deg_per_notch: 15.0,
            translation_px_per_notch: 20.0,
            pixels_per_notch: 120.0,
            origin: Point::ORIGIN,
            initial_shape: ShapeKind::Rectangle,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "rotation_deg_per_notch": 5.0, "initial_shape": "Triangle" }"#)
                .unwrap();

        assert_eq!(settings.rotation_deg_per_notch, 5.0);
        assert_eq!(settings.initial_shape, ShapeKind::Triangle);
        assert_eq!(settings.scale_factor_per_notch, 1.1);
        assert_eq!(settings.pixels_per_notch, 120.0);
        assert_eq!(settings.origin, Point::ORIGIN);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            origin: Point::new(10.0, -20.0),
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Settings::from_json("{ scale").is_err());
        assert!(Settings::from_json(r#"{ "translation_px_per_notch": "far" }"#).is_err());
    }
}
