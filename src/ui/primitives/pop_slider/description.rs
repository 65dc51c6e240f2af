//! Serialized slider description
//!
//! Lets a slider be declared in a settings or layout file instead of code.
//! Every field is optional; colors are hex strings and silently fall back to
//! the slider defaults when they cannot be parsed.

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::utils::parse_hex_color;

/// Declarative form of a slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderDescription {
    pub value: f32,
    pub minimum_value: f32,
    pub maximum_value: f32,
    pub continuous: bool,
    /// Progress fill color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_track_tint_color: Option<String>,
    /// Track fill color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_track_tint_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_tint_color: Option<String>,
    /// Ambient tint, shown behind the track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
}

impl Default for SliderDescription {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            continuous: false,
            minimum_track_tint_color: None,
            maximum_track_tint_color: None,
            thumb_tint_color: None,
            tint_color: None,
        }
    }
}

impl SliderDescription {
    pub fn minimum_track_tint(&self) -> Option<Color> {
        resolve_color("minimum_track_tint_color", self.minimum_track_tint_color.as_deref())
    }

    pub fn maximum_track_tint(&self) -> Option<Color> {
        resolve_color("maximum_track_tint_color", self.maximum_track_tint_color.as_deref())
    }

    pub fn thumb_tint(&self) -> Option<Color> {
        resolve_color("thumb_tint_color", self.thumb_tint_color.as_deref())
    }

    pub fn tint(&self) -> Option<Color> {
        resolve_color("tint_color", self.tint_color.as_deref())
    }
}

fn resolve_color(field: &str, raw: Option<&str>) -> Option<Color> {
    let raw = raw?;
    let color = parse_hex_color(raw);
    if color.is_none() {
        tracing::warn!("Ignoring malformed {} {:?}, using default", field, raw);
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_uses_defaults() {
        let description = serde_json::from_str::<SliderDescription>("{}").unwrap();
        assert_eq!(description, SliderDescription::default());
        assert_eq!(description.maximum_value, 1.0);
        assert_eq!(description.thumb_tint(), None);
    }

    #[test]
    fn test_full_description() {
        let description = serde_json::from_str::<SliderDescription>(
            r##"{
                "value": 40,
                "minimum_value": 0,
                "maximum_value": 100,
                "continuous": true,
                "minimum_track_tint_color": "#ff8000",
                "tint_color": "#00000066"
            }"##,
        )
        .unwrap();

        assert_eq!(description.value, 40.0);
        assert!(description.continuous);
        assert_eq!(description.minimum_track_tint(), Some(Color::from_rgb8(255, 128, 0)));
        assert!(description.tint().is_some());
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let description =
            serde_json::from_str::<SliderDescription>(r#"{ "thumb_tint_color": "sparkly" }"#).unwrap();
        assert_eq!(description.thumb_tint(), None);
    }
}
