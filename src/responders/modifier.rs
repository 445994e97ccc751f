//! Per-rule modifier record.
//!
//! Loaded from the `"modifier"` object of a collision rule. Every field is
//! optional in the JSON and falls back to its documented default.
//!
//! ```json
//! { "speed_increase": 5, "max_speed": 600, "sound": "bounce" }
//! ```
//!
//! The sound may also be given under the key `"play_sound"`, which wins when
//! both keys are present. A `null` field counts as absent; a field of the
//! wrong type is logged and replaced by its default, so one bad value never
//! rejects the rule table.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_SPEED_INCREASE: f32 = 0.0;
pub const DEFAULT_MAX_SPEED: f32 = 600.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawModifier")]
pub struct Modifier {
    /// Speed added after a bounce. Zero or negative disables the boost.
    pub speed_increase: f32,
    /// Upper bound on the boosted speed.
    pub max_speed: f32,
    /// Sound effect id to play when the action fires.
    pub sound: Option<String>,
}

impl Default for Modifier {
    fn default() -> Self {
        Self {
            speed_increase: DEFAULT_SPEED_INCREASE,
            max_speed: DEFAULT_MAX_SPEED,
            sound: None,
        }
    }
}

/// Modifier object as written, before type checks.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawModifier {
    speed_increase: Option<Value>,
    max_speed: Option<Value>,
    sound: Option<Value>,
    play_sound: Option<Value>,
}

fn number_or(key: &str, value: Option<Value>, default: f32) -> f32 {
    match value {
        None => default,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => v as f32,
            None => default,
        },
        Some(other) => {
            warn!("modifier {key}: expected a number, got {other}; using {default}");
            default
        }
    }
}

fn text_or_none(key: &str, value: Option<Value>) -> Option<String> {
    match value {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            warn!("modifier {key}: expected a string, got {other}; ignoring it");
            None
        }
    }
}

impl From<RawModifier> for Modifier {
    fn from(raw: RawModifier) -> Self {
        let sound = text_or_none("sound", raw.sound);
        let play_sound = text_or_none("play_sound", raw.play_sound);
        let speed_increase =
            number_or("speed_increase", raw.speed_increase, DEFAULT_SPEED_INCREASE);
        Self {
            speed_increase,
            max_speed: number_or("max_speed", raw.max_speed, DEFAULT_MAX_SPEED),
            sound: play_sound.or(sound),
        }
    }
}

impl Modifier {
    pub fn with_speed_increase(mut self, speed_increase: f32) -> Self {
        self.speed_increase = speed_increase;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = Modifier::default();
        assert_eq!(m.speed_increase, 0.0);
        assert_eq!(m.max_speed, 600.0);
        assert_eq!(m.sound(), None);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let m: Modifier = serde_json::from_str("{}").unwrap();
        assert_eq!(m, Modifier::default());
    }

    #[test]
    fn test_partial_object_keeps_other_defaults() {
        let m: Modifier = serde_json::from_str(r#"{ "speed_increase": 5 }"#).unwrap();
        assert_eq!(m.speed_increase, 5.0);
        assert_eq!(m.max_speed, 600.0);
    }

    #[test]
    fn test_sound_and_play_sound_keys() {
        let a: Modifier = serde_json::from_str(r#"{ "sound": "ping" }"#).unwrap();
        let b: Modifier = serde_json::from_str(r#"{ "play_sound": "ouch" }"#).unwrap();
        assert_eq!(a.sound(), Some("ping"));
        assert_eq!(b.sound(), Some("ouch"));
    }

    #[test]
    fn test_play_sound_wins_over_sound() {
        let m: Modifier =
            serde_json::from_str(r#"{ "sound": "a", "play_sound": "b" }"#).unwrap();
        assert_eq!(m.sound(), Some("b"));
    }

    #[test]
    fn test_wrong_typed_field_falls_back_to_default() {
        let m: Modifier =
            serde_json::from_str(r#"{ "speed_increase": "fast", "max_speed": 400 }"#).unwrap();
        assert_eq!(m.speed_increase, 0.0);
        assert_eq!(m.max_speed, 400.0);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let m: Modifier =
            serde_json::from_str(r#"{ "max_speed": null, "sound": null }"#).unwrap();
        assert_eq!(m, Modifier::default());
    }

    #[test]
    fn test_non_string_sound_is_ignored() {
        let m: Modifier = serde_json::from_str(r#"{ "sound": 7, "play_sound": true }"#).unwrap();
        assert_eq!(m.sound(), None);
    }

    #[test]
    fn test_builders() {
        let m = Modifier::default()
            .with_speed_increase(10.0)
            .with_max_speed(400.0)
            .with_sound("boing");
        assert_eq!(m.speed_increase, 10.0);
        assert_eq!(m.max_speed, 400.0);
        assert_eq!(m.sound(), Some("boing"));
    }
}
