use crate::color::Rgb;
use crate::constants::{
    OUTLINE_DEFAULT_COLOR, OUTLINE_DEFAULT_THICKNESS, OUTLINE_THICKNESS_MAX,
    OUTLINE_THICKNESS_MIN,
};

/// How hover and selection overrides combine on one object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverridePolicy {
    /// Each override multiplies whatever scale is current and restores to the
    /// cached originals, so hover-then-select compounds to
    /// `original * 1.1 * (1 + thickness)`.
    #[default]
    Compounding,
    /// Originals are captured once; every state change recomputes scale,
    /// material and emissive from them.
    Recomputed,
}

impl OverridePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "compounding" | "legacy" => Some(Self::Compounding),
            "recomputed" | "normalized" => Some(Self::Recomputed),
            _ => None,
        }
    }
}

/// Live-editable outline colour and thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineSettings {
    pub color: Rgb,
    pub thickness: f32,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(OUTLINE_DEFAULT_COLOR),
            thickness: OUTLINE_DEFAULT_THICKNESS,
        }
    }
}

impl OutlineSettings {
    #[inline]
    pub fn clamp_thickness(value: f32) -> f32 {
        if value.is_nan() {
            return OUTLINE_DEFAULT_THICKNESS;
        }
        value.clamp(OUTLINE_THICKNESS_MIN, OUTLINE_THICKNESS_MAX)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    /// Seed for object hues and burst jitter; entropy when `None`.
    pub seed: Option<u64>,
    pub policy: OverridePolicy,
    pub outline: OutlineSettings,
}

impl SceneConfig {
    /// Apply `seed=<u64>` and `policy=<name>` from a URL query string
    /// (leading `?` optional). Unknown keys and bad values are logged and skipped.
    pub fn apply_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "seed" => match value.parse::<u64>() {
                    Ok(seed) => self.seed = Some(seed),
                    Err(_) => log::warn!("[config] ignoring seed {:?}", value),
                },
                "policy" => match OverridePolicy::from_name(value) {
                    Some(policy) => self.policy = policy,
                    None => log::warn!("[config] ignoring policy {:?}", value),
                },
                _ => log::debug!("[config] unknown key {:?}", key),
            }
        }
    }

    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        config.apply_query(query);
        config
    }
}
