use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simulated device width for the preview viewport.
///
/// Changing the mode only resizes the viewport container; it never alters the
/// composed document and never triggers a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportMode {
    /// Canonical container width in CSS pixels.
    pub fn width_px(&self) -> u32 {
        match self {
            ViewportMode::Desktop => 1280,
            ViewportMode::Tablet => 768,
            ViewportMode::Mobile => 375,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportMode::Desktop => "desktop",
            ViewportMode::Tablet => "tablet",
            ViewportMode::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(ViewportMode::Desktop),
            "tablet" => Ok(ViewportMode::Tablet),
            "mobile" => Ok(ViewportMode::Mobile),
            _ => Err(format!("Unknown viewport mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_narrow_with_device() {
        assert!(ViewportMode::Mobile.width_px() < ViewportMode::Tablet.width_px());
        assert!(ViewportMode::Tablet.width_px() < ViewportMode::Desktop.width_px());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Mobile".parse::<ViewportMode>().unwrap(), ViewportMode::Mobile);
        assert!("tv".parse::<ViewportMode>().is_err());
    }
}
