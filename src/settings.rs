/// Display settings for the demo shell
///
/// Presentation-only configuration: which fonts the display-font picker
/// offers and whether the dark theme is active. Serialized to JSON so a
/// host shell could persist it; the demo itself keeps everything in memory.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Font family names offered by the display-font picker
    pub font_names: Vec<String>,
    /// Currently selected font name; always one of `font_names`
    pub selected_font: String,
    /// Dark theme toggle
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let font_names: Vec<String> = ["Inter", "Roboto", "Open Sans", "Lato", "Source Serif"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        DisplaySettings {
            selected_font: font_names[0].clone(),
            font_names,
            dark_mode: true,
        }
    }
}

impl DisplaySettings {
    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Select a font by name; unknown names are ignored.
    /// Returns whether the selection changed.
    pub fn select_font(&mut self, name: &str) -> bool {
        if self.selected_font != name && self.font_names.iter().any(|known| known == name) {
            self.selected_font = name.to_string();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_round_trip() {
        let mut settings = DisplaySettings::default();
        settings.dark_mode = false;
        settings.select_font("Roboto");

        let json = settings.to_json().unwrap();
        let restored = DisplaySettings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_unknown_font_is_rejected() {
        let mut settings = DisplaySettings::default();
        assert!(!settings.select_font("Comic Sans"));
        assert_eq!(settings.selected_font, "Inter");
        assert!(settings.select_font("Lato"));
        assert_eq!(settings.selected_font, "Lato");
    }
}
