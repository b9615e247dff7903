use serde::{Deserialize, Serialize};

use crate::domain::common::EntityMetadata;

/// Visual theme. Colors are stored as HSL triples: "222 47% 11%".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Theme {
    /// CSS custom properties this theme overrides, in application order
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![("--primary", self.primary_color.clone())];
        let optional = [
            ("--secondary", &self.secondary_color),
            ("--accent", &self.accent_color),
            ("--background", &self.background_color),
            ("--foreground", &self.text_color),
            ("--font-family", &self.font_family),
            ("--radius", &self.border_radius),
        ];
        for (name, value) in optional {
            if let Some(v) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                vars.push((name, v.clone()));
            }
        }
        vars
    }
}

/// First active theme, otherwise the first theme at all
pub fn pick_active_theme(themes: &[Theme]) -> Option<&Theme> {
    themes.iter().find(|t| t.is_active).or_else(|| themes.first())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThemeInput {
    pub token: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub primary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThemeInput {
    pub token: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: &str, active: bool) -> Theme {
        Theme {
            id: id.to_string(),
            name: id.to_string(),
            primary_color: "222 47% 11%".to_string(),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn test_pick_active_theme() {
        let themes = vec![theme("a", false), theme("b", true)];
        assert_eq!(pick_active_theme(&themes).map(|t| t.id.as_str()), Some("b"));

        let themes = vec![theme("a", false), theme("b", false)];
        assert_eq!(pick_active_theme(&themes).map(|t| t.id.as_str()), Some("a"));

        assert!(pick_active_theme(&[]).is_none());
    }

    #[test]
    fn test_css_variables_skip_blank_values() {
        let mut t = theme("a", true);
        t.accent_color = Some("  ".to_string());
        t.border_radius = Some("0.75rem".to_string());
        let vars = t.css_variables();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[1], ("--radius", "0.75rem".to_string()));
    }
}
