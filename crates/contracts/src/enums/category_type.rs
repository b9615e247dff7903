use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of configurable axis a category represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryType {
    #[default]
    Generic,
    Color,
    Dimension,
    Material,
    Feature,
    Accessory,
    Power,
    Text,
    Finish,
    Custom,
}

impl CategoryType {
    /// Wire code used by the API
    pub fn code(&self) -> &'static str {
        match self {
            CategoryType::Generic => "GENERIC",
            CategoryType::Color => "COLOR",
            CategoryType::Dimension => "DIMENSION",
            CategoryType::Material => "MATERIAL",
            CategoryType::Feature => "FEATURE",
            CategoryType::Accessory => "ACCESSORY",
            CategoryType::Power => "POWER",
            CategoryType::Text => "TEXT",
            CategoryType::Finish => "FINISH",
            CategoryType::Custom => "CUSTOM",
        }
    }

    /// Human readable name for selects and badges
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryType::Generic => "Generic",
            CategoryType::Color => "Color",
            CategoryType::Dimension => "Dimension",
            CategoryType::Material => "Material",
            CategoryType::Feature => "Feature",
            CategoryType::Accessory => "Accessory",
            CategoryType::Power => "Power",
            CategoryType::Text => "Text",
            CategoryType::Finish => "Finish",
            CategoryType::Custom => "Custom",
        }
    }

    pub fn all() -> Vec<CategoryType> {
        vec![
            CategoryType::Generic,
            CategoryType::Color,
            CategoryType::Dimension,
            CategoryType::Material,
            CategoryType::Feature,
            CategoryType::Accessory,
            CategoryType::Power,
            CategoryType::Text,
            CategoryType::Finish,
            CategoryType::Custom,
        ]
    }

    /// Parse from a wire code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for CategoryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// Legacy rows carry free-form strings; anything unknown is treated as GENERIC.
impl<'de> Deserialize<'de> for CategoryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(CategoryType::from_code)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for t in CategoryType::all() {
            assert_eq!(CategoryType::from_code(t.code()), Some(t));
        }
        assert_eq!(CategoryType::from_code("color"), Some(CategoryType::Color));
        assert_eq!(CategoryType::from_code("unknown"), None);
    }

    #[test]
    fn test_unknown_deserializes_to_generic() {
        let t: CategoryType = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(t, CategoryType::Generic);
        let t: CategoryType = serde_json::from_str("null").unwrap();
        assert_eq!(t, CategoryType::Generic);
        let t: CategoryType = serde_json::from_str("\"FINISH\"").unwrap();
        assert_eq!(t, CategoryType::Finish);
    }
}
