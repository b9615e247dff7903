use serde::{Deserialize, Serialize};

/// Value type of an attribute declared in a category template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    Text,
    Number,
    Color,
    Select,
    Boolean,
    Dimension,
}

impl AttributeType {
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::Text => "text",
            AttributeType::Number => "number",
            AttributeType::Color => "color",
            AttributeType::Select => "select",
            AttributeType::Boolean => "boolean",
            AttributeType::Dimension => "dimension",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeType::Text => "Text",
            AttributeType::Number => "Number",
            AttributeType::Color => "Color",
            AttributeType::Select => "Select",
            AttributeType::Boolean => "Yes / No",
            AttributeType::Dimension => "Dimension",
        }
    }

    pub fn all() -> [AttributeType; 6] {
        [
            AttributeType::Text,
            AttributeType::Number,
            AttributeType::Color,
            AttributeType::Select,
            AttributeType::Boolean,
            AttributeType::Dimension,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    /// Whether a unit suffix makes sense for this type
    pub fn has_unit(&self) -> bool {
        matches!(self, AttributeType::Number | AttributeType::Dimension)
    }
}
