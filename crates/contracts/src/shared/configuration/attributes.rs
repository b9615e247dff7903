//! Attribute values of an option checked against its category template

use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::a002_category::aggregate::AttributeDefinition;
use crate::enums::AttributeType;

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Validate one value against its definition
pub fn validate_attribute_value(def: &AttributeDefinition, value: &Value) -> Result<(), String> {
    if is_blank(value) {
        return Ok(());
    }

    match def.attribute_type {
        AttributeType::Number => {
            let n = value
                .as_f64()
                .ok_or_else(|| format!("{} must be a number", def.label))?;
            if let Some(min) = def.min {
                if n < min {
                    return Err(format!("{} must be at least {}", def.label, min));
                }
            }
            if let Some(max) = def.max {
                if n > max {
                    return Err(format!("{} must be at most {}", def.label, max));
                }
            }
            Ok(())
        }
        AttributeType::Select => {
            let s = value
                .as_str()
                .ok_or_else(|| format!("{} must be one of the listed values", def.label))?;
            let allowed = def.options.as_deref().unwrap_or_default();
            if allowed.iter().any(|o| o == s) {
                Ok(())
            } else {
                Err(format!("{} must be one of: {}", def.label, allowed.join(", ")))
            }
        }
        AttributeType::Color => match value.as_str() {
            Some(s) if is_hex_color(s) => Ok(()),
            _ => Err(format!("{} must be a hex color like #ff0000", def.label)),
        },
        AttributeType::Boolean => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(format!("{} must be yes or no", def.label))
            }
        }
        AttributeType::Text | AttributeType::Dimension => {
            if value.is_string() || value.is_number() {
                Ok(())
            } else {
                Err(format!("{} must be text", def.label))
            }
        }
    }
}

/// Check all template attributes present in `values`.
///
/// Missing keys and keys outside the template are not errors.
pub fn validate_attribute_values(
    template: &[AttributeDefinition],
    values: &BTreeMap<String, Value>,
) -> Vec<String> {
    template
        .iter()
        .filter_map(|def| {
            let value = values.get(&def.key)?;
            validate_attribute_value(def, value).err()
        })
        .collect()
}

/// Text shown under an option card, `None` for empty values
pub fn display_attribute_value(def: &AttributeDefinition, value: &Value) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    let text = match (def.attribute_type, value) {
        (AttributeType::Boolean, Value::Bool(b)) => (if *b { "Yes" } else { "No" }).to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    };
    Some(match def.unit.as_deref().filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", text, unit),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> Vec<AttributeDefinition> {
        let mut watts = AttributeDefinition::new("watts", "Watts", AttributeType::Number);
        watts.min = Some(0.0);
        watts.max = Some(2000.0);
        watts.unit = Some("W".to_string());

        let mut grade = AttributeDefinition::new("grade", "Grade", AttributeType::Select);
        grade.options = Some(vec!["A".to_string(), "B".to_string()]);

        vec![
            watts,
            grade,
            AttributeDefinition::new("tint", "Tint", AttributeType::Color),
            AttributeDefinition::new("dimmable", "Dimmable", AttributeType::Boolean),
        ]
    }

    #[test]
    fn test_valid_values() {
        let values: BTreeMap<String, Value> = [
            ("watts".to_string(), json!(60)),
            ("grade".to_string(), json!("B")),
            ("tint".to_string(), json!("#FFA")),
            ("dimmable".to_string(), json!(true)),
            ("unknown".to_string(), json!({"x": 1})),
        ]
        .into_iter()
        .collect();
        assert!(validate_attribute_values(&template(), &values).is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let values: BTreeMap<String, Value> = [
            ("watts".to_string(), json!(5000)),
            ("grade".to_string(), json!("C")),
            ("tint".to_string(), json!("red")),
            ("dimmable".to_string(), json!("yes")),
        ]
        .into_iter()
        .collect();
        let errors = validate_attribute_values(&template(), &values);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Watts must be at most 2000");
    }

    #[test]
    fn test_missing_and_blank_are_fine() {
        let values: BTreeMap<String, Value> = [("grade".to_string(), json!(""))].into_iter().collect();
        assert!(validate_attribute_values(&template(), &values).is_empty());
    }

    #[test]
    fn test_display() {
        let t = template();
        assert_eq!(display_attribute_value(&t[0], &json!(60)), Some("60 W".to_string()));
        assert_eq!(display_attribute_value(&t[3], &json!(false)), Some("No".to_string()));
        assert_eq!(display_attribute_value(&t[1], &json!(null)), None);
    }
}
