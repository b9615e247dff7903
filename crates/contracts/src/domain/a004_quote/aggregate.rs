use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::serde_helpers::lenient_price;
use crate::domain::common::EntityMetadata;
use crate::shared::configuration::summary::{calculate_total, quote_items, QuoteItem};
use crate::shared::configuration::ConfigState;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Sent,
    Accepted,
    Rejected,
}

impl QuoteStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "PENDING",
            QuoteStatus::Sent => "SENT",
            QuoteStatus::Accepted => "ACCEPTED",
            QuoteStatus::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

// ============================================================================
// Quote
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    #[serde(default)]
    pub quote_code: String,
    #[serde(default)]
    pub status: QuoteStatus,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

// ============================================================================
// Customer form
// ============================================================================

/// Contact details entered in the quote dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFormError {
    MissingRequired,
    InvalidEmail,
}

impl QuoteFormError {
    pub fn title(&self) -> &'static str {
        match self {
            QuoteFormError::MissingRequired => "Validation error",
            QuoteFormError::InvalidEmail => "Invalid email",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuoteFormError::MissingRequired => "Please fill in all required fields.",
            QuoteFormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with something on both sides of it
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl QuoteCustomer {
    pub fn validate(&self) -> Result<(), QuoteFormError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(QuoteFormError::MissingRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(QuoteFormError::InvalidEmail);
        }
        Ok(())
    }
}

// ============================================================================
// Inputs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfiguration {
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetadata {
    pub company: String,
    pub message: String,
    pub timestamp: String,
}

/// Payload for `POST /api/quote/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteInput {
    pub configurator_id: String,
    pub customer_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    /// category id -> option id
    pub selected_options: BTreeMap<String, String>,
    pub total_price: f64,
    pub configuration: QuoteConfiguration,
    pub metadata: QuoteMetadata,
}

impl CreateQuoteInput {
    /// Snapshot the current selection into a quote request
    pub fn from_selection(
        configurator_id: &str,
        state: &ConfigState,
        customer: &QuoteCustomer,
        now: DateTime<Utc>,
    ) -> Self {
        let selected_options = state
            .selected
            .iter_selected()
            .map(|(category_id, option_id)| (category_id.to_string(), option_id.to_string()))
            .collect();

        Self {
            configurator_id: configurator_id.to_string(),
            customer_email: customer.email.trim().to_string(),
            customer_name: customer.name.trim().to_string(),
            customer_phone: customer.phone.trim().to_string(),
            selected_options,
            total_price: calculate_total(state),
            configuration: QuoteConfiguration {
                items: quote_items(state),
            },
            metadata: QuoteMetadata {
                company: customer.company.trim().to_string(),
                message: customer.message.trim().to_string(),
                timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

/// Payload for `PUT /api/quote/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteInput {
    pub token: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// Filters of `GET /api/quote/list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteListFilter {
    pub status: Option<QuoteStatus>,
    pub configurator_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::aggregate::ConfigCategory;
    use crate::domain::a003_option::aggregate::ConfigOption;
    use chrono::TimeZone;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
    }

    #[test]
    fn test_customer_validation() {
        let mut customer = QuoteCustomer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(customer.validate(), Ok(()));

        customer.email = "ada".to_string();
        assert_eq!(customer.validate(), Err(QuoteFormError::InvalidEmail));

        customer.name = "  ".to_string();
        assert_eq!(customer.validate(), Err(QuoteFormError::MissingRequired));
    }

    #[test]
    fn test_create_input_from_selection() {
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("color", "Color").with_options(vec![ConfigOption::new("red", "Red", 10.0)]),
            ConfigCategory::new("size", "Size").with_options(vec![ConfigOption::new("s", "Small", 0.0)]),
        ]);
        state.selected.set("color", "red");
        state.selected.set("size", "");

        let customer = QuoteCustomer {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            company: "Engines Ltd".to_string(),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let input = CreateQuoteInput::from_selection("cfg1", &state, &customer, now);

        assert_eq!(input.customer_name, "Ada");
        assert_eq!(input.total_price, 10.0);
        assert_eq!(input.selected_options.len(), 1);
        assert_eq!(input.configuration.items[0].sku, "red");

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["configuratorId"], "cfg1");
        assert_eq!(value["selectedOptions"]["color"], "red");
        assert_eq!(value["metadata"]["timestamp"], "2024-05-01T12:00:00.000Z");
        assert_eq!(value["metadata"]["company"], "Engines Ltd");
    }

    #[test]
    fn test_quote_status_wire_format() {
        let quote: Quote = serde_json::from_str(
            r#"{"id":"q1","quoteCode":"Q-1","status":"ACCEPTED","customerEmail":"a@b.co","totalPrice":"99.5"}"#,
        )
        .unwrap();
        assert_eq!(quote.status, QuoteStatus::Accepted);
        assert_eq!(quote.total_price, 99.5);
    }
}
