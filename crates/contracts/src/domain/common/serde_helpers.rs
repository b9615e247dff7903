use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// The API returns `"options": null` for categories that were never given
/// options; the client always wants an empty list there.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Prices arrive either as JSON numbers or as decimal strings.
///
/// Anything unparsable, non-finite or negative becomes 0.
pub fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    let price = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Null(()) => 0.0,
    };
    Ok(if price.is_finite() && price >= 0.0 { price } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "lenient_price")]
        price: f64,
    }

    fn price_of(json: &str) -> f64 {
        serde_json::from_str::<Priced>(json).unwrap().price
    }

    #[test]
    fn test_lenient_price() {
        assert_eq!(price_of(r#"{"price":"12.50"}"#), 12.5);
        assert_eq!(price_of(r#"{"price":7}"#), 7.0);
        assert_eq!(price_of(r#"{"price":null}"#), 0.0);
        assert_eq!(price_of(r#"{"price":"abc"}"#), 0.0);
    }

    #[test]
    fn test_bad_prices_become_zero() {
        assert_eq!(price_of(r#"{"price":"NaN"}"#), 0.0);
        assert_eq!(price_of(r#"{"price":"inf"}"#), 0.0);
        assert_eq!(price_of(r#"{"price":"-3"}"#), 0.0);
        assert_eq!(price_of(r#"{"price":-3}"#), 0.0);
    }
}
