//! Display currencies and price formatting

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Cad,
    Aud,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Inr => "Indian Rupee",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
        }
    }

    pub fn all() -> [Currency; 7] {
        [
            Currency::Usd,
            Currency::Eur,
            Currency::Gbp,
            Currency::Inr,
            Currency::Jpy,
            Currency::Cad,
            Currency::Aud,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    pub fn decimals(&self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Symbol, grouped integer part, fixed decimals: `$1,234.50`
    pub fn format(&self, amount: f64) -> String {
        let (group, decimal) = match self {
            Currency::Eur => ('.', ','),
            _ => (',', '.'),
        };
        let indian = matches!(self, Currency::Inr);

        let negative = amount < 0.0;
        let formatted = format!("{:.*}", self.decimals(), amount.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut out = String::new();
        if negative && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(self.symbol());
        out.push_str(&group_digits(int_part, group, indian));
        if let Some(frac) = frac_part {
            out.push(decimal);
            out.push_str(frac);
        }
        out
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Insert `sep` into a run of digits; Indian grouping is 3 then 2s
fn group_digits(digits: &str, sep: char, indian: bool) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = Vec::with_capacity(chars.len() + chars.len() / 2);

    for (i, c) in chars.iter().rev().enumerate() {
        let boundary = if indian {
            i == 3 || (i > 3 && (i - 3) % 2 == 0)
        } else {
            i > 0 && i % 3 == 0
        };
        if boundary {
            result.push(sep);
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(Currency::Usd.format(1234.5), "$1,234.50");
        assert_eq!(Currency::Usd.format(0.0), "$0.00");
        assert_eq!(Currency::Usd.format(1234567.891), "$1,234,567.89");
        assert_eq!(Currency::Usd.format(-12.0), "-$12.00");
    }

    #[test]
    fn test_format_locale_variants() {
        assert_eq!(Currency::Eur.format(1234.5), "€1.234,50");
        assert_eq!(Currency::Jpy.format(1234.6), "¥1,235");
        assert_eq!(Currency::Inr.format(1234567.0), "₹12,34,567.00");
        assert_eq!(Currency::Cad.format(999.0), "C$999.00");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("gbp"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code(" AUD "), Some(Currency::Aud));
        assert_eq!(Currency::from_code("XYZ"), None);
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
