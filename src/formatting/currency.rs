//! Currency and percentage rendering with thousands separators.

/// Formats money values with a fixed currency symbol prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Whole units: `$1,235`.
    pub fn whole(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, group_thousands(&format!("{amount:.0}")))
    }

    /// One decimal place: `$1,234.5`.
    pub fn tenths(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, group_thousands(&format!("{amount:.1}")))
    }
}

/// One decimal place with a percent sign: `65.0%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_are_grouped() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.whole(0.0), "$0");
        assert_eq!(fmt.whole(999.0), "$999");
        assert_eq!(fmt.whole(1234.4), "$1,234");
        assert_eq!(fmt.whole(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn tenths_keep_one_decimal() {
        let fmt = CurrencyFormat::new("€");
        assert_eq!(fmt.tenths(1234.5), "€1,234.5");
        assert_eq!(fmt.tenths(70.0), "€70.0");
    }

    #[test]
    fn negative_amounts_keep_sign_after_symbol() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.whole(-2600.0), "$-2,600");
        assert_eq!(fmt.tenths(-10.0), "$-10.0");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent(236.363_636), "236.4%");
        assert_eq!(percent(0.0), "0.0%");
    }
}
