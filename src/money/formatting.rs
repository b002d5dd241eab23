use super::Money;

/// Format a monetary value as a human-readable token string
/// (e.g., "1,234.56789000").
pub fn format_tokens(money: &Money) -> String {
    let text = money.to_tokens().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text.as_str(), None),
    };
    let whole = format_with_thousands_separator(whole);
    match frac {
        Some(frac) => format!("{}.{}", whole, frac),
        None => whole,
    }
}

fn format_with_thousands_separator(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_tokens(self), self.asset().symbol())
    }
}
