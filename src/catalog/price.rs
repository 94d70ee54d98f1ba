// catalog/price.rs - Numeric price extraction from display strings
//
// Catalog prices are display text ("$19.99", "$8 - $15", "From $45",
// "Free"), so sorting by price needs a number pulled out of the text.
//
// Rule: the first amount in the string wins. An amount is a run of ASCII
// digits, optionally followed by '.' and at least one more digit, optionally
// preceded by a currency symbol. For a range such as "$8 - $15" this yields
// 8: the first number, not the minimum nor the maximum. Thousands separators
// are not understood ("$1,299" yields 1).

/// Price used for sorting: the first amount in `price`, or 0 when none
pub fn extract_min_price(price: &str) -> f64 {
    parse_first_amount(price).unwrap_or(0.0)
}

/// First amount in `price`, if any
pub fn parse_first_amount(price: &str) -> Option<f64> {
    let (start, end) = first_amount_span(price)?;
    price[start..end].parse::<f64>().ok()
}

/// Byte range of the first amount. A currency symbol in front of the digits
/// is optional, so the first digit run always starts the match.
fn first_amount_span(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start + digit_run(&bytes[start..]);

    // Fractional part only counts when at least one digit follows the point
    if bytes.get(end) == Some(&b'.') {
        let fraction = digit_run(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    Some((start, end))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
