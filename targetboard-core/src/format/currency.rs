use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals, thousands separators, and a leading
/// currency symbol: `1234.5` with `"$"` becomes `$1,234.50`.
///
/// Negative amounts put the sign before the symbol (`-$5.00`); amounts that
/// round to zero never carry a sign. Rounding is half away from zero.
///
/// Values beyond the `Decimal` range fall back to `f64` formatting with the
/// same layout. Non-finite input is rendered verbatim (`NaN`, `inf`) after the
/// symbol; ranked entries never carry such values.
#[must_use]
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    let fixed = Decimal::from_f64_retain(value).map_or_else(
        || format!("{value:.2}"),
        |d| {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        },
    );

    let (negative, digits) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if negative && !is_zero { "-" } else { "" };

    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
