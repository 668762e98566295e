/// Group the integer part with commas: 1234567 -> "1,234,567".
fn with_commas(int_part: &str) -> String {
    let mut out = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

/// Amount without currency or grouping, as written inside settlement notes:
/// whole amounts have no decimals, 12.5 -> "12.50".
pub fn plain_amount(val: f64) -> String {
    if val.fract() == 0.0 {
        format!("{val:.0}")
    } else {
        format!("{val:.2}")
    }
}

/// Format a rupee amount with thousands separators: Rs.1,234 or Rs.1,234.50
pub fn rupees(val: f64) -> String {
    let negative = val < 0.0;
    let plain = plain_amount(val.abs());
    let (int_part, dec_part) = match plain.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (plain.as_str(), None),
    };
    let grouped = with_commas(int_part);
    let body = match dec_part {
        Some(d) => format!("{grouped}.{d}"),
        None => grouped,
    };
    if negative {
        format!("-Rs.{body}")
    } else {
        format!("Rs.{body}")
    }
}

/// Short day label for list rows, e.g. "Jan 2". Falls back to the raw text.
pub fn short_date(raw: &str) -> String {
    crate::view::parse_entry_date(raw)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_else(|| raw.to_string())
}
