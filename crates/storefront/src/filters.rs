//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use toko_core::Price;

/// Format an amount of whole Rupiah as "Rp 10.000".
///
/// Usage in templates: `{{ item.price|rupiah }}`
#[askama::filter_fn]
pub fn rupiah(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_rupiah(&amount.to_string()))
}

/// Render a 0-5 rating as star glyphs, e.g. "★★★★☆".
///
/// Usage in templates: `{{ product.rating|stars }}`
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_string(&rating.to_string()))
}

// View structs feed these digits; anything else falls back to zero.

fn format_rupiah(raw: &str) -> String {
    let amount = raw.parse::<u64>().unwrap_or(0);
    Price::new(amount).to_string()
}

fn star_string(raw: &str) -> String {
    let filled = raw.parse::<usize>().unwrap_or(0).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah("10000"), "Rp 10.000");
        assert_eq!(format_rupiah("0"), "Rp 0");
        assert_eq!(format_rupiah("1234567"), "Rp 1.234.567");
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string("0"), "☆☆☆☆☆");
        assert_eq!(star_string("3"), "★★★☆☆");
        assert_eq!(star_string("5"), "★★★★★");
    }

    #[test]
    fn test_out_of_range_rating_caps_at_five() {
        assert_eq!(star_string("9"), "★★★★★");
    }
}
