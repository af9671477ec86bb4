//! Text formatting shared by both document layouts.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SIGN: &str = "$";

/// descriptions longer than this are shortened in the product table
pub const DESCRIPTION_LIMIT: usize = 40;
/// number of characters kept when a description is shortened
pub const DESCRIPTION_KEEP: usize = 37;
pub const ELLIPSIS: &str = "...";

/// exactly two decimals, half away from zero: `2` -> `2.00`, `1.005` -> `1.01`
///
/// Holds over the whole `Decimal` range; the padding is done while formatting, since values
/// near `Decimal::MAX` cannot carry a scale of 2.
pub fn fixed2(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{rounded:.2}")
}

/// `fixed2` with the currency sign in front; the minus sign goes before the currency sign
pub fn money(value: Decimal) -> String {
    let digits = fixed2(value);

    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-{CURRENCY_SIGN}{magnitude}"),
        None => format!("{CURRENCY_SIGN}{digits}"),
    }
}

/// `DD/MM/YYYY`
pub fn date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM:SS`
pub fn date_time(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Result of fitting a description into its table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fit<'a> {
    /// fits as is
    Whole(&'a str),
    /// shortened to `DESCRIPTION_KEEP` characters plus `ELLIPSIS`, drawn with the small font
    Shortened(String),
}

impl Fit<'_> {
    pub fn text(&self) -> &str {
        match self {
            Fit::Whole(text) => text,
            Fit::Shortened(text) => text.as_str(),
        }
    }

    pub fn is_shortened(&self) -> bool {
        matches!(self, Fit::Shortened(_))
    }
}

/// lengths are counted in characters, never bytes, so accented text is cut on a char boundary
pub fn fit_description(description: &str) -> Fit<'_> {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let mut text: String = description.chars().take(DESCRIPTION_KEEP).collect();
        text.push_str(ELLIPSIS);
        Fit::Shortened(text)
    } else {
        Fit::Whole(description)
    }
}
