//! Country to currency symbol mapping
//!
//! Prices are stored as plain decimals on the backend; the symbol is chosen
//! on the client from the restaurant's (or order's) country.

use rust_decimal::Decimal;

/// Symbol used for any country without an explicit mapping
pub const DEFAULT_CURRENCY: &str = "$";

const COUNTRY_CURRENCY: &[(&str, &str)] = &[("India", "₹"), ("America", "$")];

/// Resolve the display symbol for a country.
///
/// Total over all inputs: unknown or empty countries fall back to
/// [`DEFAULT_CURRENCY`].
///
/// # Examples
///
/// ```
/// use shared::currency::currency_symbol;
///
/// assert_eq!(currency_symbol("India"), "₹");
/// assert_eq!(currency_symbol("America"), "$");
/// assert_eq!(currency_symbol("Atlantis"), "$");
/// ```
pub fn currency_symbol(country: &str) -> &'static str {
    COUNTRY_CURRENCY
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(DEFAULT_CURRENCY)
}

/// Format an amount with the symbol for `country`.
///
/// Trailing zeros are dropped, so `100.00` prints as `100` and `6.50` as `6.5`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::currency::format_amount;
///
/// assert_eq!(format_amount("India", Decimal::new(10000, 2)), "₹100");
/// assert_eq!(format_amount("America", Decimal::new(649, 2)), "$6.49");
/// ```
pub fn format_amount(country: &str, amount: Decimal) -> String {
    format!("{}{}", currency_symbol(country), amount.normalize())
}
