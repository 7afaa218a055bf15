// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Base-unit to display-unit amount conversion.
//!
//! Chain messages carry integer amounts in the base denomination (e.g. `uatom`).
//! The [`AmountScaler`] converts them into display-unit decimal amounts using a
//! coefficient resolved once at startup, and formats them with the fixed
//! precision conventions used across reports:
//!
//! - transfers and the delegation family: 2 decimal places
//! - rewards and commission withdrawals: 6 decimal places
//! - fiat annotations: 3 decimal places
//!
//! All formatted amounts use thousands separators.

/// Decimal places used when rendering delegation-family and transfer amounts.
pub const DELEGATION_PRECISION: usize = 2;

/// Decimal places used when rendering reward and commission amounts.
pub const REWARD_PRECISION: usize = 6;

/// Decimal places used when rendering fiat value annotations.
pub const FIAT_PRECISION: usize = 3;

/// A display-unit amount produced by [`AmountScaler::scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledAmount {
    /// Amount in display units (base amount divided by the coefficient)
    pub value: f64,
    /// Display denomination symbol (e.g. `atom`)
    pub denom: String,
}

/// Converts base-unit integer amounts into display-unit decimal amounts.
///
/// Constructed once at startup from the resolved denomination metadata and
/// never mutated afterwards; every component that renders native-token
/// amounts receives a reference through the pipeline context.
///
/// # Examples
///
/// ```
/// use chainherald::scale::AmountScaler;
///
/// let scaler = AmountScaler::new("atom", "uatom", 1_000_000.0);
/// let amount = scaler.scale(1_500_000);
/// assert_eq!(amount.denom, "atom");
/// assert!((amount.value - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct AmountScaler {
    symbol: String,
    base_denom: String,
    coefficient: f64,
}

impl AmountScaler {
    /// Create a scaler for `symbol` with the given base denomination and
    /// coefficient (`10^exponent` of the display unit).
    pub fn new(
        symbol: impl Into<String>,
        base_denom: impl Into<String>,
        coefficient: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            base_denom: base_denom.into(),
            coefficient,
        }
    }

    /// The display denomination symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The base denomination recognized as native (e.g. `uatom`).
    pub fn base_denom(&self) -> &str {
        &self.base_denom
    }

    /// The base-to-display coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Whether `denom` is the chain's native base denomination.
    ///
    /// Non-native denominations (e.g. `ibc/...` vouchers) are rendered
    /// unscaled with their intrinsic denom string.
    pub fn is_native(&self, denom: &str) -> bool {
        denom == self.base_denom
    }

    /// Scale a base-unit integer amount into display units.
    pub fn scale(&self, base_amount: u128) -> ScaledAmount {
        ScaledAmount {
            value: base_amount as f64 / self.coefficient,
            denom: self.symbol.clone(),
        }
    }

    /// Scale an already-decimal base-unit value into display units.
    ///
    /// Historical commission and reward balances arrive as decimal strings in
    /// base units; they go through this path after parsing.
    pub fn scale_value(&self, base_value: f64) -> ScaledAmount {
        ScaledAmount {
            value: base_value / self.coefficient,
            denom: self.symbol.clone(),
        }
    }
}

/// Format `value` with `precision` decimal places and thousands separators.
///
/// # Examples
///
/// ```
/// use chainherald::scale::format_fixed;
///
/// assert_eq!(format_fixed(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_fixed(1.0, 2), "1.00");
/// ```
pub fn format_fixed(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
