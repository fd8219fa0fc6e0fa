//! # Growing a Validated Value Type
//!
//! A monetary `Amount` evolving from a bare number into a domain value:
//!
//! ## Step 1: Primitive Obsession
//! - Bare numbers and strings in a transfer API, and what that invites
//!
//! ## Step 2: Newtype Wrappers
//! - Zero-cost wrappers that make signatures honest
//!
//! ## Step 3: Validated Construction
//! - Panicking invariants, then factories returning `Result`
//!
//! ## Step 4: Rounding Factory
//! - Private field, rounding to 3 significant digits at construction
//!
//! ## Step 5: A Reusable Value Factory
//! - Extracting the validate-and-coerce machinery, list construction
//!
//! ## Step 6: Operators and Extensions
//! - `Add` for amounts, extension methods on value types
//!
//! ## Step 7: Composing Values
//! - `Money` pairs an amount with a currency; mismatched currencies fail
//!
//! ## Step 8: Parsing
//! - One failure channel for parse and validation errors
//!
//! ## Step 9: Showing
//! - Rendering back to text; rounding means no exact round trip
//!
//! Run examples with: `cargo run --example <name>`
//!
//! This crate's own API is the end state: [`Amount`] and [`Money`].

use std::ops::Add;

use thiserror::Error;

/// Significant digits kept by [`Amount::of`].
const SIGNIFICANT_DIGITS: i32 = 3;

/// Smallest amount representable after rounding.
const MINIMUM: f64 = 0.01;

/// Marker appended by [`Amount::show`] and required by [`Amount::parse`].
const MARKER: char = '!';

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmountError {
    #[error("amount must be positive, got {0}")]
    NotPositive(f64),
    #[error("amount {0} is below the minimum of {min}", min = MINIMUM)]
    BelowMinimum(f64),
    #[error("cannot parse {0:?} as an amount")]
    Unparseable(String),
}

/// A strictly positive monetary amount, rounded to 3 significant digits.
///
/// The only construction paths are [`Amount::of`] and [`Amount::parse`], so
/// every `Amount` in the program upholds the invariant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn of(value: f64) -> Result<Amount, AmountError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AmountError::NotPositive(value));
        }
        let rounded = round_significant(value, SIGNIFICANT_DIGITS);
        if rounded < MINIMUM {
            return Err(AmountError::BelowMinimum(rounded));
        }
        Ok(Amount(rounded))
    }

    /// Constructs every value, failing as a whole on the first bad one.
    pub fn of_all(values: impl IntoIterator<Item = f64>) -> Result<Vec<Amount>, AmountError> {
        values.into_iter().map(Amount::of).collect()
    }

    /// Parses text of the form `"1.271!"`: the marker is stripped and the
    /// remainder goes through [`Amount::of`], so parse failures surface in
    /// the same channel as validation failures.
    pub fn parse(input: &str) -> Result<Amount, AmountError> {
        let digits = input
            .strip_suffix(MARKER)
            .ok_or_else(|| AmountError::Unparseable(input.to_string()))?;
        let value: f64 = digits
            .trim()
            .parse()
            .map_err(|_| AmountError::Unparseable(input.to_string()))?;
        Amount::of(value)
    }

    /// Renders the amount with the trailing marker. Not an exact inverse of
    /// [`Amount::parse`]: construction already rounded the value.
    pub fn show(&self) -> String {
        format!("{}{}", self.0, MARKER)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

// Adding two positive rounded amounts cannot violate positivity, so the sum
// is built directly rather than revalidated.
impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

/// An ISO-4217-style currency code. Content is not validated; the type only
/// exists so [`Money`] can refuse mixed-currency arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot combine {left:?} with {right:?}")]
pub struct CurrencyMismatch {
    pub left: Currency,
    pub right: Currency,
}

/// An [`Amount`] in a particular [`Currency`].
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    amount: Amount,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Amount, currency: Currency) -> Self {
        Money { amount, currency }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Adds two sums of money, failing when the currencies differ.
    pub fn plus(&self, other: &Money) -> Result<Money, CurrencyMismatch> {
        if self.currency != other.currency {
            return Err(CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(Money {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn positive_values_are_rounded_to_three_significant_digits() {
            assert_eq!(Amount::of(1.271).unwrap().value(), 1.27);
            assert_eq!(Amount::of(2.567).unwrap().value(), 2.57);
            assert_eq!(Amount::of(123_456.0).unwrap().value(), 123_000.0);
        }

        #[test]
        fn zero_and_negative_values_are_rejected() {
            assert_eq!(Amount::of(0.0), Err(AmountError::NotPositive(0.0)));
            assert_eq!(Amount::of(-1.5), Err(AmountError::NotPositive(-1.5)));
        }

        #[test]
        fn non_finite_values_are_rejected() {
            assert!(Amount::of(f64::NAN).is_err());
            assert!(Amount::of(f64::INFINITY).is_err());
        }

        #[test]
        fn values_rounding_below_the_minimum_are_rejected() {
            assert_eq!(Amount::of(0.004), Err(AmountError::BelowMinimum(0.004)));
        }

        #[test]
        fn the_minimum_itself_is_accepted() {
            assert_eq!(Amount::of(0.01).unwrap().value(), 0.01);
        }

        #[test]
        fn a_list_constructs_as_a_whole() {
            let amounts = Amount::of_all([1.271, 2.567]).unwrap();
            assert_eq!(amounts, vec![Amount::of(1.271).unwrap(), Amount::of(2.567).unwrap()]);
        }

        #[test]
        fn a_list_fails_on_the_first_bad_value() {
            assert_eq!(
                Amount::of_all([1.271, -2.0, 3.0]),
                Err(AmountError::NotPositive(-2.0))
            );
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_a_marked_decimal() {
            assert_eq!(Amount::parse("1.271!"), Amount::of(1.271));
            assert_eq!(Amount::parse("1.271!").unwrap().value(), 1.27);
        }

        #[test]
        fn rejects_input_without_the_marker() {
            assert_eq!(
                Amount::parse("1.271"),
                Err(AmountError::Unparseable("1.271".to_string()))
            );
        }

        #[test]
        fn rejects_input_that_is_not_a_number() {
            assert_eq!(
                Amount::parse("one!"),
                Err(AmountError::Unparseable("one!".to_string()))
            );
        }

        #[test]
        fn parsed_values_still_go_through_validation() {
            assert_eq!(Amount::parse("-1!"), Err(AmountError::NotPositive(-1.0)));
        }
    }

    mod showing {
        use super::*;

        #[test]
        fn shows_the_rounded_value_with_the_marker() {
            let amount = Amount::of(1.267).unwrap();
            assert_eq!(amount.show(), "1.27!");
        }

        #[test]
        fn show_then_parse_recovers_the_amount() {
            let amount = Amount::of(2.567).unwrap();
            assert_eq!(Amount::parse(&amount.show()), Ok(amount));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn amounts_add() {
            let sum = Amount::of(5.0).unwrap() + Amount::of(10.0).unwrap();
            assert_eq!(sum.value(), 15.0);
        }

        #[test]
        fn money_adds_when_currencies_match() {
            let gbp = Currency::new("GBP");
            let five = Money::new(Amount::of(5.0).unwrap(), gbp.clone());
            let ten = Money::new(Amount::of(10.0).unwrap(), gbp.clone());

            let total = five.plus(&ten).unwrap();
            assert_eq!(total, Money::new(Amount::of(15.0).unwrap(), gbp));
        }

        #[test]
        fn money_refuses_mismatched_currencies() {
            let five = Money::new(Amount::of(5.0).unwrap(), Currency::new("GBP"));
            let ten = Money::new(Amount::of(10.0).unwrap(), Currency::new("USD"));

            assert_eq!(
                five.plus(&ten),
                Err(CurrencyMismatch {
                    left: Currency::new("GBP"),
                    right: Currency::new("USD"),
                })
            );
        }
    }
}
