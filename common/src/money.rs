//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount in Brazilian Reais, the currency
    /// listings are priced in.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::Brl,
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(whole) => write!(f, "{whole}{currency}"),
            None => write!(f, "{amount}{currency}"),
        }
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseError as E;

        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err(E::TooShort);
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| E::Amount)?;
        let currency = Currency::from_str(currency).map_err(|_| E::Currency)?;

        Ok(Self { amount, currency })
    }
}

/// Error of parsing [`Money`] from a string.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Input is too short to hold an amount followed by a currency code.
    #[display("too short")]
    TooShort,

    /// Amount is not a decimal number.
    #[display("invalid amount")]
    Amount,

    /// Currency code is unknown.
    #[display("invalid currency")]
    Currency,
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Brazilian Real."]
        Brl = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(d)?;
            Self::from_str(&raw).map_err(|e| {
                de::Error::custom(format!("cannot parse `Money`: {e}"))
            })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money, ParseError};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("1500000.50BRL").unwrap(),
            Money {
                amount: decimal("1500000.50"),
                currency: Currency::Brl,
            },
        );

        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(Money::from_str("123.45"), Err(ParseError::Currency));
        assert_eq!(Money::from_str("123.45Br"), Err(ParseError::Currency));
        assert_eq!(Money::from_str("123.45Reais"), Err(ParseError::Amount));
        assert_eq!(Money::from_str("R$"), Err(ParseError::TooShort));

        assert!(Money::from_str("123.00BRL").is_ok());
        assert!(Money::from_str("123BRL").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::brl(decimal("1500000")).to_string(), "1500000BRL");
        assert_eq!(Money::brl(decimal("1500.00")).to_string(), "1500BRL");
        assert_eq!(Money::brl(decimal("99.90")).to_string(), "99.90BRL");
        assert_eq!(
            Money {
                amount: decimal("10.5"),
                currency: Currency::Eur,
            }
            .to_string(),
            "10.5EUR",
        );
    }
}
