//! `product` payload.

use serde::{Deserialize, Serialize};

/// One fragment of `product:price`: either the amount or the currency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PriceFragment {
    Amount { amount: f64 },
    Currency { currency: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    /// Title used when more than one item is purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_title: Option<String>,

    pub price: Vec<PriceFragment>,
}

impl Product {
    /// A single price, emitted as `product:price:amount` then `product:price:currency`.
    pub fn priced(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            plural_title: None,
            price: vec![
                PriceFragment::Amount { amount },
                PriceFragment::Currency {
                    currency: currency.into(),
                },
            ],
        }
    }
}
