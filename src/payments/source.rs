// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{form, Currency};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request-time payment source: either an opaque token referencing a
/// pre-created source, or a full card payload.
///
/// The wire format is polymorphic on JSON shape, not on a tag field: a bare
/// string is a token, an object is a card. Decoding branches on the shape
/// before any field extraction.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// Opaque token identifier, e.g. "tok_123".
    Token(String),
    /// Full card payload.
    Card(Card),
}

impl Source {
    /// Appends this source's form parameters for a create request. A token
    /// is a single `source` entry; a card contributes `source[<field>]`
    /// entries for every present attribute.
    pub(crate) fn push_form_parameters(&self, params: &mut Vec<(String, String)>) {
        match self {
            Source::Token(id) => form::push(params, "source", id),
            Source::Card(card) => card.push_form_parameters(params),
        }
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(token) => Ok(Source::Token(token)),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Source::Card)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "InvalidSource: expected token string or card object, found {other}"
            ))),
        }
    }
}

impl Serialize for Source {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Source::Token(id) => serializer.serialize_str(id),
            Source::Card(card) => card.serialize(serializer),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
/// Wire discriminator emitted with every encoded card.
pub enum CardObject {
    #[default]
    /// The only valid value, `"card"`.
    Card,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// Full card payload for a create request. Every key is emitted when
/// encoding to JSON, null for absent optionals; decoding tolerates absence.
pub struct Card {
    #[serde(default)]
    /// Wire discriminator, always `"card"`.
    pub object: CardObject,

    /// Expiration month, e.g. 4.
    pub exp_month: u8,

    /// Four-digit expiration year, e.g. 2025.
    pub exp_year: u16,

    /// Card number, e.g. "4242424242424242".
    pub number: String,

    /// Billing address city.
    pub address_city: Option<String>,

    /// Billing address two-letter ISO 3166-1 country code, e.g. "US".
    pub address_country: Option<String>,

    /// Billing address line 1 (Street address).
    pub address_line1: Option<String>,

    /// Billing address line 2 (Apartment, Suite or Unit).
    pub address_line2: Option<String>,

    /// Billing address state, e.g. "WA".
    pub address_state: Option<String>,

    /// Billing address ZIP or postal code.
    pub address_zip: Option<String>,

    /// Currency, for sources that hold a balance.
    pub currency: Option<Currency>,

    /// Card verification code, e.g. "123".
    pub cvc: Option<String>,

    /// Whether this source becomes the default for its currency.
    pub default_for_currency: Option<bool>,

    #[serde(default)]
    /// Application specific metadata.
    pub metadata: HashMap<String, String>,

    /// Cardholder name.
    pub name: Option<String>,
}

impl Card {
    /// Creates a card with the required fields; optionals start absent.
    pub fn new(exp_month: u8, exp_year: u16, number: impl Into<String>) -> Self {
        Self {
            object: CardObject::Card,
            exp_month,
            exp_year,
            number: number.into(),
            address_city: None,
            address_country: None,
            address_line1: None,
            address_line2: None,
            address_state: None,
            address_zip: None,
            currency: None,
            cvc: None,
            default_for_currency: None,
            metadata: HashMap::new(),
            name: None,
        }
    }

    fn push_form_parameters(&self, params: &mut Vec<(String, String)>) {
        form::push(params, "source[object]", "card");
        form::push(params, "source[exp_month]", self.exp_month);
        form::push(params, "source[exp_year]", self.exp_year);
        form::push(params, "source[number]", &self.number);
        form::push_optional(params, "source[address_city]", &self.address_city);
        form::push_optional(params, "source[address_country]", &self.address_country);
        form::push_optional(params, "source[address_line1]", &self.address_line1);
        form::push_optional(params, "source[address_line2]", &self.address_line2);
        form::push_optional(params, "source[address_state]", &self.address_state);
        form::push_optional(params, "source[address_zip]", &self.address_zip);
        if let Some(currency) = self.currency {
            form::push(params, "source[currency]", currency.code());
        }
        form::push_optional(params, "source[cvc]", &self.cvc);
        form::push_optional(
            params,
            "source[default_for_currency]",
            &self.default_for_currency,
        );
        form::push_optional(params, "source[name]", &self.name);
        // The bracket encoding goes one level deep, so card metadata has no
        // form representation and is omitted.
    }
}
