// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{
    form, Currency, Discount, PaymentSource, PaymentsClient, ResourceList, Shipping, Source,
    Subscription,
};
use crate::common::{Error, InvalidModel};
use crate::impl_wrapper_str;
use crate::unix_time::NonZeroUnixSeconds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Customer ID.
pub struct CustomerId(pub String);
impl_wrapper_str!(CustomerId);

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
/// Wire discriminator emitted with every encoded customer.
pub enum CustomerObject {
    #[default]
    /// The only valid value, `"customer"`.
    Customer,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A stored customer, as decoded from an API response. Encoding emits every
/// key, null for absent optionals, matching the API's own response shape;
/// decoding tolerates absent optionals.
pub struct Customer {
    /// Unique identifier for the customer.
    pub id: CustomerId,

    #[serde(default)]
    /// Wire discriminator, always `"customer"`.
    pub object: CustomerObject,

    /// Customer balance in cents; negative is a credit.
    pub account_balance: i64,

    /// Date/time the record was created.
    pub created: NonZeroUnixSeconds,

    /// Currency for recurring billing, e.g. Currency::USD.
    pub currency: Currency,

    /// Identifier of the default payment source.
    pub default_source: String,

    /// Whether the latest invoice charge failed.
    pub delinquent: bool,

    /// Customer description.
    pub description: String,

    /// Discount currently applied, if any.
    pub discount: Option<Discount>,

    /// The customer's email address.
    pub email: String,

    /// Live mode vs test mode.
    pub livemode: bool,

    #[serde(default)]
    /// Application specific metadata. An absent key and an empty object
    /// both decode to an empty map.
    pub metadata: HashMap<String, String>,

    /// The customer's shipping destination.
    pub shipping: Shipping,

    /// One page of the customer's stored payment sources.
    pub sources: ResourceList<PaymentSource>,

    #[serde(default)]
    /// The customer's subscriptions.
    pub subscriptions: Vec<Subscription>,
}

impl Customer {
    /// Decodes a customer from an API JSON value. A required field that is
    /// absent, of the wrong type, or malformed fails with the decoder's
    /// field-tagged messages.
    pub fn from_json(json: serde_json::Value) -> Result<Self, Vec<String>> {
        serde_json::from_value(json).map_err(|e| vec![e.to_string()])
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
/// Payload for creating a customer. Consumed by `create_customer`; the JSON
/// codec mirrors `Customer` (every key on encode, tolerant decode).
pub struct CustomerInput {
    /// Starting balance in cents; negative is a credit.
    pub account_balance: i64,

    /// Coupon to apply, if any.
    pub coupon: Option<String>,

    /// Customer description.
    pub description: Option<String>,

    /// The customer's email address.
    pub email: Option<String>,

    #[serde(default)]
    /// Application specific metadata. An absent key and an empty object
    /// both decode to an empty map.
    pub metadata: HashMap<String, String>,

    /// Plan to subscribe the customer to, if any.
    pub plan: Option<String>,

    /// Quantity of the plan, if subscribing.
    pub quantity: Option<u64>,

    /// The customer's shipping destination.
    pub shipping: Option<Shipping>,

    /// Payment source to attach: a token or a full card.
    pub source: Option<Source>,

    /// Tax percentage applied to invoices, e.g. 9.5.
    pub tax_percent: Option<f64>,

    /// Date/time a trial ends, if subscribing with a trial.
    pub trial_end: Option<NonZeroUnixSeconds>,
}

impl CustomerInput {
    /// Flattens the input into form parameters for the POST body. Absent
    /// fields contribute no keys; metadata flattens to `metadata[<key>]`
    /// entries; the source contributes `source` or `source[<field>]` keys.
    pub fn to_form_parameters(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        form::push(&mut params, "account_balance", self.account_balance);
        form::push_optional(&mut params, "coupon", &self.coupon);
        form::push_optional(&mut params, "description", &self.description);
        form::push_optional(&mut params, "email", &self.email);
        form::push_optional(&mut params, "plan", &self.plan);
        form::push_optional(&mut params, "quantity", &self.quantity);
        form::push_optional(&mut params, "tax_percent", &self.tax_percent);
        form::push_optional(&mut params, "trial_end", &self.trial_end);
        form::push_map(&mut params, "metadata", &self.metadata);
        if let Some(source) = &self.source {
            source.push_form_parameters(&mut params);
        }
        // Shipping has no bracket encoding in this scheme and is carried
        // only by the JSON codec.
        params
    }
}

impl PaymentsClient {
    /// Create a Customer with the specified input. A supplied idempotency
    /// key is forwarded so a retried request is not double-processed
    /// server-side.
    pub async fn create_customer(
        &self,
        input: &CustomerInput,
        idempotency_key: Option<&str>,
    ) -> Result<Customer, Error> {
        let params = input.to_form_parameters();
        let (status, json, url) = self
            .post_form("customers", &params, idempotency_key)
            .await?;
        Customer::from_json(json.clone()).map_err(|errors| {
            Error::InvalidModel(Box::new(InvalidModel {
                status,
                url,
                parameters: params,
                json,
                errors,
            }))
        })
    }
}
