// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Currency;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Credit or debit card brand, e.g. `Visa`, `American Express`, etc.
pub enum Brand {
    #[serde(rename = "American Express")]
    /// AMEX card
    AmericanExpress,
    #[serde(rename = "Diners Club")]
    /// Diners card
    DinersClub,
    #[serde(rename = "Discover")]
    /// Discover card
    Discover,
    #[serde(rename = "JCB")]
    /// JCB
    JCB,
    #[serde(rename = "Visa")]
    /// Visa card
    Visa,
    #[serde(rename = "MasterCard")]
    /// Mastercard
    MasterCard,
    #[serde(rename = "UnionPay")]
    /// Union Pay
    UnionPay,
    #[serde(other)]
    #[serde(rename = "Unknown")]
    /// Other not yet supported brand.
    Unknown,
}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// If an address or CVC check is performed, the result may be: `pass`,
/// `fail`, `unavailable`, or `unchecked`.
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// Check passed.
    Pass,
    /// Check failed.
    Fail,
    /// Check result unavailable.
    Unavailable,
    /// Check was not performed.
    Unchecked,
}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Funding type, e.g. `credit`, `debit`, `prepaid`, or `unknown`.
#[serde(rename_all = "snake_case")]
pub enum Funding {
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Prepaid card.
    Prepaid,
    #[serde(other)]
    /// Other not yet supported card type.
    Unknown,
}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(tag = "object", rename_all = "snake_case")]
/// A payment source stored against a customer. The wire discriminator is
/// the `object` field.
pub enum PaymentSource {
    /// Stored bank account.
    BankAccount(BankAccount),
    /// Stored credit or debit card.
    Card(StoredCard),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
/// A bank account stored against a customer.
pub struct BankAccount {
    /// Unique identifier for the bank account.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Name of the bank, e.g. "STRIPE TEST BANK".
    pub bank_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Two-letter ISO 3166-1 country code, e.g. "US".
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Currency the account holds.
    pub currency: Option<Currency>,

    /// The last four digits of the account number, e.g. "6789".
    pub last4: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Bank routing number.
    pub routing_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Verification status, e.g. "verified".
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// A credit or debit card stored against a customer.
pub struct StoredCard {
    /// Unique identifier for the card.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Card brand, e.g. `Visa`.
    pub brand: Option<Brand>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Two-letter ISO 3166-1 country code of the issuing bank, e.g. "US".
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Result of the CVC check, if one was performed.
    pub cvc_check: Option<CheckResult>,

    /// Expiration month, e.g. 4.
    pub exp_month: u8,

    /// Four-digit expiration year, e.g. 2025.
    pub exp_year: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Fingerprint to compare card numbers without knowing them.
    pub fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Funding type, e.g. `credit`.
    pub funding: Option<Funding>,

    /// The last four digits of the card number, e.g. "4242".
    pub last4: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Cardholder name.
    pub name: Option<String>,
}
