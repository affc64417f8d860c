// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::CustomerId;
use crate::impl_wrapper_str;
use crate::serde_utils::is_default;
use crate::unix_time::NonZeroUnixSeconds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Subscription ID.
pub struct SubscriptionId(pub String);
impl_wrapper_str!(SubscriptionId);

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
/// Subscription status, e.g. `active` or `canceled`.
pub enum SubscriptionStatus {
    /// Active.
    Active,
    /// Canceled.
    Canceled,
    /// Past due.
    PastDue,
    /// Incomplete.
    Incomplete,
    /// Incomplete expired.
    IncompleteExpired,
    /// Trialing.
    Trialing,
    /// Unpaid.
    Unpaid,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A recurring billing agreement attached to a customer.
pub struct Subscription {
    /// Unique identifier for the subscription.
    pub id: SubscriptionId,

    #[serde(default, skip_serializing_if = "is_default")]
    /// Whether the subscription ends at the current period boundary.
    pub cancel_at_period_end: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time the subscription was canceled, if any.
    pub canceled_at: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time the record was created.
    pub created: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// End of the current billing period.
    pub current_period_end: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Start of the current billing period.
    pub current_period_start: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Customer paying for this subscription.
    pub customer: Option<CustomerId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time the subscription ended, if any.
    pub ended_at: Option<NonZeroUnixSeconds>,

    #[serde(default)]
    /// Application specific metadata.
    pub metadata: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Identifier of the billing plan subscribed to.
    pub plan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Quantity of the plan subscribed to.
    pub quantity: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date the subscription started.
    pub start: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Subscription status.
    pub status: Option<SubscriptionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Tax percentage applied to invoices.
    pub tax_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time a trial ends, if any.
    pub trial_end: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time a trial started, if any.
    pub trial_start: Option<NonZeroUnixSeconds>,
}
