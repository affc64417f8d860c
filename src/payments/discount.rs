// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{Currency, CustomerId, SubscriptionId};
use crate::impl_wrapper_str;
use crate::serde_utils::is_default;
use crate::unix_time::NonZeroUnixSeconds;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// Coupon ID.
pub struct CouponId(pub String);
impl_wrapper_str!(CouponId);

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
/// How long a coupon applies once redeemed.
pub enum CouponDuration {
    /// Applies to every invoice.
    Forever,
    /// Applies to the first invoice only.
    Once,
    /// Applies for a fixed number of months.
    Repeating,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A fixed or percentage discount redeemable against invoices.
pub struct Coupon {
    /// Unique identifier for the coupon.
    pub id: CouponId,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Fixed amount off, in cents.
    pub amount_off: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Currency of `amount_off`.
    pub currency: Option<Currency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// How long the coupon applies once redeemed.
    pub duration: Option<CouponDuration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Percentage off, e.g. 25.0.
    pub percent_off: Option<f64>,

    #[serde(default, skip_serializing_if = "is_default")]
    /// Whether the coupon can still be redeemed.
    pub valid: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A coupon applied to a customer or subscription.
pub struct Discount {
    /// The coupon that was redeemed.
    pub coupon: Coupon,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Customer the discount applies to.
    pub customer: Option<CustomerId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time the discount ends, if it is finite.
    pub end: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Date/time the discount started.
    pub start: Option<NonZeroUnixSeconds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Subscription the discount applies to, if any.
    pub subscription: Option<SubscriptionId>,
}
