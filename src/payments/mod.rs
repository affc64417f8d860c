// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Structured API error payloads.
mod api_error;
/// Payments HTTP client.
mod client;
/// Currency codes.
mod currency;
/// Customer.
mod customer;
/// Discount and coupon.
mod discount;
/// Form-encoded body assembly.
mod form;
/// Stored payment sources.
mod payment_source;
/// One page of a resource listing.
mod resource_list;
/// Shipping address.
mod shipping;
/// Request-time payment source.
mod source;
/// Subscription.
mod subscription;
/// Tests.
mod tests;

pub use self::api_error::{ApiError, ApiErrorType};
pub use self::client::{new_payments_client, PaymentsClient};
pub use self::currency::Currency;
pub use self::customer::{Customer, CustomerId, CustomerInput, CustomerObject};
pub use self::discount::{Coupon, CouponDuration, CouponId, Discount};
pub use self::payment_source::{
    BankAccount, Brand, CheckResult, Funding, PaymentSource, StoredCard,
};
pub use self::resource_list::ResourceList;
pub use self::shipping::{Address, Shipping};
pub use self::source::{Card, CardObject, Source};
pub use self::subscription::{Subscription, SubscriptionId, SubscriptionStatus};
