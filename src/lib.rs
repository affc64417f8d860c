// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate is a typed client for the customers endpoint of a
//! Stripe-compatible payments API: resource models with JSON codecs,
//! form-parameter encoding for create requests, and the create call itself.

/// Types common to the rest of the crate.
pub mod common;
pub use common::*;

/// The payments API client and resource models.
pub mod payments;
pub use payments::*;

/// Macros and helpers used with `serde` serialization and deserialization.
pub mod serde_utils;
pub use serde_utils::*;

/// Unix timestamps in seconds, with a millisecond internal scale.
pub mod unix_time;
pub use unix_time::*;
