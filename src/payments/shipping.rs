// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
/// Postal address.
pub struct Address {
    /// City, e.g. "Portland".
    pub city: Option<String>,

    /// Two-letter ISO 3166-1 country code, e.g. "US".
    pub country: Option<String>,

    /// Address line 1 (Street address), e.g. "123 First Ave".
    pub line1: Option<String>,

    /// Address line 2 (Apartment, Suite or Unit), e.g. "Apt 123".
    pub line2: Option<String>,

    /// ZIP or postal code, e.g. "11201".
    pub postal_code: Option<String>,

    /// State, e.g. "WA".
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
/// Shipping destination for physical goods billed to a customer.
pub struct Shipping {
    /// The shipping address.
    pub address: Address,

    /// Recipient name, e.g. "John Doe".
    pub name: Option<String>,

    /// Recipient phone number, e.g. "2125551212".
    pub phone: Option<String>,
}
