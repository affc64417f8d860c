// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
/// 3-letter currency designation, e.g. Currency::USD.
pub enum Currency {
    #[serde(rename = "cad")]
    /// Canadian Dollar
    CAD,
    #[serde(rename = "eur")]
    /// Euro
    EUR,
    #[serde(rename = "gbp")]
    /// Great Britain Pound
    GBP,
    #[serde(rename = "usd")]
    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns the lowercase wire code, e.g. "usd".
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CAD => "cad",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::USD => "usd",
        }
    }
}
