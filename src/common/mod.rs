// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod config;
/// An enum that keeps the crate's failure origins distinguishable.
mod error;

pub use self::config::DenarConfig;
pub use self::error::{Error, InvalidModel};
