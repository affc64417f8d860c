// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Helpers for assembling form-encoded POST bodies. A field that is absent
//! contributes no key at all; maps flatten one level deep with bracket
//! notation, `prefix[key]=value`.

use std::collections::HashMap;

/// Appends a single key/value pair.
pub(super) fn push(params: &mut Vec<(String, String)>, key: &str, value: impl ToString) {
    params.push((key.to_string(), value.to_string()));
}

/// Appends a key/value pair only when the value is present.
pub(super) fn push_optional<T: ToString>(
    params: &mut Vec<(String, String)>,
    key: &str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        push(params, key, value.to_string());
    }
}

/// Flattens a map into one `prefix[key]=value` pair per entry.
pub(super) fn push_map(
    params: &mut Vec<(String, String)>,
    prefix: &str,
    map: &HashMap<String, String>,
) {
    for (key, value) in map {
        params.push((format!("{prefix}[{key}]"), value.clone()));
    }
}
