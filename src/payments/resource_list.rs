// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq)]
/// One page of a resource listing. Advancing the cursor is out of scope.
pub struct ResourceList<T> {
    /// Page content.
    pub data: Vec<T>,
    /// Whether there is more content beyond this page.
    pub has_more: bool,
    /// Total count across all pages, if the API reported one.
    pub total_count: Option<u64>,
    /// URL of the listing.
    pub url: String,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        ResourceList {
            data: Vec::new(),
            has_more: false,
            total_count: None,
            url: String::new(),
        }
    }
}

impl<T: Clone> Clone for ResourceList<T> {
    fn clone(&self) -> Self {
        ResourceList {
            data: self.data.clone(),
            has_more: self.has_more,
            total_count: self.total_count,
            url: self.url.clone(),
        }
    }
}
