// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Used to avoid serializing fields with default values, e.g. `false`.
/// # Example
/// `#[serde(default, skip_serializing_if = "is_default")]`
pub fn is_default<T: Default + PartialEq>(x: &T) -> bool {
    x == &T::default()
}

/// Implement various string methods like `as_str()`, `Display`, etc.
/// for string wrapper tuples such as resource IDs.
///
/// # Example
///
/// `pub struct MyId(pub String);`
/// `impl_wrapper_str!(MyId);`
#[macro_export]
macro_rules! impl_wrapper_str {
    ($typ:ty) => {
        impl $typ {
            /// Returns `as_str()` of the inner string.
            #[allow(unused)]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Returns `is_empty()` of the inner string.
            #[allow(unused)]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<str> for $typ {
            /// Returns `as_ref()` of the inner string.
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl std::fmt::Display for $typ {
            /// Returns `fmt()` of the inner string.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $typ {
            /// Wraps a string slice.
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $typ {
            /// Returns `eq()` of the inner string.
            fn eq(&self, other: &str) -> bool {
                self.0.as_str() == other
            }
        }
    };
}
