//! Validated textual identifiers.
//!
//! Rooms are named by 1-6 lowercase ASCII letters, networks by 1-6 uppercase
//! ASCII letters. Both order lexicographically, which is the order every
//! report uses.

use core::fmt;
use core::str::FromStr;

use crate::{EfError, EfResult};

/// Maximum length of a room or network identifier.
pub const MAX_LABEL_LEN: usize = 6;

fn is_label(text: &str, accept: fn(&u8) -> bool) -> bool {
    (1..=MAX_LABEL_LEN).contains(&text.len()) && text.bytes().all(|b| accept(&b))
}

/// Identity of a room (graph node).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(String);

impl RoomId {
    pub fn parse(text: &str) -> EfResult<Self> {
        if Self::is_valid(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(EfError::InvalidLabel {
                kind: "room",
                label: text.to_string(),
            })
        }
    }

    pub fn is_valid(text: &str) -> bool {
        is_label(text, u8::is_ascii_lowercase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of an escape network.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkId(String);

impl NetworkId {
    pub fn parse(text: &str) -> EfResult<Self> {
        if Self::is_valid(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(EfError::InvalidLabel {
                kind: "network",
                label: text.to_string(),
            })
        }
    }

    pub fn is_valid(text: &str) -> bool {
        is_label(text, u8::is_ascii_uppercase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! label_impls {
    ($ty:ident) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = EfError;

            fn from_str(s: &str) -> EfResult<Self> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

label_impls!(RoomId);
label_impls!(NetworkId);
