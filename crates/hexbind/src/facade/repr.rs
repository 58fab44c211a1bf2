//! Representation configurations: the four conversion hooks plus the
//! validation flag that together define one facade family.

use std::collections::HashSet;

use crate::bulk::HexBuf;
use crate::codec::{id_to_string, string_to_id};
use crate::error::MalformedIdentifier;
use crate::HexId;

/// Conversion hooks between a caller-facing identifier type and the canonical
/// `u64`.
///
/// `ScalarIn` is also the element type accepted by collection inputs, so a
/// string facade takes `&str` scalars and any iterator of `&str`.
pub trait Representation {
    type ScalarIn<'a>;
    type ScalarOut;
    type CollectionOut;

    /// Whether converted identifiers go through the structural validation gate.
    fn validates(&self) -> bool;

    fn scalar_in(&self, value: Self::ScalarIn<'_>) -> Result<HexId, MalformedIdentifier>;

    fn scalar_out(&self, id: HexId) -> Self::ScalarOut;

    fn collection_in<'a, I>(&self, items: I) -> Result<HexBuf, MalformedIdentifier>
    where
        I: IntoIterator<Item = Self::ScalarIn<'a>>;

    fn collection_out(&self, buf: HexBuf) -> Self::CollectionOut;
}

macro_rules! repr_config {
    ($(#[$meta:meta])* $name:ident, validate = $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            validate: bool,
        }

        impl $name {
            pub const fn new() -> Self {
                Self { validate: $default }
            }

            pub const fn with_validation(self, validate: bool) -> Self {
                Self { validate }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

repr_config!(
    /// Integer identifiers; collections come back as the packed buffer itself.
    IntArray,
    validate = false
);
repr_config!(
    /// Integer identifiers; collections come back deduplicated.
    IntSet,
    validate = true
);
repr_config!(
    /// Hexadecimal string identifiers; collections come back deduplicated.
    StrSet,
    validate = false
);
repr_config!(
    /// Hexadecimal string identifiers; collections keep engine order.
    StrArray,
    validate = false
);

impl Representation for IntArray {
    type ScalarIn<'a> = HexId;
    type ScalarOut = HexId;
    type CollectionOut = HexBuf;

    fn validates(&self) -> bool {
        self.validate
    }

    #[inline]
    fn scalar_in(&self, value: Self::ScalarIn<'_>) -> Result<HexId, MalformedIdentifier> {
        Ok(value)
    }

    #[inline]
    fn scalar_out(&self, id: HexId) -> HexId {
        id
    }

    fn collection_in<'a, I>(&self, items: I) -> Result<HexBuf, MalformedIdentifier>
    where
        I: IntoIterator<Item = Self::ScalarIn<'a>>,
    {
        Ok(items.into_iter().collect())
    }

    #[inline]
    fn collection_out(&self, buf: HexBuf) -> HexBuf {
        buf
    }
}

impl Representation for IntSet {
    type ScalarIn<'a> = HexId;
    type ScalarOut = HexId;
    type CollectionOut = HashSet<HexId>;

    fn validates(&self) -> bool {
        self.validate
    }

    #[inline]
    fn scalar_in(&self, value: Self::ScalarIn<'_>) -> Result<HexId, MalformedIdentifier> {
        Ok(value)
    }

    #[inline]
    fn scalar_out(&self, id: HexId) -> HexId {
        id
    }

    fn collection_in<'a, I>(&self, items: I) -> Result<HexBuf, MalformedIdentifier>
    where
        I: IntoIterator<Item = Self::ScalarIn<'a>>,
    {
        Ok(items.into_iter().collect())
    }

    fn collection_out(&self, buf: HexBuf) -> HashSet<HexId> {
        buf.to_set_of_ints()
    }
}

impl Representation for StrSet {
    type ScalarIn<'a> = &'a str;
    type ScalarOut = String;
    type CollectionOut = HashSet<String>;

    fn validates(&self) -> bool {
        self.validate
    }

    fn scalar_in(&self, value: Self::ScalarIn<'_>) -> Result<HexId, MalformedIdentifier> {
        string_to_id(value)
    }

    fn scalar_out(&self, id: HexId) -> String {
        id_to_string(id)
    }

    fn collection_in<'a, I>(&self, items: I) -> Result<HexBuf, MalformedIdentifier>
    where
        I: IntoIterator<Item = Self::ScalarIn<'a>>,
    {
        HexBuf::from_strings(items)
    }

    fn collection_out(&self, buf: HexBuf) -> HashSet<String> {
        buf.to_set_of_strings()
    }
}

impl Representation for StrArray {
    type ScalarIn<'a> = &'a str;
    type ScalarOut = String;
    type CollectionOut = Vec<String>;

    fn validates(&self) -> bool {
        self.validate
    }

    fn scalar_in(&self, value: Self::ScalarIn<'_>) -> Result<HexId, MalformedIdentifier> {
        string_to_id(value)
    }

    fn scalar_out(&self, id: HexId) -> String {
        id_to_string(id)
    }

    fn collection_in<'a, I>(&self, items: I) -> Result<HexBuf, MalformedIdentifier>
    where
        I: IntoIterator<Item = Self::ScalarIn<'a>>,
    {
        HexBuf::from_strings(items)
    }

    fn collection_out(&self, buf: HexBuf) -> Vec<String> {
        buf.to_strings()
    }
}
