//! Bulk buffer: a packed, contiguous run of canonical identifiers.
//!
//! One buffer is built per call from the caller's collection, handed to a single
//! engine operation as `&[u64]`, and converted into the caller's output shape.
//! Conversions are O(n); the only per-element allocation is whatever the output
//! container needs (a `String` per element for string outputs).

use std::collections::HashSet;
use std::ops::Deref;

use crate::codec::{string_to_id, HexStr};
use crate::error::{InvalidIdentifier, MalformedIdentifier};
use crate::validity;
use crate::HexId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexBuf {
    ids: Vec<HexId>,
}

impl HexBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(ids: Vec<HexId>) -> Self {
        Self { ids }
    }

    /// Parse every element with the codec, in iteration order.
    ///
    /// The first malformed element aborts the conversion; its index is recorded
    /// in the error and no partial buffer escapes.
    pub fn from_strings<I, S>(items: I) -> Result<Self, MalformedIdentifier>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items.into_iter();
        let mut ids = Vec::with_capacity(items.size_hint().0);
        for (pos, item) in items.enumerate() {
            match string_to_id(item.as_ref()) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    tracing::debug!(position = pos, "bulk string conversion aborted");
                    return Err(err.at(pos));
                }
            }
        }
        Ok(Self { ids })
    }

    /// Copy integers directly; with `validate`, stop at the first structurally
    /// invalid value.
    pub fn from_ints<I>(items: I, validate: bool) -> Result<Self, InvalidIdentifier>
    where
        I: IntoIterator<Item = HexId>,
    {
        let ids: Vec<HexId> = items.into_iter().collect();
        if validate {
            validity::check_all(&ids)?;
        }
        Ok(Self { ids })
    }

    pub fn push(&mut self, id: HexId) {
        self.ids.push(id);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HexId> {
        self.ids.iter()
    }

    /// Zero-copy view of the packed identifiers; borrows the buffer.
    #[inline]
    pub fn to_array_view(&self) -> &[HexId] {
        &self.ids
    }

    pub fn into_vec(self) -> Vec<HexId> {
        self.ids
    }

    /// Render every element, preserving order and duplicates.
    pub fn to_strings(&self) -> Vec<String> {
        self.ids
            .iter()
            .map(|&id| HexStr::new(id).as_str().to_owned())
            .collect()
    }

    /// Render the distinct elements; order is not preserved.
    pub fn to_set_of_strings(&self) -> HashSet<String> {
        self.to_set_of_ints()
            .into_iter()
            .map(|id| HexStr::new(id).as_str().to_owned())
            .collect()
    }

    pub fn to_set_of_ints(&self) -> HashSet<HexId> {
        self.ids.iter().copied().collect()
    }
}

impl Deref for HexBuf {
    type Target = [HexId];
    #[inline]
    fn deref(&self) -> &[HexId] {
        &self.ids
    }
}

impl AsRef<[HexId]> for HexBuf {
    fn as_ref(&self) -> &[HexId] {
        &self.ids
    }
}

impl From<Vec<HexId>> for HexBuf {
    fn from(ids: Vec<HexId>) -> Self {
        Self { ids }
    }
}

impl FromIterator<HexId> for HexBuf {
    fn from_iter<T: IntoIterator<Item = HexId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<HexId> for HexBuf {
    fn extend<T: IntoIterator<Item = HexId>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

impl IntoIterator for HexBuf {
    type Item = HexId;
    type IntoIter = std::vec::IntoIter<HexId>;
    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a HexBuf {
    type Item = &'a HexId;
    type IntoIter = std::slice::Iter<'a, HexId>;
    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
