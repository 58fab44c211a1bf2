//! Representation facades.
//!
//! A `Facade` pairs a borrowed engine with one `Representation` and exposes the
//! whole operation catalog in that representation. The per-operation methods
//! are generated in `catalog`; this module holds the conversion plumbing they
//! share: hook application, the validation gate, and error logging.
//!
//! Facades are plain values, built once and passed by reference. They hold no
//! mutable state, so they are `Send + Sync` whenever the engine is.

mod repr;

pub use repr::{IntArray, IntSet, Representation, StrArray, StrSet};

use crate::bulk::HexBuf;
use crate::codec::HexStr;
use crate::engine::HexEngine;
use crate::error::{HexError, NativeError};
use crate::validity;
use crate::HexId;

pub struct Facade<'e, E: ?Sized, R> {
    engine: &'e E,
    repr: R,
}

impl<E: ?Sized, R: Copy> Clone for Facade<'_, E, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized, R: Copy> Copy for Facade<'_, E, R> {}

impl<'e, E, R> Facade<'e, E, R>
where
    E: HexEngine + ?Sized,
    R: Representation,
{
    pub fn new(engine: &'e E, repr: R) -> Self {
        Self { engine, repr }
    }

    #[inline]
    pub fn engine(&self) -> &'e E {
        self.engine
    }

    #[inline]
    pub fn repr(&self) -> &R {
        &self.repr
    }

    /// Same engine, different representation.
    pub fn with_repr<S: Representation>(&self, repr: S) -> Facade<'e, E, S> {
        Facade::new(self.engine, repr)
    }

    pub(crate) fn gated_scalar(
        &self,
        op: &'static str,
        value: R::ScalarIn<'_>,
    ) -> Result<HexId, HexError> {
        let id = self.repr.scalar_in(value)?;
        if self.repr.validates() {
            validity::check(id).map_err(|err| {
                tracing::debug!(op, id = %HexStr::new(id), reason = ?err.reason, "validation rejected identifier");
                err
            })?;
        }
        Ok(id)
    }

    pub(crate) fn gated_collection<'a, I>(
        &self,
        op: &'static str,
        items: I,
    ) -> Result<HexBuf, HexError>
    where
        I: IntoIterator<Item = R::ScalarIn<'a>>,
    {
        let buf = self.repr.collection_in(items)?;
        if self.repr.validates() {
            validity::check_all(&buf).map_err(|err| {
                tracing::debug!(op, position = ?err.position, reason = ?err.reason, "validation rejected collection");
                err
            })?;
        }
        tracing::trace!(op, len = buf.len(), "collection converted");
        Ok(buf)
    }

    pub(crate) fn native_error(&self, op: &'static str, err: NativeError) -> HexError {
        tracing::debug!(op, error = %err, "engine rejected call");
        HexError::Native(err)
    }
}

impl<'e, E: HexEngine + ?Sized> Facade<'e, E, IntArray> {
    /// Integer identifiers, ordered array collections, no validation.
    pub fn int_array(engine: &'e E) -> Self {
        Self::new(engine, IntArray::new())
    }
}

impl<'e, E: HexEngine + ?Sized> Facade<'e, E, IntSet> {
    /// Integer identifiers, set collections, validation on.
    pub fn int_set(engine: &'e E) -> Self {
        Self::new(engine, IntSet::new())
    }
}

impl<'e, E: HexEngine + ?Sized> Facade<'e, E, StrSet> {
    /// String identifiers, set collections, no validation.
    pub fn str_set(engine: &'e E) -> Self {
        Self::new(engine, StrSet::new())
    }
}

impl<'e, E: HexEngine + ?Sized> Facade<'e, E, StrArray> {
    /// String identifiers, ordered list collections, no validation.
    pub fn str_array(engine: &'e E) -> Self {
        Self::new(engine, StrArray::new())
    }
}
