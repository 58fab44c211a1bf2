//! The native-engine boundary.
//!
//! `HexEngine` is generated from the operation catalog (see `catalog`); this
//! module holds the result alias and the concrete engine adapters.

#[cfg(feature = "h3o")]
pub mod h3o;

pub use crate::catalog::HexEngine;
pub use crate::error::NativeError;

pub type EngineResult<T> = Result<T, NativeError>;
