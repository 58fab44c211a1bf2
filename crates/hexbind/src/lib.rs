//! Representation facades over a canonical hexagon-indexing engine.
//!
//! The engine speaks `u64` identifiers. Callers pick a representation
//! (integers or hex strings, arrays or sets, with or without validation) and get
//! the full operation catalog in that shape from one generic `Facade`.
//!
//! Layout
//! - `codec`: `u64` <-> canonical hex text.
//! - `validity`: structural checks on the identifier bit layout.
//! - `bulk`: `HexBuf`, the packed buffer used for collection conversion.
//! - `catalog`: the single operation table; generates `HexEngine`, the facade
//!   methods and `CATALOG`.
//! - `facade`: `Facade` and the `Representation` hooks.
//! - `engine`: engine boundary; `engine::h3o` behind the `h3o` feature.
//!
//! ```ignore
//! let engine = hexbind::engine::h3o::H3oEngine;
//! let api = hexbind::Facade::str_set(&engine);
//! let cell = api.geo_to_id(37.3615593, -122.0553238, 9)?;
//! let ring = api.k_ring(cell.as_str(), 1)?;
//! ```

pub mod bulk;
pub mod catalog;
pub mod codec;
pub mod engine;
pub mod error;
pub mod facade;
pub mod geo;
pub mod validity;

/// Canonical hexagon identifier.
pub type HexId = u64;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bulk::HexBuf;
pub use catalog::{OpDescriptor, CATALOG};
pub use codec::{id_to_string, string_to_id};
pub use engine::{EngineResult, HexEngine};
pub use error::{HexError, InvalidIdentifier, MalformedIdentifier, NativeError};
pub use facade::{Facade, IntArray, IntSet, Representation, StrArray, StrSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bulk::HexBuf;
    pub use crate::codec::{id_to_string, string_to_id, HexStr};
    pub use crate::engine::{EngineResult, HexEngine};
    pub use crate::error::{HexError, NativeError};
    pub use crate::facade::{Facade, IntArray, IntSet, Representation, StrArray, StrSet};
    pub use crate::geo::{AreaUnit, Boundary, GeoPolygon, LatLng, LengthUnit};
    pub use crate::HexId;
}
