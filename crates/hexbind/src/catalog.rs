//! The operation catalog: every canonical operation declared exactly once.
//!
//! `hex_catalog!` reads one table where each parameter is tagged
//! `scalar | unchecked | collection | pass(T)` and each return
//! `scalar | collection | pair | pass(T)`, and expands it into:
//! - `HexEngine`, the canonical trait (identifiers as `u64`, collections as
//!   `&[u64]` in and `HexBuf` out);
//! - one method per operation on `Facade<'_, E, R>` for every representation `R`,
//!   carrying the same name and docs;
//! - `CATALOG`, the descriptor table.
//!
//! `unchecked` marks identifier parameters that bypass the validation gate
//! (the `is_valid`/`is_edge` predicates must be able to answer `false`).

use serde::Serialize;

use crate::bulk::HexBuf;
use crate::engine::EngineResult;
use crate::error::{HexError, NativeError};
use crate::facade::{Facade, Representation};
use crate::geo::{AreaUnit, Boundary, GeoPolygon, LatLng, LengthUnit};
use crate::HexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Scalar,
    UncheckedScalar,
    Collection,
    Passthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    Scalar,
    Collection,
    /// Two identifiers, converted element-wise in order.
    Pair,
    Passthrough,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Static description of one canonical operation.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OpDescriptor {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub returns: ReturnKind,
    pub doc: &'static str,
}

impl OpDescriptor {
    /// First doc line, trimmed.
    pub fn summary(&self) -> &'static str {
        self.doc.lines().next().map(str::trim).unwrap_or("")
    }

    /// Whether any parameter or the return value carries identifiers.
    pub fn touches_identifiers(&self) -> bool {
        self.returns != ReturnKind::Passthrough
            || self
                .params
                .iter()
                .any(|p| p.kind != ParamKind::Passthrough)
    }
}

/// Find an operation by name.
pub fn lookup(name: &str) -> Option<&'static OpDescriptor> {
    CATALOG.iter().find(|op| op.name == name)
}

macro_rules! engine_param {
    (scalar) => { HexId };
    (unchecked) => { HexId };
    (collection) => { &[HexId] };
    (pass($ty:ty)) => { $ty };
}

macro_rules! engine_return {
    (scalar) => { HexId };
    (collection) => { HexBuf };
    (pair) => { (HexId, HexId) };
    (pass($ty:ty)) => { $ty };
}

macro_rules! facade_param {
    ($lt:lifetime, scalar) => { <R as Representation>::ScalarIn<$lt> };
    ($lt:lifetime, unchecked) => { <R as Representation>::ScalarIn<$lt> };
    ($lt:lifetime, collection) => {
        impl IntoIterator<Item = <R as Representation>::ScalarIn<$lt>>
    };
    ($lt:lifetime, pass($ty:ty)) => { $ty };
}

macro_rules! facade_return {
    (scalar) => { <R as Representation>::ScalarOut };
    (collection) => { <R as Representation>::CollectionOut };
    (pair) => {
        (<R as Representation>::ScalarOut, <R as Representation>::ScalarOut)
    };
    (pass($ty:ty)) => { $ty };
}

macro_rules! facade_input {
    ($this:ident, $op:ident, scalar, $arg:ident) => {
        $this.gated_scalar(stringify!($op), $arg)?
    };
    ($this:ident, $op:ident, unchecked, $arg:ident) => {
        $this.repr().scalar_in($arg)?
    };
    ($this:ident, $op:ident, collection, $arg:ident) => {
        &$this.gated_collection(stringify!($op), $arg)?
    };
    ($this:ident, $op:ident, pass, $arg:ident) => {
        $arg
    };
}

macro_rules! facade_output {
    ($this:ident, scalar, $out:ident) => {
        $this.repr().scalar_out($out)
    };
    ($this:ident, collection, $out:ident) => {
        $this.repr().collection_out($out)
    };
    ($this:ident, pair, $out:ident) => {
        ($this.repr().scalar_out($out.0), $this.repr().scalar_out($out.1))
    };
    ($this:ident, pass, $out:ident) => {
        $out
    };
}

macro_rules! param_kind {
    (scalar) => { ParamKind::Scalar };
    (unchecked) => { ParamKind::UncheckedScalar };
    (collection) => { ParamKind::Collection };
    (pass) => { ParamKind::Passthrough };
}

macro_rules! return_kind {
    (scalar) => { ReturnKind::Scalar };
    (collection) => { ReturnKind::Collection };
    (pair) => { ReturnKind::Pair };
    (pass) => { ReturnKind::Passthrough };
}

macro_rules! hex_catalog {
    ($(
        $(#[doc = $doc:literal])*
        fn $op:ident($($arg:ident: $kind:ident $(($ty:ty))?),* $(,)?) -> $ret:ident $(($rty:ty))?;
    )*) => {
        /// Canonical hexagon operations over `u64` identifiers.
        ///
        /// Implementations wrap a native engine. Every method defaults to
        /// `NativeError::Unsupported` so partial engines and test doubles only
        /// override what they provide.
        pub trait HexEngine {
            $(
                $(#[doc = $doc])*
                fn $op(&self, $($arg: engine_param!($kind $(($ty))?)),*)
                    -> EngineResult<engine_return!($ret $(($rty))?)>
                {
                    $(let _ = $arg;)*
                    Err(NativeError::Unsupported(stringify!($op)))
                }
            )*
        }

        impl<'e, E, R> Facade<'e, E, R>
        where
            E: HexEngine + ?Sized,
            R: Representation,
        {
            $(
                $(#[doc = $doc])*
                pub fn $op<'a>(
                    &self,
                    $($arg: facade_param!('a, $kind $(($ty))?)),*
                ) -> Result<facade_return!($ret $(($rty))?), HexError> {
                    let out = self
                        .engine()
                        .$op($(facade_input!(self, $op, $kind, $arg)),*)
                        .map_err(|err| self.native_error(stringify!($op), err))?;
                    Ok(facade_output!(self, $ret, out))
                }
            )*
        }

        /// Every canonical operation, in declaration order.
        pub const CATALOG: &[OpDescriptor] = &[
            $(
                OpDescriptor {
                    name: stringify!($op),
                    params: &[$(ParamSpec {
                        name: stringify!($arg),
                        kind: param_kind!($kind),
                    }),*],
                    returns: return_kind!($ret),
                    doc: concat!($($doc, "\n"),*),
                },
            )*
        ];
    };
}

hex_catalog! {
    /// Whether `h` is a valid cell index.
    ///
    /// Not gated by validation: an invalid integer answers `false`.
    fn is_valid(h: unchecked) -> pass(bool);

    /// Resolution (0-15) of a cell.
    fn resolution(h: scalar) -> pass(u8);

    /// Cell containing the point `(lat, lng)` (degrees) at `resolution`.
    fn geo_to_id(lat: pass(f64), lng: pass(f64), resolution: pass(u8)) -> scalar;

    /// Center of a cell.
    fn id_to_geo(h: scalar) -> pass(LatLng);

    /// Outline of a cell; `(lng, lat)` order and a closed loop when `geo_json`.
    fn id_to_boundary(h: scalar, geo_json: pass(bool)) -> pass(Boundary);

    /// Ancestor of `h` at the coarser `resolution`.
    fn parent(h: scalar, resolution: pass(u8)) -> scalar;

    /// Descendants of `h` at the finer `resolution`.
    fn children(h: scalar, resolution: pass(u8)) -> collection;

    /// Cells within grid distance `k` of `h`, including `h`.
    fn k_ring(h: scalar, k: pass(u32)) -> collection;

    /// Cells at exactly grid distance `k` from `h`.
    fn hex_ring(h: scalar, k: pass(u32)) -> collection;

    /// Grid distance between two cells.
    fn distance(a: scalar, b: scalar) -> pass(i32);

    /// Whether two cells share an edge.
    fn are_neighbors(a: scalar, b: scalar) -> pass(bool);

    fn is_pentagon(h: scalar) -> pass(bool);

    /// Base cell number (0-121).
    fn base_cell(h: scalar) -> pass(u8);

    /// Replace complete sibling groups by their parent, recursively.
    fn compact(hexes: collection) -> collection;

    /// Expand every cell to its descendants at `resolution`.
    fn uncompact(hexes: collection, resolution: pass(u8)) -> collection;

    /// Cells at `resolution` whose centers fall inside `polygon`.
    fn polyfill(polygon: pass(&GeoPolygon), resolution: pass(u8)) -> collection;

    /// Directed edge from `origin` to the neighboring `destination`.
    fn edge(origin: scalar, destination: scalar) -> scalar;

    /// Whether `e` is a valid directed edge index.
    ///
    /// Not gated by validation: an invalid integer answers `false`.
    fn is_edge(e: unchecked) -> pass(bool);

    fn edge_origin(e: scalar) -> scalar;

    fn edge_destination(e: scalar) -> scalar;

    /// `(origin, destination)` of a directed edge.
    fn edge_endpoints(e: scalar) -> pair;

    /// The directed edges leaving `origin` (five for pentagons, six otherwise).
    fn edges_from(origin: scalar) -> collection;

    /// Outline of a directed edge.
    fn edge_boundary(e: scalar) -> pass(Boundary);

    /// Number of cells at `resolution`.
    fn num_hexagons(resolution: pass(u8)) -> pass(u64);

    /// Average cell area at `resolution`.
    fn hex_area(resolution: pass(u8), unit: pass(AreaUnit)) -> pass(f64);

    /// Average edge length at `resolution`.
    fn edge_length(resolution: pass(u8), unit: pass(LengthUnit)) -> pass(f64);
}
