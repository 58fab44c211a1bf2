//! Integer identifiers; collections as ordered lists.
//!
//! Collections cross as plain Python `list[int]` (no NumPy dependency);
//! callers wanting an array wrap the result with `numpy.asarray`.

facade_bindings! {
    repr = hexbind::IntArray,
    id = u64,
    id_out = u64,
    ids = Vec<u64>,
    ids_in = |hexes| hexes.iter().copied(),
    collection = Vec<u64>,
    collection_out = |buf| buf.into_vec(),
}
