//! Integer identifiers, validated; collections as sets.

use std::collections::HashSet;

facade_bindings! {
    repr = hexbind::IntSet,
    id = u64,
    id_out = u64,
    ids = Vec<u64>,
    ids_in = |hexes| hexes.iter().copied(),
    collection = HashSet<u64>,
    collection_out = |set| set,
}
