//! Hex-string identifiers; collections as sets.

use std::collections::HashSet;

facade_bindings! {
    repr = hexbind::StrSet,
    id = &str,
    id_out = String,
    ids = Vec<String>,
    ids_in = |hexes| hexes.iter().map(String::as_str),
    collection = HashSet<String>,
    collection_out = |set| set,
}
