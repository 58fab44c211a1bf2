//! End-to-end through the h3o engine.

#![cfg(feature = "h3o")]

use hexbind::engine::h3o::H3oEngine;
use hexbind::prelude::*;

#[test]
fn string_facade_round_trip() {
    let engine = H3oEngine;
    let api = Facade::str_set(&engine);
    let cell = api.geo_to_id(37.3615593, -122.0553238, 9).unwrap();
    assert_eq!(cell, "8928308280fffff");
    assert_eq!(cell.len(), 15);

    let centre = api.id_to_geo(cell.as_str()).unwrap();
    let boundary = api.id_to_boundary(cell.as_str(), false).unwrap();
    let (lo, hi) = boundary.bbox().unwrap();
    assert!(lo.lat <= centre.lat && centre.lat <= hi.lat);
    assert!(lo.lng <= centre.lng && centre.lng <= hi.lng);

    let ring = api.k_ring(cell.as_str(), 1).unwrap();
    assert_eq!(ring.len(), 7);
    assert!(ring.contains(cell.as_str()));
}

#[test]
fn int_and_string_facades_agree() {
    let engine = H3oEngine;
    let ints = Facade::int_set(&engine);
    let strs = Facade::str_set(&engine);
    let h = ints.geo_to_id(48.8566, 2.3522, 7).unwrap();
    let via_ints: std::collections::HashSet<String> =
        ints.hex_ring(h, 2).unwrap().into_iter().map(id_to_string).collect();
    let via_strs = strs.hex_ring(id_to_string(h).as_str(), 2).unwrap();
    assert_eq!(via_ints, via_strs);
    assert_eq!(via_strs.len(), 12);
}

#[test]
fn compact_then_uncompact_restores_children() {
    let engine = H3oEngine;
    let api = Facade::int_array(&engine);
    let h = api.geo_to_id(0.0, 0.0, 5).unwrap();
    let kids = api.children(h, 7).unwrap();
    assert_eq!(kids.len(), 49);
    let compacted = api.compact(kids.iter().copied()).unwrap();
    assert_eq!(compacted.to_array_view(), &[h]);
    let mut restored = api.uncompact(compacted.iter().copied(), 7).unwrap().into_vec();
    let mut expected = kids.into_vec();
    restored.sort_unstable();
    expected.sort_unstable();
    assert_eq!(restored, expected);
}

#[test]
fn resolution_tables() {
    let engine = H3oEngine;
    let api = Facade::int_array(&engine);
    assert_eq!(api.num_hexagons(0).unwrap(), 122);
    let km2 = api.hex_area(9, AreaUnit::Km2).unwrap();
    let m2 = api.hex_area(9, AreaUnit::M2).unwrap();
    assert!((m2 / km2 - 1e6).abs() < 1.0);
    assert!(api.edge_length(16, LengthUnit::Km).is_err());
}
