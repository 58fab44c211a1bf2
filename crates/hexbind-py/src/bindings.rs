//! Generates one Python submodule's worth of `#[pyfunction]`s over a facade.
//!
//! The caller names the representation, the Python-side identifier types and
//! how collections cross the boundary; every catalog operation is then bound
//! with the same name and argument order as the Rust facade method.

macro_rules! facade_bindings {
    (
        repr = $repr:ty,
        id = $id:ty,
        id_out = $out:ty,
        ids = $ids:ty,
        ids_in = |$h:ident| $ids_in:expr,
        collection = $coll:ty,
        collection_out = |$c:ident| $coll_out:expr $(,)?
    ) => {
        use hexbind::engine::h3o::H3oEngine;
        use hexbind::{Facade, HexError, Representation};
        use pyo3::prelude::*;

        use crate::common::{
            area_unit, boundary_to_py, latlng_to_py, length_unit, map_hex_err, polygon_from_py,
            ENGINE,
        };

        fn api() -> Facade<'static, H3oEngine, $repr> {
            Facade::new(&ENGINE, <$repr>::default())
        }

        fn collection(
            result: Result<<$repr as Representation>::CollectionOut, HexError>,
        ) -> PyResult<$coll> {
            let $c = result.map_err(map_hex_err)?;
            Ok($coll_out)
        }

        #[pyfunction]
        pub fn is_valid(h: $id) -> PyResult<bool> {
            api().is_valid(h).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn resolution(h: $id) -> PyResult<u8> {
            api().resolution(h).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn geo_to_id(lat: f64, lng: f64, resolution: u8) -> PyResult<$out> {
            api().geo_to_id(lat, lng, resolution).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn id_to_geo(h: $id) -> PyResult<(f64, f64)> {
            api().id_to_geo(h).map(latlng_to_py).map_err(map_hex_err)
        }

        #[pyfunction]
        #[pyo3(signature = (h, geo_json = false))]
        pub fn id_to_boundary(h: $id, geo_json: bool) -> PyResult<Vec<(f64, f64)>> {
            api()
                .id_to_boundary(h, geo_json)
                .map(boundary_to_py)
                .map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn parent(h: $id, resolution: u8) -> PyResult<$out> {
            api().parent(h, resolution).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn children(h: $id, resolution: u8) -> PyResult<$coll> {
            collection(api().children(h, resolution))
        }

        #[pyfunction]
        #[pyo3(signature = (h, k = 1))]
        pub fn k_ring(h: $id, k: u32) -> PyResult<$coll> {
            collection(api().k_ring(h, k))
        }

        #[pyfunction]
        #[pyo3(signature = (h, k = 1))]
        pub fn hex_ring(h: $id, k: u32) -> PyResult<$coll> {
            collection(api().hex_ring(h, k))
        }

        #[pyfunction]
        pub fn distance(a: $id, b: $id) -> PyResult<i32> {
            api().distance(a, b).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn are_neighbors(a: $id, b: $id) -> PyResult<bool> {
            api().are_neighbors(a, b).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn is_pentagon(h: $id) -> PyResult<bool> {
            api().is_pentagon(h).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn base_cell(h: $id) -> PyResult<u8> {
            api().base_cell(h).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn compact($h: $ids) -> PyResult<$coll> {
            collection(api().compact($ids_in))
        }

        #[pyfunction]
        pub fn uncompact($h: $ids, resolution: u8) -> PyResult<$coll> {
            collection(api().uncompact($ids_in, resolution))
        }

        #[pyfunction]
        #[pyo3(signature = (outer, resolution, holes = None, geo_json = false))]
        pub fn polyfill(
            outer: Vec<(f64, f64)>,
            resolution: u8,
            holes: Option<Vec<Vec<(f64, f64)>>>,
            geo_json: bool,
        ) -> PyResult<$coll> {
            let polygon = polygon_from_py(outer, holes, geo_json);
            collection(api().polyfill(&polygon, resolution))
        }

        #[pyfunction]
        pub fn edge(origin: $id, destination: $id) -> PyResult<$out> {
            api().edge(origin, destination).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn is_edge(e: $id) -> PyResult<bool> {
            api().is_edge(e).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn edge_origin(e: $id) -> PyResult<$out> {
            api().edge_origin(e).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn edge_destination(e: $id) -> PyResult<$out> {
            api().edge_destination(e).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn edge_endpoints(e: $id) -> PyResult<($out, $out)> {
            api().edge_endpoints(e).map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn edges_from(origin: $id) -> PyResult<$coll> {
            collection(api().edges_from(origin))
        }

        #[pyfunction]
        pub fn edge_boundary(e: $id) -> PyResult<Vec<(f64, f64)>> {
            api()
                .edge_boundary(e)
                .map(boundary_to_py)
                .map_err(map_hex_err)
        }

        #[pyfunction]
        pub fn num_hexagons(resolution: u8) -> PyResult<u64> {
            api().num_hexagons(resolution).map_err(map_hex_err)
        }

        #[pyfunction]
        #[pyo3(signature = (resolution, unit = "km2"))]
        pub fn hex_area(resolution: u8, unit: &str) -> PyResult<f64> {
            api()
                .hex_area(resolution, area_unit(unit)?)
                .map_err(map_hex_err)
        }

        #[pyfunction]
        #[pyo3(signature = (resolution, unit = "km"))]
        pub fn edge_length(resolution: u8, unit: &str) -> PyResult<f64> {
            api()
                .edge_length(resolution, length_unit(unit)?)
                .map_err(map_hex_err)
        }

        pub fn register(m: &PyModule) -> PyResult<()> {
            m.add_function(wrap_pyfunction!(is_valid, m)?)?;
            m.add_function(wrap_pyfunction!(resolution, m)?)?;
            m.add_function(wrap_pyfunction!(geo_to_id, m)?)?;
            m.add_function(wrap_pyfunction!(id_to_geo, m)?)?;
            m.add_function(wrap_pyfunction!(id_to_boundary, m)?)?;
            m.add_function(wrap_pyfunction!(parent, m)?)?;
            m.add_function(wrap_pyfunction!(children, m)?)?;
            m.add_function(wrap_pyfunction!(k_ring, m)?)?;
            m.add_function(wrap_pyfunction!(hex_ring, m)?)?;
            m.add_function(wrap_pyfunction!(distance, m)?)?;
            m.add_function(wrap_pyfunction!(are_neighbors, m)?)?;
            m.add_function(wrap_pyfunction!(is_pentagon, m)?)?;
            m.add_function(wrap_pyfunction!(base_cell, m)?)?;
            m.add_function(wrap_pyfunction!(compact, m)?)?;
            m.add_function(wrap_pyfunction!(uncompact, m)?)?;
            m.add_function(wrap_pyfunction!(polyfill, m)?)?;
            m.add_function(wrap_pyfunction!(edge, m)?)?;
            m.add_function(wrap_pyfunction!(is_edge, m)?)?;
            m.add_function(wrap_pyfunction!(edge_origin, m)?)?;
            m.add_function(wrap_pyfunction!(edge_destination, m)?)?;
            m.add_function(wrap_pyfunction!(edge_endpoints, m)?)?;
            m.add_function(wrap_pyfunction!(edges_from, m)?)?;
            m.add_function(wrap_pyfunction!(edge_boundary, m)?)?;
            m.add_function(wrap_pyfunction!(num_hexagons, m)?)?;
            m.add_function(wrap_pyfunction!(hex_area, m)?)?;
            m.add_function(wrap_pyfunction!(edge_length, m)?)?;
            m.add("__validates__", api().repr().validates())?;
            Ok(())
        }
    };
}
