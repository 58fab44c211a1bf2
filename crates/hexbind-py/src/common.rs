use hexbind::engine::h3o::H3oEngine;
use hexbind::geo::{AreaUnit, Boundary, GeoPolygon, LatLng, LengthUnit};
use hexbind::HexError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub static ENGINE: H3oEngine = H3oEngine;

pub fn map_hex_err(err: HexError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn latlng_to_py(p: LatLng) -> (f64, f64) {
    (p.lat, p.lng)
}

pub fn boundary_to_py(b: Boundary) -> Vec<(f64, f64)> {
    b.points
}

pub fn polygon_from_py(
    outer: Vec<(f64, f64)>,
    holes: Option<Vec<Vec<(f64, f64)>>>,
    geo_json: bool,
) -> GeoPolygon {
    GeoPolygon {
        outer,
        holes: holes.unwrap_or_default(),
        geo_json,
    }
}

pub fn area_unit(unit: &str) -> PyResult<AreaUnit> {
    match unit {
        "km2" => Ok(AreaUnit::Km2),
        "m2" => Ok(AreaUnit::M2),
        other => Err(PyValueError::new_err(format!(
            "unknown area unit {other:?}; expected 'km2' or 'm2'"
        ))),
    }
}

pub fn length_unit(unit: &str) -> PyResult<LengthUnit> {
    match unit {
        "km" => Ok(LengthUnit::Km),
        "m" => Ok(LengthUnit::M),
        other => Err(PyValueError::new_err(format!(
            "unknown length unit {other:?}; expected 'km' or 'm'"
        ))),
    }
}

/// Canonical hex text of an integer identifier.
#[pyfunction]
pub fn id_to_string(h: u64) -> String {
    hexbind::id_to_string(h)
}

/// Integer identifier from canonical hex text.
#[pyfunction]
pub fn string_to_id(s: &str) -> PyResult<u64> {
    hexbind::string_to_id(s).map_err(|err| PyValueError::new_err(err.to_string()))
}
