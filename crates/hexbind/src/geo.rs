//! Coordinate and geometry values passed through the facades unchanged.

use serde::{Deserialize, Serialize};

/// Latitude/longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Cell or edge outline.
///
/// `(lat, lng)` pairs in an open loop, or with `geo_json` set, `(lng, lat)`
/// pairs in a closed loop (first point repeated last).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub points: Vec<(f64, f64)>,
    pub geo_json: bool,
}

impl Boundary {
    /// Build from engine vertices in the requested convention.
    pub fn from_vertices<I>(vertices: I, geo_json: bool) -> Self
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points: Vec<(f64, f64)> = vertices
            .into_iter()
            .map(|v| if geo_json { (v.lng, v.lat) } else { (v.lat, v.lng) })
            .collect();
        if geo_json {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        Self { points, geo_json }
    }

    /// Vertices as `LatLng` regardless of convention (closing point dropped).
    pub fn vertices(&self) -> Vec<LatLng> {
        let n = if self.geo_json {
            self.points.len().saturating_sub(1)
        } else {
            self.points.len()
        };
        self.points[..n]
            .iter()
            .map(|&(a, b)| {
                if self.geo_json {
                    LatLng::new(b, a)
                } else {
                    LatLng::new(a, b)
                }
            })
            .collect()
    }

    /// `(min, max)` corners of the lat/lng bounding box.
    pub fn bbox(&self) -> Option<(LatLng, LatLng)> {
        let verts = self.vertices();
        let first = *verts.first()?;
        let (mut lo, mut hi) = (first, first);
        for v in &verts[1..] {
            lo.lat = lo.lat.min(v.lat);
            lo.lng = lo.lng.min(v.lng);
            hi.lat = hi.lat.max(v.lat);
            hi.lng = hi.lng.max(v.lng);
        }
        Some((lo, hi))
    }
}

/// Polygon with optional holes, used by `polyfill`.
///
/// Rings follow the same convention switch as `Boundary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPolygon {
    pub outer: Vec<(f64, f64)>,
    #[serde(default)]
    pub holes: Vec<Vec<(f64, f64)>>,
    #[serde(default)]
    pub geo_json: bool,
}

impl GeoPolygon {
    pub fn new(outer: Vec<(f64, f64)>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
            geo_json: false,
        }
    }

    /// Ring as `LatLng` regardless of convention.
    pub fn ring_latlng(&self, ring: &[(f64, f64)]) -> Vec<LatLng> {
        ring.iter()
            .map(|&(a, b)| {
                if self.geo_json {
                    LatLng::new(b, a)
                } else {
                    LatLng::new(a, b)
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Km2,
    M2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Km,
    M,
}
