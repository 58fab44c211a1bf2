//! `HexEngine` over the pure-Rust `h3o` crate.
//!
//! Calls are mapped one-to-one; h3o's typed errors are folded into
//! `NativeError`. `polyfill` hands the rings to h3o's own tiler
//! (`geom::Polygon`, centroid containment), which also handles rings that
//! cross the antimeridian.

use ::h3o::geom::{PolyfillConfig, Polygon as H3Polygon, ToCells};
use ::h3o::{CellIndex, DirectedEdgeIndex, LatLng as H3LatLng, Resolution};
use geo_types::{Coord, LineString, Polygon};

use super::{EngineResult, HexEngine};
use crate::bulk::HexBuf;
use crate::error::NativeError;
use crate::geo::{AreaUnit, Boundary, GeoPolygon, LatLng, LengthUnit};
use crate::HexId;

#[derive(Clone, Copy, Debug, Default)]
pub struct H3oEngine;

fn cell(id: HexId) -> EngineResult<CellIndex> {
    CellIndex::try_from(id).map_err(|_| NativeError::InvalidCell(id))
}

fn directed_edge(id: HexId) -> EngineResult<DirectedEdgeIndex> {
    DirectedEdgeIndex::try_from(id).map_err(|_| NativeError::InvalidEdge(id))
}

fn resolution(res: u8) -> EngineResult<Resolution> {
    Resolution::try_from(res).map_err(|_| NativeError::InvalidResolution(res))
}

fn cells(ids: &[HexId]) -> EngineResult<Vec<CellIndex>> {
    ids.iter().map(|&id| cell(id)).collect()
}

fn to_native(p: LatLng) -> EngineResult<H3LatLng> {
    H3LatLng::new(p.lat, p.lng).map_err(|_| NativeError::InvalidLatLng {
        lat: p.lat,
        lng: p.lng,
    })
}

fn from_native(ll: H3LatLng) -> LatLng {
    LatLng::new(ll.lat(), ll.lng())
}

/// Ring as a geo line string: `x` is longitude, `y` latitude.
fn line_string(ring: &[LatLng]) -> LineString<f64> {
    ring.iter()
        .map(|p| Coord { x: p.lng, y: p.lat })
        .collect::<Vec<_>>()
        .into()
}

fn to_tiler(polygon: &GeoPolygon) -> EngineResult<H3Polygon> {
    let outer = polygon.ring_latlng(&polygon.outer);
    if outer.len() < 3 {
        return Err(NativeError::InvalidGeometry(format!(
            "outer ring has {} vertices, need at least 3",
            outer.len()
        )));
    }
    let holes = polygon
        .holes
        .iter()
        .map(|ring| line_string(&polygon.ring_latlng(ring)))
        .collect();
    H3Polygon::from_degrees(Polygon::new(line_string(&outer), holes))
        .map_err(|err| NativeError::InvalidGeometry(err.to_string()))
}

impl HexEngine for H3oEngine {
    fn is_valid(&self, h: HexId) -> EngineResult<bool> {
        Ok(CellIndex::try_from(h).is_ok())
    }

    fn resolution(&self, h: HexId) -> EngineResult<u8> {
        Ok(u8::from(cell(h)?.resolution()))
    }

    fn geo_to_id(&self, lat: f64, lng: f64, res: u8) -> EngineResult<HexId> {
        let ll = to_native(LatLng::new(lat, lng))?;
        Ok(u64::from(ll.to_cell(resolution(res)?)))
    }

    fn id_to_geo(&self, h: HexId) -> EngineResult<LatLng> {
        Ok(from_native(H3LatLng::from(cell(h)?)))
    }

    fn id_to_boundary(&self, h: HexId, geo_json: bool) -> EngineResult<Boundary> {
        let boundary = cell(h)?.boundary();
        Ok(Boundary::from_vertices(
            boundary.iter().copied().map(from_native),
            geo_json,
        ))
    }

    fn parent(&self, h: HexId, res: u8) -> EngineResult<HexId> {
        cell(h)?
            .parent(resolution(res)?)
            .map(u64::from)
            .ok_or(NativeError::InvalidResolution(res))
    }

    fn children(&self, h: HexId, res: u8) -> EngineResult<HexBuf> {
        let c = cell(h)?;
        let target = resolution(res)?;
        if target < c.resolution() {
            return Err(NativeError::InvalidResolution(res));
        }
        Ok(c.children(target).map(u64::from).collect())
    }

    fn k_ring(&self, h: HexId, k: u32) -> EngineResult<HexBuf> {
        let disk: Vec<CellIndex> = cell(h)?.grid_disk(k);
        Ok(disk.into_iter().map(u64::from).collect())
    }

    fn hex_ring(&self, h: HexId, k: u32) -> EngineResult<HexBuf> {
        let disk: Vec<(CellIndex, u32)> = cell(h)?.grid_disk_distances(k);
        Ok(disk
            .into_iter()
            .filter(|&(_, d)| d == k)
            .map(|(c, _)| u64::from(c))
            .collect())
    }

    fn distance(&self, a: HexId, b: HexId) -> EngineResult<i32> {
        cell(a)?
            .grid_distance(cell(b)?)
            .map_err(|err| NativeError::Failed(err.to_string()))
    }

    fn are_neighbors(&self, a: HexId, b: HexId) -> EngineResult<bool> {
        cell(a)?
            .is_neighbor_with(cell(b)?)
            .map_err(|_| NativeError::ResolutionMismatch)
    }

    fn is_pentagon(&self, h: HexId) -> EngineResult<bool> {
        Ok(cell(h)?.is_pentagon())
    }

    fn base_cell(&self, h: HexId) -> EngineResult<u8> {
        Ok(u8::from(cell(h)?.base_cell()))
    }

    fn compact(&self, hexes: &[HexId]) -> EngineResult<HexBuf> {
        let compacted =
            CellIndex::compact(cells(hexes)?).map_err(|err| NativeError::Failed(err.to_string()))?;
        Ok(compacted.map(u64::from).collect())
    }

    fn uncompact(&self, hexes: &[HexId], res: u8) -> EngineResult<HexBuf> {
        let target = resolution(res)?;
        let input = cells(hexes)?;
        if input.iter().any(|c| c.resolution() > target) {
            return Err(NativeError::InvalidResolution(res));
        }
        Ok(CellIndex::uncompact(input, target).map(u64::from).collect())
    }

    fn polyfill(&self, polygon: &GeoPolygon, res: u8) -> EngineResult<HexBuf> {
        let config = PolyfillConfig::new(resolution(res)?);
        Ok(to_tiler(polygon)?
            .to_cells(config)
            .map(u64::from)
            .collect())
    }

    fn edge(&self, origin: HexId, destination: HexId) -> EngineResult<HexId> {
        cell(origin)?
            .edge(cell(destination)?)
            .map(u64::from)
            .ok_or(NativeError::NotNeighbors {
                origin,
                destination,
            })
    }

    fn is_edge(&self, e: HexId) -> EngineResult<bool> {
        Ok(DirectedEdgeIndex::try_from(e).is_ok())
    }

    fn edge_origin(&self, e: HexId) -> EngineResult<HexId> {
        Ok(u64::from(directed_edge(e)?.origin()))
    }

    fn edge_destination(&self, e: HexId) -> EngineResult<HexId> {
        Ok(u64::from(directed_edge(e)?.destination()))
    }

    fn edge_endpoints(&self, e: HexId) -> EngineResult<(HexId, HexId)> {
        let (origin, destination) = directed_edge(e)?.cells();
        Ok((u64::from(origin), u64::from(destination)))
    }

    fn edges_from(&self, origin: HexId) -> EngineResult<HexBuf> {
        Ok(cell(origin)?.edges().map(u64::from).collect())
    }

    fn edge_boundary(&self, e: HexId) -> EngineResult<Boundary> {
        let boundary = directed_edge(e)?.boundary();
        Ok(Boundary::from_vertices(
            boundary.iter().copied().map(from_native),
            false,
        ))
    }

    fn num_hexagons(&self, res: u8) -> EngineResult<u64> {
        Ok(resolution(res)?.cell_count())
    }

    fn hex_area(&self, res: u8, unit: AreaUnit) -> EngineResult<f64> {
        let r = resolution(res)?;
        Ok(match unit {
            AreaUnit::Km2 => r.area_km2(),
            AreaUnit::M2 => r.area_m2(),
        })
    }

    fn edge_length(&self, res: u8, unit: LengthUnit) -> EngineResult<f64> {
        let r = resolution(res)?;
        Ok(match unit {
            LengthUnit::Km => r.edge_length_km(),
            LengthUnit::M => r.edge_length_m(),
        })
    }
}
