//! Shared fixtures for the integration tests: an identifier builder and a
//! recording engine with layout-consistent fake semantics.

#![allow(dead_code)]

use std::cell::RefCell;

use hexbind::engine::EngineResult;
use hexbind::validity::{self, MAX_RESOLUTION, MODE_CELL, MODE_EDGE};
use hexbind::{HexBuf, HexEngine, HexId, NativeError};

pub const UNUSED: u8 = 7;

/// Cell identifier with the given resolution, base cell and leading digits.
pub fn cell(res: u8, base: u8, digits: &[u8]) -> HexId {
    let mut id = (u64::from(MODE_CELL) << 59) | (u64::from(res) << 52) | (u64::from(base) << 45);
    for r in 1..=MAX_RESOLUTION {
        let d = if r <= res {
            digits.get(r as usize - 1).copied().unwrap_or(0)
        } else {
            UNUSED
        };
        id |= u64::from(d) << ((MAX_RESOLUTION - r) as u32 * 3);
    }
    id
}

pub fn directed_edge(origin: HexId, dir: u8) -> HexId {
    (origin & !(0xf << 59) & !(0x7 << 56)) | (u64::from(MODE_EDGE) << 59) | (u64::from(dir) << 56)
}

fn with_digit(id: HexId, r: u8, d: u8) -> HexId {
    let shift = (MAX_RESOLUTION - r) as u32 * 3;
    (id & !(0x7 << shift)) | (u64::from(d) << shift)
}

fn with_resolution(id: HexId, res: u8) -> HexId {
    (id & !(0xf << 52)) | (u64::from(res) << 52)
}

/// Fake engine that logs every dispatched operation by name.
#[derive(Default)]
pub struct RecordingEngine {
    log: RefCell<Vec<&'static str>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    fn record(&self, op: &'static str) {
        self.log.borrow_mut().push(op);
    }
}

impl HexEngine for RecordingEngine {
    fn is_valid(&self, h: HexId) -> EngineResult<bool> {
        self.record("is_valid");
        Ok(validity::is_structurally_valid(h) && validity::mode(h) == MODE_CELL)
    }

    fn resolution(&self, h: HexId) -> EngineResult<u8> {
        self.record("resolution");
        Ok(validity::resolution(h))
    }

    fn parent(&self, h: HexId, res: u8) -> EngineResult<HexId> {
        self.record("parent");
        let own = validity::resolution(h);
        if res > own {
            return Err(NativeError::InvalidResolution(res));
        }
        let mut id = with_resolution(h, res);
        for r in res + 1..=own {
            id = with_digit(id, r, UNUSED);
        }
        Ok(id)
    }

    fn children(&self, h: HexId, res: u8) -> EngineResult<HexBuf> {
        self.record("children");
        let own = validity::resolution(h);
        if res < own || res > MAX_RESOLUTION {
            return Err(NativeError::InvalidResolution(res));
        }
        let mut level = vec![h];
        for r in own + 1..=res {
            level = level
                .into_iter()
                .flat_map(|id| (0..UNUSED).map(move |d| with_digit(with_resolution(id, r), r, d)))
                .collect();
        }
        Ok(HexBuf::from_vec(level))
    }

    /// Siblings under the shared parent, with `h` repeated at the end.
    fn k_ring(&self, h: HexId, _k: u32) -> EngineResult<HexBuf> {
        self.record("k_ring");
        let res = validity::resolution(h);
        if res == 0 {
            return Ok(HexBuf::from_vec(vec![h, h]));
        }
        let mut out: Vec<HexId> = (0..UNUSED).map(|d| with_digit(h, res, d)).collect();
        out.push(h);
        Ok(HexBuf::from_vec(out))
    }

    fn compact(&self, hexes: &[HexId]) -> EngineResult<HexBuf> {
        self.record("compact");
        Ok(hexes.iter().copied().collect())
    }

    fn edge_origin(&self, e: HexId) -> EngineResult<HexId> {
        self.record("edge_origin");
        Ok((e & !(0xf << 59) & !(0x7 << 56)) | (u64::from(MODE_CELL) << 59))
    }

    fn edges_from(&self, origin: HexId) -> EngineResult<HexBuf> {
        self.record("edges_from");
        Ok((1..=6).map(|dir| directed_edge(origin, dir)).collect())
    }

    fn num_hexagons(&self, res: u8) -> EngineResult<u64> {
        self.record("num_hexagons");
        if res > MAX_RESOLUTION {
            return Err(NativeError::InvalidResolution(res));
        }
        Ok(2 + 120 * 7u64.pow(u32::from(res)))
    }
}
