//! Structural validity of canonical identifiers.
//!
//! These checks only read the bit layout (mode, reserved bits, resolution,
//! base cell, digit pattern); they never consult grid geometry. They back the
//! validation gate of facades configured with `validates() == true` and
//! `HexBuf::from_ints(.., true)`.
//!
//! Layout (high to low): reserved bit 63, mode 59..=62, mode-dependent
//! 56..=58, resolution 52..=55, base cell 45..=51, then fifteen 3-bit digits.

use crate::error::{InvalidIdentifier, InvalidReason};
use crate::HexId;

pub const MAX_RESOLUTION: u8 = 15;
pub const NUM_BASE_CELLS: u8 = 122;

pub const MODE_CELL: u8 = 1;
pub const MODE_EDGE: u8 = 2;

/// Base cells whose center is a pentagon.
const PENTAGON_BASE_CELLS: [u8; 12] = [4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117];

const UNUSED_DIGIT: u8 = 7;
const K_AXES_DIGIT: u8 = 1;

#[inline]
pub fn mode(id: HexId) -> u8 {
    ((id >> 59) & 0xf) as u8
}

#[inline]
pub fn resolution(id: HexId) -> u8 {
    ((id >> 52) & 0xf) as u8
}

#[inline]
pub fn base_cell(id: HexId) -> u8 {
    ((id >> 45) & 0x7f) as u8
}

/// Mode-dependent bits: zero for cells, the direction for edges.
#[inline]
pub fn mode_bits(id: HexId) -> u8 {
    ((id >> 56) & 0x7) as u8
}

/// Digit at resolution `res`; `None` outside `1..=MAX_RESOLUTION`.
#[inline]
pub fn digit(id: HexId, res: u8) -> Option<u8> {
    (1..=MAX_RESOLUTION).contains(&res).then(|| digit_at(id, res))
}

/// Unchecked digit read; `res` must be in `1..=MAX_RESOLUTION`.
#[inline]
fn digit_at(id: HexId, res: u8) -> u8 {
    ((id >> ((MAX_RESOLUTION - res) as u32 * 3)) & 0x7) as u8
}

pub fn is_structurally_valid(id: HexId) -> bool {
    check(id).is_ok()
}

/// Check one identifier (cell or directed edge).
pub fn check(id: HexId) -> Result<(), InvalidIdentifier> {
    if id >> 63 != 0 {
        return Err(InvalidIdentifier::new(id, InvalidReason::ReservedBit));
    }
    match mode(id) {
        MODE_CELL => {
            let bits = mode_bits(id);
            if bits != 0 {
                return Err(InvalidIdentifier::new(
                    id,
                    InvalidReason::CellReservedBits(bits),
                ));
            }
            check_digits(id)
        }
        MODE_EDGE => {
            let dir = mode_bits(id);
            if dir == 0 || dir > 6 {
                return Err(InvalidIdentifier::new(id, InvalidReason::EdgeDirection(dir)));
            }
            check_digits(id)?;
            if dir == K_AXES_DIGIT && is_pentagon_center(id) {
                return Err(InvalidIdentifier::new(id, InvalidReason::EdgeDirection(dir)));
            }
            Ok(())
        }
        other => Err(InvalidIdentifier::new(id, InvalidReason::Mode(other))),
    }
}

/// Check every element, reporting the first failure with its position.
pub fn check_all(ids: &[HexId]) -> Result<(), InvalidIdentifier> {
    for (pos, &id) in ids.iter().enumerate() {
        check(id).map_err(|err| err.at(pos))?;
    }
    Ok(())
}

fn check_digits(id: HexId) -> Result<(), InvalidIdentifier> {
    let bc = base_cell(id);
    if bc >= NUM_BASE_CELLS {
        return Err(InvalidIdentifier::new(id, InvalidReason::BaseCell(bc)));
    }
    let res = resolution(id);
    let mut on_pentagon_axis = PENTAGON_BASE_CELLS.contains(&bc);
    for r in 1..=res {
        let d = digit_at(id, r);
        if d == UNUSED_DIGIT {
            return Err(InvalidIdentifier::new(
                id,
                InvalidReason::Digit { res: r, digit: d },
            ));
        }
        if on_pentagon_axis && d != 0 {
            if d == K_AXES_DIGIT {
                return Err(InvalidIdentifier::new(id, InvalidReason::DeletedSubsequence));
            }
            on_pentagon_axis = false;
        }
    }
    for r in res + 1..=MAX_RESOLUTION {
        let d = digit_at(id, r);
        if d != UNUSED_DIGIT {
            return Err(InvalidIdentifier::new(
                id,
                InvalidReason::UnusedDigit { res: r, digit: d },
            ));
        }
    }
    Ok(())
}

fn is_pentagon_center(id: HexId) -> bool {
    PENTAGON_BASE_CELLS.contains(&base_cell(id)) && (1..=resolution(id)).all(|r| digit_at(id, r) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(res: u8, base: u8, digits: &[u8]) -> HexId {
        let mut id = (u64::from(MODE_CELL) << 59) | (u64::from(res) << 52) | (u64::from(base) << 45);
        for r in 1..=MAX_RESOLUTION {
            let d = digits.get(r as usize - 1).copied().unwrap_or(UNUSED_DIGIT);
            id |= u64::from(d) << ((MAX_RESOLUTION - r) as u32 * 3);
        }
        id
    }

    fn edge(origin: HexId, dir: u8) -> HexId {
        (origin & !(0xf << 59) & !(0x7 << 56)) | (u64::from(MODE_EDGE) << 59) | (u64::from(dir) << 56)
    }

    #[test]
    fn reads_fields_of_known_cell() {
        let id = 0x8928308280fffff;
        assert_eq!(mode(id), MODE_CELL);
        assert_eq!(resolution(id), 9);
        assert_eq!(base_cell(id), 20);
        assert!(check(id).is_ok());
    }

    #[test]
    fn digit_is_checked_outside_resolution_range() {
        let id = 0x8928308280fffff;
        assert_eq!(digit(id, 2), Some(6));
        assert_eq!(digit(id, 9), Some(3));
        assert_eq!(digit(id, 10), Some(UNUSED_DIGIT));
        assert_eq!(digit(id, 0), None);
        assert_eq!(digit(id, 16), None);
        assert_eq!(digit(id, u8::MAX), None);
    }

    #[test]
    fn res0_pentagon_is_valid() {
        assert!(is_structurally_valid(0x8009fffffffffff));
        assert_eq!(cell(0, 4, &[]), 0x8009fffffffffff);
    }

    #[test]
    fn rejects_reserved_and_mode() {
        let id = 0x8928308280fffff;
        assert_eq!(
            check(id | 1 << 63).unwrap_err().reason,
            InvalidReason::ReservedBit
        );
        assert_eq!(check(0).unwrap_err().reason, InvalidReason::Mode(0));
        assert_eq!(
            check(id | 1 << 56).unwrap_err().reason,
            InvalidReason::CellReservedBits(1)
        );
    }

    #[test]
    fn rejects_bad_digits() {
        assert_eq!(
            check(cell(2, 20, &[3, 7])).unwrap_err().reason,
            InvalidReason::Digit { res: 2, digit: 7 }
        );
        assert_eq!(
            check(cell(1, 20, &[3, 2])).unwrap_err().reason,
            InvalidReason::UnusedDigit { res: 2, digit: 2 }
        );
        assert_eq!(
            check(cell(0, 122, &[])).unwrap_err().reason,
            InvalidReason::BaseCell(122)
        );
    }

    #[test]
    fn pentagon_deleted_subsequence() {
        assert_eq!(
            check(cell(2, 4, &[0, 1])).unwrap_err().reason,
            InvalidReason::DeletedSubsequence
        );
        assert!(check(cell(2, 4, &[0, 2])).is_ok());
        assert!(check(cell(2, 4, &[2, 1])).is_ok());
        // Same digits on a hexagon base cell are fine.
        assert!(check(cell(2, 20, &[0, 1])).is_ok());
    }

    #[test]
    fn edges() {
        let origin = 0x8928308280fffff;
        for dir in 1..=6 {
            assert!(check(edge(origin, dir)).is_ok(), "direction {dir}");
        }
        assert_eq!(
            check(edge(origin, 0)).unwrap_err().reason,
            InvalidReason::EdgeDirection(0)
        );
        assert_eq!(
            check(edge(origin, 7)).unwrap_err().reason,
            InvalidReason::EdgeDirection(7)
        );
        let pentagon = cell(1, 4, &[0]);
        assert_eq!(
            check(edge(pentagon, 1)).unwrap_err().reason,
            InvalidReason::EdgeDirection(1)
        );
        assert!(check(edge(pentagon, 2)).is_ok());
    }

    #[test]
    fn check_all_reports_position() {
        let good = 0x8928308280fffff;
        let err = check_all(&[good, good, 0, good]).unwrap_err();
        assert_eq!(err.position, Some(2));
        assert!(check_all(&[]).is_ok());
    }
}
