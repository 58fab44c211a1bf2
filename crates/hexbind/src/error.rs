//! Error taxonomy shared by the codec, the bulk buffer, the facades and engines.
//!
//! Three families, kept apart so callers can tell a bad input representation
//! from an engine rejection:
//! - `MalformedIdentifier`: text that is not a canonical hexadecimal identifier.
//! - `InvalidIdentifier`: a well-formed integer that is not a legal index
//!   (only raised when a representation asks for validation).
//! - `NativeError`: the engine refused an operation; passed through unchanged.

use std::fmt;

use crate::HexId;

/// Why a string failed to parse as an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    Empty,
    /// More than `MAX_HEX_DIGITS` characters.
    TooLong { len: usize },
    /// Byte offset of the first character outside `[0-9a-f]`.
    NonHex { at: usize },
    /// Hex digits, but not the form the codec renders (uppercase or zero-padded).
    NonCanonical,
}

/// A string that is not a canonical hexadecimal identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedIdentifier {
    pub input: String,
    /// Element index when raised by a bulk conversion.
    pub position: Option<usize>,
    pub reason: MalformedReason,
}

impl MalformedIdentifier {
    pub(crate) fn new(input: &str, reason: MalformedReason) -> Self {
        Self {
            input: input.to_owned(),
            position: None,
            reason,
        }
    }

    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for MalformedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed identifier {:?}", self.input)?;
        if let Some(pos) = self.position {
            write!(f, " at element {pos}")?;
        }
        match self.reason {
            MalformedReason::Empty => write!(f, ": empty string"),
            MalformedReason::TooLong { len } => {
                write!(f, ": {len} digits exceeds the 16-digit maximum")
            }
            MalformedReason::NonHex { at } => write!(f, ": non-hex character at offset {at}"),
            MalformedReason::NonCanonical => {
                write!(f, ": not in canonical lowercase, unpadded form")
            }
        }
    }
}

impl std::error::Error for MalformedIdentifier {}

/// Which structural rule an integer identifier breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// Bit 63 is set.
    ReservedBit,
    /// Mode is neither cell (1) nor directed edge (2).
    Mode(u8),
    /// A cell carries non-zero mode-dependent bits.
    CellReservedBits(u8),
    /// Edge direction outside 1..=6, or 1 on a pentagon origin.
    EdgeDirection(u8),
    BaseCell(u8),
    /// Digit 7 (or otherwise out of range) at or above the resolution.
    Digit { res: u8, digit: u8 },
    /// A digit past the resolution that is not 7.
    UnusedDigit { res: u8, digit: u8 },
    /// Pentagon whose first non-zero digit points along the deleted K axis.
    DeletedSubsequence,
}

/// A structurally well-formed integer that is not a legal hexagon index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidIdentifier {
    pub id: HexId,
    pub position: Option<usize>,
    pub reason: InvalidReason,
}

impl InvalidIdentifier {
    pub(crate) fn new(id: HexId, reason: InvalidReason) -> Self {
        Self {
            id,
            position: None,
            reason,
        }
    }

    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier {:x}", self.id)?;
        if let Some(pos) = self.position {
            write!(f, " at element {pos}")?;
        }
        match self.reason {
            InvalidReason::ReservedBit => write!(f, ": reserved high bit is set"),
            InvalidReason::Mode(mode) => write!(f, ": unsupported mode {mode}"),
            InvalidReason::CellReservedBits(bits) => {
                write!(f, ": cell has reserved bits {bits:#b} set")
            }
            InvalidReason::EdgeDirection(dir) => write!(f, ": illegal edge direction {dir}"),
            InvalidReason::BaseCell(cell) => write!(f, ": base cell {cell} out of range"),
            InvalidReason::Digit { res, digit } => {
                write!(f, ": digit {digit} at resolution {res} is out of range")
            }
            InvalidReason::UnusedDigit { res, digit } => {
                write!(f, ": unused digit at resolution {res} is {digit}, expected 7")
            }
            InvalidReason::DeletedSubsequence => {
                write!(f, ": pentagon index enters the deleted K-axis subsequence")
            }
        }
    }
}

impl std::error::Error for InvalidIdentifier {}

/// Rejection raised by a `HexEngine` implementation.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeError {
    InvalidCell(HexId),
    InvalidEdge(HexId),
    InvalidResolution(u8),
    InvalidLatLng { lat: f64, lng: f64 },
    InvalidGeometry(String),
    ResolutionMismatch,
    NotNeighbors { origin: HexId, destination: HexId },
    /// The engine does not provide this operation.
    Unsupported(&'static str),
    Failed(String),
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCell(id) => write!(f, "engine rejected cell {id:x}"),
            Self::InvalidEdge(id) => write!(f, "engine rejected edge {id:x}"),
            Self::InvalidResolution(res) => write!(f, "resolution {res} is not allowed here"),
            Self::InvalidLatLng { lat, lng } => {
                write!(f, "coordinate ({lat}, {lng}) is not a finite lat/lng")
            }
            Self::InvalidGeometry(reason) => write!(f, "invalid geometry: {reason}"),
            Self::ResolutionMismatch => write!(f, "operands have different resolutions"),
            Self::NotNeighbors {
                origin,
                destination,
            } => write!(f, "cells {origin:x} and {destination:x} are not neighbors"),
            Self::Unsupported(op) => write!(f, "engine does not support `{op}`"),
            Self::Failed(reason) => write!(f, "engine failure: {reason}"),
        }
    }
}

impl std::error::Error for NativeError {}

/// Error surfaced by every facade operation.
#[derive(Clone, Debug, PartialEq)]
pub enum HexError {
    Malformed(MalformedIdentifier),
    Invalid(InvalidIdentifier),
    Native(NativeError),
}

impl HexError {
    /// True when the caller's input was at fault (bad text or failed validation),
    /// false when the engine rejected a structurally valid request.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Invalid(_))
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => err.fmt(f),
            Self::Invalid(err) => err.fmt(f),
            Self::Native(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for HexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::Native(err) => Some(err),
        }
    }
}

impl From<MalformedIdentifier> for HexError {
    fn from(err: MalformedIdentifier) -> Self {
        Self::Malformed(err)
    }
}

impl From<InvalidIdentifier> for HexError {
    fn from(err: InvalidIdentifier) -> Self {
        Self::Invalid(err)
    }
}

impl From<NativeError> for HexError {
    fn from(err: NativeError) -> Self {
        Self::Native(err)
    }
}
