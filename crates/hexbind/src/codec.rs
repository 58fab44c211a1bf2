//! Identifier codec: canonical `u64` index <-> lowercase hexadecimal text.
//!
//! The textual form is the one the engine prints: lowercase, no `0x`, no zero
//! padding, at most 16 digits. Parsing only accepts that exact form so both
//! round-trip laws hold:
//! - `string_to_id(&id_to_string(id)) == Ok(id)` for every `u64`;
//! - `id_to_string(string_to_id(s)?) == s` for every accepted `s`.

use std::fmt;
use std::ops::Deref;

use crate::error::{MalformedIdentifier, MalformedReason};
use crate::HexId;

/// Maximum number of hex digits in a string identifier.
pub const MAX_HEX_DIGITS: usize = 16;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Stack-allocated rendering of one identifier.
///
/// Bulk conversions render through this so the only heap allocation per element
/// is whatever the output container needs.
#[derive(Clone, Copy)]
pub struct HexStr {
    buf: [u8; MAX_HEX_DIGITS],
    len: u8,
}

impl HexStr {
    #[inline]
    pub fn new(id: HexId) -> Self {
        let mut buf = [0u8; MAX_HEX_DIGITS];
        let len = if id == 0 {
            1
        } else {
            (64 - id.leading_zeros() as usize).div_ceil(4)
        };
        let mut rest = id;
        for slot in buf[..len].iter_mut().rev() {
            *slot = DIGITS[(rest & 0xf) as usize];
            rest >>= 4;
        }
        Self {
            buf,
            len: len as u8,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits from DIGITS are ever written.
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or_default()
    }
}

impl Deref for HexStr {
    type Target = str;
    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexStr({:?})", self.as_str())
    }
}

/// Render an identifier in canonical text form.
#[inline]
pub fn id_to_string(id: HexId) -> String {
    HexStr::new(id).as_str().to_owned()
}

/// Parse a canonical hexadecimal identifier.
pub fn string_to_id(s: &str) -> Result<HexId, MalformedIdentifier> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(MalformedIdentifier::new(s, MalformedReason::Empty));
    }
    if bytes.len() > MAX_HEX_DIGITS {
        return Err(MalformedIdentifier::new(
            s,
            MalformedReason::TooLong { len: bytes.len() },
        ));
    }
    let mut id: HexId = 0;
    let mut canonical = bytes.len() == 1 || bytes[0] != b'0';
    for (at, &b) in bytes.iter().enumerate() {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => {
                canonical = false;
                b - b'A' + 10
            }
            _ => return Err(MalformedIdentifier::new(s, MalformedReason::NonHex { at })),
        };
        id = (id << 4) | HexId::from(nibble);
    }
    if !canonical {
        return Err(MalformedIdentifier::new(s, MalformedReason::NonCanonical));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_engine_form() {
        assert_eq!(id_to_string(0x8928308280fffff), "8928308280fffff");
        assert_eq!(id_to_string(0), "0");
        assert_eq!(id_to_string(u64::MAX), "ffffffffffffffff");
        assert_eq!(id_to_string(0x10), "10");
    }

    #[test]
    fn parses_engine_form() {
        assert_eq!(string_to_id("8928308280fffff"), Ok(0x8928308280fffff));
        assert_eq!(string_to_id("ffffffffffffffff"), Ok(u64::MAX));
        assert_eq!(string_to_id("0"), Ok(0));
    }

    #[test]
    fn rejects_non_hex() {
        let err = string_to_id("zz").unwrap_err();
        assert_eq!(err.reason, MalformedReason::NonHex { at: 0 });
        let err = string_to_id("89283g").unwrap_err();
        assert_eq!(err.reason, MalformedReason::NonHex { at: 5 });
        assert!(string_to_id("0x892").is_err());
    }

    #[test]
    fn rejects_empty_and_too_long() {
        assert_eq!(
            string_to_id("").unwrap_err().reason,
            MalformedReason::Empty
        );
        assert_eq!(
            string_to_id("10000000000000000").unwrap_err().reason,
            MalformedReason::TooLong { len: 17 }
        );
    }

    #[test]
    fn rejects_non_canonical_forms() {
        assert_eq!(
            string_to_id("8928308280FFFFF").unwrap_err().reason,
            MalformedReason::NonCanonical
        );
        assert_eq!(
            string_to_id("08928308280fffff").unwrap_err().reason,
            MalformedReason::NonCanonical
        );
    }

    #[test]
    fn hex_str_derefs_without_allocating() {
        let s = HexStr::new(0x85283473fffffff);
        assert_eq!(&*s, "85283473fffffff");
        assert_eq!(s.len(), 15);
        assert_eq!(format!("{s}"), "85283473fffffff");
    }

    proptest! {
        #[test]
        fn every_u64_round_trips(id in any::<u64>()) {
            prop_assert_eq!(string_to_id(&id_to_string(id)), Ok(id));
        }

        #[test]
        fn accepted_strings_round_trip(s in "(0|[1-9a-f][0-9a-f]{0,15})") {
            let id = string_to_id(&s).unwrap();
            prop_assert_eq!(id_to_string(id), s);
        }

        #[test]
        fn rejected_strings_never_panic(s in "\\PC{0,20}") {
            if let Ok(id) = string_to_id(&s) {
                prop_assert_eq!(id_to_string(id), s);
            }
        }
    }
}
