//! Packed-state codec — flat binary encoding and SHA-256 fingerprints.
//!
//! The packed form is one byte per cell (`1` alive, `0` dead), row-major,
//! row 0 first. It is the boundary format the storage layer persists, and
//! the unit the state hash is computed over.
//!
//! `unpack(pack(g), rows, columns) == g` for any board of matching shape.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::board::Board;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible codec failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Packed buffer length does not equal `rows * columns`.
    LengthMismatch { expected: usize, actual: usize },
    /// A hex fingerprint string could not be parsed.
    MalformedHash(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::LengthMismatch { expected, actual } => write!(
                f,
                "packed state does not match expected dimensions: expected {} bytes, got {}",
                expected, actual
            ),
            CodecError::MalformedHash(msg) => {
                write!(f, "malformed state hash: {}", msg)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// StateHash
// ---------------------------------------------------------------------------

/// SHA-256 fingerprint of a packed board state.
///
/// Two boards are considered identical iff their fingerprints match;
/// collision probability is treated as negligible.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateHash([u8; 32]);

impl StateHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse the lowercase hex form produced by [`StateHash::to_hex`].
    pub fn from_hex(hex: &str) -> Result<Self, CodecError> {
        if hex.len() != 64 || !hex.is_ascii() {
            return Err(CodecError::MalformedHash(format!(
                "expected 64 hex characters, got {}",
                hex.len()
            )));
        }
        let mut bytes = [0u8; 32];
        for (index, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[index * 2..index * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| {
                CodecError::MalformedHash(format!("invalid hex pair {:?}", pair))
            })?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for StateHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for StateHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateHash({})", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Pack / hash / unpack
// ---------------------------------------------------------------------------

/// Flatten a board row-major into one byte per cell, `1` alive, `0` dead.
pub fn pack(board: &Board) -> Vec<u8> {
    board.cells().iter().map(|&cell| cell as u8).collect()
}

/// SHA-256 over the exact byte sequence.
pub fn hash(packed: &[u8]) -> StateHash {
    StateHash(Sha256::digest(packed).into())
}

/// Fingerprint of a board's current state: `hash(pack(board))`.
pub fn state_hash(board: &Board) -> StateHash {
    hash(&pack(board))
}

/// Inverse of [`pack`]. Fails when the buffer length does not equal
/// `rows * columns` — the only validation the kernel performs on
/// persisted input.
pub fn unpack(packed: &[u8], rows: usize, columns: usize) -> Result<Board, CodecError> {
    let expected = rows * columns;
    if packed.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: packed.len(),
        });
    }
    let cells = packed.iter().map(|&byte| byte == 1).collect();
    Ok(Board::from_flat(rows, columns, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SHA-256 of the empty input — the standard test vector.
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn two_by_three() -> Board {
        Board::from_rows(&[vec![true, false, false], vec![false, true, true]]).unwrap()
    }

    #[test]
    fn pack_is_row_major_one_byte_per_cell() {
        let packed = pack(&two_by_three());
        assert_eq!(packed, vec![1, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn round_trip_preserves_every_cell() {
        let board = two_by_three();
        let restored = unpack(&pack(&board), board.rows(), board.columns()).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        match unpack(&[1, 0, 1], 2, 2) {
            Err(CodecError::LengthMismatch {
                expected: 4,
                actual: 3,
            }) => {}
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn hash_is_deterministic_and_content_sensitive() {
        let a = two_by_three();
        let mut b = two_by_three();
        assert_eq!(state_hash(&a), state_hash(&b));

        b.set(0, 1, true);
        assert_ne!(state_hash(&a), state_hash(&b));
    }

    #[test]
    fn hash_matches_known_vector() {
        assert_eq!(hash(&[]).to_hex(), EMPTY_SHA256);
    }

    #[test]
    fn hex_round_trips() {
        let fingerprint = state_hash(&two_by_three());
        let hex = fingerprint.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(StateHash::from_hex(&hex).unwrap(), fingerprint);
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(StateHash::from_hex("abc").is_err());
        assert!(StateHash::from_hex(&"zz".repeat(32)).is_err());
    }
}
