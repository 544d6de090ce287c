//! Board store — the file-backed storage collaborator.
//!
//! A board is persisted as exactly the kernel's boundary format: its
//! dimensions, the packed byte-per-cell state, and the SHA-256 fingerprint
//! of that state. Layout:
//!
//!   <root>/<id>/board.json   — record (id, rows, columns, state_hash)
//!   <root>/<id>/state.bin    — packed cells, one byte each
//!
//! Rules:
//!   - fsync after every write
//!   - fingerprint recomputed and verified on every load
//!   - unknown id is `Ok(None)`, corruption is an error

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use life_engine::board::Board;
use life_engine::codec::{self, CodecError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible board store failures.
#[derive(Debug)]
pub enum StoreError {
    /// File I/O error.
    Io(String),
    /// `board.json` is malformed or inconsistent.
    Record(String),
    /// `state.bin` does not match the recorded dimensions.
    State(String),
    /// Recomputed fingerprint differs from the recorded one.
    HashMismatch { expected: String, actual: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "IoError: {}", msg),
            StoreError::Record(msg) => write!(f, "RecordError: {}", msg),
            StoreError::State(msg) => write!(f, "StateError: {}", msg),
            StoreError::HashMismatch { expected, actual } => write!(
                f,
                "HashMismatch: recorded {} but state hashes to {}",
                expected, actual
            ),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<CodecError> for StoreError {
    fn from(err: CodecError) -> Self {
        StoreError::State(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// On-disk metadata for one stored board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardRecord {
    pub id: Uuid,
    pub rows: usize,
    pub columns: usize,
    /// Lowercase hex SHA-256 of `state.bin`.
    pub state_hash: String,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// File-backed board store rooted at one directory.
pub struct BoardStore {
    root: PathBuf,
}

impl BoardStore {
    /// Open or create a store at the given root directory.
    pub fn open(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn board_dir(&self, id: Uuid) -> PathBuf {
        self.root.join(id.to_string())
    }

    /// Persist a board's dimensions, packed state, and fingerprint under a
    /// freshly assigned id.
    pub fn insert(&self, board: &Board) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let dir = self.board_dir(id);
        fs::create_dir_all(&dir)?;

        let started = Instant::now();
        let packed = codec::pack(board);
        let hash = codec::hash(&packed);

        let record = BoardRecord {
            id,
            rows: board.rows(),
            columns: board.columns(),
            state_hash: hash.to_hex(),
        };
        let record_json = serde_json::to_string(&record)
            .map_err(|e| StoreError::Record(e.to_string()))?;

        write_synced(&dir.join("state.bin"), &packed)?;
        write_synced(&dir.join("board.json"), record_json.as_bytes())?;

        log::info!(
            "stored board {} ({}x{}, hash {}) in {} ms",
            id,
            board.rows(),
            board.columns(),
            record.state_hash,
            started.elapsed().as_millis()
        );
        Ok(id)
    }

    /// Load a board by id. `Ok(None)` if the id is unknown.
    ///
    /// The packed state is unpacked against the recorded dimensions and its
    /// fingerprint re-verified, so a tampered or truncated file surfaces as
    /// an error rather than a wrong board.
    pub fn load(&self, id: Uuid) -> Result<Option<Board>, StoreError> {
        let dir = self.board_dir(id);
        if !dir.exists() {
            return Ok(None);
        }

        let started = Instant::now();
        let record_json = fs::read_to_string(dir.join("board.json"))?;
        let record: BoardRecord = serde_json::from_str(&record_json)
            .map_err(|e| StoreError::Record(e.to_string()))?;
        if record.id != id {
            return Err(StoreError::Record(format!(
                "record id {} does not match directory id {}",
                record.id, id
            )));
        }

        let packed = fs::read(dir.join("state.bin"))?;
        let board = codec::unpack(&packed, record.rows, record.columns)?;

        let actual = codec::hash(&packed).to_hex();
        if actual != record.state_hash {
            return Err(StoreError::HashMismatch {
                expected: record.state_hash,
                actual,
            });
        }

        log::debug!(
            "loaded board {} ({}x{}) in {} ms",
            id,
            record.rows,
            record.columns,
            started.elapsed().as_millis()
        );
        Ok(Some(board))
    }
}

/// Write a whole file and fsync it.
fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
