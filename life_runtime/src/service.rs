//! Board service — loads a board, invokes one kernel operation, returns
//! the result.
//!
//! No domain logic lives here; the transition rule and cycle detection are
//! delegated entirely to the kernel. The service enforces the configured
//! request caps and owns the logging around each computation.

use std::fmt;

use uuid::Uuid;

use life_engine::board::Board;
use life_engine::codec::StateHash;
use life_engine::runner::{self, EndReason};

use crate::settings::Settings;
use crate::store::{BoardStore, StoreError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible service failures.
#[derive(Debug)]
pub enum ServiceError {
    /// Underlying store failure.
    Store(StoreError),
    /// Board dimensions exceed the configured caps.
    BoardTooLarge {
        rows: usize,
        columns: usize,
        max_rows: usize,
        max_columns: usize,
    },
    /// Requested iteration count outside `1..=max_iterations`.
    IterationsOutOfRange { requested: u32, max: u32 },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Store(err) => write!(f, "StoreError: {}", err),
            ServiceError::BoardTooLarge {
                rows,
                columns,
                max_rows,
                max_columns,
            } => write!(
                f,
                "board is {}x{} but at most {}x{} is accepted",
                rows, columns, max_rows, max_columns
            ),
            ServiceError::IterationsOutOfRange { requested, max } => write!(
                f,
                "iterations must be between 1 and {}, got {}",
                max, requested
            ),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

// ---------------------------------------------------------------------------
// Result of a bounded run
// ---------------------------------------------------------------------------

/// Outcome of `stable_or_final` for one board.
#[derive(Debug, Clone)]
pub struct FinalIteration {
    pub id: Uuid,
    pub board: Board,
    pub hash: StateHash,
    pub iterations: u32,
    pub end_reason: EndReason,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct BoardService {
    store: BoardStore,
    settings: Settings,
}

impl BoardService {
    pub fn new(store: BoardStore, settings: Settings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Persist a new board and return its freshly assigned id.
    pub fn insert_board(&self, board: &Board) -> Result<Uuid, ServiceError> {
        if board.rows() > self.settings.max_rows
            || board.columns() > self.settings.max_columns
        {
            return Err(ServiceError::BoardTooLarge {
                rows: board.rows(),
                columns: board.columns(),
                max_rows: self.settings.max_rows,
                max_columns: self.settings.max_columns,
            });
        }

        let id = self.store.insert(board)?;
        log::info!("board inserted with id {}", id);
        Ok(id)
    }

    /// Next generation of an existing board. `Ok(None)` if the id is unknown.
    pub fn next_iteration(&self, id: Uuid) -> Result<Option<Board>, ServiceError> {
        let Some(board) = self.store.load(id)? else {
            return Ok(None);
        };

        log::debug!("computing next iteration for board {}", id);
        let (next, hash) = runner::advance_one(&board);
        log::info!("computed next iteration for board {} (hash {})", id, hash);
        Ok(Some(next))
    }

    /// Board state after `iterations` generations. `Ok(None)` if the id is
    /// unknown; rejects counts outside the configured cap.
    pub fn after_iterations(
        &self,
        id: Uuid,
        iterations: u32,
    ) -> Result<Option<Board>, ServiceError> {
        self.check_iterations(iterations)?;

        let Some(board) = self.store.load(id)? else {
            return Ok(None);
        };

        log::debug!("computing {} iterations for board {}", iterations, id);
        let (final_board, hash) = runner::advance_n(&board, iterations);
        log::info!(
            "computed {} iterations for board {} (hash {})",
            iterations,
            id,
            hash
        );
        Ok(Some(final_board))
    }

    /// Run an existing board until it stabilizes, revisits an earlier state,
    /// or exhausts `max_iterations`.
    pub fn stable_or_final(
        &self,
        id: Uuid,
        max_iterations: u32,
    ) -> Result<Option<FinalIteration>, ServiceError> {
        self.check_iterations(max_iterations)?;

        let Some(board) = self.store.load(id)? else {
            return Ok(None);
        };

        log::debug!("computing stable iteration for board {}", id);
        let outcome = runner::run_until_stable_or_cycle(&board, max_iterations);
        log::info!(
            "computed stable iteration for board {}: {} after {} iterations",
            id,
            outcome.end_reason,
            outcome.iterations
        );

        Ok(Some(FinalIteration {
            id,
            board: outcome.board,
            hash: outcome.hash,
            iterations: outcome.iterations,
            end_reason: outcome.end_reason,
        }))
    }

    fn check_iterations(&self, requested: u32) -> Result<(), ServiceError> {
        if requested == 0 || requested > self.settings.max_iterations {
            return Err(ServiceError::IterationsOutOfRange {
                requested,
                max: self.settings.max_iterations,
            });
        }
        Ok(())
    }
}
