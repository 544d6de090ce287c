//! Command-line harness — stores a board, then exercises the service
//! operations and prints each result.
//!
//! Usage:
//!   life_runtime [STORE_DIR] [BOARD_JSON]
//!
//! BOARD_JSON is a file of the transport shape
//! `{"rows": R, "columns": C, "state": [[bool, ...], ...]}`; without it a
//! 10x10 glider is seeded. Set RUST_LOG=debug for store/service logging.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use life_engine::board::Board;
use life_runtime::service::BoardService;
use life_runtime::settings::Settings;
use life_runtime::store::BoardStore;

/// Transport-side board shape: declared dimensions plus nested rows.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardFile {
    rows: usize,
    columns: usize,
    state: Vec<Vec<bool>>,
}

fn load_board_file(path: &str) -> Board {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    let file: BoardFile = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e));
    Board::from_declared(file.rows, file.columns, &file.state)
        .unwrap_or_else(|e| panic!("Rejected board in {}: {}", path, e))
}

/// Standard 5-cell glider in a 10x10 grid.
fn glider() -> Board {
    let mut board = Board::new(10, 10).expect("glider dimensions are valid");
    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        board.set(row, col, true);
    }
    board
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let store_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("life_runtime_demo"));
    let board = match args.next() {
        Some(path) => {
            println!("Loading board from: {}", path);
            load_board_file(&path)
        }
        None => {
            println!("No board file given, seeding a 10x10 glider.");
            glider()
        }
    };

    let store = BoardStore::open(&store_dir).expect("Failed to open board store");
    let service = BoardService::new(store, Settings::default());

    println!("Store: {}", store_dir.display());
    println!("\nSeed ({}x{}):\n{}", board.rows(), board.columns(), board);

    let id = service.insert_board(&board).expect("Failed to insert board");
    println!("Inserted board: {}", id);

    let next = service
        .next_iteration(id)
        .expect("Failed to compute next iteration")
        .expect("board just inserted must exist");
    println!("\nAfter 1 generation:\n{}", next);

    let after_four = service
        .after_iterations(id, 4)
        .expect("Failed to compute iterations")
        .expect("board just inserted must exist");
    println!("After 4 generations:\n{}", after_four);

    let budget = service.settings().max_iterations;
    let outcome = service
        .stable_or_final(id, budget)
        .expect("Failed to compute stable iteration")
        .expect("board just inserted must exist");
    println!(
        "Run ended: {} after {} iterations (hash {})",
        outcome.end_reason, outcome.iterations, outcome.hash
    );
    println!("\nFinal state:\n{}", outcome.board);
}
