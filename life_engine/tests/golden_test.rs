//! Golden transition test — steps the standard glider and asserts the
//! result cell-for-cell against frozen fixture files, plus the permanent
//! fingerprints of both states.
//!
//! These fixtures must NEVER be regenerated to match new behavior. If this
//! test fails, the transition rule has been broken.

use std::fs;
use std::path::Path;

use life_engine::board::Board;
use life_engine::codec;
use life_engine::transition::next_generation;

/// SHA-256 of the packed 10x10 glider seed.
const GLIDER_STEP0_HASH: &str =
    "780131ce49f32b4d2817857f16c37a7813f1bec07c565d668d53da15559d6d74";

/// SHA-256 of the packed glider after one generation.
const GLIDER_STEP1_HASH: &str =
    "c73b143767bea63c492430d9497c1469f1ba6eb7bc71b59e7e7b562346c78313";

/// Parse a fixture grid: one line per row, `O` alive, `.` dead.
fn load_fixture(path: &str) -> Board {
    let text = fs::read_to_string(Path::new(path))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    let grid: Vec<Vec<bool>> = text
        .lines()
        .map(|line| line.chars().map(|ch| ch == 'O').collect())
        .collect();
    Board::from_rows(&grid)
        .unwrap_or_else(|e| panic!("Malformed fixture {}: {}", path, e))
}

#[test]
fn glider_step_matches_golden_fixture() {
    let seed = load_fixture("tests/golden/glider_step0.txt");
    let expected = load_fixture("tests/golden/glider_step1.txt");

    let (stepped, _) = next_generation(&seed);

    assert_eq!(
        stepped, expected,
        "GOLDEN TEST FAILED: one glider generation diverged from the fixture.\nGot:\n{}\nExpected:\n{}",
        stepped, expected
    );
}

#[test]
fn glider_fingerprints_match_golden_hashes() {
    let seed = load_fixture("tests/golden/glider_step0.txt");
    assert_eq!(
        codec::state_hash(&seed).to_hex(),
        GLIDER_STEP0_HASH,
        "glider seed fingerprint diverged from the frozen value"
    );

    let (_, stepped_hash) = next_generation(&seed);
    assert_eq!(
        stepped_hash.to_hex(),
        GLIDER_STEP1_HASH,
        "stepped glider fingerprint diverged from the frozen value"
    );
}

#[test]
fn glider_step_is_deterministic() {
    let seed = load_fixture("tests/golden/glider_step0.txt");

    let (_, hash1) = next_generation(&seed);
    let (_, hash2) = next_generation(&seed);

    assert_eq!(
        hash1, hash2,
        "DETERMINISM FAILURE: two steps of the same seed produced different fingerprints"
    );
}

#[test]
fn packed_round_trip_restores_the_fixture() {
    let seed = load_fixture("tests/golden/glider_step0.txt");
    let packed = codec::pack(&seed);
    let restored = codec::unpack(&packed, seed.rows(), seed.columns())
        .expect("packed fixture must unpack");
    assert_eq!(restored, seed);
}
