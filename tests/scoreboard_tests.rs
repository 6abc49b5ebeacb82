//! Integration tests for leaderboard ranking and persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use dice_duel::scoreboard::{parse, render};
use dice_duel::session::validate_name;
use dice_duel::{top_scores, update, Leaderboard, ScoreEntry, Scoreboard, ScoreboardStore, BUCKET_CAPACITY};
use proptest::prelude::*;

fn scratch_path(tag: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "dice-duel-it-{}-{}-{}.txt",
        std::process::id(),
        tag,
        n
    ))
}

fn with_bucket(mut board: Scoreboard, rounds: u32, entries: &[(&str, i64)]) -> Scoreboard {
    for (name, score) in entries {
        board = update(board, rounds, name, *score);
    }
    board
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn test_fill_bucket_to_capacity() {
    let board = with_bucket(Scoreboard::new(), 2, &[("X", 200), ("Y", 150)]);
    let board = update(board, 2, "Player", 140);

    assert_eq!(
        top_scores(&board, 2),
        &[
            ScoreEntry::new("X", 200),
            ScoreEntry::new("Y", 150),
            ScoreEntry::new("Player", 140),
        ]
    );
}

#[test]
fn test_full_bucket_drops_lowest() {
    let board = with_bucket(Scoreboard::new(), 1, &[("A", 300), ("B", 200), ("C", 100)]);
    let board = update(board, 1, "new", 150);

    assert_eq!(
        top_scores(&board, 1),
        &[
            ScoreEntry::new("A", 300),
            ScoreEntry::new("B", 200),
            ScoreEntry::new("new", 150),
        ]
    );
}

#[test]
fn test_top_scores_does_not_mutate() {
    let board = with_bucket(Scoreboard::new(), 3, &[("A", 1)]);
    let before = board.clone();
    let _ = top_scores(&board, 3);
    let _ = top_scores(&board, 4);
    assert_eq!(board, before);
}

// =============================================================================
// Text format
// =============================================================================

#[test]
fn test_round_trip_two_buckets() {
    let entries: &[(&str, i64)] = &[("Alice", 300), ("Bob", 250), ("Cara", 100)];
    let board = with_bucket(with_bucket(Scoreboard::new(), 1, entries), 5, entries);

    let text = render(&board);
    assert_eq!(
        text,
        "rounds:1\nAlice:300\nBob:250\nCara:100\n\nrounds:5\nAlice:300\nBob:250\nCara:100\n\n"
    );
    assert_eq!(parse(&text), board);
}

#[test]
fn test_render_is_stable_across_reload() {
    let board = with_bucket(with_bucket(Scoreboard::new(), 7, &[("Ann", 10), ("Ben", 30)]), 2, &[("Cy", 5)]);
    let once = render(&board);
    let twice = render(&parse(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_header_keyword_name_cannot_reach_the_file() {
    assert!(validate_name("rounds", 25).is_err());

    // What an unvalidated "rounds" entry would do to the file.
    let board = with_bucket(Scoreboard::new(), 2, &[("rounds", 200), ("Bob", 150)]);
    let text = render(&board);
    assert_eq!(text, "rounds:2\nrounds:200\nBob:150\n\n");
    assert_ne!(parse(&text), board);

    let name = validate_name("Rounds", 25).unwrap();
    let board = with_bucket(Scoreboard::new(), 2, &[(name.as_str(), 200), ("Bob", 150)]);
    assert_eq!(parse(&render(&board)), board);
}

#[test]
fn test_out_of_range_header_is_dropped() {
    let board = parse("rounds:200\nBob:150\n\nrounds:3\nAnn:40\n");
    assert_eq!(board.len(), 1);
    assert_eq!(top_scores(&board, 3), &[ScoreEntry::new("Ann", 40)]);
    assert!(top_scores(&board, 200).is_empty());
}

// =============================================================================
// Store and leaderboard handle
// =============================================================================

#[test]
fn test_store_round_trip_through_file() {
    let path = scratch_path("store");
    let store = ScoreboardStore::new(&path);
    let board = with_bucket(with_bucket(Scoreboard::new(), 1, &[("Alice", 300), ("Bob", 250)]), 5, &[("Cara", 100)]);

    store.save(&board).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, board);

    store.save(&loaded).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), render(&board));

    fs::remove_file(&path).ok();
}

#[test]
fn test_store_tolerates_malformed_file() {
    let path = scratch_path("malformed");
    fs::write(&path, "junk\nrounds:2\nAlice:oops\nBob:75\nrounds:x\nEve:1\n").unwrap();

    let board = ScoreboardStore::new(&path).load().unwrap();
    assert_eq!(
        top_scores(&board, 2),
        &[ScoreEntry::new("Bob", 75), ScoreEntry::new("Alice", 0)]
    );
    assert_eq!(board.len(), 1);

    fs::remove_file(&path).ok();
}

#[test]
fn test_store_keeps_board_with_invalid_utf8() {
    let path = scratch_path("bad-utf8");
    fs::write(&path, b"rounds:1\nAlice:300\nBob\xff:250\n").unwrap();

    let board = ScoreboardStore::new(&path).load().unwrap();
    let bucket = top_scores(&board, 1);
    assert_eq!(bucket.len(), 2);
    assert_eq!(bucket[0], ScoreEntry::new("Alice", 300));
    assert_eq!(bucket[1], ScoreEntry::new("Bob\u{FFFD}", 250));

    fs::remove_file(&path).ok();
}

#[test]
fn test_leaderboard_record_persists() {
    let path = scratch_path("leaderboard");
    let mut leaderboard = Leaderboard::open(ScoreboardStore::new(&path)).unwrap();
    assert!(leaderboard.scoreboard().is_empty());

    assert_eq!(leaderboard.record(3, "Alice", 150).unwrap(), Some(1));
    assert_eq!(leaderboard.record(3, "Bob", 180).unwrap(), Some(1));
    assert_eq!(leaderboard.record(3, "Cara", 90).unwrap(), Some(3));
    assert_eq!(leaderboard.record(3, "Dan", 10).unwrap(), None);

    let reopened = Leaderboard::open(ScoreboardStore::new(&path)).unwrap();
    assert_eq!(reopened.scoreboard(), leaderboard.scoreboard());
    assert_eq!(
        reopened.top_scores(3),
        &[
            ScoreEntry::new("Bob", 180),
            ScoreEntry::new("Alice", 150),
            ScoreEntry::new("Cara", 90),
        ]
    );

    fs::remove_file(&path).ok();
}

#[test]
fn test_leaderboard_keeps_memory_when_save_fails() {
    // A directory where the file should be makes the rename fail.
    let path = scratch_path("blocked");
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("occupant"), "x").unwrap();

    let mut leaderboard = Leaderboard::with_board(ScoreboardStore::new(&path), Scoreboard::new());
    assert!(leaderboard.record(1, "Alice", 120).is_err());
    assert_eq!(leaderboard.top_scores(1), &[ScoreEntry::new("Alice", 120)]);

    fs::remove_dir_all(&path).ok();
    fs::remove_file(path.with_extension("txt.tmp")).ok();
}

// =============================================================================
// Properties
// =============================================================================

/// Names as the session would accept them, with the header keyword mixed in.
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("rounds".to_string()),
        9 => "[A-Za-z]{1,8}( [A-Za-z]{1,8})?",
    ]
    .prop_filter_map("rejected by name validation", |n| validate_name(&n, 25).ok())
}

proptest! {
    #[test]
    fn prop_bucket_stays_ranked_and_bounded(scores in prop::collection::vec(-500i64..5000, 0..40)) {
        let mut board = Scoreboard::new();
        for (i, score) in scores.iter().enumerate() {
            board = update(board, 4, &format!("P{i}"), *score);

            let bucket = top_scores(&board, 4);
            prop_assert!(bucket.len() <= BUCKET_CAPACITY);
            prop_assert!(bucket.windows(2).all(|w| w[0].score >= w[1].score));
        }

        // Same as a stable sort of everything inserted, cut to capacity.
        let mut expected: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| ScoreEntry::new(format!("P{i}"), *s))
            .collect();
        expected.sort_by(|a, b| b.score.cmp(&a.score));
        expected.truncate(BUCKET_CAPACITY);
        prop_assert_eq!(top_scores(&board, 4), expected.as_slice());
    }

    #[test]
    fn prop_render_parse_round_trip(
        inserts in prop::collection::vec((1u32..=10, name_strategy(), 0i64..100_000), 0..30)
    ) {
        let mut board = Scoreboard::new();
        for (rounds, name, score) in &inserts {
            board = update(board, *rounds, name, *score);
        }

        let text = render(&board);
        let reloaded = parse(&text);
        prop_assert_eq!(&reloaded, &board);
        prop_assert_eq!(render(&reloaded), text);
    }
}
