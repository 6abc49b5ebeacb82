//! Line-oriented text format for the scoreboard.
//!
//! ```text
//! rounds:1
//! Alice:300
//! Bob:250
//!
//! rounds:5
//! Cara:100
//! ```
//!
//! Parsing is lenient: unknown lines are skipped and an unparsable score
//! reads as 0. A `rounds:` prefix is always a header, so the name "rounds"
//! is reserved (see `is_reserved_name`) and headers outside
//! `1..=MAX_ROUNDS` close the section instead of opening a bucket.

use std::fmt::Write as _;

use tracing::warn;

use super::entry::ScoreEntry;
use super::ranking::Scoreboard;
use crate::core::config::MAX_ROUNDS;

/// Keyword of a section header.
pub const HEADER_KEYWORD: &str = "rounds";

/// Prefix that opens a bucket section.
pub const HEADER_PREFIX: &str = "rounds:";

/// True if `name`'s score line would read back as a section header.
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    name.trim() == HEADER_KEYWORD
}

/// Parse a score token, reading anything unparsable as 0.
#[must_use]
pub fn parse_score(token: &str) -> i64 {
    token.trim().parse().unwrap_or(0)
}

/// Parse the persisted text into a scoreboard.
///
/// Entries are re-ranked on insert, so a hand-edited file with more than
/// three lines per section or out-of-order scores still loads into a valid
/// scoreboard.
#[must_use]
pub fn parse(text: &str) -> Scoreboard {
    let mut board = Scoreboard::new();
    let mut section: Option<u32> = None;

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rounds) = line.strip_prefix(HEADER_PREFIX) {
            section = rounds
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=MAX_ROUNDS).contains(n));
            if section.is_none() {
                warn!(line = line_no + 1, "ignoring scoreboard header with bad round count");
            }
            continue;
        }

        let Some(rounds) = section else {
            warn!(line = line_no + 1, "ignoring scoreboard line outside a section");
            continue;
        };

        match line.rsplit_once(':') {
            Some((name, score)) if !name.trim().is_empty() => {
                board.insert(rounds, ScoreEntry::new(name.trim(), parse_score(score)));
            }
            _ => warn!(line = line_no + 1, "ignoring malformed scoreboard entry"),
        }
    }

    board
}

/// Render every bucket: header, one `name:score` line per entry, blank line.
#[must_use]
pub fn render(board: &Scoreboard) -> String {
    let mut out = String::new();
    for (rounds, bucket) in board.buckets() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{HEADER_PREFIX}{rounds}");
        for entry in bucket {
            let _ = writeln!(out, "{entry}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::ranking::top_scores;

    #[test]
    fn test_parse_score_lenient() {
        assert_eq!(parse_score("250"), 250);
        assert_eq!(parse_score(" 42 "), 42);
        assert_eq!(parse_score("-5"), -5);
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("12.5"), 0);
    }

    #[test]
    fn test_parse_basic() {
        let text = "rounds:1\nAlice:300\nBob:250\n\nrounds:5\nCara:100\n\n";
        let board = parse(text);

        assert_eq!(
            top_scores(&board, 1),
            &[ScoreEntry::new("Alice", 300), ScoreEntry::new("Bob", 250)]
        );
        assert_eq!(top_scores(&board, 5), &[ScoreEntry::new("Cara", 100)]);
    }

    #[test]
    fn test_parse_without_trailing_blank_line() {
        let board = parse("rounds:3\nZed:90");
        assert_eq!(top_scores(&board, 3), &[ScoreEntry::new("Zed", 90)]);
    }

    #[test]
    fn test_parse_ignores_lines_before_header() {
        let board = parse("Ghost:999\nrounds:2\nReal:10\n");
        assert_eq!(board.len(), 1);
        assert_eq!(top_scores(&board, 2), &[ScoreEntry::new("Real", 10)]);
    }

    #[test]
    fn test_parse_malformed_score_defaults_to_zero() {
        let board = parse("rounds:1\nAlice:lots\n");
        assert_eq!(top_scores(&board, 1), &[ScoreEntry::new("Alice", 0)]);
    }

    #[test]
    fn test_parse_skips_garbage_lines() {
        let board = parse("rounds:1\nno colon here\n:77\nBob:5\n");
        assert_eq!(top_scores(&board, 1), &[ScoreEntry::new("Bob", 5)]);
    }

    #[test]
    fn test_parse_bad_header_closes_section() {
        let board = parse("rounds:1\nA:1\nrounds:zero\nB:2\nrounds:0\nC:3\n");
        assert_eq!(top_scores(&board, 1), &[ScoreEntry::new("A", 1)]);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_parse_out_of_range_header_closes_section() {
        let board = parse("rounds:10
A:1
rounds:11
B:2
rounds:200
C:3
");
        assert_eq!(top_scores(&board, 10), &[ScoreEntry::new("A", 1)]);
        assert!(top_scores(&board, 11).is_empty());
        assert!(top_scores(&board, 200).is_empty());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_reserved_name_matches_header_keyword() {
        assert!(is_reserved_name("rounds"));
        assert!(is_reserved_name(" rounds "));
        assert!(!is_reserved_name("Rounds"));
        assert!(!is_reserved_name("rounds two"));
        assert_eq!(format!("{HEADER_KEYWORD}:"), HEADER_PREFIX);
    }

    #[test]
    fn test_parse_reranks_hand_edited_section() {
        let board = parse("rounds:4\nD:1\nC:2\nB:3\nA:4\n");
        let names: Vec<_> = top_scores(&board, 4).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_tolerates_crlf() {
        let board = parse("rounds:1\r\nAlice:300\r\n\r\n");
        assert_eq!(top_scores(&board, 1), &[ScoreEntry::new("Alice", 300)]);
    }

    #[test]
    fn test_parse_repeated_header_merges() {
        let board = parse("rounds:1\nA:10\n\nrounds:1\nB:20\n");
        let names: Vec<_> = top_scores(&board, 1).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_render_layout() {
        let mut board = Scoreboard::new();
        board.insert(5, ScoreEntry::new("Cara", 100));
        board.insert(1, ScoreEntry::new("Bob", 250));
        board.insert(1, ScoreEntry::new("Alice", 300));

        assert_eq!(render(&board), "rounds:1\nAlice:300\nBob:250\n\nrounds:5\nCara:100\n\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Scoreboard::new()), "");
    }

    #[test]
    fn test_names_with_spaces_round_trip() {
        let mut board = Scoreboard::new();
        board.insert(2, ScoreEntry::new("Mary Ann", 150));
        assert_eq!(parse(&render(&board)), board);
    }
}
