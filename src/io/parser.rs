//! Problem text parser.
//!
//! # Format
//!
//! ```text
//! <items> <sources> <deadline>
//! <value of item 0> <value of item 1> ...
//! <held count> <setup latency> <throughput>     ─┐ once per source
//! <held item id> <held item id> ...              ─┘
//! ```
//!
//! Blank lines are ignored. Source ids are assigned by block position.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use crate::error::HarvestError;
use crate::models::{ItemId, Problem, Source};

/// Parses a problem from its text form.
///
/// Items held twice by one source are kept once (first occurrence); the
/// source keeps its declared held count, which drives its full-harvest
/// duration.
///
/// # Example
/// ```
/// use u_harvest::io::parse_problem;
///
/// let problem = parse_problem("3 1 4\n1 2 3\n2 1 1\n0 2\n").unwrap();
/// assert_eq!(problem.deadline, 4);
/// assert_eq!(problem.sources[0].items, vec![0, 2]);
/// ```
pub fn parse_problem(text: &str) -> Result<Problem, HarvestError> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.expect("header")?;
    expect_len(line, &header, 3, "header")?;
    let item_count: usize = field(line, header[0], "item count")?;
    let source_count: usize = field(line, header[1], "source count")?;
    let deadline = field(line, header[2], "deadline")?;

    let values = lines.numbers(item_count, "item values")?;

    let mut sources = Vec::with_capacity(source_count);
    for id in 0..source_count {
        let (line, stats) = lines.expect("source header")?;
        expect_len(line, &stats, 3, "source header")?;
        let held: usize = field(line, stats[0], "held item count")?;
        let setup_latency = field(line, stats[1], "setup latency")?;
        let throughput = field(line, stats[2], "throughput")?;

        let ids: Vec<ItemId> = lines.numbers(held, "held item ids")?;
        let items = dedup_keep_first(id, ids);

        sources.push(Source::new(id, setup_latency, throughput, items).with_item_count(held));
    }

    if let Some((line, _)) = lines.next_line() {
        return Err(HarvestError::parse(
            line,
            format!("unexpected content after {source_count} source blocks"),
        ));
    }

    Ok(Problem::new(values, sources, deadline))
}

/// Reads and parses a problem file.
pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem, HarvestError> {
    let text = std::fs::read_to_string(path)?;
    parse_problem(&text)
}

fn dedup_keep_first(source_id: usize, ids: Vec<ItemId>) -> Vec<ItemId> {
    let declared = ids.len();
    let mut seen = HashSet::with_capacity(declared);
    let items: Vec<ItemId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
    if items.len() != declared {
        tracing::warn!(
            source = source_id,
            declared,
            kept = items.len(),
            "duplicate held item ids dropped"
        );
    }
    items
}

fn expect_len(line: usize, tokens: &[&str], n: usize, what: &str) -> Result<(), HarvestError> {
    if tokens.len() != n {
        return Err(HarvestError::parse(
            line,
            format!("{what}: expected {n} fields, found {}", tokens.len()),
        ));
    }
    Ok(())
}

fn field<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T, HarvestError> {
    token
        .parse()
        .map_err(|_| HarvestError::parse(line, format!("{what}: invalid number '{token}'")))
}

/// Non-blank lines, 1-based line numbers, split on whitespace.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, Vec<&'a str>)> {
        for (idx, raw) in self.inner.by_ref() {
            self.last = idx + 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if !tokens.is_empty() {
                return Some((idx + 1, tokens));
            }
        }
        None
    }

    fn expect(&mut self, what: &str) -> Result<(usize, Vec<&'a str>), HarvestError> {
        let last = self.last;
        self.next_line()
            .ok_or_else(|| HarvestError::parse(last + 1, format!("missing {what} line")))
    }

    /// Reads a line of exactly `n` numbers. A zero-length list has no line.
    fn numbers<T: FromStr>(&mut self, n: usize, what: &str) -> Result<Vec<T>, HarvestError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let (line, tokens) = self.expect(what)?;
        expect_len(line, &tokens, n, what)?;
        tokens.iter().map(|t| field(line, t, what)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "6 2 7\n1 2 3 6 5 4\n5 2 2\n0 1 2 3 4\n4 3 1\n3 2 5 0\n";

    #[test]
    fn test_parse_sample() {
        let p = parse_problem(SAMPLE).unwrap();
        assert_eq!(p.values, vec![1, 2, 3, 6, 5, 4]);
        assert_eq!(p.deadline, 7);
        assert_eq!(p.source_count(), 2);

        let s1 = &p.sources[1];
        assert_eq!(s1.id, 1);
        assert_eq!(s1.item_count, 4);
        assert_eq!(s1.setup_latency, 3);
        assert_eq!(s1.throughput, 1);
        assert_eq!(s1.items, vec![3, 2, 5, 0]);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "\n2 1 3\n\n  5 6  \n\n2 1 1\n1 0\n\n";
        let p = parse_problem(text).unwrap();
        assert_eq!(p.values, vec![5, 6]);
        assert_eq!(p.sources[0].items, vec![1, 0]);
    }

    #[test]
    fn test_source_without_items() {
        let text = "1 2 3\n4\n0 1 1\n1 1 1\n0\n";
        let p = parse_problem(text).unwrap();
        assert!(p.sources[0].items.is_empty());
        assert_eq!(p.sources[1].items, vec![0]);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let text = "2 1 3\n1 1\n3 1 1\n1 0 1\n";
        let p = parse_problem(text).unwrap();
        assert_eq!(p.sources[0].items, vec![1, 0]);
        assert_eq!(p.sources[0].item_count, 3);
        // 1 + ceil(3 / 1)
        assert_eq!(p.sources[0].full_harvest_duration(), 4);
    }

    #[test]
    fn test_token_count_mismatch() {
        let err = parse_problem("3 1 4\n1 2\n").unwrap_err();
        match err {
            HarvestError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_problem("1 1 x\n").unwrap_err();
        assert!(matches!(err, HarvestError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_source_block() {
        let err = parse_problem("1 2 3\n4\n1 1 1\n0\n").unwrap_err();
        assert!(matches!(err, HarvestError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_trailing_content() {
        let err = parse_problem("1 0 3\n4\n9 9 9\n").unwrap_err();
        assert!(matches!(err, HarvestError::Parse { line: 3, .. }));
    }
}
