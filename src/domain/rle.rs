//! Run-length encoded Life patterns.
//!
//! The dialect understood here is the common `.rle` format: an optional
//! `x = <w>, y = <h>` header, `#` comment lines ahead of it, and a body of
//! run tokens (`o`/`O` live, `b`/`.` dead, `$` end of row, `!` end of pattern)
//! each optionally prefixed by a decimal repeat count. Decoding is
//! best-effort: unknown characters are skipped and cells that fall outside the
//! grid are dropped.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{Cell, Grid};

/// Failure to obtain pattern text. Decoding itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read pattern file {}: {source}", .path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// Source unavailable when reading from an arbitrary reader, where no
    /// path is known
    #[error("cannot read pattern source: {0}")]
    Read(#[from] io::Error),
}

/// Where and how a pattern is stamped onto the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub offset_x: i32,
    pub offset_y: i32,
    /// Clear the grid before stamping
    pub clear_before: bool,
}

impl Placement {
    pub const fn at(offset_x: i32, offset_y: i32) -> Self {
        Self { offset_x, offset_y, clear_before: false }
    }

    pub const fn clearing(mut self) -> Self {
        self.clear_before = true;
        self
    }
}

/// Nominal pattern size declared by the header line.
/// Informational only: decoding never checks cells against it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Outcome of a successful load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// `None` when the text had no header line
    pub header: Option<Header>,
    /// Live cells written onto the grid
    pub cells_placed: usize,
    /// Live cells that fell outside the grid
    pub cells_dropped: u64,
    /// Whether decoding stopped at a `!` marker rather than end of input
    pub terminated: bool,
}

/// A decoded run token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Alive(u64),
    Dead(u64),
    NewRow(u64),
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// No repeat count pending
    Idle,
    /// Digits seen since the last token
    Counting(u64),
    /// `!` seen; nothing more is read
    Done,
}

/// Streaming tokenizer over the body of an RLE pattern.
pub struct Tokens<I> {
    chars: I,
    state: State,
}

impl<I: Iterator<Item = char>> Tokens<I> {
    pub fn new(chars: I) -> Self {
        Self { chars, state: State::Idle }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokens<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.state == State::Done {
            return None;
        }

        for ch in self.chars.by_ref() {
            if let Some(digit) = ch.to_digit(10) {
                let pending = match self.state {
                    State::Counting(n) => n,
                    _ => 0,
                };
                self.state = State::Counting(pending.saturating_mul(10).saturating_add(u64::from(digit)));
                continue;
            }

            // A missing or zero count means one
            let count = match self.state {
                State::Counting(n) if n > 0 => n,
                _ => 1,
            };
            let token = match ch {
                'o' | 'O' => Token::Alive(count),
                'b' | '.' => Token::Dead(count),
                '$' => Token::NewRow(count),
                '!' => {
                    self.state = State::Done;
                    return Some(Token::End);
                }
                _ => continue,
            };
            self.state = State::Idle;
            return Some(token);
        }

        None
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn is_header(line: &str) -> bool {
    line.contains('x') && line.contains('=') && line.contains('y')
}

/// Scan `<key> = <digits>` and return the value with the unread remainder
fn scan_dimension(input: &str, key: char) -> Option<(u32, &str)> {
    let rest = input.trim_start().strip_prefix(key)?;
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let value = rest[..end].parse().ok()?;
    Some((value, &rest[end..]))
}

/// Read `x = <w>, y = <h>` from a header line. Fields that fail to scan are `None`.
pub fn parse_header(line: &str) -> Header {
    let Some((width, rest)) = scan_dimension(line, 'x') else {
        return Header::default();
    };
    let height = rest
        .trim_start()
        .strip_prefix(',')
        .and_then(|rest| scan_dimension(rest, 'y'))
        .map(|(height, _)| height);

    Header { width: Some(width), height }
}

/// Locate the header line. Returns it parsed together with the text that
/// follows it, or `None` and the whole source when there is no header.
fn split_header(source: &str) -> (Option<Header>, &str) {
    let mut consumed = 0;
    for line in source.split_inclusive('\n') {
        consumed += line.len();
        if is_comment(line) {
            continue;
        }
        if is_header(line) {
            return (Some(parse_header(line)), &source[consumed..]);
        }
    }
    (None, source)
}

/// Decode `source` and stamp its live cells onto `grid`.
pub fn load_str(grid: &mut Grid, source: &str, placement: Placement) -> LoadReport {
    let (header, body) = split_header(source);
    if let Some(Header { width: None, .. } | Header { height: None, .. }) = header {
        log::debug!("RLE header did not declare both dimensions");
    }

    if placement.clear_before {
        grid.clear();
    }

    let mut report = LoadReport { header, ..LoadReport::default() };
    let mut cur_x: i64 = 0;
    let mut cur_y: i64 = 0;

    for token in Tokens::new(body.chars()) {
        match token {
            Token::Alive(count) => {
                let count = i64::try_from(count).unwrap_or(i64::MAX);
                stamp_run(grid, &mut report, placement, cur_x, cur_y, count);
                cur_x = cur_x.saturating_add(count);
            }
            Token::Dead(count) => {
                cur_x = cur_x.saturating_add(i64::try_from(count).unwrap_or(i64::MAX));
            }
            Token::NewRow(count) => {
                cur_y = cur_y.saturating_add(i64::try_from(count).unwrap_or(i64::MAX));
                cur_x = 0;
            }
            Token::End => {
                report.terminated = true;
                break;
            }
        }
    }

    report
}

/// Write `count` live cells starting at cursor `(cur_x, cur_y)`, keeping only
/// those that land inside the grid
fn stamp_run(grid: &mut Grid, report: &mut LoadReport, placement: Placement, cur_x: i64, cur_y: i64, count: i64) {
    let (width, height) = grid.dimensions();
    let y = i64::from(placement.offset_y).saturating_add(cur_y);
    let start = i64::from(placement.offset_x).saturating_add(cur_x);
    let end = start.saturating_add(count);

    let (first, last) = if (0..height as i64).contains(&y) {
        (start.max(0), end.min(width as i64))
    } else {
        (0, 0)
    };

    let mut placed = 0;
    for x in first..last {
        if grid.set(x as i32, y as i32, Cell::Alive) {
            placed += 1;
        }
    }

    report.cells_placed = report.cells_placed.saturating_add(placed as usize);
    report.cells_dropped = report.cells_dropped.saturating_add((count - placed) as u64);
}

/// Read a whole pattern from `reader`, then decode it. Nothing is written to
/// the grid unless the read succeeds.
pub fn load_reader<R: Read>(grid: &mut Grid, mut reader: R, placement: Placement) -> Result<LoadReport, LoadError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(load_str(grid, &source, placement))
}

/// Load a pattern file. The grid is untouched if the file cannot be read.
pub fn load_file(grid: &mut Grid, path: impl AsRef<Path>, placement: Placement) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_str(grid, &source, placement);
    log::info!(
        "Loaded RLE '{}': {} cells placed, {} dropped",
        path.display(),
        report.cells_placed,
        report.cells_dropped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::io::Write;

    const GLIDER: &str = "x = 3, y = 3\nbo$2bo$3o!";

    fn glider_cells() -> BTreeSet<(i32, i32)> {
        cells(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    fn live_set(grid: &Grid) -> BTreeSet<(i32, i32)> {
        grid.live_cells().collect()
    }

    fn cells(positions: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = Tokens::new("bo$2bo$3o!ooo".chars()).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Dead(1),
                Token::Alive(1),
                Token::NewRow(1),
                Token::Dead(2),
                Token::Alive(1),
                Token::NewRow(1),
                Token::Alive(3),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_tokens_count_survives_ignored_characters() {
        let tokens: Vec<_> = Tokens::new("1\n2 O x 0b 3.".chars()).collect();
        assert_eq!(tokens, vec![Token::Alive(12), Token::Dead(1), Token::Dead(3)]);
    }

    #[test]
    fn test_tokens_saturate_huge_counts() {
        let tokens: Vec<_> = Tokens::new("99999999999999999999999o".chars()).collect();
        assert_eq!(tokens, vec![Token::Alive(u64::MAX)]);
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("x = 36, y = 9, rule = B3/S23"),
            Header { width: Some(36), height: Some(9) }
        );
        assert_eq!(parse_header("x=3,y=4"), Header { width: Some(3), height: Some(4) });
    }

    #[test]
    fn test_parse_malformed_header() {
        assert_eq!(parse_header("x = wide, y = 3"), Header::default());
        assert_eq!(parse_header("x = 5, why = 3"), Header { width: Some(5), height: None });
    }

    #[test]
    fn test_glider() {
        let mut grid = Grid::new(10, 10).unwrap();
        let report = load_str(&mut grid, GLIDER, Placement::default());

        assert_eq!(live_set(&grid), glider_cells());
        assert_eq!(report.header, Some(Header { width: Some(3), height: Some(3) }));
        assert_eq!(report.cells_placed, 5);
        assert!(report.terminated);
    }

    #[test]
    fn test_reload_with_clear_is_idempotent() {
        let mut grid = Grid::new(10, 10).unwrap();
        load_str(&mut grid, GLIDER, Placement::default());
        grid.toggle_cell(8, 8);

        load_str(&mut grid, GLIDER, Placement::default().clearing());

        assert_eq!(live_set(&grid), glider_cells());
    }

    #[test]
    fn test_load_without_clear_keeps_existing_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.toggle_cell(9, 9);

        load_str(&mut grid, GLIDER, Placement::at(4, 4));

        let mut expected: BTreeSet<_> = glider_cells().into_iter().map(|(x, y)| (x + 4, y + 4)).collect();
        expected.insert((9, 9));
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn test_comments_before_header_are_skipped() {
        let source = "#N Glider\n  #C digits 123 and o's\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";
        let mut grid = Grid::new(10, 10).unwrap();
        load_str(&mut grid, source, Placement::default());
        assert_eq!(live_set(&grid), glider_cells());
    }

    #[test]
    fn test_missing_header_decodes_whole_text() {
        let mut grid = Grid::new(10, 10).unwrap();
        let report = load_str(&mut grid, "bo$2bo$\n3o!", Placement::default());

        assert_eq!(report.header, None);
        assert_eq!(live_set(&grid), glider_cells());
    }

    #[test]
    fn test_malformed_header_still_decodes() {
        let mut grid = Grid::new(10, 10).unwrap();
        let report = load_str(&mut grid, "x = ?, y = ?\nbo$2bo$3o!", Placement::default());

        assert_eq!(report.header, Some(Header::default()));
        assert_eq!(live_set(&grid), glider_cells());
    }

    #[test]
    fn test_declared_size_is_not_enforced() {
        let mut grid = Grid::new(10, 10).unwrap();
        load_str(&mut grid, "x = 1, y = 1\n5o!", Placement::default());
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_end_marker_stops_decoding() {
        let mut grid = Grid::new(10, 10).unwrap();
        load_str(&mut grid, "x = 2, y = 1\n2o!\n$5o", Placement::default());
        assert_eq!(live_set(&grid), cells(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn test_missing_end_marker_is_accepted() {
        let mut grid = Grid::new(10, 10).unwrap();
        let report = load_str(&mut grid, "x = 3, y = 1\n3o", Placement::default());
        assert_eq!(grid.population(), 3);
        assert!(!report.terminated);
    }

    #[test]
    fn test_row_skip_and_dead_alias() {
        let mut grid = Grid::new(10, 10).unwrap();
        load_str(&mut grid, "x = 4, y = 4\nO2.O3$o!", Placement::default());
        assert_eq!(live_set(&grid), cells(&[(0, 0), (3, 0), (0, 3)]));
    }

    #[test]
    fn test_out_of_bounds_cells_are_dropped() {
        let mut grid = Grid::new(5, 5).unwrap();
        let report = load_str(&mut grid, GLIDER, Placement::at(3, 3));

        // Only (4,3) lands on the grid; the rest fall past the right or bottom edge
        assert_eq!(live_set(&grid), cells(&[(4, 3)]));
        assert_eq!(report.cells_placed, 1);
        assert_eq!(report.cells_dropped, 4);
    }

    #[test]
    fn test_negative_offset_clips_left_and_top() {
        let mut grid = Grid::new(5, 5).unwrap();
        load_str(&mut grid, GLIDER, Placement::at(-1, -1));
        assert_eq!(live_set(&grid), cells(&[(1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_huge_run_is_clipped() {
        let mut grid = Grid::new(8, 2).unwrap();
        let report = load_str(&mut grid, "1000000000000o!", Placement::at(2, 1));
        assert_eq!(live_set(&grid), cells(&[(2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1)]));
        assert_eq!(report.cells_placed, 6);
    }

    #[test]
    fn test_dropped_total_saturates() {
        let mut grid = Grid::new(4, 4).unwrap();
        let run = "99999999999999999999999o";
        let source = format!("{run}${run}${run}!");
        let report = load_str(&mut grid, &source, Placement::default());
        assert_eq!(report.cells_placed, 12);
        assert_eq!(report.cells_dropped, u64::MAX);
        assert_eq!(grid.population(), 12);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#N Glider\n{}\n", GLIDER).unwrap();

        let mut grid = Grid::new(10, 10).unwrap();
        let report = load_file(&mut grid, file.path(), Placement::default()).unwrap();

        assert_eq!(report.cells_placed, 5);
        assert_eq!(live_set(&grid), glider_cells());
    }

    #[test]
    fn test_missing_file_leaves_grid_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.rle");

        let mut grid = Grid::new(10, 10).unwrap();
        grid.toggle_cell(2, 2);
        grid.toggle_cell(7, 1);
        let before = live_set(&grid);

        let err = load_file(&mut grid, &path, Placement::default().clearing()).unwrap_err();

        assert!(matches!(err, LoadError::SourceUnavailable { path: ref p, .. } if *p == path));
        assert_eq!(live_set(&grid), before);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_failing_reader_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.toggle_cell(1, 1);

        let result = load_reader(&mut grid, FailingReader, Placement::default().clearing());

        assert!(matches!(result, Err(LoadError::Read(_))));
        assert!(grid.is_alive(1, 1));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_load_reader() {
        let mut grid = Grid::new(10, 10).unwrap();
        load_reader(&mut grid, GLIDER.as_bytes(), Placement::default()).unwrap();
        assert_eq!(live_set(&grid), glider_cells());
    }
}
