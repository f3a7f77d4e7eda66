// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-pass parser for the line-oriented GFA text format.
//!
//! The format is tab-separated records, one per line, dispatched on the first
//! field: `H` header, `S` segment, `L` link, `P` path. Anything else is
//! skipped for forward compatibility. Blank lines are ignored and trailing
//! whitespace (including the `\r` of CRLF input) is trimmed, because GFA
//! files in the wild come from everywhere.
//!
//! Parsing is strictly one pass with no backtracking. Links and paths resolve
//! their segment names against the segments declared ABOVE them; a forward
//! reference fails with `UnknownSegment`. Segment declarations always precede
//! uses in the corpora this engine targets, and a second resolution pass
//! would buy nothing but allocation.
//!
//! On any error the whole parse fails; a partially built store is never
//! observable.

use std::collections::HashMap;
use std::fmt;
use std::path::Path as FsPath;

use crate::store::GraphStore;
use crate::types::{Link, Orientation, Path, Segment, SegmentIx, Step};

// ============================================================================
// ERRORS
// ============================================================================

/// A parse failure, carrying the 1-based line number of the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong field count (or an empty mandatory field) for a known tag.
    MalformedRecord { line: usize, tag: char },
    /// Orientation token other than `+` or `-`.
    MalformedOrientation { line: usize, token: String },
    /// Link or path references a segment not declared above it.
    UnknownSegment { line: usize, name: String },
    /// Second `S` line with an already-declared name.
    DuplicateSegment { line: usize, name: String },
    /// Path overlap count doesn't match its step count.
    MalformedOverlaps {
        line: usize,
        steps: usize,
        overlaps: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRecord { line, tag } => {
                write!(f, "line {}: malformed '{}' record", line, tag)
            }
            ParseError::MalformedOrientation { line, token } => {
                write!(
                    f,
                    "line {}: orientation token {:?} is not '+' or '-'",
                    line, token
                )
            }
            ParseError::UnknownSegment { line, name } => {
                write!(f, "line {}: reference to undeclared segment {:?}", line, name)
            }
            ParseError::DuplicateSegment { line, name } => {
                write!(f, "line {}: segment {:?} declared twice", line, name)
            }
            ParseError::MalformedOverlaps {
                line,
                steps,
                overlaps,
            } => {
                write!(
                    f,
                    "line {}: path with {} steps carries {} overlaps (expected {})",
                    line,
                    steps,
                    overlaps,
                    steps.saturating_sub(1)
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of the file-level entry point: I/O or parse.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Read a GFA file and parse it.
pub fn load(path: impl AsRef<FsPath>) -> Result<GraphStore, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

/// Parse a GFA document into a graph store.
///
/// Single pass, line by line. Returns the completed store or the first error;
/// there is no partial result.
pub fn parse(text: &str) -> Result<GraphStore, ParseError> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut links: Vec<Link> = Vec::new();
    let mut paths: Vec<Path> = Vec::new();
    let mut by_name: HashMap<String, SegmentIx> = HashMap::new();
    let mut version: Option<String> = None;

    for (ix, raw) in text.lines().enumerate() {
        let line_no = ix + 1;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[0] {
            "H" => {
                if version.is_none() {
                    version = header_version(&fields);
                }
            }
            "S" => {
                let segment = parse_segment(line_no, &fields, &by_name)?;
                by_name.insert(segment.name.clone(), SegmentIx(segments.len() as u32));
                segments.push(segment);
            }
            "L" => links.push(parse_link(line_no, &fields, &by_name)?),
            "P" => paths.push(parse_path(line_no, &fields, &by_name)?),
            // Unrecognized record tags are skipped, per the format's
            // forward-compatibility convention.
            _ => {}
        }
    }

    Ok(GraphStore::from_parts(
        segments, links, paths, by_name, version,
    ))
}

// ============================================================================
// PER-RECORD PARSERS
// ============================================================================

/// Pull the `VN:Z:` value out of a header line, if any.
fn header_version(fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .skip(1)
        .find_map(|f| f.strip_prefix("VN:Z:"))
        .map(str::to_owned)
}

/// `S <name> <sequence> [tags...]`. Trailing optional tags are tolerated
/// and ignored.
fn parse_segment(
    line: usize,
    fields: &[&str],
    by_name: &HashMap<String, SegmentIx>,
) -> Result<Segment, ParseError> {
    if fields.len() < 3 || fields[1].is_empty() {
        return Err(ParseError::MalformedRecord { line, tag: 'S' });
    }
    let name = fields[1];
    if by_name.contains_key(name) {
        return Err(ParseError::DuplicateSegment {
            line,
            name: name.to_owned(),
        });
    }
    Ok(Segment {
        name: name.to_owned(),
        sequence: fields[2].to_owned(),
    })
}

/// `L <from> <fo> <to> <to_o> <overlap> [tags...]`.
fn parse_link(
    line: usize,
    fields: &[&str],
    by_name: &HashMap<String, SegmentIx>,
) -> Result<Link, ParseError> {
    if fields.len() < 6 {
        return Err(ParseError::MalformedRecord { line, tag: 'L' });
    }
    let from = resolve(line, fields[1], by_name)?;
    let from_orient = orientation(line, fields[2])?;
    let to = resolve(line, fields[3], by_name)?;
    let to_orient = orientation(line, fields[4])?;
    Ok(Link {
        from,
        from_orient,
        to,
        to_orient,
        overlap: fields[5].to_owned(),
    })
}

/// `P <name> <step>,<step>,... <overlap>,<overlap>,...`.
///
/// The overlap column may be `*`, meaning unspecified; otherwise it must
/// carry exactly one entry per consecutive step pair.
fn parse_path(
    line: usize,
    fields: &[&str],
    by_name: &HashMap<String, SegmentIx>,
) -> Result<Path, ParseError> {
    if fields.len() < 4 || fields[1].is_empty() || fields[2].is_empty() {
        return Err(ParseError::MalformedRecord { line, tag: 'P' });
    }

    let mut steps = Vec::new();
    for step in fields[2].split(',') {
        let (name, orient) = if let Some(name) = step.strip_suffix('+') {
            (name, Orientation::Forward)
        } else if let Some(name) = step.strip_suffix('-') {
            (name, Orientation::Backward)
        } else {
            return Err(ParseError::MalformedOrientation {
                line,
                token: step.to_owned(),
            });
        };
        if name.is_empty() {
            return Err(ParseError::MalformedRecord { line, tag: 'P' });
        }
        steps.push(Step {
            segment: resolve(line, name, by_name)?,
            orient,
        });
    }

    let overlaps: Vec<String> = if fields[3] == "*" {
        Vec::new()
    } else {
        fields[3].split(',').map(str::to_owned).collect()
    };
    if !overlaps.is_empty() && overlaps.len() != steps.len() - 1 {
        return Err(ParseError::MalformedOverlaps {
            line,
            steps: steps.len(),
            overlaps: overlaps.len(),
        });
    }

    Ok(Path {
        name: fields[1].to_owned(),
        steps,
        overlaps,
    })
}

fn resolve(
    line: usize,
    name: &str,
    by_name: &HashMap<String, SegmentIx>,
) -> Result<SegmentIx, ParseError> {
    by_name
        .get(name)
        .copied()
        .ok_or_else(|| ParseError::UnknownSegment {
            line,
            name: name.to_owned(),
        })
}

fn orientation(line: usize, token: &str) -> Result<Orientation, ParseError> {
    Orientation::from_token(token).ok_or_else(|| ParseError::MalformedOrientation {
        line,
        token: token.to_owned(),
    })
}
