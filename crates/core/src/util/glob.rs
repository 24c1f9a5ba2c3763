//! Glob-style whitelist patterns evaluated against the filesystem

use crate::error::{DataProcError, Result};
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Wildcard { regex: Regex, hidden: bool },
}

/// A whitelist pattern such as `*.conf` or `data/test*`
///
/// Segments are separated by `/` and support `*`, `?`, `[seq]` and
/// `[!seq]`. Entries whose name starts with `.` only match segments that
/// start with `.` themselves. A trailing `/` restricts the match to
/// directories. Absolute patterns are rejected.
#[derive(Debug, Clone)]
pub struct WhitelistPattern {
    segments: Vec<Segment>,
    dir_only: bool,
}

impl WhitelistPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.starts_with('/') {
            return Err(DataProcError::pattern(
                pattern,
                "pattern must be relative to the scanned directory",
            ));
        }
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| compile_segment(pattern, s))
            .collect::<Result<Vec<_>>>()?;

        if segments.is_empty() {
            return Err(DataProcError::pattern(pattern, "pattern is empty"));
        }

        Ok(Self {
            segments,
            dir_only: pattern.ends_with('/'),
        })
    }

    /// Whether at least one entry matches `dir/<pattern>`
    pub fn matches_in(&self, dir: &Path) -> io::Result<bool> {
        self.match_from(dir, 0)
    }

    fn match_from(&self, base: &Path, index: usize) -> io::Result<bool> {
        let last = index + 1 == self.segments.len();
        match &self.segments[index] {
            Segment::Literal(name) => {
                let candidate = base.join(name);
                if last {
                    return Ok(if self.dir_only {
                        candidate.is_dir()
                    } else {
                        candidate.symlink_metadata().is_ok()
                    });
                }
                if !candidate.is_dir() {
                    return Ok(false);
                }
                self.match_from(&candidate, index + 1)
            }
            Segment::Wildcard { regex, hidden } => {
                for entry in fs::read_dir(base)? {
                    let entry = entry?;
                    let name = entry.file_name();
                    let name = name.to_string_lossy();
                    if name.starts_with('.') && !hidden {
                        continue;
                    }
                    if !regex.is_match(&name) {
                        continue;
                    }
                    let path = entry.path();
                    if last {
                        if !self.dir_only || path.is_dir() {
                            return Ok(true);
                        }
                        continue;
                    }
                    if path.is_dir() && self.match_from(&path, index + 1)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn has_magic(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

fn compile_segment(pattern: &str, segment: &str) -> Result<Segment> {
    if !has_magic(segment) {
        return Ok(Segment::Literal(segment.to_string()));
    }
    let regex = Regex::new(&translate(segment))
        .map_err(|e| DataProcError::pattern(pattern, e.to_string()))?;
    Ok(Segment::Wildcard {
        regex,
        hidden: segment.starts_with('.'),
    })
}

/// Translate one glob segment into an anchored regex
fn translate(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                // a leading ']' belongs to the set
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str(r"\[");
                    continue;
                }

                let mut body = &chars[i..j];
                out.push('[');
                if body.first() == Some(&'!') {
                    out.push('^');
                    body = &body[1..];
                }
                for &b in body {
                    if matches!(b, '\\' | '[' | ']' | '^' | '&' | '~') {
                        out.push('\\');
                    }
                    out.push(b);
                }
                out.push(']');
                i = j + 1;
            }
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }

    out.push('$');
    out
}
