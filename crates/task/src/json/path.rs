//! Property paths addressing values inside a JSON document.
//!
//! Supported forms:
//!
//! - `version`: a top-level key
//! - `dependencies.serde.version`: nested object keys
//! - `frameworks[0].name`: array indices
//! - `['key.with.dots']` or `["key"]`: quoted keys
//!
//! A leading `$.` (or `$` followed by a bracket) is accepted and ignored, so
//! JSONPath-style paths copied from other tools keep working. Keys that
//! merely start with `$`, such as `$schema`, are treated as plain keys.

use serde_json::Value;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// One step of a property path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A parsed property path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Parse a path, returning `None` if it is empty or malformed
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let body = if let Some(rest) = raw.strip_prefix("$.") {
            rest
        } else if raw.starts_with("$[") {
            &raw[1..]
        } else {
            raw
        };

        let segments = parse_segments(body)?;
        Some(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Look up the value this path points at
    #[must_use]
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let mut current = document;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.as_object()?.get(key)?,
                PathSegment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current)
    }

    /// Look up the value this path points at for in-place mutation
    pub fn resolve_mut<'a>(&self, document: &'a mut Value) -> Option<&'a mut Value> {
        let mut current = document;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.as_object_mut()?.get_mut(key)?,
                PathSegment::Index(index) => current.as_array_mut()?.get_mut(*index)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segments(input: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '[' => {
                chars.next();
                segments.push(parse_bracket(&mut chars)?);
            }
            '.' if !segments.is_empty() => {
                chars.next();
                segments.push(PathSegment::Key(read_key(&mut chars)?));
            }
            _ if segments.is_empty() => {
                segments.push(PathSegment::Key(read_key(&mut chars)?));
            }
            _ => return None,
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

fn read_key(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut key = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' || c == '[' {
            break;
        }
        key.push(c);
        chars.next();
    }
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

fn parse_bracket(chars: &mut Peekable<Chars<'_>>) -> Option<PathSegment> {
    let segment = match chars.peek() {
        Some(&quote) if quote == '\'' || quote == '"' => {
            chars.next();
            let mut key = String::new();
            loop {
                match chars.next()? {
                    c if c == quote => break,
                    c => key.push(c),
                }
            }
            PathSegment::Key(key)
        }
        _ => {
            let mut digits = String::new();
            while let Some(&c) = chars.peek() {
                if c == ']' {
                    break;
                }
                digits.push(c);
                chars.next();
            }
            PathSegment::Index(digits.trim().parse().ok()?)
        }
    };

    match chars.next() {
        Some(']') => Some(segment),
        _ => None,
    }
}
