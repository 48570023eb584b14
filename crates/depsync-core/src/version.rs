//! Semver-style version parsing, comparison, and operator matching.
//!
//! The accepted grammar is `v?MAJOR(.MINOR(.PATCH(.BUILD)?)?)?` with an
//! optional `-pre.release` suffix and an optional `+build.metadata` suffix:
//! - MAJOR must be numeric; the remaining core segments may also be one of
//!   the wildcards `x`, `X`, `*`
//! - a pre-release or metadata suffix requires at least MAJOR.MINOR.PATCH
//! - build metadata never participates in ordering
//!
//! Precedence follows semver: missing core segments count as zero, a
//! wildcard ties with anything, and a pre-release sorts before its release.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use depsync_util::errors::DepsyncError;

/// A parsed version with comparable segments.
#[derive(Debug, Clone)]
pub struct Version {
    pub original: String,
    core: Vec<CoreSegment>,
    pre: Vec<PreIdent>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum CoreSegment {
    Numeric(u64),
    Wildcard,
}

/// A pre-release identifier: numeric-looking identifiers are coerced to
/// numbers, everything else stays text.
#[derive(Debug, Clone, Eq, PartialEq)]
enum PreIdent {
    Numeric(u64),
    Text(String),
}

impl Version {
    /// Parse a version string, rejecting anything outside the grammar.
    pub fn parse(version: &str) -> Result<Self, DepsyncError> {
        let invalid = || DepsyncError::InvalidVersion {
            version: version.to_string(),
        };

        let body = version.strip_prefix(['v', 'V']).unwrap_or(version);

        let (body, metadata) = match body.split_once('+') {
            Some((b, m)) => (b, Some(m)),
            None => (body, None),
        };

        // The pre-release portion starts at the first `-`; identifiers
        // themselves may contain hyphens.
        let (core_text, pre_text) = match body.split_once('-') {
            Some((c, p)) => (c, Some(p)),
            None => (body, None),
        };

        let mut core = Vec::new();
        for (i, segment) in core_text.split('.').enumerate() {
            if i >= 4 {
                return Err(invalid());
            }
            core.push(parse_core_segment(segment, i == 0).ok_or_else(invalid)?);
        }

        if (pre_text.is_some() || metadata.is_some()) && core.len() < 3 {
            return Err(invalid());
        }

        if let Some(meta) = metadata {
            if !idents_well_formed(meta) {
                return Err(invalid());
            }
        }

        let mut pre = Vec::new();
        if let Some(pre_text) = pre_text {
            if !idents_well_formed(pre_text) {
                return Err(invalid());
            }
            pre = pre_text.split('.').map(parse_pre_ident).collect();
        }

        Ok(Self {
            original: version.to_string(),
            core,
            pre,
        })
    }

    /// Whether this is a pre-release of some version.
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.core.len().max(other.core.len());
        for i in 0..max_len {
            let ord = compare_core(self.core.get(i).copied(), other.core.get(i).copied());
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // Core segments tie; a pre-release precedes its release.
        match (self.pre.is_empty(), other.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, false) => compare_pre(&self.pre, &other.pre),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_core(a: Option<CoreSegment>, b: Option<CoreSegment>) -> Ordering {
    // A missing segment counts as zero.
    let a = a.unwrap_or(CoreSegment::Numeric(0));
    let b = b.unwrap_or(CoreSegment::Numeric(0));
    match (a, b) {
        (CoreSegment::Wildcard, _) | (_, CoreSegment::Wildcard) => Ordering::Equal,
        (CoreSegment::Numeric(a), CoreSegment::Numeric(b)) => a.cmp(&b),
    }
}

fn compare_pre(a: &[PreIdent], b: &[PreIdent]) -> Ordering {
    let max_len = a.len().max(b.len());
    for i in 0..max_len {
        let ord = match (a.get(i), b.get(i)) {
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => compare_pre_idents(a, b),
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_pre_idents(a: &PreIdent, b: &PreIdent) -> Ordering {
    match (a, b) {
        (PreIdent::Numeric(a), PreIdent::Numeric(b)) => a.cmp(b),
        (PreIdent::Text(a), PreIdent::Text(b)) => a.cmp(b),
        // Numeric identifiers sort before text at the same position.
        (PreIdent::Numeric(_), PreIdent::Text(_)) => Ordering::Less,
        (PreIdent::Text(_), PreIdent::Numeric(_)) => Ordering::Greater,
    }
}

fn parse_core_segment(text: &str, is_major: bool) -> Option<CoreSegment> {
    if !is_major && matches!(text, "x" | "X" | "*") {
        return Some(CoreSegment::Wildcard);
    }
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().map(CoreSegment::Numeric)
}

fn idents_well_formed(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|ident| {
            !ident.is_empty()
                && ident
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

fn parse_pre_ident(ident: &str) -> PreIdent {
    match ident.parse::<u64>() {
        Ok(n) => PreIdent::Numeric(n),
        Err(_) => PreIdent::Text(ident.to_string()),
    }
}

/// Check a version string against the grammar without keeping the parse.
pub fn validate(version: &str) -> Result<(), DepsyncError> {
    Version::parse(version).map(|_| ())
}

/// Compare two version strings, validating both first.
pub fn compare(a: &str, b: &str) -> Result<Ordering, DepsyncError> {
    let a = Version::parse(a)?;
    let b = Version::parse(b)?;
    Ok(a.cmp(&b))
}

/// A relational operator over version precedence.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operator {
    Greater,
    GreaterEq,
    Equal,
    LessEq,
    Less,
}

impl FromStr for Operator {
    type Err = DepsyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterEq),
            "=" => Ok(Self::Equal),
            "<=" => Ok(Self::LessEq),
            "<" => Ok(Self::Less),
            _ => Err(DepsyncError::InvalidOperator {
                operator: s.to_string(),
            }),
        }
    }
}

impl Operator {
    /// Whether a comparison outcome is in this operator's accepted set.
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            Self::Greater => ord == Ordering::Greater,
            Self::GreaterEq => ord != Ordering::Less,
            Self::Equal => ord == Ordering::Equal,
            Self::LessEq => ord != Ordering::Greater,
            Self::Less => ord == Ordering::Less,
        }
    }
}

/// Evaluate `a <operator> b` where `operator` is one of `>`, `>=`, `=`,
/// `<=`, `<`.
pub fn matches(a: &str, b: &str, operator: &str) -> Result<bool, DepsyncError> {
    let op: Operator = operator.parse()?;
    Ok(op.accepts(compare(a, b)?))
}

/// Remove a single leading `^` or `~` range qualifier, if present.
pub fn strip_range_qualifier(spec: &str) -> &str {
    spec.strip_prefix(['^', '~']).unwrap_or(spec)
}
