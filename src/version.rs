//! Version parsing and comparison.
//!
//! A [`Version`] is an immutable (major, minor, revision) triple. Ordering is
//! lexicographic on the triple, so the derived [`Ord`] is the three-way
//! comparison the minimum-version gate relies on.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches the leading label and dotted numeric triple of an interpreter
/// version line, e.g. `ruby 2.1.0p0 (2014-05-08 revision 45883) [x86_64]`.
/// Trailing text (patch suffix, platform tag) is ignored.
static PROBE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+\s+(\d+)[.\s](\d+)[.\s](\d+)").expect("probe line pattern is valid")
});

/// Failed to extract a version triple from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no major.minor.revision triple in {text:?}")]
pub struct VersionParseError {
    /// The text that failed to parse.
    pub text: String,
}

/// A three-component interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub rev: u32,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, rev: u32) -> Self {
        Self { major, minor, rev }
    }

    /// Parse a version from interpreter probe output.
    ///
    /// Expects a line of the form `<label> <major>.<minor>.<revision>...`.
    /// Anything after the triple is ignored. A line missing any of the three
    /// components is an error, never a zero-filled version.
    pub fn parse_probe_output(text: &str) -> Result<Self, VersionParseError> {
        let caps = PROBE_LINE.captures(text).ok_or_else(|| VersionParseError {
            text: text.trim_end().to_string(),
        })?;

        // Groups are \d+ so parse only fails on overflow; treat that as
        // unparseable rather than panicking.
        let component = |i: usize| -> Result<u32, VersionParseError> {
            caps[i].parse().map_err(|_| VersionParseError {
                text: text.trim_end().to_string(),
            })
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            rev: component(3)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.rev)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parse a bare `major.minor.revision` triple, with an optional leading
    /// `v`. Used for the `--min-ruby` flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError {
            text: s.to_string(),
        };

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let mut parts = trimmed.split('.');
        let mut component = || -> Result<u32, VersionParseError> {
            parts
                .next()
                .ok_or_else(err)?
                .parse()
                .map_err(|_| err())
        };

        let version = Self {
            major: component()?,
            minor: component()?,
            rev: component()?,
        };
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn parses_probe_output_with_trailing_text() {
        let v = Version::parse_probe_output(
            "ruby 2.1.0p0 (2013-12-25 revision 44422) [x86_64-linux]",
        )
        .unwrap();
        assert_eq!(v, Version::new(2, 1, 0));
    }

    #[test]
    fn parses_plain_probe_output() {
        let v = Version::parse_probe_output("ruby 3.2.1").unwrap();
        assert_eq!(v, Version::new(3, 2, 1));
    }

    #[test]
    fn rejects_missing_component() {
        assert!(Version::parse_probe_output("ruby 2.1").is_err());
        assert!(Version::parse_probe_output("ruby 2").is_err());
    }

    #[test]
    fn rejects_line_without_label() {
        // Probe output always carries the interpreter name first.
        assert!(Version::parse_probe_output("").is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(Version::parse_probe_output("ruby x.y.z").is_err());
    }

    #[test]
    fn display_renders_v_prefixed_triple() {
        assert_eq!(Version::new(2, 1, 0).to_string(), "v2.1.0");
        assert_eq!(Version::new(10, 0, 42).to_string(), "v10.0.42");
    }

    #[test]
    fn display_round_trips_through_probe_parse() {
        // toString does not emit a label, so prepend one before re-parsing.
        let v = Version::new(3, 4, 5);
        let reparsed = Version::parse_probe_output(&format!("ruby {}", v)).unwrap();
        assert_eq!(reparsed, v);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(1, 9, 3) < Version::new(2, 1, 0));
        assert!(Version::new(2, 0, 9) < Version::new(2, 1, 0));
        assert!(Version::new(2, 1, 0) < Version::new(2, 1, 1));
        assert!(Version::new(3, 0, 0) > Version::new(2, 99, 99));
    }

    #[test]
    fn ordering_obeys_total_order_laws() {
        let a = Version::new(1, 2, 3);
        let b = Version::new(1, 3, 0);
        let c = Version::new(2, 0, 0);

        // Reflexivity of equality
        assert_eq!(a.cmp(&a), Ordering::Equal);

        // Antisymmetry
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);

        // Transitivity
        assert!(a < b && b < c && a < c);
    }

    #[test]
    fn equal_versions_compare_equal() {
        assert_eq!(Version::new(2, 1, 0), Version::new(2, 1, 0));
    }

    #[test]
    fn from_str_parses_bare_triple() {
        assert_eq!("2.1.0".parse::<Version>().unwrap(), Version::new(2, 1, 0));
        assert_eq!("v1.9.3".parse::<Version>().unwrap(), Version::new(1, 9, 3));
    }

    #[test]
    fn from_str_rejects_extra_or_missing_components() {
        assert!("2.1".parse::<Version>().is_err());
        assert!("2.1.0.4".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
        assert!("a.b.c".parse::<Version>().is_err());
    }
}
