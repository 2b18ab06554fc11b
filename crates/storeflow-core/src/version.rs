// Rust guideline compliant 2026-10-18

//! Dotted version identifier comparison.
//!
//! Identifiers are compared component by component as integers, most
//! significant first. When one identifier is a prefix of the other, the
//! shorter one sorts first, so `1.2 < 1.2.0`. This is not semantic
//! versioning: pre-release and build suffixes are not recognized and are
//! rejected like any other non-numeric component.

use crate::{Error, Result};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One numeric component of a version identifier.
///
/// Stored as its decimal digits without leading zeros, so components of any
/// size are accepted. A longer digit string is a larger number; equal
/// lengths compare by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(String);

impl Component {
    /// Returns the canonical decimal digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed dotted-numeric version identifier such as `1.12.3`.
///
/// The derived `Ord` on the component vector is exactly the comparison rule:
/// lexicographic by numeric component, shorter prefix first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    components: Vec<Component>,
}

impl Version {
    /// Returns the numeric components in order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let components = s
            .split('.')
            .map(|component| parse_component(s, component))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

fn parse_component(version: &str, component: &str) -> Result<Component> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidVersion {
            version: version.to_string(),
            component: component.to_string(),
        });
    }
    let digits = component.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    Ok(Component(digits.to_string()))
}

/// Compares two dotted version identifiers.
///
/// # Arguments
///
/// * `v1` - Left-hand identifier
/// * `v2` - Right-hand identifier
///
/// # Returns
///
/// `Less`, `Equal` or `Greater`. Casting the result with `as i8` yields the
/// conventional `-1`, `0`, `1`.
///
/// # Errors
///
/// Returns `Error::InvalidVersion` if either identifier has an empty or
/// non-numeric component.
pub fn compare_versions(v1: &str, v2: &str) -> Result<Ordering> {
    let left: Version = v1.parse()?;
    let right: Version = v2.parse()?;
    Ok(left.cmp(&right))
}

/// Compares two dynamically typed values as version identifiers.
///
/// # Arguments
///
/// * `v1` - Left-hand value
/// * `v2` - Right-hand value
///
/// # Returns
///
/// `Ok(None)` if either value is not a JSON string, otherwise the ordering.
///
/// # Errors
///
/// Returns `Error::InvalidVersion` if both values are strings but one is
/// not a well-formed identifier.
pub fn compare_version_values(v1: &Value, v2: &Value) -> Result<Option<Ordering>> {
    match (v1.as_str(), v2.as_str()) {
        (Some(left), Some(right)) => compare_versions(left, right).map(Some),
        _ => Ok(None),
    }
}
