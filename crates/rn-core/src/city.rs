//! City record type and its line parser.
//!
//! # Record format
//!
//! One city per line, whitespace separated:
//!
//! ```text
//! number code name[ name] population elevation
//! ```
//!
//! The display name may contain a single internal space (e.g. `SAN FELIPE`),
//! so the field after the name is disambiguated by content: if the 4th token
//! is all digits it is the population, otherwise it is the second half of
//! the name and the population follows.  Population and elevation are kept
//! as written — they are display data, never arithmetic operands.

use std::fmt;

use crate::{CityId, CoreError, CoreResult};

/// Immutable city record: one vertex of the road network.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// 1-based city number; equals matrix index + 1.
    pub id: CityId,
    /// Short unique lookup key (e.g. `AN`), matched case-sensitively.
    pub code: String,
    /// Display name, possibly with one internal space.
    pub name: String,
    /// Population as written in the file.
    pub population: String,
    /// Elevation as written in the file.
    pub elevation: String,
}

impl City {
    /// Parse one record line.
    ///
    /// Returns [`CoreError::Parse`] when the line has too few fields or a
    /// non-numeric city number.  Tokens past the elevation are ignored.
    pub fn parse(line: &str) -> CoreResult<City> {
        let mut tokens = line.split_whitespace();
        let mut field = |what: &str| {
            tokens
                .next()
                .ok_or_else(|| CoreError::Parse(format!("missing {what} in {line:?}")))
        };

        let number = field("city number")?;
        let id = number
            .parse::<u32>()
            .map_err(|_| CoreError::Parse(format!("bad city number {number:?} in {line:?}")))?;
        let code = field("city code")?.to_string();
        let mut name = field("city name")?.to_string();

        // 4th token: population if numeric, otherwise the name's second word.
        let next = field("population")?;
        let population = if all_digits(next) {
            next.to_string()
        } else {
            name.push(' ');
            name.push_str(next);
            field("population")?.to_string()
        };
        let elevation = field("elevation")?.to_string();

        Ok(City { id: CityId(id), code, name, population, elevation })
    }
}

impl fmt::Display for City {
    /// The full-record line shown by the query command.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id.0, self.code, self.name, self.population, self.elevation
        )
    }
}

/// `true` for a non-empty, all-ASCII-digit token.
#[inline]
fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
