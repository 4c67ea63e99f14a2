//! Planner configuration and defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Map file read when no path is given.
pub const DEFAULT_MAP_PATH: &str = "map_data.txt";
/// Package file read when no path is given.
pub const DEFAULT_PACKAGES_PATH: &str = "package_list.csv";
/// Depot used when none is given.
pub const DEFAULT_DEPOT: &str = "A";

/// Field separator for input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Any run of spaces or tabs.
    #[default]
    Whitespace,
    /// A single ASCII byte such as `,` or `;`.
    Byte(u8),
}

impl Delimiter {
    /// Byte handed to the CSV reader.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Whitespace => b' ',
            Self::Byte(b) => b,
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whitespace" | "space" | " " => Ok(Self::Whitespace),
            "tab" | "\t" => Ok(Self::Byte(b'\t')),
            "comma" => Ok(Self::Byte(b',')),
            "semicolon" => Ok(Self::Byte(b';')),
            _ => match s.as_bytes() {
                [b] if b.is_ascii_punctuation() && !matches!(*b, b'#' | b'"') => Ok(Self::Byte(*b)),
                _ => Err(format!("invalid delimiter '{s}'")),
            },
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace => f.write_str("whitespace"),
            Self::Byte(b) => write!(f, "{}", *b as char),
        }
    }
}

/// Settings for a planning run.
///
/// # Examples
///
/// ```
/// use u_delivery::config::{Delimiter, PlannerConfig};
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.depot, "A");
/// assert_eq!(config.delimiter, Delimiter::Whitespace);
/// assert!(!config.precompute_distances);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Code of the start/end location.
    pub depot: String,
    /// Edge file, one `FROM TO DISTANCE` record per line.
    pub map_path: PathBuf,
    /// Package file, one `PACKAGE_ID DESTINATION` record per line.
    pub packages_path: PathBuf,
    /// Field separator shared by both files.
    pub delimiter: Delimiter,
    /// Build an all-pairs distance matrix before routing.
    pub precompute_distances: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT.to_string(),
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            packages_path: PathBuf::from(DEFAULT_PACKAGES_PATH),
            delimiter: Delimiter::default(),
            precompute_distances: false,
        }
    }
}
