//! Conversion configuration and object naming

use encoding_rs::Encoding;
use std::fmt;
use std::str::FromStr;

/// On-disk deck dialect.
///
/// Dialects differ in title, control card, solid header and ident table
/// column layout. `Dynamic` decks use the dialect 5 layout with the
/// OR-clause region grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Dialect "0": dialect 5 layout, OR-clause regions
    Dynamic,
    /// Oldest layout: no units, no control card, no ident table
    V1,
    V4,
    #[default]
    V5,
}

impl Dialect {
    /// Numeric dialect code as used on the command line
    pub fn code(&self) -> u8 {
        match self {
            Dialect::Dynamic => 0,
            Dialect::V1 => 1,
            Dialect::V4 => 4,
            Dialect::V5 => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Dialect::Dynamic),
            1 => Some(Dialect::V1),
            4 => Some(Dialect::V4),
            5 => Some(Dialect::V5),
            _ => None,
        }
    }

    /// Whether the deck carries a control card with declared totals
    pub fn has_control_card(&self) -> bool {
        !matches!(self, Dialect::V1)
    }

    /// Whether the deck carries an ident table after the regions
    pub fn has_ident_table(&self) -> bool {
        !matches!(self, Dialect::V1)
    }

    /// Whether this is one of the two oldest column layouts
    pub fn is_legacy_layout(&self) -> bool {
        matches!(self, Dialect::V1 | Dialect::V4)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Dialect::from_code)
            .ok_or_else(|| format!("unknown deck dialect '{}' (expected 0, 1, 4 or 5)", s))
    }
}

/// Suffixes longer than this are cut when name truncation is requested
pub const MAX_SUFFIX_LEN: usize = 13;

/// Generates every object name written by a conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Naming {
    suffix: String,
}

impl Naming {
    /// Naming with the given suffix, cut to [`MAX_SUFFIX_LEN`] characters
    /// when `truncate` is set
    pub fn new(suffix: &str, truncate: bool) -> Self {
        let suffix = if truncate {
            suffix.chars().take(MAX_SUFFIX_LEN).collect()
        } else {
            suffix.to_string()
        };
        Self { suffix }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `s<index><suffix>`
    pub fn solid(&self, index: usize) -> String {
        format!("s{}{}", index, self.suffix)
    }

    /// `r<number><suffix>`
    pub fn region(&self, number: usize) -> String {
        format!("r{}{}", number, self.suffix)
    }

    /// `r<number>c<clause><suffix>`
    pub fn clause(&self, region: usize, clause: usize) -> String {
        format!("r{}c{}{}", region, clause, self.suffix)
    }

    /// Group name plus suffix
    pub fn group(&self, base: &str) -> String {
        format!("{}{}", base, self.suffix)
    }

    /// Name of the top assembly
    pub fn top(&self) -> String {
        format!("all{}", self.suffix)
    }
}

/// Configuration for a conversion run. Immutable once the run starts.
#[derive(Debug, Clone)]
pub struct ConversionConfiguration {
    /// Deck dialect
    pub dialect: Dialect,
    /// Suffix appended to every generated name
    pub name_suffix: String,
    /// Cut long suffixes for legacy name-length limits
    pub truncate_names: bool,
    /// Fallback decoding for lines that are not UTF-8.
    /// `None` means Latin-1.
    pub encoding: Option<&'static Encoding>,
}

impl Default for ConversionConfiguration {
    fn default() -> Self {
        Self {
            dialect: Dialect::V5,
            name_suffix: String::new(),
            truncate_names: false,
            encoding: None,
        }
    }
}

impl ConversionConfiguration {
    /// Configuration for a dialect with every other option at its default
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Builder: set the name suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }

    /// Builder: enable or disable suffix truncation
    pub fn with_truncated_names(mut self, truncate: bool) -> Self {
        self.truncate_names = truncate;
        self
    }

    /// Builder: set the fallback text encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Naming scheme derived from the suffix options
    pub fn naming(&self) -> Naming {
        Naming::new(&self.name_suffix, self.truncate_names)
    }
}
