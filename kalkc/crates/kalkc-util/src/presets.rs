//! Compiler presets.
//!
//! Settings that change how source text is read, shared by the compiler
//! crates and the command line front end.

use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PresetError, PresetResult};

/// How one indentation level is written
///
/// Serialized as the string `"tab"` or as the number of spaces per level.
///
/// # Examples
///
/// ```
/// use kalkc_util::Indentation;
///
/// let spaces: Indentation = "4".parse().unwrap();
/// assert_eq!(spaces.width(), Some(4));
/// assert_eq!("tab".parse::<Indentation>().unwrap(), Indentation::Tab);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IndentationRepr", into = "IndentationRepr")]
pub enum Indentation {
    /// One tab character per level
    #[default]
    Tab,
    /// A fixed number of spaces per level
    Spaces(NonZeroU8),
}

impl Indentation {
    /// Space indentation of the given width
    pub fn spaces(width: u8) -> PresetResult<Self> {
        NonZeroU8::new(width)
            .map(Indentation::Spaces)
            .ok_or(PresetError::ZeroIndentWidth)
    }

    /// Spaces per level, or `None` for tabs
    pub fn width(self) -> Option<u8> {
        match self {
            Indentation::Tab => None,
            Indentation::Spaces(width) => Some(width.get()),
        }
    }

    /// Character that makes up the indentation
    pub fn character(self) -> char {
        match self {
            Indentation::Tab => '\t',
            Indentation::Spaces(_) => ' ',
        }
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indentation::Tab => f.write_str("tab"),
            Indentation::Spaces(width) => write!(f, "{}", width),
        }
    }
}

impl FromStr for Indentation {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") || s.eq_ignore_ascii_case("t") {
            return Ok(Indentation::Tab);
        }

        match s.parse::<u8>() {
            Ok(width) => Indentation::spaces(width),
            Err(_) => Err(PresetError::InvalidIndentation(s.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IndentationRepr {
    Width(u8),
    Name(String),
}

impl TryFrom<IndentationRepr> for Indentation {
    type Error = PresetError;

    fn try_from(repr: IndentationRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentationRepr::Width(width) => Indentation::spaces(width),
            IndentationRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Indentation> for IndentationRepr {
    fn from(indentation: Indentation) -> Self {
        match indentation {
            Indentation::Tab => IndentationRepr::Name("tab".to_owned()),
            Indentation::Spaces(width) => IndentationRepr::Width(width.get()),
        }
    }
}

/// Presets for reading one project
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presets {
    /// Indentation style of the source files
    #[serde(default)]
    pub indentation: Indentation,

    /// Lex the lines of a component in parallel
    #[serde(default)]
    pub parallel: bool,
}

impl Presets {
    /// Presets with the given indentation
    pub fn with_indentation(indentation: Indentation) -> Self {
        Self {
            indentation,
            ..Self::default()
        }
    }
}
