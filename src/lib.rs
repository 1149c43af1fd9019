use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

mod error;
pub use error::*;

mod logging;
pub use logging::*;

mod elements;
pub use elements::*;

mod atom;
pub use atom::*;

mod graph;
pub use graph::*;

mod priority;
pub use priority::*;

/// The bond symbols of the linear notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bond {
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
    /// `.`, no bond between two disconnected components.
    Disconnected,
    /// `/`, a single bond with an up direction.
    Up,
    /// `\`, a single bond with a down direction.
    Down,
}

impl Bond {
    pub fn symbol(&self) -> char {
        match self {
            Bond::Single => '-',
            Bond::Double => '=',
            Bond::Triple => '#',
            Bond::Quadruple => '$',
            Bond::Aromatic => ':',
            Bond::Disconnected => '.',
            Bond::Up => '/',
            Bond::Down => '\\',
        }
    }
}

impl TryFrom<char> for Bond {
    type Error = AtomError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Ok(match symbol {
            '-' => Bond::Single,
            '=' => Bond::Double,
            '#' => Bond::Triple,
            '$' => Bond::Quadruple,
            ':' => Bond::Aromatic,
            '.' => Bond::Disconnected,
            '/' => Bond::Up,
            '\\' => Bond::Down,
            other => return Err(AtomError::UnknownBondSymbol(other)),
        })
    }
}

impl FromStr for Bond {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Bond::try_from(symbol),
            _ => Err(AtomError::InvalidBond(s.to_string())),
        }
    }
}

impl Display for Bond {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.symbol())
    }
}
