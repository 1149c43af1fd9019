use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use nom::{
    character::complete::digit1,
    combinator::{map_res, rest, verify},
    sequence::pair,
    IResult,
};
use tracing::*;

use super::Atom;
use crate::AtomError;

/// Identifies a group of condensed terminal atoms: the element together with
/// the number of hydrogens attached to it.
///
/// Keys render as `"{hydrogen_count}{element}"` (`0Br`, `1C`) and are ordered
/// lexicographically on that rendering, so `10C` sorts before `2C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PseudoElementKey {
    pub hydrogen_count: usize,
    pub element: String,
}

impl PseudoElementKey {
    pub fn new(element: &str, hydrogen_count: usize) -> Self {
        Self {
            hydrogen_count,
            element: element.to_string(),
        }
    }
}

impl Display for PseudoElementKey {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}{}", self.hydrogen_count, self.element)
    }
}

/// Decimal digits of `n`, right aligned in the buffer, and where they start.
fn decimal_digits(mut n: usize) -> ([u8; 20], usize) {
    let mut buf = [0u8; 20];
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    (buf, start)
}

impl Ord for PseudoElementKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (own_digits, own_start) = decimal_digits(self.hydrogen_count);
        let (other_digits, other_start) = decimal_digits(other.hydrogen_count);
        let own = own_digits[own_start..].iter().chain(self.element.as_bytes());
        let theirs = other_digits[other_start..].iter().chain(other.element.as_bytes());

        own.cmp(theirs)
            .then_with(|| self.hydrogen_count.cmp(&other.hydrogen_count))
            .then_with(|| self.element.cmp(&other.element))
    }
}

impl PartialOrd for PseudoElementKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The element is everything after the leading digits, so elements that
// themselves start with a digit cannot be told apart from the hydrogen count.
fn parse_key(input: &str) -> IResult<&str, (usize, &str)> {
    pair(
        map_res(digit1, |digits: &str| digits.parse::<usize>()),
        verify(rest, |element: &str| !element.is_empty()),
    )(input)
}

impl FromStr for PseudoElementKey {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (hydrogen_count, element)) =
            parse_key(s).map_err(|_| AtomError::InvalidPseudoElementKey(s.to_string()))?;
        Ok(Self::new(element, hydrogen_count))
    }
}

/// A group of terminal atoms drawn condensed into the atom they hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoElement {
    pub element: String,
    /// How many atoms with this key were condensed.
    pub count: usize,
    pub hydrogen_count: usize,
    /// The chain atom the most recent group was condensed from.
    pub previous_element: String,
}

impl Atom {
    /// Record one more condensed terminal atom of `element` carrying
    /// `hydrogen_count` hydrogens.
    pub fn attach_pseudo_element(&mut self, element: &str, previous_element: &str, hydrogen_count: usize) {
        let key = PseudoElementKey::new(element, hydrogen_count);
        match self.attached_pseudo_elements.get_mut(&key) {
            Some(pseudo) => {
                pseudo.count += 1;
                pseudo.previous_element = previous_element.to_string();
                debug!("Pseudo element {} now condenses {} atoms", key, pseudo.count);
            }
            None => {
                debug!("Attaching pseudo element {} to {}", key, self.element);
                self.attached_pseudo_elements.insert(
                    key,
                    PseudoElement {
                        element: element.to_string(),
                        count: 1,
                        hydrogen_count,
                        previous_element: previous_element.to_string(),
                    },
                );
            }
        }
        self.has_attached_pseudo_elements = true;
    }

    /// The attached pseudo elements in key order.
    pub fn attached_pseudo_elements(&self) -> &BTreeMap<PseudoElementKey, PseudoElement> {
        &self.attached_pseudo_elements
    }

    /// The number of distinct keys, not the number of condensed atoms.
    pub fn attached_pseudo_elements_count(&self) -> usize {
        self.attached_pseudo_elements.len()
    }

    /// Set by the first attachment and never cleared.
    pub fn has_attached_pseudo_elements(&self) -> bool {
        self.has_attached_pseudo_elements
    }

    /// Look up a pseudo element by its rendered key, e.g. `"0Br"`.
    pub fn pseudo_element(&self, key: &str) -> Option<&PseudoElement> {
        let key = key.parse::<PseudoElementKey>().ok()?;
        self.attached_pseudo_elements.get(&key)
    }
}
