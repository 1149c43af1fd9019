use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord};
use lazy_static::lazy_static;
use tracing::*;

/// Reference data for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub atomic_number: u8,
    /// Standard atomic weight in daltons.
    pub mass: f64,
    /// Maximum number of bonds the element forms, if it is one of the
    /// elements the layout stage needs a valence for.
    pub max_bonds: Option<u8>,
}

fn parse_record(record: &StringRecord) -> Option<(String, ElementData)> {
    let symbol = record.get(0)?.trim();
    let atomic_number = record.get(1)?.trim().parse().ok()?;
    let mass = record.get(2)?.trim().parse().ok()?;
    let max_bonds = match record.get(3).map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(value.parse().ok()?),
    };
    if symbol.is_empty() {
        return None;
    }
    Some((symbol.to_string(), ElementData { atomic_number, mass, max_bonds }))
}

fn read_element_table(csv_data: &str) -> HashMap<String, ElementData> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let mut table = HashMap::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable element record: {}", e);
                continue;
            }
        };
        match parse_record(&record) {
            Some((symbol, data)) => {
                table.insert(symbol, data);
            }
            None => warn!("Skipping malformed element record: {:?}", record),
        }
    }
    table
}

lazy_static! {
    /// Symbol -> atomic number, mass and maximum bond count, built once from the
    /// embedded table and never mutated.
    static ref ELEMENT_TABLE: HashMap<String, ElementData> = {
        let table = read_element_table(include_str!("elements.csv"));
        debug!("Loaded {} elements", table.len());
        table
    };
}

/// Lowercase symbols the linear notation allows for aromatic atoms.
const AROMATIC_SYMBOLS: [&str; 9] = ["b", "c", "n", "o", "p", "s", "se", "as", "te"];

/// Look up the reference data for an element symbol.
///
/// Exact symbols are tried first. Lowercase aromatic symbols (`c`, `se`, `as`,
/// ...) fall back to their capitalised form; other lowercase symbols such as
/// `cl` are unknown.
pub fn element_data(symbol: &str) -> Option<&'static ElementData> {
    if let Some(data) = ELEMENT_TABLE.get(symbol) {
        return Some(data);
    }
    if !AROMATIC_SYMBOLS.iter().any(|aromatic| *aromatic == symbol) {
        return None;
    }

    let mut chars = symbol.chars();
    let first = chars.next()?;
    let capitalised: String = first.to_ascii_uppercase().to_string() + chars.as_str();
    ELEMENT_TABLE.get(&capitalised)
}

/// The atomic number of an element, or `None` for unknown symbols.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    element_data(symbol).map(|data| data.atomic_number)
}

/// The standard atomic weight of an element, or `None` for unknown symbols.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    element_data(symbol).map(|data| data.mass)
}

/// The maximum bond count of an element. `None` for unknown symbols and for
/// elements without a tabulated valence.
pub fn max_bonds(symbol: &str) -> Option<u8> {
    element_data(symbol).and_then(|data| data.max_bonds)
}
