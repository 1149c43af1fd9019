use anyhow::{bail, Context, Result};
use molecule_atom::*;
use tracing::*;

fn describe(symbol: &str) -> Result<String> {
    let atom = Atom::new(symbol, Bond::Single);
    let atomic_number = atom
        .atomic_number()
        .with_context(|| format!("Unknown element symbol: {}", symbol))?;

    let mass = atom
        .mass()
        .map(|mass| format!("{:.3}", mass))
        .unwrap_or_else(|| "-".to_string());
    let max_bonds = atom
        .max_bonds()
        .map(|max_bonds| max_bonds.to_string())
        .unwrap_or_else(|| "-".to_string());

    Ok(format!(
        "{}\tZ={}\tmass={}\tmax_bonds={}\taromatic={}",
        atom.element, atomic_number, mass, max_bonds, atom.is_part_of_aromatic_ring
    ))
}

fn main() -> Result<()> {
    let level = std::env::var("ATOM_LOG").unwrap_or_else(|_| "warn".to_string());
    init_logging(&level);

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        bail!("Usage: atom-info <element symbol>...");
    }

    let mut failed = 0;
    for symbol in &symbols {
        match describe(symbol) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} symbols were not recognised", failed, symbols.len());
    }
    Ok(())
}
