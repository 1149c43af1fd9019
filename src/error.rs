use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    #[error("Unknown bond symbol '{0}'")]
    UnknownBondSymbol(char),
    #[error("Invalid bond \"{0}\", expected a single bond symbol")]
    InvalidBond(String),
    #[error("Invalid pseudo element key \"{0}\", expected a hydrogen count followed by an element symbol")]
    InvalidPseudoElementKey(String),
    #[error("Vertex {0} is not part of the molecule graph")]
    MissingVertex(usize),
}
