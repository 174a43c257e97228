use crate::Identifier;

/// A minimal interface for generating identifiers.
///
/// Generation never fails and never blocks: the counter simply wraps when it
/// is exhausted, so callers always get an identifier back.
pub trait IdentifierGenerator {
    /// Generates the next identifier.
    fn next_id(&self) -> Identifier;
}

impl<G: IdentifierGenerator + ?Sized> IdentifierGenerator for &G {
    fn next_id(&self) -> Identifier {
        (**self).next_id()
    }
}

impl<G: IdentifierGenerator + ?Sized> IdentifierGenerator for std::sync::Arc<G> {
    fn next_id(&self) -> Identifier {
        (**self).next_id()
    }
}
