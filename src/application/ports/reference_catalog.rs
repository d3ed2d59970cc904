use crate::domain::ReferenceSentence;

/// Lookup of reference sentences by id.
///
/// The catalog is loaded once and read-only afterwards, so the lookup
/// is synchronous.
pub trait ReferenceCatalog: Send + Sync {
    fn lookup(&self, sentence_id: &str) -> Option<ReferenceSentence>;

    /// Number of sentences the catalog was loaded with.
    fn sentence_count(&self) -> usize;
}
