use std::collections::HashMap;

use crate::application::ports::ReferenceCatalog;
use crate::domain::ReferenceSentence;

/// In-memory reference catalog, loaded once at startup and read-only
/// afterwards.
pub struct StaticCatalog {
    sentences: HashMap<String, ReferenceSentence>,
}

impl StaticCatalog {
    pub fn from_sentences(sentences: Vec<ReferenceSentence>) -> Self {
        Self {
            sentences: sentences.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// The built-in beginner lesson set.
    pub fn spanish_starter() -> Self {
        Self::from_sentences(vec![
            ReferenceSentence::new("s1", "Hola, soy Ana.", "你好，我是安娜。"),
            ReferenceSentence::new("s2", "¿Cómo estás?", "你好吗？"),
            ReferenceSentence::new("s3", "Me gusta aprender español.", "我喜欢学西班牙语。"),
            ReferenceSentence::new("s4", "¿Dónde está la biblioteca?", "图书馆在哪里？"),
            ReferenceSentence::new("s5", "Hasta mañana.", "明天见。"),
        ])
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl ReferenceCatalog for StaticCatalog {
    fn lookup(&self, sentence_id: &str) -> Option<ReferenceSentence> {
        self.sentences.get(sentence_id).cloned()
    }

    fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}
