use serde::{Deserialize, Serialize};

/// A reading to word mapping in azooKey's user dictionary format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub reading: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
        }
    }

    /// Identity used for deduplication and merging
    pub fn key(&self) -> (String, String) {
        (self.word.clone(), self.reading.clone())
    }
}

/// The converted artifact: `{"entries": [...]}`
#[derive(Debug, Serialize)]
pub struct EntriesDocument<'a> {
    pub entries: &'a [Entry],
}
