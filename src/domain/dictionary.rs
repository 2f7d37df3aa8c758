//! English word list used by the lexical filter.

use crate::error::{RedactorError, RedactorResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read-only set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads a newline-separated word list.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    pub fn load(path: &Path) -> RedactorResult<Self> {
        let file = File::open(path).map_err(|source| RedactorError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary =
            Self::from_reader(BufReader::new(file)).map_err(|source| {
                RedactorError::DictionaryLoad {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "Loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Reads a word list from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Returns true if the lowercase `word` is known.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}
