use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LexiconLoadError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon {path} contains no words")]
    Empty { path: PathBuf },
}

/// Immutable set of accepted words, stored uppercase.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| LexiconLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let lexicon = Self::from_words(content.lines());
        if lexicon.is_empty() {
            return Err(LexiconLoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loaded {} words into lexicon", lexicon.len());

        Ok(lexicon)
    }

    /// Build a lexicon from in-memory words; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Exact, case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("boggle-lexicon-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("TEST"));
    }

    #[test]
    fn test_from_words_normalizes_case() {
        let lexicon = Lexicon::from_words(["cat", " Dog ", "", "a"]);
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("DOG"));
        assert!(lexicon.contains("A"));
        assert!(!lexicon.contains("CA"));
        assert!(!lexicon.contains("CATS"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = temp_path("words");
        tokio::fs::write(&path, "cat\nquiet\n\nTREE\r\n").await.unwrap();

        let lexicon = Lexicon::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("QUIET"));
        assert!(lexicon.contains("tree"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = temp_path("does-not-exist");
        let err = tokio_test::block_on(Lexicon::load(missing)).unwrap_err();
        assert!(matches!(err, LexiconLoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_blank_file_is_an_error() {
        let path = temp_path("blank");
        tokio::fs::write(&path, "\n  \n").await.unwrap();

        let err = Lexicon::load(&path).await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(matches!(err, LexiconLoadError::Empty { .. }));
    }
}
