//! Dictionary word and prefix membership.
//!
//! Built once from a plain-text word list (one word per line); immutable
//! afterwards. Both queries are O(1) hash lookups. The prefix set contains
//! every prefix of every word, including the empty string and the full word
//! itself, so the move generator can keep extending through a word that is
//! also the stem of a longer one.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a word list file. An empty or missing file is a
    /// fatal configuration error: nothing can be generated without words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EngineError::Lexicon(format!("cannot open word list {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_ascii_uppercase());
            }
        }
        Self::from_word_set(words)
    }

    /// Build from an in-memory word list. Mostly useful for tests.
    pub fn from_words<I, S>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_word_set(
            iter.into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    fn from_word_set(words: HashSet<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(EngineError::Lexicon("word list is empty".to_string()));
        }
        // Tiles only carry A-Z faces, so anything else in the word list is a
        // configuration error rather than a playable word.
        if let Some(word) = words.iter().find(|w| !w.bytes().all(|b| b.is_ascii_alphabetic())) {
            return Err(EngineError::Lexicon(format!(
                "word {word:?} contains characters outside A-Z"
            )));
        }
        let mut prefixes = HashSet::new();
        for word in &words {
            for i in 0..=word.len() {
                prefixes.insert(word[..i].to_string());
            }
        }
        Ok(Lexicon { words, prefixes })
    }

    /// Exact, case-insensitive dictionary membership.
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(&s.to_ascii_uppercase())
    }

    /// Is `s` a prefix of some dictionary word (words count as prefixes of
    /// themselves; the empty string is always a prefix)?
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(&s.to_ascii_uppercase())
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
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_word_and_prefix_membership() {
        let lex = Lexicon::from_words(["cat", "CATS", "at"]).unwrap();

        assert!(lex.is_word("CAT"));
        assert!(lex.is_word("cat"));
        assert!(lex.is_word("cats"));
        assert!(!lex.is_word("ca"));

        assert!(lex.is_prefix(""));
        assert!(lex.is_prefix("C"));
        assert!(lex.is_prefix("CA"));
        // A full word is a valid prefix of itself.
        assert!(lex.is_prefix("CAT"));
        assert!(lex.is_prefix("CATS"));
        assert!(!lex.is_prefix("CATSS"));
        assert!(!lex.is_prefix("X"));
    }

    #[test]
    fn test_empty_word_list_is_fatal() {
        assert_matches!(
            Lexicon::from_words(Vec::<&str>::new()),
            Err(crate::EngineError::Lexicon(_))
        );
        assert_matches!(
            Lexicon::from_words(["  ", ""]),
            Err(crate::EngineError::Lexicon(_))
        );
    }

    #[test]
    fn test_non_letter_words_are_fatal() {
        assert_matches!(
            Lexicon::from_words(["CAFÉ", "CAT"]),
            Err(crate::EngineError::Lexicon(_))
        );
        assert_matches!(
            Lexicon::from_words(["DON'T"]),
            Err(crate::EngineError::Lexicon(_))
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert_matches!(
            Lexicon::from_file("/no/such/wordlist.txt"),
            Err(crate::EngineError::Lexicon(_))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello\nworld\n\n  again  ").unwrap();

        let lex = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lex.len(), 3);
        assert!(lex.is_word("HELLO"));
        assert!(lex.is_word("AGAIN"));
        assert!(lex.is_prefix("WO"));
    }
}
