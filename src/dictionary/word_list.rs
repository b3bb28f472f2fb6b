//! In-memory word list.

use std::io::BufRead;

use rustc_hash::FxHashSet;

use super::{Dictionary, DictionaryError};

/// A set of lowercase words.
///
/// ## Example
///
/// ```
/// use tile_press::dictionary::{Dictionary, WordList};
///
/// let words = WordList::parse("# animals\ncat\nDog\n\n");
///
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("dog"));
/// assert!(!words.contains("cow"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Create an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any collection of words. Words are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Parse one word per line, skipping blank lines and `#` comments.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines().filter(|line| is_entry(line)))
    }

    /// Read a word list in the `parse` format.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DictionaryError> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            if is_entry(&line) {
                list.insert(&line);
            }
        }
        Ok(list)
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_entry(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_normalizes() {
        let list = WordList::from_words(["  Cat ", "CAT", "dog", ""]);
        assert_eq!(list.len(), 2);
        assert!(list.contains("cat"));
        assert!(list.contains("CAT"));
        assert!(list.contains("dog"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = WordList::parse("# header\n\naa\n  ab  \n#zz\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("ab"));
        assert!(!list.contains("zz"));
    }

    #[test]
    fn test_from_reader() {
        let data = "zebra\nyak\n";
        let list = WordList::from_reader(data.as_bytes()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("yak"));
    }

    #[test]
    fn test_from_reader_surfaces_io_errors() {
        // Invalid UTF-8 makes `lines()` fail.
        let data: &[u8] = &[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'];
        let err = WordList::from_reader(data).unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }

    #[test]
    fn test_collect() {
        let list: WordList = vec!["one", "two"].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert!(WordList::new().is_empty());
    }
}
