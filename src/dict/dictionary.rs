use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::{debug, info};

use crate::core::char_util::utf8_len;
use crate::dict::trie::Trie;
use crate::error::{Result, WordsegError};

/// Dictionary capability consumed by the segmenter.
///
/// Only `contains` and `max_key_length` are queried while segmenting; the
/// loading operations are forwarded by the segmenter on behalf of its caller.
pub trait DictionaryPort {
    /// True iff `word` is a registered entry.
    fn contains(&self, word: &str) -> bool;

    /// Code point length of the longest entry, 0 for an empty dictionary.
    fn max_key_length(&self) -> usize;

    /// Bulk load entries from a file, returning how many were read.
    fn load_file(&mut self, path: &Path) -> Result<usize>;

    fn load_words(&mut self, words: &[&str]);

    fn clear(&mut self);
}

type Dict = Trie;

/// Trie backed dictionary
#[derive(Debug, Default)]
pub struct Dictionary {
    main_dict: Dict,
    max_key_length: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        self.main_dict.insert(word.chars());
        self.max_key_length = self.max_key_length.max(utf8_len(word));
    }

    /// Removes entries; the key length bound shrinks with them.
    pub fn disable_words(&mut self, words: &[&str]) {
        for word in words {
            self.main_dict.delete(word.trim().chars());
        }
        self.max_key_length = self.main_dict.depth();
    }

    pub fn len(&self) -> usize {
        self.main_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main_dict.is_empty()
    }
}

impl DictionaryPort for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.main_dict.exist(word.chars())
    }

    fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    fn load_file(&mut self, path: &Path) -> Result<usize> {
        let entries = read_entries(path)?;
        for word in entries.iter() {
            self.add_word(word);
        }
        info!(
            "load dictionary {} entries = {}, max key length = {}",
            path.display(),
            entries.len(),
            self.max_key_length
        );
        Ok(entries.len())
    }

    fn load_words(&mut self, words: &[&str]) {
        let before = self.len();
        for word in words {
            self.add_word(word);
        }
        debug!(
            "loaded {} new words, max key length = {}",
            self.len() - before,
            self.max_key_length
        );
    }

    fn clear(&mut self) {
        self.main_dict.clear();
        self.max_key_length = 0;
    }
}

// Reads the whole file before touching the dictionary so a failed load leaves it unchanged.
fn read_entries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| WordsegError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(WordsegError::Format {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: e.to_string(),
                });
            }
            Err(source) => {
                return Err(WordsegError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        entries.push(word.to_string());
    }
    Ok(entries)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn dict_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_dictionary() {
        let mut dictionary = Dictionary::new();
        assert_eq!(0, dictionary.max_key_length());
        dictionary.load_words(&["ว่า", "ยังไง", " ทดสอบ ", ""]);

        assert_eq!(3, dictionary.len());
        assert_eq!(5, dictionary.max_key_length());
        assert!(dictionary.contains("ทดสอบ"));
        assert!(dictionary.contains("ว่า"));
        assert!(!dictionary.contains("ว่ายังไง"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn test_load_words_skips_blank_and_duplicates() {
        let mut dictionary = Dictionary::new();
        dictionary.load_words(&["ว่า", "ว่า", "  ", " ว่า"]);
        assert_eq!(1, dictionary.len());
        dictionary.load_words(&["ยังไง", "ว่า"]);
        assert_eq!(2, dictionary.len());
    }

    #[test]
    fn test_disable_words_shrinks_depth() {
        let mut dictionary = Dictionary::new();
        dictionary.load_words(&["ว่า", "ยังไง"]);
        dictionary.disable_words(&["ยังไง"]);
        assert!(!dictionary.contains("ยังไง"));
        assert_eq!(3, dictionary.max_key_length());
    }

    #[test]
    fn test_clear() {
        let mut dictionary = Dictionary::new();
        dictionary.load_words(&["ทดสอบ"]);
        dictionary.clear();
        assert!(dictionary.is_empty());
        assert_eq!(0, dictionary.max_key_length());
        assert!(!dictionary.contains("ทดสอบ"));
    }

    #[test]
    fn test_load_file() {
        let file = dict_file("# thai words\nทดสอบ\n\n  ว่า  \nยังไง\n".as_bytes());
        let mut dictionary = Dictionary::new();
        let total = dictionary.load_file(file.path()).unwrap();
        assert_eq!(3, total);
        assert!(dictionary.contains("ว่า"));
        assert!(!dictionary.contains("# thai words"));
        assert_eq!(5, dictionary.max_key_length());
    }

    #[test]
    fn test_load_missing_file() {
        let mut dictionary = Dictionary::new();
        let err = dictionary
            .load_file(Path::new("/nonexistent/wordseg/dict.txt"))
            .unwrap_err();
        assert!(matches!(err, WordsegError::Io { .. }));
    }

    #[test]
    fn test_failed_load_keeps_contents() {
        let file = dict_file(b"\xe0\xb8\x97\xe0\xb8\x94\nabc\n\xff\xfe\n");
        let mut dictionary = Dictionary::new();
        dictionary.load_words(&["ว่า"]);

        let err = dictionary.load_file(file.path()).unwrap_err();
        match err {
            WordsegError::Format { line, .. } => assert_eq!(3, line),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(1, dictionary.len());
        assert!(!dictionary.contains("ทด"));
        assert!(!dictionary.contains("abc"));
        assert_eq!(3, dictionary.max_key_length());
    }
}
