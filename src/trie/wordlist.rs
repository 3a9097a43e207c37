//! Loading word lists from files and readers.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::builder::Builder;
use super::node::TrieNode;

/// Errors that can occur when loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The word list could not be opened or read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Controls which lines of a word list become words.
///
/// The default takes every line as a word, after stripping trailing whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordListConfig {
    /// Skip lines that are empty after stripping, instead of reading them as the empty word.
    pub skip_blank: bool,
    /// Skip lines whose first non-whitespace character is `#`.
    pub skip_comments: bool,
}

impl WordListConfig {
    fn accepts(&self, word: &str) -> bool {
        !((self.skip_blank && word.is_empty()) || (self.skip_comments && is_comment(word)))
    }
}

/// Reads words from `reader`, one per line, in the order they appear.
///
/// Trailing whitespace (including the line terminator) is stripped. The words
/// are not sorted or validated.
pub fn read_words<R: BufRead>(reader: R, config: &WordListConfig) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for_each_word(reader, config, |word| words.push(word.to_owned()))?;
    Ok(words)
}

/// Calls `f` with every accepted word of `reader` and returns how many there were.
fn for_each_word<R: BufRead>(
    mut reader: R,
    config: &WordListConfig,
    mut f: impl FnMut(&str),
) -> io::Result<usize> {
    // Instead of using BufRead::lines() we call read_line repeatedly, which lets us
    // reuse one buffer for every line.
    let mut buf = String::with_capacity(80);
    let mut count = 0;
    while reader.read_line(&mut buf)? != 0 {
        let word = buf.trim_end();
        if config.accepts(word) {
            f(word);
            count += 1;
        }
        buf.clear();
    }
    Ok(count)
}

/// Loads the words of the file at `path`, one per line.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::wordlist::{load_words, WordListConfig};
///
/// let words = load_words("/usr/share/dict/words", &WordListConfig::default()).unwrap();
/// ```
pub fn load_words(path: impl AsRef<Path>, config: &WordListConfig) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let words = read_words(BufReader::new(file), config).map_err(io_error)?;
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Builds a plain trie from the word list at `path`.
///
/// Lines are inserted as they are read; the whole list is never held in memory.
pub fn build_trie_from_file(
    path: impl AsRef<Path>,
    config: &WordListConfig,
) -> Result<TrieNode<char>, WordListError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut builder = Builder::new();
    let count = for_each_word(BufReader::new(file), config, |word| builder.add_word(word))
        .map_err(io_error)?;
    debug!(path = %path.display(), words = count, "built trie from word list");
    Ok(builder.build())
}

/// Returns true if this line is a comment.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{Cursor, Write};

    fn read(text: &str, config: WordListConfig) -> Vec<String> {
        read_words(Cursor::new(text), &config).unwrap()
    }

    #[test]
    fn comment_lines() {
        for line in ["#", "# header", "   # indented", "\t#tab", "#no-space"] {
            assert!(is_comment(line), "{line:?}");
        }
        for line in ["", "word", " word", "c#", "w # trailing"] {
            assert!(!is_comment(line), "{line:?}");
        }
    }

    #[test]
    fn word_count_matches_accepted_lines() {
        let config = WordListConfig {
            skip_blank: true,
            skip_comments: false,
        };
        let mut seen = Vec::new();
        let count = for_each_word(Cursor::new("a\n\n#b\nc"), &config, |w| seen.push(w.to_owned())).unwrap();
        assert_eq!(count, 3);
        assert_eq!(seen, ["a", "#b", "c"]);
    }

    #[test]
    fn strips_trailing_whitespace_only() {
        let words = read("an\nand  \r\n ant\t\n", WordListConfig::default());
        assert_eq!(words, ["an", "and", " ant"]);
    }

    #[test]
    fn last_line_without_newline() {
        let words = read("alfa\nbravo", WordListConfig::default());
        assert_eq!(words, ["alfa", "bravo"]);
    }

    #[test]
    fn blank_lines_are_empty_words_by_default() {
        let words = read("\nalfa\n\n", WordListConfig::default());
        assert_eq!(words, ["", "alfa", ""]);
    }

    #[test]
    fn skip_blank_and_comments() {
        let config = WordListConfig {
            skip_blank: true,
            skip_comments: true,
        };
        let words = read("# header\n\nalfa\n  # note\nbravo\n", config);
        assert_eq!(words, ["alfa", "bravo"]);
    }

    #[test]
    fn comments_are_words_by_default() {
        let words = read("#tag\n", WordListConfig::default());
        assert_eq!(words, ["#tag"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("libtrie-definitely-missing-wordlist.txt");
        let err = load_words(&path, &WordListConfig::default()).unwrap_err();
        let WordListError::Io { path: reported, source } = &err;
        assert_eq!(reported, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("libtrie-definitely-missing-wordlist.txt"));
    }

    #[test]
    fn load_and_build_from_file() {
        let path = std::env::temp_dir().join(format!("libtrie-wordlist-{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "# words").unwrap();
            writeln!(file, "an").unwrap();
            writeln!(file, "and").unwrap();
            writeln!(file, "ant").unwrap();
        }
        let config = WordListConfig {
            skip_blank: true,
            skip_comments: true,
        };
        let words = load_words(&path, &config).unwrap();
        assert_eq!(words, ["an", "and", "ant"]);

        let trie = build_trie_from_file(&path, &config).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(trie, crate::trie::builder::build_trie(&words));
        assert!(trie.contains_plain("ant"));
        assert!(!trie.contains_plain("# words"));
    }
}
