use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered, non-empty pool of candidate target words.
///
/// Order is the ranking handed over by the text pipeline (most frequent first).
/// The pool is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Builds a pool, dropping blank entries. Fails if nothing usable remains.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.trim().to_string()
            })
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(GameError::EmptyPool);
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Picks a target uniformly at random. Repeats across calls are allowed.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `words` is non-empty by construction
        self.words
            .choose(rng)
            .map_or(self.words[0].as_str(), String::as_str)
    }
}

pub fn load_wordbank_from_str(data: &str) -> Result<WordBank> {
    WordBank::new(data.lines().map(str::to_lowercase))
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank> {
    let path = path.as_ref();
    let io_err = |source| GameError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line.map_err(io_err)?.trim().to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }
    WordBank::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_pool_rejected() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(WordBank::new(empty), Err(GameError::EmptyPool)));
    }

    #[test]
    fn test_blank_entries_rejected() {
        assert!(matches!(
            WordBank::new(["", "   ", "\t"]),
            Err(GameError::EmptyPool)
        ));
    }

    #[test]
    fn test_order_preserved_and_trimmed() {
        let bank = WordBank::new(["  muscle ", "", "tissue"]).unwrap();
        assert_eq!(bank.words(), &["muscle".to_string(), "tissue".to_string()]);
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_choose_stays_in_pool() {
        let bank = WordBank::new(["artery", "nerve", "membrane"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = bank.choose(&mut rng);
            assert!(bank.contains(word));
        }
    }

    #[test]
    fn test_single_word_pool_always_chosen() {
        let bank = WordBank::new(["banana"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(bank.choose(&mut rng), "banana");
        }
    }

    #[test]
    fn test_load_from_str_lowercases() {
        let bank = load_wordbank_from_str("Orange\n\nBANANA\n").unwrap();
        assert_eq!(bank.words(), &["orange".to_string(), "banana".to_string()]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_wordbank_from_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(GameError::Io { .. })));
    }
}
