//! Text statistics and candidate extraction.
//!
//! Turns raw text into the ranked noun list the guessing game draws from:
//! tokenize → filter → lemmatize → keep nouns → count.

use crate::error::{GameError, Result};
use crate::info_log;
use std::collections::{HashMap, HashSet};

/// Minimum length (exclusive) for a token to be considered a candidate.
pub const MIN_WORD_LEN: usize = 5;

pub const DEFAULT_TOP_N: usize = 50;

const STOP_WORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "either",
    "neither", "other", "another", "such", "both", "all", "few", "more", "most", "several",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "whose", "whoever", "whatever", "whichever",
    // be / have / do
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing",
    // modals
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on",
    "onto", "out", "outside", "over", "through", "throughout", "to", "toward", "towards",
    "under", "underneath", "until", "up", "upon", "with", "within", "without",
    // conjunctions & negation
    "and", "but", "or", "nor", "not", "no", "so", "yet", "if", "then", "than", "because",
    "while", "although", "though", "unless", "whereas", "whether",
    // adverbs
    "again", "further", "once", "here", "there", "when", "where", "why", "how", "very",
    "too", "also", "just", "only", "own", "same", "now", "always", "often", "however",
    "therefore", "thus", "rather", "usually", "generally", "especially",
    // contractions
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "can't",
    "couldn't", "shouldn't", "wouldn't", "won't", "hasn't", "haven't", "hadn't",
];

/// Suffixes that mark a lemma as an adverb, adjective or verb form.
const NON_NOUN_SUFFIXES: &[&str] = &[
    "ly", "ous", "ful", "ive", "able", "ible", "less", "ing", "ed", "ical", "ish", "ize",
    "ify",
];

/// Endings that keep their trailing "s" (e.g. "analysis", "virus", "glass").
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is", "ics"];

/// Words whose singular and plural forms are identical.
const INVARIANT_PLURALS: &[&str] = &["species", "series"];

/// Summary of a text analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub token_count: usize,
    pub unique_token_count: usize,
    pub lexical_diversity: f64,
    /// Tokens surviving the alphabetic/stop-word/length filter, lemmatized.
    pub processed_tokens: Vec<String>,
    /// Unique noun lemmas, in first-seen order.
    pub nouns: Vec<String>,
    /// Nouns by descending frequency, truncated to the requested size.
    pub ranked: Vec<(String, usize)>,
}

impl TextStats {
    pub fn top_words(&self) -> Vec<String> {
        self.ranked.iter().map(|(w, _)| w.clone()).collect()
    }
}

/// Splits text into word tokens and single punctuation tokens.
///
/// Word tokens are runs of alphanumeric characters; an apostrophe between two
/// alphanumeric characters stays inside the token.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
            continue;
        }
        let joins_word = c == '\''
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if joins_word {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Ratio of distinct tokens to total tokens.
#[allow(clippy::cast_precision_loss)]
pub fn lexical_diversity(tokens: &[String]) -> Result<f64> {
    if tokens.is_empty() {
        return Err(GameError::EmptyText);
    }
    let unique: HashSet<&String> = tokens.iter().collect();
    Ok(unique.len() as f64 / tokens.len() as f64)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Reduces a lowercase word to a singular base form.
pub fn lemmatize(word: &str) -> String {
    if INVARIANT_PLURALS.contains(&word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() > 1
    {
        return format!("{stem}y");
    }
    for ending in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(ending) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with('s') && !SINGULAR_S_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Heuristic noun test over a lemma.
pub fn is_noun(lemma: &str) -> bool {
    !NON_NOUN_SUFFIXES.iter().any(|s| lemma.ends_with(s))
}

/// Lowercases, filters and lemmatizes tokens.
///
/// Returns the processed tokens (duplicates kept) and the unique noun lemmas
/// among them.
pub fn process_text(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    let processed: Vec<String> = tokens
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().all(char::is_alphabetic))
        .filter(|t| t.chars().count() > MIN_WORD_LEN)
        .filter(|t| !is_stop_word(t))
        .map(|t| lemmatize(&t))
        .collect();

    let mut seen = HashSet::new();
    let nouns: Vec<String> = processed
        .iter()
        .filter(|lemma| is_noun(lemma))
        .filter(|lemma| seen.insert(lemma.as_str()))
        .cloned()
        .collect();

    info_log!(
        "process_text() - {} processed tokens, {} unique nouns",
        processed.len(),
        nouns.len()
    );
    (processed, nouns)
}

/// Counts each noun across the processed tokens and keeps the `top_n` most
/// frequent. Ties are broken alphabetically so the ranking is stable.
pub fn rank_nouns(processed: &[String], nouns: &[String], top_n: usize) -> Vec<(String, usize)> {
    let noun_set: HashSet<&str> = nouns.iter().map(String::as_str).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in processed {
        if noun_set.contains(token.as_str()) {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}

pub fn analyze(text: &str, top_n: usize) -> Result<TextStats> {
    let tokens = tokenize(text);
    let lexical_diversity = lexical_diversity(&tokens)?;
    let unique_token_count = tokens.iter().collect::<HashSet<_>>().len();
    let (processed_tokens, nouns) = process_text(&tokens);
    let ranked = rank_nouns(&processed_tokens, &nouns, top_n);

    Ok(TextStats {
        token_count: tokens.len(),
        unique_token_count,
        lexical_diversity,
        processed_tokens,
        nouns,
        ranked,
    })
}
