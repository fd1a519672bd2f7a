//! Trainable conversational fallback engine
//!
//! Handles any message that mentions no known location. Training pairs come
//! from the bundled corpus and the scripted utterances in the database. At
//! query time the input is normalized (lowercased, punctuation stripped,
//! stopwords removed, Snowball-stemmed) and compared to every trained prompt
//! by Jaccard similarity over the stemmed token sets; the best pair at or
//! above the similarity threshold wins, otherwise the default response is
//! returned.

use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Deserialize;
use stop_words::{get, LANGUAGE};
use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::db::Database;

/// The bundled general-conversation corpus
pub const ENGLISH_CORPUS: &str = include_str!("../data/english_corpus.json");

/// A trained prompt/response pair
#[derive(Debug, Clone)]
struct TrainedPair {
    /// Stemmed token set of the prompt
    tokens: HashSet<String>,
    /// Response returned when this pair wins
    response: String,
}

/// Corpus file layout: lists of alternating statements, consecutive
/// statements forming prompt/response pairs
#[derive(Debug, Deserialize)]
struct Corpus {
    conversations: Vec<Vec<String>>,
}

/// Best-match conversational engine
pub struct ChatEngine {
    pairs: Vec<TrainedPair>,
    special_chars_regex: Regex,
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    similarity_threshold: f32,
    default_response: String,
}

impl ChatEngine {
    /// Create an untrained engine
    pub fn new(similarity_threshold: f32, default_response: &str) -> Result<Self> {
        let special_chars_regex = Regex::new(r"[^\w\s]")
            .map_err(|e| anyhow::anyhow!("Failed to compile special chars regex: {e}"))?;

        // Stopwords and stemmer for English
        let stopwords: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(ToString::to_string)
            .collect();
        let stemmer = Stemmer::create(Algorithm::English);

        Ok(Self {
            pairs: Vec::new(),
            special_chars_regex,
            stopwords,
            stemmer,
            similarity_threshold,
            default_response: default_response.to_string(),
        })
    }

    /// Normalize text into a stemmed token set.
    ///
    /// Prompts made entirely of stopwords ("What can you do?") keep their
    /// full token set; dropping everything would make them unmatchable.
    fn normalize(&self, text: &str) -> HashSet<String> {
        let normalized = text.nfc().collect::<String>().to_lowercase();
        let no_special = self.special_chars_regex.replace_all(&normalized, " ");

        let filtered: HashSet<String> = no_special
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .map(|token| self.stemmer.stem(token).to_string())
            .collect();

        if !filtered.is_empty() {
            return filtered;
        }

        no_special
            .split_whitespace()
            .map(|token| self.stemmer.stem(token).to_string())
            .collect()
    }

    /// Train a single prompt/response pair
    pub fn train(&mut self, input_text: &str, response_text: &str) {
        let tokens = self.normalize(input_text);
        self.pairs.push(TrainedPair {
            tokens,
            response: response_text.to_string(),
        });
    }

    /// Train from a JSON corpus, pairing each statement with the one that
    /// follows it. Returns the number of pairs trained.
    pub fn train_from_corpus(&mut self, corpus_json: &str) -> Result<usize> {
        let corpus: Corpus =
            serde_json::from_str(corpus_json).map_err(|e| anyhow::anyhow!("Invalid corpus: {e}"))?;

        let mut trained = 0;
        for conversation in &corpus.conversations {
            for pair in conversation.windows(2) {
                self.train(&pair[0], &pair[1]);
                trained += 1;
            }
        }

        info!("Trained {} pairs from corpus", trained);
        Ok(trained)
    }

    /// Train from the scripted utterances stored in the database. Returns
    /// the number of pairs trained.
    pub fn train_from_database(&mut self, db: &Database) -> Result<usize> {
        let utterances = db.all_training_utterances()?;
        let trained = utterances.len();

        for utterance in utterances {
            self.train(&utterance.input_text, &utterance.response_text);
        }

        info!("Training from database completed ({} pairs)", trained);
        Ok(trained)
    }

    /// Number of trained pairs
    #[must_use]
    pub fn trained_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// The best-match response for the input, or the default response when
    /// nothing reaches the similarity threshold
    #[must_use]
    pub fn get_response(&self, input: &str) -> String {
        let input_tokens = self.normalize(input);
        if input_tokens.is_empty() {
            return self.default_response.clone();
        }

        let mut best_score = 0.0_f32;
        let mut best_response: Option<&str> = None;

        for pair in &self.pairs {
            let score = jaccard_similarity(&input_tokens, &pair.tokens);
            if score > best_score {
                best_score = score;
                best_response = Some(&pair.response);
            }
        }

        match best_response {
            Some(response) if best_score >= self.similarity_threshold => response.to_string(),
            _ => self.default_response.clone(),
        }
    }
}

/// Jaccard similarity between two token sets
fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "Which location would you like the weather forecast?";

    fn engine() -> ChatEngine {
        ChatEngine::new(0.65, DEFAULT).expect("Failed to create engine")
    }

    #[test]
    fn test_normalize_strips_punctuation_and_stopwords() {
        let engine = engine();
        let tokens = engine.normalize("What's the weather?!");
        // "what", "the" and the stray "s" are stopwords; "weather" survives
        assert!(tokens.contains("weather"));
        assert!(!tokens.iter().any(|t| t.contains('?')));
    }

    #[test]
    fn test_exact_prompt_matches() {
        let mut engine = engine();
        engine.train("What is the weather", DEFAULT);
        assert_eq!(engine.get_response("what is the weather"), DEFAULT);
    }

    #[test]
    fn test_stemmed_variant_matches() {
        let mut engine = engine();
        engine.train("How do you work?", "Just ask!");
        assert_eq!(engine.get_response("how are you working"), "Just ask!");
    }

    #[test]
    fn test_stopword_only_prompt_still_matches() {
        let mut engine = engine();
        engine.train("What can you do?", "I can retrieve weather information!");
        assert_eq!(
            engine.get_response("what can you do"),
            "I can retrieve weather information!"
        );
    }

    #[test]
    fn test_unrelated_input_yields_default() {
        let mut engine = engine();
        engine.train("What can you do?", "I can retrieve weather information!");
        assert_eq!(
            engine.get_response("purple monkey dishwasher"),
            DEFAULT.to_string()
        );
    }

    #[test]
    fn test_empty_input_yields_default() {
        let engine = engine();
        assert_eq!(engine.get_response("   "), DEFAULT.to_string());
    }

    #[test]
    fn test_bundled_corpus_parses() {
        let mut engine = engine();
        let trained = engine
            .train_from_corpus(ENGLISH_CORPUS)
            .expect("corpus should parse");
        assert!(trained > 0);
        assert_eq!(engine.trained_pairs(), trained);
    }
}
