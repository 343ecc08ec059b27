use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Splits text into lowercase alphanumeric runs. Runs shorter than two
/// characters are dropped, matching common vectorizer defaults.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// A term-weight vector stored as (term_id, weight) pairs sorted by term id.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// Builds an L2-normalized vector from raw term weights. Zero-weight
    /// inputs (e.g. a fully out-of-vocabulary query) stay a zero vector.
    pub fn from_weights(weights: HashMap<usize, f32>) -> Self {
        let mut entries: Vec<(usize, f32)> = weights
            .into_iter()
            .filter(|&(_, weight)| weight != 0.0)
            .collect();
        entries.sort_by_key(|&(term_id, _)| term_id);

        let norm_sq: f32 = entries.iter().map(|&(_, w)| w * w).sum();
        if norm_sq > 0.0 {
            let inv_norm = 1.0 / norm_sq.sqrt();
            for entry in &mut entries {
                entry.1 *= inv_norm;
            }
        }
        SparseVector { entries }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product of two sorted sparse vectors. Both sides are unit-length
    /// (or zero), so this is their cosine similarity.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let mut left = self.entries.iter().peekable();
        let mut right = other.entries.iter().peekable();

        while let (Some(&&(left_id, left_w)), Some(&&(right_id, right_w))) =
            (left.peek(), right.peek())
        {
            match left_id.cmp(&right_id) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += left_w * right_w;
                    left.next();
                    right.next();
                }
            }
        }
        sum
    }
}

/// Vocabulary and inverse-document-frequency weights fitted over one corpus.
///
/// Term ids are assigned in first-occurrence order across the corpus, so
/// fitting the same documents always produces the same model.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Fits a model over `documents` and returns it together with the
    /// L2-normalized TF-IDF vector of every document, in input order.
    pub fn fit(documents: &[String]) -> (TfidfModel, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for token in tokens {
                let next_id = vocabulary.len();
                let term_id = *vocabulary.entry(token.clone()).or_insert(next_id);
                if term_id == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen_in_doc.contains(&term_id) {
                    seen_in_doc.push(term_id);
                    document_frequency[term_id] += 1;
                }
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Terms appearing in every
        // document keep a weight of 1.0 rather than vanishing.
        let doc_count = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + doc_count) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let model = TfidfModel { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|tokens| model.weigh_tokens(tokens))
            .collect();
        (model, vectors)
    }

    /// Projects free text into the fitted vector space. Out-of-vocabulary
    /// terms contribute zero weight.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh_tokens(&tokenize(text))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh_tokens(&self, tokens: &[String]) -> SparseVector {
        let mut term_counts: HashMap<usize, f32> = HashMap::new();
        for token in tokens {
            if let Some(&term_id) = self.vocabulary.get(token) {
                *term_counts.entry(term_id).or_insert(0.0) += 1.0;
            }
        }
        let weights: HashMap<usize, f32> = term_counts
            .into_iter()
            .map(|(term_id, count)| (term_id, count * self.idf[term_id]))
            .collect();
        SparseVector::from_weights(weights)
    }
}
