use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::recipe::Recipe;
use crate::suggest::corpus_index::IndexedCorpus;

pub const DEFAULT_NUM_SUGGESTIONS: usize = 5;

/// A recipe together with its cosine similarity to the query. Scores of
/// zero are legitimate results (nothing in the query matched the corpus
/// vocabulary), not failures.
#[derive(Debug, Clone)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub score: f32,
}

#[derive(PartialEq)]
struct ScoredIndex {
    score: f32,
    index: usize,
}

impl Eq for ScoredIndex {}

impl PartialOrd for ScoredIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredIndex {
    // Reversed so the BinaryHeap behaves as a min-heap: the entry popped
    // when the heap overflows top_k is the worst one. Worst means lower
    // score, or equal score at a later corpus position, which is what makes
    // ties resolve to the earlier-loaded recipe.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Ranks the corpus against an available-ingredients query and returns the
/// `num_suggestions` most similar recipes, best first. Asking for more
/// suggestions than the corpus holds returns the whole corpus ranked.
pub fn suggest_recipes(
    corpus: &IndexedCorpus,
    available_ingredients: &[String],
    num_suggestions: usize,
) -> Vec<ScoredRecipe> {
    let query_text = available_ingredients.join(" ");
    let scores = corpus.index.score_query(&query_text);
    let top_k = num_suggestions.min(scores.len());

    let mut heap = BinaryHeap::with_capacity(top_k + 1);
    for (index, &score) in scores.iter().enumerate() {
        heap.push(ScoredIndex { score, index });
        if heap.len() > top_k {
            heap.pop();
        }
    }

    // Min-heap ordering makes into_sorted_vec ascend from best to worst.
    heap.into_sorted_vec()
        .into_iter()
        .map(|scored| ScoredRecipe {
            recipe: corpus.recipes[scored.index].clone(),
            score: scored.score,
        })
        .collect()
}
