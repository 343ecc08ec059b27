use rayon::prelude::*;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::SuggestError;
use crate::recipe::Recipe;
use crate::suggest::tfidf::{SparseVector, TfidfModel};

/// The vector-space representation of one recipe corpus: the fitted
/// vocabulary/IDF model plus one TF-IDF vector per recipe, in load order.
/// Immutable once built; a corpus change means a full rebuild.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    model: TfidfModel,
    recipe_vectors: Vec<SparseVector>,
}

impl SimilarityIndex {
    fn build(recipes: &[Recipe]) -> SimilarityIndex {
        let documents: Vec<String> = recipes.iter().map(|recipe| recipe.index_text()).collect();
        let (model, recipe_vectors) = TfidfModel::fit(&documents);
        SimilarityIndex {
            model,
            recipe_vectors,
        }
    }

    pub fn len(&self) -> usize {
        self.recipe_vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_vectors.is_empty()
    }

    /// Cosine similarity of `query_text` against every indexed recipe,
    /// in corpus order.
    pub fn score_query(&self, query_text: &str) -> Vec<f32> {
        let query_vector = self.model.transform(query_text);
        self.recipe_vectors
            .par_iter()
            .map(|recipe_vector| query_vector.dot(recipe_vector))
            .collect()
    }
}

/// One loaded corpus: the recipes and the index derived from them. Handed
/// out behind an `Arc` so queries keep working on the snapshot they took
/// even while a reload is in flight.
#[derive(Debug)]
pub struct IndexedCorpus {
    pub recipes: Vec<Recipe>,
    pub index: SimilarityIndex,
}

/// Holder for the current corpus snapshot. `load` is the only mutation:
/// the replacement index is built in full before the write lock is taken,
/// so readers see either the previous corpus or the new one, never a
/// half-built state.
#[derive(Debug, Default)]
pub struct RecipeCorpusIndex {
    current: RwLock<Option<Arc<IndexedCorpus>>>,
}

impl RecipeCorpusIndex {
    pub fn new() -> RecipeCorpusIndex {
        RecipeCorpusIndex {
            current: RwLock::new(None),
        }
    }

    /// Replaces the corpus. On `EmptyCorpus` the previous snapshot (if any)
    /// stays in place untouched.
    pub fn load(&self, recipes: Vec<Recipe>) -> Result<(), SuggestError> {
        if recipes.is_empty() {
            return Err(SuggestError::EmptyCorpus);
        }
        let index = SimilarityIndex::build(&recipes);
        let corpus = Arc::new(IndexedCorpus { recipes, index });

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(corpus);
        Ok(())
    }

    /// The current corpus snapshot, or `IndexNotLoaded` before the first
    /// successful `load`.
    pub fn snapshot(&self) -> Result<Arc<IndexedCorpus>, SuggestError> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone().ok_or(SuggestError::IndexNotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
