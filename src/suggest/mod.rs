pub mod corpus_index;
pub mod ranker;
pub mod scaler;
pub mod tfidf;

pub use corpus_index::{IndexedCorpus, RecipeCorpusIndex, SimilarityIndex};
pub use ranker::{suggest_recipes, ScoredRecipe, DEFAULT_NUM_SUGGESTIONS};
pub use scaler::scale_recipe;
pub use tfidf::{tokenize, SparseVector, TfidfModel};
