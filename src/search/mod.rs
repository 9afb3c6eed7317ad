pub mod engine;
pub mod ingredient_parser;
pub mod scorer;
pub mod similarity;

pub use engine::{GenerateRecipe, RecipeSource, ScoredRecipe, SearchEngine, SearchError};
pub use ingredient_parser::parse_ingredients;
pub use scorer::{match_score, MATCH_THRESHOLD};
pub use similarity::similarity;
