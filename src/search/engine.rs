use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api_connection::connection::ApiConnectionError;
use crate::catalog::{Catalog, DietaryType, Recipe};
use crate::search::ingredient_parser::parse_ingredients;
use crate::search::scorer::{match_score, MATCH_THRESHOLD};

/// Score assigned to externally generated recipes. They are never ranked
/// against local results (they always come last), the score only feeds the
/// presentation layer.
const EXTERNAL_SCORE: u32 = 5;

/// Where a result came from: the built-in catalog or the external
/// generation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSource {
    Local,
    External,
}

/// A recipe annotated with its relevance score for one search. Transient:
/// created per search, handed to the presentation layer, then discarded.
#[derive(Debug, Clone)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub score: u32,
    pub source: RecipeSource,
}

#[derive(Debug)]
pub enum SearchError {
    /// The raw input was empty after trimming; nothing was searched.
    EmptyInput,
    /// The search ran and produced zero matches.
    NoResults,
    /// A search is already outstanding; this invocation was rejected, not
    /// queued.
    SearchInProgress,
    /// The external collaborator failed and there were no local results to
    /// fall back on. Retryable.
    External(ApiConnectionError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyInput => {
                write!(f, "Please enter some ingredients to search for recipes.")
            }
            SearchError::NoResults => write!(
                f,
                "No recipes found for those ingredients. Try different combinations or add more ingredients."
            ),
            SearchError::SearchInProgress => write!(f, "A search is already in progress."),
            SearchError::External(err) => {
                write!(f, "AI recipe generation failed: {}", err)
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SearchError::External(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiConnectionError> for SearchError {
    fn from(err: ApiConnectionError) -> Self {
        SearchError::External(err)
    }
}

/// The external recipe-generation collaborator, seen from the orchestrator.
/// Implemented over the chat-completion API by
/// [`crate::recipe_generator::GroqRecipeGenerator`] and by stubs in tests.
#[allow(async_fn_in_trait)]
pub trait GenerateRecipe {
    async fn generate(
        &self,
        raw_ingredients: &str,
        diet: DietaryType,
    ) -> Result<Recipe, ApiConnectionError>;
}

/// Runs searches against an immutable catalog. At most one search may be
/// outstanding at a time; an overlapping invocation is rejected with
/// [`SearchError::SearchInProgress`].
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            in_flight: AtomicBool::new(false),
        }
    }

    fn acquire(&self) -> Result<InFlightGuard<'_>, SearchError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| SearchError::SearchInProgress)?;
        Ok(InFlightGuard(&self.in_flight))
    }

    /// Full search pipeline: validate, parse, filter by diet, score, keep
    /// qualifying recipes, sort by score descending (stable: ties keep
    /// catalog order), then optionally append one externally generated
    /// recipe. Local results always precede the external one.
    ///
    /// Generator failures are recovered when local results exist (logged
    /// through `progress_updater` and dropped); with no local results they
    /// surface as [`SearchError::External`].
    pub async fn search<G: GenerateRecipe>(
        &self,
        raw_input: &str,
        diet: DietaryType,
        generator: Option<&G>,
        progress_updater: &impl Fn(String),
    ) -> Result<Vec<ScoredRecipe>, SearchError> {
        let _guard = self.acquire()?;

        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let terms = parse_ingredients(trimmed);
        progress_updater(format!("Parsed search terms: {:?}", terms));

        let mut results: Vec<ScoredRecipe> = Vec::new();
        for recipe in self.catalog.recipes() {
            if diet != DietaryType::All && recipe.dietary_type != diet {
                continue;
            }
            let score = match_score(&terms, recipe);
            if score >= MATCH_THRESHOLD {
                results.push(ScoredRecipe {
                    recipe: recipe.clone(),
                    score,
                    source: RecipeSource::Local,
                });
            }
        }

        // Vec::sort_by is stable, which is load-bearing here: equal scores
        // must retain catalog order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        progress_updater(format!("Found {} local recipes", results.len()));

        if let Some(generator) = generator {
            match generator.generate(trimmed, diet).await {
                Ok(recipe) => {
                    progress_updater(format!("AI generated recipe: {}", recipe.name));
                    results.push(ScoredRecipe {
                        recipe,
                        score: EXTERNAL_SCORE,
                        source: RecipeSource::External,
                    });
                }
                Err(err) if results.is_empty() => return Err(SearchError::External(err)),
                Err(err) => {
                    progress_updater(format!(
                        "AI recipe generation failed, keeping local results: {}",
                        err
                    ));
                }
            }
        }

        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(results)
    }
}
