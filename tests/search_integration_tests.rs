use recipe_finder::api_connection::connection::ApiConnectionError;
use recipe_finder::catalog::{Catalog, DietaryType, PreservationMethod, Recipe};
use recipe_finder::recipe_generator::recipe_from_reply;
use recipe_finder::search::{
    parse_ingredients, GenerateRecipe, RecipeSource, SearchEngine, SearchError,
};

fn ignore_progress(_: String) {}

/// Stand-in for the Groq collaborator: replays a canned model reply through
/// the real reply-parsing path, or fails with a canned transport error.
enum FakeCollaborator {
    Reply(&'static str),
    Unauthorized,
}

impl GenerateRecipe for FakeCollaborator {
    async fn generate(
        &self,
        raw_ingredients: &str,
        _diet: DietaryType,
    ) -> Result<Recipe, ApiConnectionError> {
        match self {
            FakeCollaborator::Reply(reply) => Ok(recipe_from_reply(reply, raw_ingredients)),
            FakeCollaborator::Unauthorized => Err(ApiConnectionError::ApiError {
                status: reqwest::StatusCode::UNAUTHORIZED,
                error_body: "invalid api key".to_string(),
            }),
        }
    }
}

const NO_COLLABORATOR: Option<&FakeCollaborator> = None;

#[tokio::test]
async fn test_exact_ingredient_search_ranks_best_match_first() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);

    let results = engine
        .search("Tomato, rice , garlic", DietaryType::All, NO_COLLABORATOR, &ignore_progress)
        .await
        .expect("search should find recipes");

    // Mediterranean Tomato Rice hits all three terms directly (30); Soya
    // Chunks Rice Bowl hits tomato and rice (20).
    assert_eq!(results[0].recipe.name, "Mediterranean Tomato Rice");
    assert_eq!(results[0].score, 30);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
    assert!(results.iter().all(|r| r.source == RecipeSource::Local));
}

#[tokio::test]
async fn test_parser_feeds_search_in_input_order() {
    assert_eq!(
        parse_ingredients("Tomato, rice , garlic"),
        vec!["tomato", "rice", "garlic"]
    );
}

#[tokio::test]
async fn test_search_is_deterministic_across_runs() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);

    let mut snapshots = Vec::new();
    for _ in 0..3 {
        let results = engine
            .search("soy, ginger, oil", DietaryType::All, NO_COLLABORATOR, &ignore_progress)
            .await
            .unwrap();
        snapshots.push(
            results
                .iter()
                .map(|r| (r.recipe.id, r.score))
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1], snapshots[2]);
}

#[tokio::test]
async fn test_vegan_filter_returns_only_vegan_recipes() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);

    let results = engine
        .search("garlic, oil", DietaryType::Vegan, NO_COLLABORATOR, &ignore_progress)
        .await
        .unwrap();

    assert!(!results.is_empty());
    for scored in &results {
        assert_eq!(scored.recipe.dietary_type, DietaryType::Vegan);
    }
}

#[tokio::test]
async fn test_empty_input_is_rejected_before_any_scoring() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);

    let result = engine
        .search("   ", DietaryType::All, NO_COLLABORATOR, &ignore_progress)
        .await;
    assert!(matches!(result, Err(SearchError::EmptyInput)));
}

#[tokio::test]
async fn test_zero_matches_reports_no_results() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);

    let result = engine
        .search("quinoa flour, xanthan gum", DietaryType::All, NO_COLLABORATOR, &ignore_progress)
        .await;
    assert!(matches!(result, Err(SearchError::NoResults)));
}

#[tokio::test]
async fn test_ai_recipe_is_merged_after_local_results() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);
    let collaborator = FakeCollaborator::Reply(
        r#"Here is a recipe for you:
        {
            "name": "Golden Tomato Pilaf",
            "ingredients": ["tomato", "rice", "butter"],
            "instructions": "1. Toast rice in butter. 2. Add tomato and simmer.",
            "preservationMethod": "heat",
            "shelfLife": "3 days refrigerated",
            "chemistry": {
                "title": "Heat Treatment",
                "explanation": "Cooking destroys pathogens.",
                "process": "Protein denaturation."
            },
            "foodSafety": "Refrigerate promptly.",
            "culturalContext": "Pilaf traditions span continents.",
            "servings": 4,
            "prepTime": "25 minutes"
        }"#,
    );

    let results = engine
        .search("tomato, rice", DietaryType::All, Some(&collaborator), &ignore_progress)
        .await
        .unwrap();

    let last = results.last().unwrap();
    assert_eq!(last.source, RecipeSource::External);
    assert_eq!(last.recipe.name, "Golden Tomato Pilaf");
    assert_eq!(last.recipe.preservation_method, PreservationMethod::Heat);
    // All local results precede the AI one, already sorted by score.
    let locals = &results[..results.len() - 1];
    assert!(locals.iter().all(|r| r.source == RecipeSource::Local));
    assert!(locals.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[tokio::test]
async fn test_prose_reply_falls_back_to_synthesized_recipe() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);
    let collaborator = FakeCollaborator::Reply(
        "I'd be happy to help! Unfortunately I can only describe the dish in words.",
    );

    let results = engine
        .search("tomato, rice", DietaryType::All, Some(&collaborator), &ignore_progress)
        .await
        .unwrap();

    let external = results
        .iter()
        .find(|r| r.source == RecipeSource::External)
        .expect("fallback recipe should still be appended");
    assert_eq!(external.recipe.name, "Waste-Free Recipe with tomato, rice");
    assert_eq!(external.recipe.ingredients, ["tomato", "rice"]);
    assert_eq!(external.recipe.preservation_method, PreservationMethod::Heat);
}

#[tokio::test]
async fn test_collaborator_failure_is_swallowed_when_local_results_exist() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);
    let collaborator = FakeCollaborator::Unauthorized;

    let results = engine
        .search("tomato, rice", DietaryType::All, Some(&collaborator), &ignore_progress)
        .await
        .expect("local results must survive a collaborator failure");
    assert!(results.iter().all(|r| r.source == RecipeSource::Local));
}

#[tokio::test]
async fn test_collaborator_failure_surfaces_without_local_results() {
    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);
    let collaborator = FakeCollaborator::Unauthorized;

    let result = engine
        .search("quinoa flour", DietaryType::All, Some(&collaborator), &ignore_progress)
        .await;
    match result {
        Err(SearchError::External(ApiConnectionError::ApiError { status, .. })) => {
            assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
        }
        other => panic!("expected an external collaborator error, got {other:?}"),
    }
}
