use crate::catalog::{Recipe, INGREDIENT_SYNONYMS};
use crate::search::similarity::similarity;

/// Minimum total score for a recipe to qualify for the result set. A single
/// fuzzy hit (+3) is enough.
pub const MATCH_THRESHOLD: u32 = 3;

/// Keyword similarity above this counts as a fuzzy hit.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Computes the relevance score between the parsed search terms and one
/// recipe. Contributions are additive across terms:
///
/// 1. a direct substring match against a keyword (either direction) adds 10
///    and finishes the term;
/// 2. otherwise a synonym-category hit whose category appears in the
///    recipe's keywords adds 5, stopping the category scan — but the term
///    still falls through to rule 3;
/// 3. every keyword with similarity above 0.7 adds 3, uncapped.
///
/// The asymmetry between rules 1 and 2 (one ends the term, the other does
/// not suppress fuzzy hits) matches the long-standing scoring behavior and
/// is relied on by the ranking tests; keep it as is.
pub fn match_score(terms: &[String], recipe: &Recipe) -> u32 {
    let keywords = recipe.match_keywords();
    let mut score = 0u32;

    for term in terms {
        if keywords
            .iter()
            .any(|keyword| keyword.contains(term.as_str()) || term.contains(keyword.as_str()))
        {
            score += 10;
            continue;
        }

        for (category, surface_forms) in INGREDIENT_SYNONYMS {
            let term_matches_category = surface_forms
                .iter()
                .any(|form| form.contains(term.as_str()) || term.contains(form));
            if !term_matches_category {
                continue;
            }
            if keywords
                .iter()
                .any(|keyword| keyword == category || keyword.contains(category))
            {
                score += 5;
                break;
            }
        }

        for keyword in keywords {
            if similarity(term, keyword) > FUZZY_THRESHOLD {
                score += 3;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DietaryType, PreservationMethod, Recipe};

    fn recipe_with_keywords(keywords: &[&str]) -> Recipe {
        Recipe {
            id: 99,
            name: "Test Recipe".to_string(),
            ingredients: vec!["something".to_string()],
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            dietary_type: DietaryType::All,
            preservation_method: PreservationMethod::Heat,
            servings: 2,
            prep_time: "10 minutes".to_string(),
            instructions: "1. Cook.".to_string(),
            shelf_life: "2 days".to_string(),
            chemistry: None,
            food_safety: String::new(),
            cultural_context: String::new(),
            nutritional_benefits: None,
            video_url: None,
        }
    }

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_exact_hits_score_twenty() {
        let recipe = recipe_with_keywords(&["tomato", "rice", "onion", "garlic", "oil"]);
        assert_eq!(match_score(&terms(&["tomato", "rice"]), &recipe), 20);
    }

    #[test]
    fn test_exact_hit_short_circuits_fuzzy_rule() {
        // An identical term would also clear the fuzzy threshold; the direct
        // hit must win alone, not stack with rule 3.
        let recipe = recipe_with_keywords(&["tomato"]);
        assert_eq!(match_score(&terms(&["tomato"]), &recipe), 10);
    }

    #[test]
    fn test_substring_counts_as_direct_hit() {
        // "tomatoes" contains the keyword "tomato".
        let recipe = recipe_with_keywords(&["tomato", "rice"]);
        assert_eq!(match_score(&terms(&["tomatoes"]), &recipe), 10);
    }

    #[test]
    fn test_synonym_category_scores_five_plus_fuzzy() {
        // "poultry" is a surface form of the "chicken" category; the recipe
        // keywords contain "chicken" so rule 2 adds 5. No keyword is within
        // edit distance for rule 3.
        let recipe = recipe_with_keywords(&["chicken", "vegetable"]);
        assert_eq!(match_score(&terms(&["poultry"]), &recipe), 5);
    }

    #[test]
    fn test_fuzzy_misspelling_scores_three() {
        // "spinich" vs "spinach": one edit over length 7 is above the 0.7
        // threshold; no substring hit, no synonym category named "spinach".
        let recipe = recipe_with_keywords(&["spinach", "salad"]);
        assert_eq!(match_score(&terms(&["spinich"]), &recipe), 3);
    }

    #[test]
    fn test_synonym_hit_still_allows_fuzzy_hits() {
        // "tomatoe" matches the "tomato" category via the surface form
        // "tomatoes" and the keyword contains "tomato" (+5); the same
        // keyword is one edit away, so the fuzzy rule adds 3 on top.
        let recipe = recipe_with_keywords(&["tomatoz"]);
        assert_eq!(match_score(&terms(&["tomatoe"]), &recipe), 5 + 3);
    }

    #[test]
    fn test_fuzzy_hits_are_additive_per_keyword() {
        // Both keywords are one edit away from the term with no substring
        // relation; each adds 3.
        let recipe = recipe_with_keywords(&["beens", "beanz"]);
        assert_eq!(match_score(&terms(&["beans"]), &recipe), 3 + 3);
    }

    #[test]
    fn test_empty_terms_score_zero() {
        let recipe = recipe_with_keywords(&["tomato"]);
        assert_eq!(match_score(&[], &recipe), 0);
    }

    #[test]
    fn test_keyword_fallback_for_generated_recipes() {
        let mut recipe = recipe_with_keywords(&[]);
        recipe.ingredients = vec!["tomato".to_string(), "rice".to_string()];
        assert_eq!(match_score(&terms(&["tomato", "rice"]), &recipe), 20);
    }
}
