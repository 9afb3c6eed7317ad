//! Terminal rendering of search results and glossary entries. The core
//! hands over ranked [`ScoredRecipe`]s; everything in here is display only.

use crate::catalog::{DietaryType, PreservationMethod};
use crate::glossary;
use crate::search::engine::{RecipeSource, ScoredRecipe};

pub fn preservation_icon(method: PreservationMethod) -> &'static str {
    match method {
        PreservationMethod::Salt => "🧂",
        PreservationMethod::Acid => "🍋",
        PreservationMethod::Heat => "🔥",
        PreservationMethod::Oil => "🫒",
        PreservationMethod::Fermentation => "🦠",
    }
}

pub fn preservation_name(method: PreservationMethod) -> &'static str {
    match method {
        PreservationMethod::Salt => "Salt Preservation",
        PreservationMethod::Acid => "Acid Preservation",
        PreservationMethod::Heat => "Heat Treatment",
        PreservationMethod::Oil => "Oil Coating",
        PreservationMethod::Fermentation => "Fermentation",
    }
}

pub fn dietary_icon(diet: DietaryType) -> &'static str {
    match diet {
        DietaryType::All => "🍽️",
        DietaryType::Vegetarian => "🥬",
        DietaryType::Vegan => "🌱",
        DietaryType::NonVegetarian => "🍖",
    }
}

pub fn dietary_name(diet: DietaryType) -> &'static str {
    match diet {
        DietaryType::All => "All Diets",
        DietaryType::Vegetarian => "Vegetarian",
        DietaryType::Vegan => "Vegan",
        DietaryType::NonVegetarian => "Non-Vegetarian",
    }
}

/// Prints the ranked result list as recipe cards.
pub fn print_results(results: &[ScoredRecipe]) {
    let local_count = results
        .iter()
        .filter(|r| r.source == RecipeSource::Local)
        .count();
    let external_count = results.len() - local_count;

    let mut title = format!(
        "Found {} Recipe{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
    if local_count > 0 && external_count > 0 {
        title.push_str(&format!(" ({local_count} local, {external_count} AI-generated)"));
    } else if external_count > 0 {
        title.push_str(" (AI-generated)");
    }
    println!("\n{title}");

    for scored in results {
        print_card(scored);
    }
}

fn print_card(scored: &ScoredRecipe) {
    let recipe = &scored.recipe;
    println!("\n{}", "=".repeat(64));
    println!("{}", recipe.name);
    print!(
        "{} {}  |  {} {}",
        preservation_icon(recipe.preservation_method),
        preservation_name(recipe.preservation_method),
        dietary_icon(recipe.dietary_type),
        dietary_name(recipe.dietary_type),
    );
    if scored.source == RecipeSource::External {
        print!("  |  🤖 AI Generated");
    }
    println!();
    println!("⏰ Shelf life: {}", recipe.shelf_life);
    println!("👥 Serves {} • ⏱️ {}", recipe.servings, recipe.prep_time);

    println!("\n🥄 Ingredients");
    for ingredient in &recipe.ingredients {
        println!("  • {ingredient}");
    }

    println!("\n👨‍🍳 Instructions");
    println!("  {}", recipe.instructions);

    if let Some(url) = &recipe.video_url {
        println!("\n📹 Video tutorial: {url}");
    }
    if let Some(chemistry) = &recipe.chemistry {
        println!("\n🧪 {}", chemistry.title);
        println!("  {}", chemistry.explanation);
    }
    if !recipe.food_safety.is_empty() {
        println!("\n⚠️ Food Safety");
        println!("  {}", recipe.food_safety);
    }
    if !recipe.cultural_context.is_empty() {
        println!("\n🌍 Cultural Context");
        println!("  {}", recipe.cultural_context);
    }
    if let Some(benefits) = &recipe.nutritional_benefits {
        println!("\n💪 Nutritional Benefits");
        println!("  {benefits}");
    }
}

/// Prints one glossary entry, the CLI counterpart of the chemistry modal.
pub fn print_method_explanation(method: PreservationMethod) {
    let entry = glossary::explanation_for(method);
    println!("{} {}", preservation_icon(method), entry.title);
    println!("\nHow it works:\n{}", entry.explanation);
    println!("\nThe Process:\n{}", entry.process);
    println!("\nExamples:\n{}", entry.examples);
    println!("\nBenefits:\n{}", entry.benefits);
}
