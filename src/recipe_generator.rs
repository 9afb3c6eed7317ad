use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage, GROQ_MODEL};
use crate::catalog::{Chemistry, DietaryType, PreservationMethod, Recipe};
use crate::search::engine::GenerateRecipe;

const SYSTEM_PROMPT: &str = "You are a culinary expert specializing in food science and \
    waste-free cooking. Generate educational recipes with scientific explanations \
    suitable for Grade 9 students.";

/// Generates one additional recipe per search through the Groq
/// chat-completion API. Transport failures surface as errors; a reply the
/// model botched (prose instead of JSON, truncated JSON) is recovered by
/// synthesizing a fallback recipe, never by failing the search.
pub struct GroqRecipeGenerator {
    provider: Provider,
}

impl GroqRecipeGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            provider: Provider::groq(api_key),
        }
    }
}

impl GenerateRecipe for GroqRecipeGenerator {
    async fn generate(
        &self,
        raw_ingredients: &str,
        diet: DietaryType,
    ) -> Result<Recipe, ApiConnectionError> {
        let request = ChatCompletionRequest {
            model: GROQ_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(raw_ingredients, diet),
                },
            ],
            temperature: Some(0.7),
            max_tokens: Some(1000),
        };

        let response = self.provider.call_chat_completion(request).await?;
        let content = response
            .first_content()
            .ok_or(ApiConnectionError::EmptyResponse)?;

        Ok(recipe_from_reply(content, raw_ingredients))
    }
}

fn build_prompt(raw_ingredients: &str, diet: DietaryType) -> String {
    let dietary_note = if diet == DietaryType::All {
        String::new()
    } else {
        format!(
            "IMPORTANT: This recipe must be {diet}. Do not include any non-{diet} ingredients.",
            diet = diet.label()
        )
    };

    format!(
        r#"Create a waste-free recipe using these leftover ingredients: {raw_ingredients}

{dietary_note}

IMPORTANT: Respond ONLY with valid JSON in this exact format (no extra text before or after):

{{
    "name": "Recipe Name",
    "ingredients": ["ingredient1", "ingredient2"],
    "instructions": "1. Step one. 2. Step two. 3. Step three.",
    "preservationMethod": "heat",
    "shelfLife": "3-4 days refrigerated",
    "chemistry": {{
        "title": "Heat Treatment",
        "explanation": "Scientific explanation",
        "process": "How it works"
    }},
    "foodSafety": "Storage tips",
    "culturalContext": "Background info",
    "servings": 4,
    "prepTime": "30 minutes",
    "videoUrl": "https://www.youtube.com/results?search_query=how+to+cook+RECIPE_NAME"
}}

Make it educational for Grade 9 students. Return ONLY the JSON object."#
    )
}

/// Shape of the JSON object the model is asked to return. Most fields are
/// defaulted so a near-conforming reply still parses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedRecipe {
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: String,
    #[serde(default, deserialize_with = "lossy_preservation_method")]
    preservation_method: LossyMethod,
    #[serde(default = "default_shelf_life")]
    shelf_life: String,
    #[serde(default)]
    chemistry: Option<Chemistry>,
    #[serde(default)]
    food_safety: String,
    #[serde(default)]
    cultural_context: String,
    #[serde(default = "default_servings")]
    servings: u32,
    #[serde(default = "default_prep_time")]
    prep_time: String,
    #[serde(default)]
    video_url: Option<String>,
}

/// Wrapper so `#[serde(default)]` has a method-specific default (heat).
#[derive(Debug)]
struct LossyMethod(PreservationMethod);

impl Default for LossyMethod {
    fn default() -> Self {
        LossyMethod(PreservationMethod::Heat)
    }
}

fn lossy_preservation_method<'de, D>(deserializer: D) -> Result<LossyMethod, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(LossyMethod(PreservationMethod::from_label(&label)))
}

fn default_shelf_life() -> String {
    "3-4 days refrigerated".to_string()
}

fn default_servings() -> u32 {
    4
}

fn default_prep_time() -> String {
    "30 minutes".to_string()
}

impl GeneratedRecipe {
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: external_recipe_id(),
            name: self.name,
            ingredients: self.ingredients,
            // No explicit keyword set; matching falls back to the
            // ingredient list.
            keywords: Vec::new(),
            dietary_type: DietaryType::All,
            preservation_method: self.preservation_method.0,
            servings: self.servings,
            prep_time: self.prep_time,
            instructions: self.instructions,
            shelf_life: self.shelf_life,
            chemistry: self.chemistry,
            food_safety: self.food_safety,
            cultural_context: self.cultural_context,
            nutritional_benefits: None,
            video_url: self.video_url,
        }
    }
}

/// Turns the model's free-form reply into a recipe: pull out the first
/// balanced JSON object and parse it, or synthesize a fallback when the
/// reply has no parseable object.
pub fn recipe_from_reply(reply: &str, raw_ingredients: &str) -> Recipe {
    if let Some(span) = extract_json_object(reply) {
        if let Ok(generated) = serde_json::from_str::<GeneratedRecipe>(span) {
            return generated.into_recipe();
        }
    }
    fallback_recipe(raw_ingredients, reply)
}

/// Finds the first balanced `{...}` span in `text`. Brace depth is tracked
/// outside of JSON string literals so braces inside strings don't
/// terminate the span early.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Minimal recipe synthesized when the model reply cannot be parsed. Echoes
/// the user's ingredient list and attaches the generic heat-preservation
/// explanation.
fn fallback_recipe(raw_ingredients: &str, reply: &str) -> Recipe {
    let ingredients: Vec<String> = raw_ingredients
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    let cleaned_reply = reply.replace(['{', '}'], "").trim().to_string();
    let instructions = if cleaned_reply.len() > 50 {
        cleaned_reply
    } else {
        format!(
            "1. Prepare your {}. 2. Cook ingredients together using your preferred method. \
             3. Season to taste and serve hot. 4. Store leftovers in refrigerator.",
            ingredients.join(", ")
        )
    };

    Recipe {
        id: external_recipe_id(),
        name: format!("Waste-Free Recipe with {}", raw_ingredients),
        ingredients,
        keywords: Vec::new(),
        dietary_type: DietaryType::All,
        preservation_method: PreservationMethod::Heat,
        servings: 4,
        prep_time: "30 minutes".to_string(),
        instructions,
        shelf_life: "3-4 days refrigerated".to_string(),
        chemistry: Some(Chemistry {
            title: "Heat Treatment".to_string(),
            explanation: "Cooking with heat eliminates harmful bacteria and extends shelf \
                life while making ingredients more digestible."
                .to_string(),
            process: "Heat denatures proteins in harmful bacteria and breaks down cell \
                walls, making nutrients more available."
                .to_string(),
        }),
        food_safety: "Store in refrigerator within 2 hours of cooking. Reheat thoroughly \
            before serving leftovers."
            .to_string(),
        cultural_context: "This simple preparation method reduces food waste while \
            creating nutritious meals from available ingredients."
            .to_string(),
        nutritional_benefits: None,
        video_url: None,
    }
}

fn external_recipe_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
