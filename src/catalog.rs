use clap::ValueEnum;
use serde::Deserialize;

/// Dietary classification of a recipe. The set is closed; unknown surface
/// strings coming from outside (e.g. an AI-generated recipe) fall back to
/// `All` via [`DietaryType::from_label`] instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DietaryType {
    All,
    Vegetarian,
    Vegan,
    NonVegetarian,
}

impl DietaryType {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "vegetarian" => DietaryType::Vegetarian,
            "vegan" => DietaryType::Vegan,
            "non-vegetarian" => DietaryType::NonVegetarian,
            _ => DietaryType::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryType::All => "all",
            DietaryType::Vegetarian => "vegetarian",
            DietaryType::Vegan => "vegan",
            DietaryType::NonVegetarian => "non-vegetarian",
        }
    }
}

/// Food-preservation category a recipe is tagged with. Drives which
/// glossary entry the presentation layer shows. Unknown labels fall back
/// to `Heat`, the most generic method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreservationMethod {
    Salt,
    Acid,
    Heat,
    Oil,
    Fermentation,
}

impl PreservationMethod {
    pub const ALL: [PreservationMethod; 5] = [
        PreservationMethod::Salt,
        PreservationMethod::Acid,
        PreservationMethod::Heat,
        PreservationMethod::Oil,
        PreservationMethod::Fermentation,
    ];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "salt" => PreservationMethod::Salt,
            "acid" => PreservationMethod::Acid,
            "oil" => PreservationMethod::Oil,
            "fermentation" => PreservationMethod::Fermentation,
            _ => PreservationMethod::Heat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreservationMethod::Salt => "salt",
            PreservationMethod::Acid => "acid",
            PreservationMethod::Heat => "heat",
            PreservationMethod::Oil => "oil",
            PreservationMethod::Fermentation => "fermentation",
        }
    }
}

/// The per-recipe chemistry blurb. Also the shape the external generator
/// returns inside its JSON payload, hence the serde derive.
#[derive(Debug, Clone, Deserialize)]
pub struct Chemistry {
    pub title: String,
    pub explanation: String,
    pub process: String,
}

/// A single recipe record. Catalog entries are built once at startup and
/// never mutated; externally generated recipes use the same shape.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    /// Display ingredient list, free text.
    pub ingredients: Vec<String>,
    /// Normalized matching terms, distinct from `ingredients`. Empty for
    /// externally generated recipes; see [`Recipe::match_keywords`].
    pub keywords: Vec<String>,
    pub dietary_type: DietaryType,
    pub preservation_method: PreservationMethod,
    pub servings: u32,
    pub prep_time: String,
    pub instructions: String,
    pub shelf_life: String,
    pub chemistry: Option<Chemistry>,
    pub food_safety: String,
    pub cultural_context: String,
    pub nutritional_benefits: Option<String>,
    pub video_url: Option<String>,
}

impl Recipe {
    /// Keywords used by the scorer. Recipes without an explicit keyword set
    /// (AI-generated ones) are matched against their ingredient list.
    pub fn match_keywords(&self) -> &[String] {
        if self.keywords.is_empty() {
            &self.ingredients
        } else {
            &self.keywords
        }
    }
}

/// Ingredient category map used by the scorer's synonym rule: canonical
/// category name to acceptable surface forms. Scan order is declaration
/// order, which keeps rule-2 scoring deterministic.
pub const INGREDIENT_SYNONYMS: &[(&str, &[&str])] = &[
    // Vegetables
    ("tomato", &["tomatoes", "tomato"]),
    ("onion", &["onions", "onion"]),
    ("garlic", &["garlic"]),
    ("carrot", &["carrots", "carrot"]),
    ("cabbage", &["cabbage"]),
    (
        "herbs",
        &["herb", "herbs", "basil", "parsley", "cilantro", "thyme", "rosemary", "oregano"],
    ),
    ("vegetables", &["vegetable", "vegetables", "veggie", "veggies"]),
    (
        "root vegetables",
        &["root", "potato", "potatoes", "turnip", "beet", "parsnip"],
    ),
    // Proteins
    ("chicken", &["chicken", "poultry"]),
    ("fish", &["fish", "salmon", "cod", "tuna"]),
    ("beans", &["bean", "beans", "lentils", "chickpeas", "legumes"]),
    // Grains
    ("rice", &["rice"]),
    ("pasta", &["pasta", "noodles"]),
    ("bread", &["bread"]),
    // Pantry items
    ("oil", &["oil", "olive oil", "vegetable oil"]),
    ("vinegar", &["vinegar"]),
    ("salt", &["salt"]),
    ("spices", &["spice", "spices"]),
    ("nuts", &["nuts", "almonds", "walnuts", "pecans"]),
    ("cheese", &["cheese"]),
    ("lemon", &["lemon", "citrus"]),
    ("broth", &["broth", "stock"]),
    ("soy sauce", &["soy", "soy sauce"]),
    ("ginger", &["ginger"]),
];

/// The built-in recipe catalog. Immutable after construction.
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Mediterranean Tomato Rice".to_string(),
            ingredients: strings(&["tomatoes", "rice", "onion", "garlic", "olive oil"]),
            keywords: strings(&["tomato", "rice", "onion", "garlic", "oil"]),
            dietary_type: DietaryType::Vegan,
            preservation_method: PreservationMethod::Acid,
            servings: 4,
            prep_time: "30 minutes".to_string(),
            instructions: "1. Heat olive oil in a large pan over medium heat. \
                2. Sauté diced onions and minced garlic until fragrant (3-4 minutes). \
                3. Add diced tomatoes and cook until they break down (8-10 minutes). \
                4. Add rice and stir to coat with the tomato mixture. \
                5. Pour in 2 cups of warm water or broth. \
                6. Bring to a boil, then reduce heat and simmer covered for 18-20 minutes. \
                7. Let rest for 5 minutes before fluffing with a fork."
                .to_string(),
            shelf_life: "3-4 days refrigerated".to_string(),
            chemistry: Some(Chemistry {
                title: "Acid Preservation in Tomatoes".to_string(),
                explanation: "Tomatoes contain natural citric acid and malic acid, which \
                    create an acidic environment (pH 4.3-4.9) that inhibits harmful \
                    bacterial growth. The acidity helps preserve the dish while enhancing \
                    flavors through the Maillard reaction during cooking."
                    .to_string(),
                process: "The natural acids in tomatoes denature proteins in harmful \
                    bacteria, preventing spoilage and extending shelf life."
                    .to_string(),
            }),
            food_safety: "Store in refrigerator within 2 hours of cooking. Reheat to \
                165°F (74°C) before serving. Do not leave at room temperature for more \
                than 2 hours."
                .to_string(),
            cultural_context: "This recipe draws from Mediterranean traditions where \
                tomatoes and olive oil are staples. The combination maximizes the \
                bioavailability of lycopene from tomatoes when paired with healthy fats."
                .to_string(),
            nutritional_benefits: Some(
                "Rich in lycopene, vitamin C, and healthy monounsaturated fats".to_string(),
            ),
            video_url: Some("https://www.youtube.com/watch?v=KTJB5rGD6a0".to_string()),
        },
        Recipe {
            id: 2,
            name: "Asian Stir-Fried Vegetables".to_string(),
            ingredients: strings(&["cabbage", "carrots", "soy sauce", "ginger", "garlic", "oil"]),
            keywords: strings(&["cabbage", "carrot", "soy", "ginger", "garlic", "oil", "vegetable"]),
            dietary_type: DietaryType::Vegan,
            preservation_method: PreservationMethod::Salt,
            servings: 3,
            prep_time: "15 minutes".to_string(),
            instructions: "1. Heat oil in a wok or large skillet over high heat. \
                2. Add minced ginger and garlic, stir-fry for 30 seconds. \
                3. Add sliced carrots first and cook for 2 minutes. \
                4. Add chopped cabbage and stir-fry for 3-4 minutes until crisp-tender. \
                5. Add soy sauce and toss to combine. \
                6. Cook for another 1-2 minutes. \
                7. Serve immediately while hot."
                .to_string(),
            shelf_life: "2-3 days refrigerated".to_string(),
            chemistry: Some(Chemistry {
                title: "Salt Preservation and Fermentation".to_string(),
                explanation: "Soy sauce contains high sodium content (up to 6% salt) which \
                    draws moisture out of ingredients through osmosis, creating an \
                    inhospitable environment for harmful bacteria while preserving \
                    nutrients."
                    .to_string(),
                process: "Salt denatures proteins and creates osmotic pressure that \
                    dehydrates bacterial cells, preventing spoilage and enhancing umami \
                    flavors."
                    .to_string(),
            }),
            food_safety: "Best consumed fresh. Store leftovers in refrigerator and \
                consume within 2-3 days. Reheat thoroughly before serving."
                .to_string(),
            cultural_context: "Traditional Asian stir-frying technique preserves \
                vegetables' nutrients and natural flavors while using minimal oil. The \
                high-heat, quick-cooking method originated in China to conserve fuel."
                .to_string(),
            nutritional_benefits: Some(
                "High in fiber, vitamin K, vitamin C, and antioxidants".to_string(),
            ),
            video_url: None,
        },
        Recipe {
            id: 3,
            name: "Simple Spinach Salad".to_string(),
            ingredients: strings(&["spinach", "cheese", "oil", "vinegar"]),
            keywords: strings(&["spinach", "cheese", "feta", "oil", "vinegar", "salad"]),
            dietary_type: DietaryType::Vegetarian,
            preservation_method: PreservationMethod::Acid,
            servings: 2,
            prep_time: "10 minutes".to_string(),
            instructions: "1. Wash and dry fresh spinach leaves. \
                2. Crumble cheese over spinach. \
                3. Drizzle with oil and vinegar. \
                4. Toss gently and serve immediately."
                .to_string(),
            shelf_life: "Best consumed fresh".to_string(),
            chemistry: Some(Chemistry {
                title: "Acid Preservation".to_string(),
                explanation: "Vinegar's acetic acid helps preserve the salad while \
                    enhancing flavors and nutrient absorption."
                    .to_string(),
                process: "Acid prevents oxidation and maintains freshness of leafy greens."
                    .to_string(),
            }),
            food_safety: "Wash spinach thoroughly. Consume immediately for best quality."
                .to_string(),
            cultural_context: "Simple Mediterranean-style salad that showcases fresh \
                ingredients."
                .to_string(),
            nutritional_benefits: Some(
                "High in iron, vitamins A and K, and calcium from cheese".to_string(),
            ),
            video_url: None,
        },
        Recipe {
            id: 4,
            name: "Simple Chicken Stir-fry".to_string(),
            ingredients: strings(&["chicken", "vegetables", "soy sauce", "ginger", "garlic", "oil"]),
            keywords: strings(&["chicken", "vegetable", "soy", "ginger", "garlic", "oil", "meat"]),
            dietary_type: DietaryType::NonVegetarian,
            preservation_method: PreservationMethod::Heat,
            servings: 4,
            prep_time: "25 minutes".to_string(),
            instructions: "1. Cut chicken into bite-sized pieces. \
                2. Heat oil in a wok over high heat. \
                3. Add chicken and cook until golden (5-6 minutes). \
                4. Add vegetables, ginger, and garlic. \
                5. Stir-fry for 3-4 minutes. \
                6. Add soy sauce and cook for 2 more minutes. \
                7. Serve hot."
                .to_string(),
            shelf_life: "3-4 days refrigerated".to_string(),
            chemistry: Some(Chemistry {
                title: "Heat Treatment for Meat".to_string(),
                explanation: "High-temperature cooking denatures proteins in chicken and \
                    destroys harmful bacteria, making the meat safe to eat and extending \
                    its shelf life."
                    .to_string(),
                process: "Heat coagulates proteins and destroys pathogenic microorganisms \
                    in meat while preserving nutrients."
                    .to_string(),
            }),
            food_safety: "Cook chicken to internal temperature of 165°F (74°C). Store in \
                refrigerator within 2 hours. Reheat thoroughly before serving."
                .to_string(),
            cultural_context: "Quick stir-frying technique preserves nutrients while \
                ensuring meat safety through proper heat treatment."
                .to_string(),
            nutritional_benefits: Some(
                "High-quality protein, essential amino acids, and vitamins from vegetables"
                    .to_string(),
            ),
            video_url: Some("https://www.youtube.com/watch?v=nmEchGTdBrY".to_string()),
        },
        Recipe {
            id: 5,
            name: "Soya Chunks Rice Bowl".to_string(),
            ingredients: strings(&["soya chunks", "rice", "onion", "spices", "oil", "tomatoes"]),
            keywords: strings(&["soya", "chunks", "rice", "onion", "spices", "oil", "tomato", "protein"]),
            dietary_type: DietaryType::Vegan,
            preservation_method: PreservationMethod::Heat,
            servings: 4,
            prep_time: "35 minutes".to_string(),
            instructions: "1. Soak soya chunks in warm water for 15 minutes, then drain. \
                2. Heat oil in a pan and sauté onions until golden. \
                3. Add soaked soya chunks and cook for 5 minutes. \
                4. Add spices and diced tomatoes, cook until soft. \
                5. Add cooked rice and mix well. \
                6. Cook for 3-4 minutes until flavors blend. \
                7. Serve hot with fresh herbs."
                .to_string(),
            shelf_life: "3-4 days refrigerated".to_string(),
            chemistry: Some(Chemistry {
                title: "Protein Denaturation and Heat Treatment".to_string(),
                explanation: "Heat treatment denatures soy proteins making them more \
                    digestible while eliminating harmful bacteria. The cooking process \
                    also enhances flavor through Maillard reactions."
                    .to_string(),
                process: "Heat breaks down complex proteins into simpler forms and \
                    destroys any pathogens while preserving nutritional value."
                    .to_string(),
            }),
            food_safety: "Ensure soya chunks are properly rehydrated and cooked \
                thoroughly. Store in refrigerator within 2 hours of cooking."
                .to_string(),
            cultural_context: "Soya chunks are a popular plant-based protein in Indian \
                and Asian cuisines, providing meat-like texture without animal products."
                .to_string(),
            nutritional_benefits: Some(
                "High in plant protein, fiber, and essential amino acids. Low in fat and \
                    cholesterol-free."
                    .to_string(),
            ),
            video_url: Some("https://www.youtube.com/watch?v=FLuQN4kE_rI".to_string()),
        },
    ]
}
