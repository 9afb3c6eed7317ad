use anyhow::{Context, Result};
use recipe_finder::catalog::Catalog;
use recipe_finder::cli::parse_args;
use recipe_finder::key_store::KeyStore;
use recipe_finder::presentation;
use recipe_finder::recipe_generator::GroqRecipeGenerator;
use recipe_finder::search::{SearchEngine, SearchError};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();

    if let Some(api_key) = cli.set_api_key.as_deref() {
        let store = KeyStore::open_default();
        store
            .save_api_key(api_key)
            .with_context(|| format!("Failed to save API key to {:?}", store.path()))?;
        println!(
            "✅ API key saved to {:?}. You can now get AI-generated recipes.",
            store.path()
        );
        return Ok(());
    }

    if let Some(method) = cli.explain {
        presentation::print_method_explanation(method);
        return Ok(());
    }

    let Some(raw_input) = cli.ingredients.as_deref() else {
        eprintln!("Please provide a comma-separated ingredient list, e.g.:");
        eprintln!("  recipe_finder \"tomato, rice, garlic\" --diet vegan");
        std::process::exit(2);
    };

    let store = KeyStore::open_default();
    let api_key = if cli.local_only {
        None
    } else {
        store.resolve_api_key()?
    };
    let have_api_key = api_key.is_some();
    let generator = api_key.map(GroqRecipeGenerator::new);

    let catalog = Catalog::builtin();
    let engine = SearchEngine::new(&catalog);
    let progress_updater = |message: String| println!("{message}");

    println!("🔍 Searching for recipes with ingredients: {raw_input}");
    match engine
        .search(raw_input, cli.diet, generator.as_ref(), &progress_updater)
        .await
    {
        Ok(results) => {
            presentation::print_results(&results);
            Ok(())
        }
        Err(err @ SearchError::NoResults) if !have_api_key && !cli.local_only => {
            eprintln!("{err}");
            eprintln!(
                "Tip: save a Groq API key with --set-api-key (or set GROQ_API_KEY) to get \
                 AI-generated recipes when the local catalog has no match."
            );
            std::process::exit(1);
        }
        Err(err @ SearchError::External(_)) => {
            eprintln!("{err}");
            eprintln!("Check your API key or try different ingredients.");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
