use clap::Parser;

use crate::catalog::{DietaryType, PreservationMethod};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find waste-free recipes for leftover ingredients", long_about = None)]
pub struct Cli {
    /// Comma-separated leftover ingredients, e.g. "tomato, rice, garlic"
    pub ingredients: Option<String>,

    /// Dietary preference filter
    #[arg(short, long, value_enum, default_value_t = DietaryType::All)]
    pub diet: DietaryType,

    /// Skip AI recipe generation even when an API key is configured
    #[arg(long)]
    pub local_only: bool,

    /// Print the food-chemistry explanation for a preservation method and exit
    #[arg(long, value_enum, value_name = "METHOD")]
    pub explain: Option<PreservationMethod>,

    /// Save a Groq API key for AI-generated recipes and exit
    #[arg(long, value_name = "KEY")]
    pub set_api_key: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
