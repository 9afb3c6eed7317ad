pub mod api_connection;
pub mod catalog;
pub mod cli;
pub mod glossary;
pub mod key_store;
pub mod presentation;
pub mod recipe_generator;
pub mod search;
