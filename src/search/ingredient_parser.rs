/// Normalizes a free-text ingredient string into search terms.
///
/// Lowercases the whole input, splits on commas, trims each piece and drops
/// empty ones. No de-duplication and no stemming; term order follows the
/// order of appearance in the input.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
