/// Classic Levenshtein edit distance (single-character insertion, deletion,
/// substitution), computed over `char`s with two rolling DP rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(curr[j] + 1).min(prev[j + 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized string similarity in [0, 1]:
/// `1 - editDistance(a, b) / max(|a|, |b|)`.
///
/// Two empty strings are defined as identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("tomatoe", "tomato"), 1);
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("tomato", "tomato"), 1.0);
        assert_eq!(similarity("soya chunks", "soya chunks"), 1.0);
    }

    #[test]
    fn test_similarity_misspelling_above_fuzzy_threshold() {
        // 1 edit over max length 7 -> 6/7 ≈ 0.857
        let s = similarity("tomatoe", "tomato");
        assert!((s - 6.0 / 7.0).abs() < 1e-9);
        assert!(s > 0.7);
    }

    #[test]
    fn test_similarity_stays_in_unit_interval() {
        for (a, b) in [
            ("a", "zzzzzzzz"),
            ("garlic", "ginger"),
            ("", "onion"),
            ("sauce", "soy sauce"),
        ] {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a:?}, {b:?}) = {s}");
            let sym = similarity(b, a);
            assert!((s - sym).abs() < 1e-9);
        }
    }
}
