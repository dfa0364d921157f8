use rand::seq::IndexedRandom;

pub const WORDS: [&str; 50] = [
    "apple", "banana", "cat", "dog", "elephant", "fish", "grape", "hat", "ice", "jungle",
    "kite", "lemon", "monkey", "notebook", "orange", "piano", "queen", "rabbit", "sun", "tree",
    "umbrella", "violin", "wolf", "xylophone", "yarn", "zebra", "computer", "keyboard", "mouse",
    "screen", "internet", "website", "programming", "algorithm", "database", "network",
    "security", "encryption", "protocol", "server", "client", "framework", "library",
    "function", "variable", "constant", "parameter", "argument", "statement", "expression",
];

/// Up to `count` distinct words in random order. Negative counts give an
/// empty list; counts past the list size give the whole list.
pub fn sample_words(count: i64) -> Vec<String> {
    let count = count.clamp(0, WORDS.len() as i64) as usize;
    let mut rng = rand::rng();

    WORDS
        .choose_multiple(&mut rng, count)
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_is_distinct() {
        let words = sample_words(25);
        assert_eq!(words.len(), 25);
        let unique: HashSet<_> = words.iter().collect();
        assert_eq!(unique.len(), 25);
        assert!(words.iter().all(|w| WORDS.contains(&w.as_str())));
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(sample_words(1_000).len(), WORDS.len());
        assert!(sample_words(-3).is_empty());
        assert!(sample_words(0).is_empty());
    }
}
