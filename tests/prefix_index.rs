use rusty_wordsearch::dictionary::PrefixIndex;

const WORDS: &[&str] = &[
    "ate", "cat", "cater", "caterwaul", "eta", "jib", "late", "later", "lute", "poi", "tea",
    "wag", "quit", "quite", "a", "aa", "ab",
];

fn brute_prefix(words: &[&str], query: &str) -> bool {
    words.iter().any(|w| w.starts_with(query))
}

#[test]
fn exact_matches_membership() {
    let index = PrefixIndex::build(WORDS.iter().copied());
    for word in WORDS {
        assert!(index.contains_exact(word), "{}", word);
    }
    for query in ["", "c", "cate", "caterwauls", "later ", "Tea", "zz", "b"] {
        assert_eq!(index.contains_exact(query), WORDS.contains(&query), "{:?}", query);
    }
}

#[test]
fn every_prefix_is_feasible() {
    let index = PrefixIndex::build(WORDS.iter().copied());
    for word in WORDS {
        for i in 0..=word.len() {
            assert!(index.has_feasible_prefix(&word[..i]), "{:?}", &word[..i]);
        }
    }
}

#[test]
fn prefix_matches_brute_force() {
    let index = PrefixIndex::build(WORDS.iter().copied());
    let alphabet = ['a', 'b', 'c', 'e', 't', 'q', 'u', 'z'];
    let mut queries = vec![String::new()];
    for _ in 0..3 {
        let longer: Vec<String> = queries
            .iter()
            .flat_map(|p| alphabet.iter().map(move |c| format!("{}{}", p, c)))
            .collect();
        queries.extend(longer);
    }
    for query in &queries {
        assert_eq!(
            index.has_feasible_prefix(query),
            brute_prefix(WORDS, query),
            "{:?}",
            query
        );
    }
}

#[test]
fn duplicates_are_harmless() {
    let index = PrefixIndex::build(["tea", "tea", "tea", "ten"]);
    assert!(index.contains_exact("tea"));
    assert!(index.has_feasible_prefix("te"));
    assert!(index.has_feasible_prefix("ten"));
    assert!(!index.has_feasible_prefix("tee"));
}
