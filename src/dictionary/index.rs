/// An immutable, sorted word list answering exact and prefix queries by
/// binary search.
///
/// Both lookups locate the lower bound of the query: the first word that is
/// not less than it. Any word that starts with the query sorts at or after
/// the query and before every word that does not, so the lower bound is the
/// only candidate that needs to be inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    words: Vec<String>,
}

impl PrefixIndex {
    /// Builds an index from any sequence of words. Duplicates are kept.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in ascending order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns `true` if `s` is one of the indexed words.
    pub fn contains_exact(&self, s: &str) -> bool {
        self.word_at_lower_bound(s).is_some_and(|word| word == s)
    }

    /// Returns `true` if some indexed word starts with `s`, including `s`
    /// itself. The empty string is a feasible prefix of any non-empty index.
    pub fn has_feasible_prefix(&self, s: &str) -> bool {
        self.word_at_lower_bound(s)
            .is_some_and(|word| word.starts_with(s))
    }

    fn word_at_lower_bound(&self, s: &str) -> Option<&str> {
        let insertion_point = self.words.partition_point(|word| word.as_str() < s);
        self.words.get(insertion_point).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixIndex;

    fn sample() -> PrefixIndex {
        PrefixIndex::build(["tea", "cater", "cat", "eta", "ate", "cat"])
    }

    #[test]
    fn sorts_on_build() {
        let index = sample();
        assert_eq!(index.len(), 6);
        assert_eq!(
            index.words(),
            &["ate", "cat", "cat", "cater", "eta", "tea"]
        );
    }

    #[test]
    fn exact_lookup() {
        let index = sample();
        assert!(index.contains_exact("cat"));
        assert!(index.contains_exact("cater"));
        assert!(!index.contains_exact("cate"));
        assert!(!index.contains_exact("caters"));
        assert!(!index.contains_exact(""));
        assert!(!index.contains_exact("zzz"));
    }

    #[test]
    fn prefix_lookup() {
        let index = sample();
        assert!(index.has_feasible_prefix(""));
        assert!(index.has_feasible_prefix("c"));
        assert!(index.has_feasible_prefix("cate"));
        assert!(index.has_feasible_prefix("cater"));
        assert!(!index.has_feasible_prefix("caters"));
        assert!(!index.has_feasible_prefix("cb"));
        assert!(!index.has_feasible_prefix("x"));
        // Probe sorts before every word.
        assert!(!index.has_feasible_prefix("aa"));
    }

    #[test]
    fn empty_index_accepts_nothing() {
        let index = PrefixIndex::default();
        assert!(index.is_empty());
        assert!(!index.has_feasible_prefix(""));
        assert!(!index.contains_exact(""));
    }

    #[test]
    fn every_prefix_of_every_word_is_feasible() {
        let words = ["apple", "apply", "ape", "banana", "band", "bandana", "quit"];
        let index: PrefixIndex = words.iter().copied().collect();
        for word in words {
            for i in 0..=word.len() {
                assert!(index.has_feasible_prefix(&word[..i]), "{}", &word[..i]);
            }
        }
    }
}
