pub struct Scorer;

impl Scorer {
    /// Classic Boggle points for an accepted word, by letter count.
    /// A `QU` face counts as two letters.
    ///
    /// - up to 4 letters: 1
    /// - 5 letters: 2
    /// - 6 letters: 3
    /// - 7 letters: 5
    /// - 8 or more: 11
    pub fn word_score(word: &str) -> u32 {
        match word.chars().count() {
            0 => 0,
            1..=4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
        words.iter().map(|word| Self::word_score(word.as_ref())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_score_by_length() {
        assert_eq!(Scorer::word_score(""), 0);
        assert_eq!(Scorer::word_score("A"), 1);
        assert_eq!(Scorer::word_score("CAT"), 1);
        assert_eq!(Scorer::word_score("TREE"), 1);
        assert_eq!(Scorer::word_score("QUIET"), 2);
        assert_eq!(Scorer::word_score("STREAM"), 3);
        assert_eq!(Scorer::word_score("STREAMS"), 5);
        assert_eq!(Scorer::word_score("QUESTION"), 11);
    }

    #[test]
    fn test_total_score() {
        assert_eq!(Scorer::total_score(&["CAT", "QUIET", "STREAMS"]), 8);
        assert_eq!(Scorer::total_score::<&str>(&[]), 0);
    }
}
