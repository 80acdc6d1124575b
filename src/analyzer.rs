//! Word tokenization for input lines.

/// Splits text into lowercase word tokens: alphanumeric runs are tokens,
/// everything else is a separator. No stop-word filtering and no stemming
/// (the dictionary lookup downstream discards anything the training
/// vocabulary never saw).
#[derive(Debug, Default, Clone)]
pub struct StandardAnalyzer;

impl StandardAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(
            analyzer.tokenize("Hello, World! This-is:fine."),
            vec!["hello", "world", "this", "is", "fine"]
        );
    }

    #[test]
    fn drops_zero_length_tokens() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(analyzer.tokenize("  ...  !!  "), Vec::<String>::new());
        assert_eq!(analyzer.tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn keeps_digits_and_splits_contractions() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(
            analyzer.tokenize("clause 7(b) doesn't apply"),
            vec!["clause", "7", "b", "doesn", "t", "apply"]
        );
    }
}
