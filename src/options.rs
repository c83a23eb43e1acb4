//! Configuration options for article extraction.
//!
//! The `Options` struct controls extraction behavior. All fields are public
//! for easy configuration; use `Default::default()` for standard settings.

/// Configuration options for article extraction.
///
/// # Example
///
/// ```rust
/// use artic::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     positive_keywords: vec!["storybody".to_string()],
///     retry_length: 400,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Extra keywords that boost an element's class/id weight by +25.
    ///
    /// Each keyword is matched case-sensitively at the start of the class or
    /// id string. Entries of the form `tag-<name>` match whole tag types.
    ///
    /// Default: empty
    pub positive_keywords: Vec<String>,

    /// Extra keywords that lower an element's class/id weight by 25.
    ///
    /// Same matching rules as `positive_keywords`.
    ///
    /// Default: empty
    pub negative_keywords: Vec<String>,

    /// Minimum cleaned text length (characters) for a paragraph to count
    /// towards candidate scoring, and for a block to survive sanitization.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Minimum cleaned text length (characters) of the sanitized result.
    ///
    /// When the first, ruthless pass produces less text than this, the
    /// whole pipeline re-runs once in lenient mode.
    ///
    /// Default: `250`
    pub retry_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            positive_keywords: Vec::new(),
            negative_keywords: Vec::new(),
            min_text_length: 25,
            retry_length: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let opts = Options::default();

        assert!(opts.positive_keywords.is_empty());
        assert!(opts.negative_keywords.is_empty());
        assert_eq!(opts.min_text_length, 25);
        assert_eq!(opts.retry_length, 250);
    }

    #[test]
    fn custom_thresholds() {
        let opts = Options {
            min_text_length: 10,
            retry_length: 500,
            ..Options::default()
        };

        assert_eq!(opts.min_text_length, 10);
        assert_eq!(opts.retry_length, 500);
    }
}
