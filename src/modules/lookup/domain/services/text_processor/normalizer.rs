use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Transformation that can be applied to a piece of text
///
/// Each transformation is composable and testable in isolation.
pub trait TextTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Converts text to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl TextTransformation for LowercaseTransform {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Decomposes accented characters (NFD) and drops the combining marks
#[derive(Debug, Clone)]
pub struct StripDiacriticsTransform;

impl TextTransformation for StripDiacriticsTransform {
    fn transform(&self, text: &str) -> String {
        text.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "StripDiacritics"
    }
}

/// Replaces every character outside `[a-z0-9]` with a space
#[derive(Debug, Clone)]
pub struct ReplaceNonAlphanumericTransform;

impl TextTransformation for ReplaceNonAlphanumericTransform {
    fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "ReplaceNonAlphanumeric"
    }
}

/// Normalizes whitespace (collapses multiple spaces, trims)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl TextTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Text normalizer that applies a pipeline of transformations
pub struct TextNormalizer {
    transformations: Vec<Box<dyn TextTransformation>>,
}

impl TextNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Lowercase, strip diacritics, map non-alphanumerics to spaces, collapse
    /// whitespace
    pub fn default_pipeline() -> Self {
        Self::new()
            .with_lowercase()
            .with_strip_diacritics()
            .with_replace_non_alphanumeric()
            .with_normalize_whitespace()
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    pub fn with_strip_diacritics(mut self) -> Self {
        self.transformations.push(Box::new(StripDiacriticsTransform));
        self
    }

    pub fn with_replace_non_alphanumeric(mut self) -> Self {
        self.transformations
            .push(Box::new(ReplaceNonAlphanumericTransform));
        self
    }

    pub fn with_normalize_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(NormalizeWhitespaceTransform));
        self
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("Transform {}: -> '{}'", transformation.name(), result);
        }

        result
    }

    /// Normalized form with every whitespace removed. Lets "tododia" meet
    /// "Todo Dia".
    pub fn normalize_no_space(&self, text: &str) -> String {
        self.normalize(text)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
