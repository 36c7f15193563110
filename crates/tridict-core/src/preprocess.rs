use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default search-term cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Fold full-width ASCII and half-width kana (NFKC)
        let text: String = text.nfkc().collect();

        // Line breaks are word boundaries
        text.replace("\r\n", " ")
            .replace(['\n', '\r'], " ")
            .trim()
            .to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
