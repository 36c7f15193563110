#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5, // Beginner (~800 words)
    N4, // Elementary (~1500 words)
    N3, // Intermediate (~3750 words)
    N2, // Upper intermediate (~6000 words)
    N1, // Advanced (~10000 words)
}

impl JlptLevel {
    /// Parse the level tag stored in the lexicon ("N5", "n3", "jlpt-n1")
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        let tag = upper
            .strip_prefix("JLPT")
            .map(|rest| rest.trim_start_matches(['-', ' ', '_']))
            .unwrap_or(upper.as_str());

        match tag {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// Short label for terminal output, e.g. "JLPT N5"
    pub fn badge(&self) -> String {
        format!("JLPT {}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_tags() {
        assert_eq!(JlptLevel::parse("N5"), Some(JlptLevel::N5));
        assert_eq!(JlptLevel::parse("n3"), Some(JlptLevel::N3));
        assert_eq!(JlptLevel::parse("jlpt-n1"), Some(JlptLevel::N1));
        assert_eq!(JlptLevel::parse(" JLPT N2 "), Some(JlptLevel::N2));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(JlptLevel::parse("N6"), None);
        assert_eq!(JlptLevel::parse("1"), None);
        assert_eq!(JlptLevel::parse(""), None);
    }

    #[test]
    fn easier_levels_sort_first() {
        assert!(JlptLevel::N5 < JlptLevel::N1);
    }

    #[test]
    fn badge_uses_short_name() {
        assert_eq!(JlptLevel::N4.badge(), "JLPT N4");
    }
}
