#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HskLevel {
    Hsk1, // ~150 words
    Hsk2, // ~300 words
    Hsk3, // ~600 words
    Hsk4, // ~1200 words
    Hsk5, // ~2500 words
    Hsk6, // ~5000 words
}

impl HskLevel {
    /// Parse the level tag stored in the lexicon ("1", "HSK1", "hsk 3", ...)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("hsk"))
            .map_or(s, |_| s[3..].trim_start());

        match digits {
            "1" => Some(HskLevel::Hsk1),
            "2" => Some(HskLevel::Hsk2),
            "3" => Some(HskLevel::Hsk3),
            "4" => Some(HskLevel::Hsk4),
            "5" => Some(HskLevel::Hsk5),
            "6" => Some(HskLevel::Hsk6),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            HskLevel::Hsk1 => 1,
            HskLevel::Hsk2 => 2,
            HskLevel::Hsk3 => 3,
            HskLevel::Hsk4 => 4,
            HskLevel::Hsk5 => 5,
            HskLevel::Hsk6 => 6,
        }
    }

    /// Short label for terminal output, e.g. "HSK 3"
    pub fn badge(&self) -> String {
        format!("HSK {}", self.number())
    }
}
