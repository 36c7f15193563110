//! Numbered-tone pinyin ("ni3 hao3") to tone-marked pinyin ("nǐ hǎo").

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A run of pinyin letters directly followed by a tone digit.
/// `u:` is the CC-CEDICT spelling of `ü`.
static TONED_SYLLABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:[uU]:|[a-zA-ZüÜ])+)([1-5])").expect("invalid toned syllable pattern")
});

/// Marks for tones 1-4, then the neutral tone
const TONE_MARKS: [(char, [char; 5]); 12] = [
    ('a', ['ā', 'á', 'ǎ', 'à', 'a']),
    ('e', ['ē', 'é', 'ě', 'è', 'e']),
    ('i', ['ī', 'í', 'ǐ', 'ì', 'i']),
    ('o', ['ō', 'ó', 'ǒ', 'ò', 'o']),
    ('u', ['ū', 'ú', 'ǔ', 'ù', 'u']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü']),
    ('A', ['Ā', 'Á', 'Ǎ', 'À', 'A']),
    ('E', ['Ē', 'É', 'Ě', 'È', 'E']),
    ('I', ['Ī', 'Í', 'Ǐ', 'Ì', 'I']),
    ('O', ['Ō', 'Ó', 'Ǒ', 'Ò', 'O']),
    ('U', ['Ū', 'Ú', 'Ǔ', 'Ù', 'U']),
    ('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ', 'Ü']),
];

/// Convert every toned syllable in `numbered` to its diacritic form.
///
/// Text that is not a letter run followed by a digit 1-5 is copied through
/// unchanged, so already-marked pinyin and plain words are safe to pass in.
pub fn to_diacritic(numbered: &str) -> String {
    TONED_SYLLABLE
        .replace_all(numbered, |caps: &Captures| {
            let tone = caps[2].as_bytes()[0] - b'0';
            apply_tone(&caps[1], tone)
        })
        .into_owned()
}

/// Strip the digit and mark one vowel of `syllable`.
///
/// Placement: the first `a`/`e`, else the `o` of `ou`, else the last vowel.
fn apply_tone(syllable: &str, tone: u8) -> String {
    let mut chars: Vec<char> = syllable.replace("u:", "ü").replace("U:", "Ü").chars().collect();

    if let Some(index) = tone_position(&chars) {
        if let Some(marked) = mark(chars[index], tone) {
            chars[index] = marked;
        }
    }

    chars.into_iter().collect()
}

fn tone_position(chars: &[char]) -> Option<usize> {
    let folded: Vec<char> = chars.iter().copied().map(fold_case).collect();

    folded
        .iter()
        .position(|&c| c == 'a' || c == 'e')
        .or_else(|| folded.windows(2).position(|pair| pair == ['o', 'u']))
        .or_else(|| folded.iter().rposition(|&c| is_vowel(c)))
}

fn mark(vowel: char, tone: u8) -> Option<char> {
    if !(1..=5).contains(&tone) {
        return None;
    }
    TONE_MARKS
        .iter()
        .find(|(plain, _)| *plain == vowel)
        .map(|(_, marks)| marks[usize::from(tone - 1)])
}

fn fold_case(c: char) -> char {
    match c {
        'Ü' => 'ü',
        c => c.to_ascii_lowercase(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü')
}
