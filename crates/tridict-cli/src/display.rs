//! Human-readable rendering of a query response.
//!
//! Japanese results come first, then Chinese, each as a vertical list of
//! cards. Styling is plain ANSI and only applied when asked for.

use std::fmt::Write;

use tridict_lang_chinese::HskLevel;
use tridict_lang_japanese::JlptLevel;
use tridict_types::{Language, LanguageOutput, OutputMeta, Response};

const MAX_DEFINITION_CHARS: usize = 100;
const SEPARATOR: &str = "─────────────────────────────────────";

#[derive(Clone, Copy)]
enum Paint {
    Title,
    Number,
    Headword,
    Reading,
    Muted,
    Example,
}

impl Paint {
    fn code(self) -> &'static str {
        match self {
            Paint::Title => "1;94",
            Paint::Number => "1;94",
            Paint::Headword => "1;96",
            Paint::Reading => "3;93",
            Paint::Muted => "3;90",
            Paint::Example => "36",
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, paint: Paint, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", paint.code(), text)
        } else {
            text.to_string()
        }
    }
}

/// Render `response` as text; `color` turns on ANSI escapes.
pub fn render(response: &Response, color: bool) -> String {
    let painter = Painter { color };
    let mut out = String::new();

    for language in [Language::Japanese, Language::Chinese] {
        let outputs: Vec<&LanguageOutput> = response.outputs_for(language).collect();
        render_section(&mut out, &painter, language, &outputs);
        out.push('\n');
    }

    out
}

fn render_section(out: &mut String, painter: &Painter, language: Language, outputs: &[&LanguageOutput]) {
    if outputs.is_empty() {
        let _ = writeln!(out, "{}", painter.paint(Paint::Title, language.name()));
        let _ = writeln!(out, "{}", painter.paint(Paint::Muted, "No results found"));
        return;
    }

    let plural = if outputs.len() == 1 { "" } else { "s" };
    let title = format!("{} ({} result{plural})", language.name(), outputs.len());
    let _ = writeln!(out, "{}", painter.paint(Paint::Title, &title));

    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "{}", painter.paint(Paint::Muted, SEPARATOR));
        }
        render_card(out, painter, i + 1, output);
    }
}

fn render_card(out: &mut String, painter: &Painter, number: usize, output: &LanguageOutput) {
    let mut headline = format!(
        "{} {}",
        painter.paint(Paint::Number, &format!("{number}.")),
        painter.paint(Paint::Headword, &output.headword)
    );
    if !output.reading.is_empty() {
        headline.push(' ');
        headline.push_str(&painter.paint(Paint::Reading, &format!("({})", output.reading)));
    }
    let _ = writeln!(out, "{headline}");

    if !output.definition.is_empty() {
        let _ = writeln!(out, "   {}", truncate(&output.definition, MAX_DEFINITION_CHARS));
    }

    let meta = meta_line(output);
    if !meta.is_empty() {
        let _ = writeln!(out, "   {}", painter.paint(Paint::Muted, &meta.join(" | ")));
    }

    if let Some(example) = output.examples.first() {
        let _ = writeln!(out, "   {}", painter.paint(Paint::Example, &format!("Ex: {}", example.source_text)));
        let _ = writeln!(out, "       {}", painter.paint(Paint::Example, &example.english_text));
    }
}

fn meta_line(output: &LanguageOutput) -> Vec<String> {
    let mut parts = Vec::new();

    match output.rank {
        Some(1..=100) => parts.push("★ Common".to_string()),
        Some(rank @ 101..=1000) => parts.push(format!("Rank: {rank}")),
        _ => {}
    }

    let strokes = match &output.meta {
        OutputMeta::Kanji(meta) => {
            if let Some(level) = &meta.jlpt_level {
                parts.push(match JlptLevel::parse(level) {
                    Some(jlpt) => jlpt.badge(),
                    None => format!("JLPT: {level}"),
                });
            }
            meta.stroke_count
        }
        OutputMeta::Hanzi(meta) => {
            if let Some(level) = &meta.hsk_level {
                parts.push(match HskLevel::parse(level) {
                    Some(hsk) => hsk.badge(),
                    None => format!("HSK: {level}"),
                });
            }
            meta.stroke_count
        }
    };

    if let Some(count) = strokes.filter(|c| *c > 0) {
        parts.push(format!("{count} strokes"));
    }

    parts
}

/// Cut to `max` characters, ending in "..." when shortened
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
