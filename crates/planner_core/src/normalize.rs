//! Ingredient text normalization.
//!
//! # Responsibility
//! - Reduce raw ingredient lines (recipe imports, user input) to a canonical
//!   lookup key used for classification and de-duplication.
//! - Signal unusable lines by returning an empty string.
//!
//! # Invariants
//! - `normalize` is pure and deterministic.
//! - `normalize(normalize(x)) == normalize(x)` for every input.
//! - An empty return value means "skip this entry", never a valid item name.

use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n+\s*").expect("newline pattern is valid"));
static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[▢•\-–—]\s*").expect("bullet pattern is valid"));
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.*?\)").expect("parenthetical pattern is valid"));
/// Leading count plus an optional unit or size token. The token set is a
/// closed whitelist so a lone ingredient word after a number ("3 carrots")
/// is never consumed as a unit.
static LEADING_QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*\d+([./]\d+)?\s*",
        r"(?:(?:large|medium|small|lbs?|kgs?|cups?|tbsps?|tsps?|tins?|cans?|packs?|ml|oz|g|l|x)\b",
        r"|[%½¼¾⅓⅔⁄])?\s*",
    ))
    .expect("quantity pattern is valid")
});
static DISCARD_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(sauce|optional|garnish|for )").expect("prefix pattern is valid"));
static TRAILING_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.:;]+$").expect("punctuation pattern is valid"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Fixed singularization set applied with word boundaries.
static PLURAL_FORMS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("tomatoes?", "tomato"),
        ("cucumbers?", "cucumber"),
        ("cloves?", "clove"),
    ]
    .iter()
    .map(|(pattern, singular)| {
        (
            Regex::new(&format!(r"\b{pattern}\b")).expect("plural pattern is valid"),
            *singular,
        )
    })
    .collect()
});

/// Cleans one raw ingredient line into a canonical lookup key.
///
/// Pipeline, in order: lowercase, flatten newlines, strip leading bullet
/// glyphs, drop parenthetical notes, strip a leading quantity plus an
/// optional whitelisted unit or size token, keep only the text before the
/// first comma, discard lines that start with a non-ingredient prefix
/// (`sauce`, `optional`, `garnish`, `for `), strip trailing punctuation,
/// singularize a small fixed set, collapse whitespace runs, trim.
///
/// # Contract
/// - Returns an empty string for any input that reduces to nothing usable.
/// - Bullet and quantity stripping run to a fixed point so the function is
///   idempotent even for stacked prefixes like `"2 2 apples"`.
/// - The word after a number survives unless it is a known unit or size
///   token: `"3 carrots"` keeps `"carrots"`, `"1/2 lb chicken"` keeps
///   `"chicken"`.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    text = NEWLINE_RUNS.replace_all(&text, " ").into_owned();
    text = strip_to_fixed_point(&LEADING_BULLET, text);
    text = PARENTHETICAL.replace_all(&text, "").into_owned();
    text = strip_to_fixed_point(&LEADING_QUANTITY, text);
    text = text.split(',').next().unwrap_or_default().to_string();

    let trimmed = text.trim();
    if DISCARD_PREFIX.is_match(trimmed) {
        return String::new();
    }

    let mut text = TRAILING_PUNCT.replace(trimmed, "").into_owned();
    for (pattern, singular) in PLURAL_FORMS.iter() {
        text = pattern.replace_all(&text, *singular).into_owned();
    }
    text = WHITESPACE_RUNS.replace_all(&text, " ").into_owned();
    text.trim().to_string()
}

fn strip_to_fixed_point(pattern: &Regex, mut text: String) -> String {
    loop {
        let stripped = pattern.replace(&text, "");
        if stripped == text {
            return text;
        }
        text = stripped.into_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_quantity_and_parenthetical() {
        assert_eq!(normalize("2 large tomatoes (optional)"), "tomato");
    }

    #[test]
    fn truncates_at_first_comma() {
        assert_eq!(normalize("  Tinned Tuna, drained"), "tinned tuna");
    }

    #[test]
    fn discards_non_ingredient_prefixes() {
        assert_eq!(normalize("for the garnish"), "");
        assert_eq!(normalize("optional: chilli flakes"), "");
    }
}
