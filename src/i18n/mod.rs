//! Localized labeling for report fields and section titles.
//!
//! The computation layer knows fields by identifier only; a [`Locale`]
//! turns identifiers into display labels. Swapping the locale never touches
//! computation logic.

pub mod ru;

pub use ru::RuLocale;

/// Identifiers for the fixed set of report sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionTitle {
    ProfitAtMarketingPrice,
    ProfitAtMinPrice,
    MainFields,
    Commissions,
    Price,
    PriceIndexes,
    ExternalIndex,
    OzonIndex,
    SelfMarketplacesIndex,
    MarketingActions,
}

/// A label table plus the handful of fixed display tokens a report needs.
///
/// `label` must resolve every field identifier: unknown identifiers fall
/// back to [`fallback_label`], which only formats and never rejects.
pub trait Locale: Sync {
    /// Display label for a field identifier.
    fn label(&self, field: &str) -> String {
        fallback_label(field)
    }

    /// Title for one of the report sections.
    fn section_title(&self, section: SectionTitle) -> String;

    /// Token for boolean `true`.
    fn yes(&self) -> &str;

    /// Token for boolean `false`.
    fn no(&self) -> &str;

    /// Token shown for absent values.
    fn placeholder(&self) -> &str;

    /// Summary line for the number of active promotions.
    fn actions_count(&self, count: usize) -> String;

    /// Row label for the promotion with the given 1-based ordinal.
    fn action_label(&self, ordinal: usize) -> String;
}

/// Domain acronyms and unit codes kept upper-case in generated labels.
const ABBREVIATIONS: &[&str] = &["fbo", "fbs", "api", "id", "vat", "url"];

/// Generates a readable label from a snake_case field identifier.
///
/// Words are title-cased, known abbreviations upper-cased. Formatting only;
/// any input yields some label.
pub fn fallback_label(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
                word.to_uppercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
