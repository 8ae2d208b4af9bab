//! Per-string locale fallback for the bundled display tables.

/// Base locale every table entry is guaranteed to carry.
pub const BASE_LOCALE: &str = "en";

/// A single localized string: `(locale code, text)` pairs.
pub type Translations = &'static [(&'static str, &'static str)];

/// Resolve `locale` against one entry.
///
/// Tries the exact code, then its base language (`es-MX` -> `es`), then
/// [`BASE_LOCALE`]. Returns `None` only if the entry has no base text.
pub fn localize(entry: Translations, locale: &str) -> Option<&'static str> {
    let exact = locale.trim().to_ascii_lowercase().replace('_', "-");
    let language = exact.split('-').next().unwrap_or_default();

    [exact.as_str(), language, BASE_LOCALE]
        .into_iter()
        .filter(|code| !code.is_empty())
        .find_map(|code| {
            entry
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, text)| *text)
        })
}
