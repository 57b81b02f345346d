//! Legacy cabin category migration.
//!
//! Older cabin records carry no category field; their pricing tier was
//! recognised from a fragment of the display name. This module resolves
//! those records once, during migration. Pricing and availability never
//! call it and only ever accept a resolved [`CabinCategory`].

use tracing::warn;

use crate::models::CabinCategory;

/// The Unicode "Combining Diacritical Marks" block.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Guesses a legacy cabin's category from its display name.
///
/// Matching is a case- and accent-insensitive substring search for each
/// alias. Returns `None` when no alias matches, or when aliases of more
/// than one category match.
///
/// # Example
///
/// ```
/// use cabin_pricing::migration::infer_category;
/// use cabin_pricing::models::CabinCategory;
///
/// let aliases = vec![
///     ("tortuga".to_string(), CabinCategory::Flat),
///     ("delfin".to_string(), CabinCategory::TieredA),
/// ];
/// assert_eq!(
///     infer_category("Cabaña Delfín 2", &aliases),
///     Some(CabinCategory::TieredA)
/// );
/// assert_eq!(infer_category("Casa Grande", &aliases), None);
/// ```
pub fn infer_category(
    display_name: &str,
    aliases: &[(String, CabinCategory)],
) -> Option<CabinCategory> {
    let name = fold(display_name);

    let mut matched: Vec<CabinCategory> = aliases
        .iter()
        .filter(|(alias, _)| !alias.trim().is_empty() && name.contains(&fold(alias)))
        .map(|(_, category)| *category)
        .collect();
    matched.sort();
    matched.dedup();

    match matched.as_slice() {
        [category] => Some(*category),
        [] => None,
        _ => {
            warn!(
                display_name,
                candidates = ?matched,
                "Cabin name matches more than one category"
            );
            None
        }
    }
}

/// Lowercases and strips the Spanish diacritics used in cabin names.
///
/// Both precomposed letters (`í`) and decomposed ones (`i` followed by a
/// combining acute accent) fold to the bare letter.
fn fold(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
