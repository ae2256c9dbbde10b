//! Locale-aware ordering of item names.
//!
//! Names are compared the way the root collation orders Latin text:
//!
//! 1. **primary**: letters without case or diacritics (`Éclair` ~ `eclair`)
//! 2. **secondary**: unaccented before accented
//! 3. **tertiary**: lowercase before uppercase
//!
//! Keys are built from the canonical decomposition (NFD), so precomposed and
//! decomposed spellings of a name land in the same place. A final code-point
//! comparison keeps the order total, so only identical strings compare equal.

use core::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two item names for display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (SortKey::new(a), SortKey::new(b));
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.accents.cmp(&kb.accents))
        .then_with(|| ka.cases.cmp(&kb.cases))
        .then_with(|| a.cmp(b))
}

/// Per-level keys, one entry per base character.
#[derive(Debug, Default)]
struct SortKey {
    primary: Vec<char>,
    /// Whether the base character carried combining marks.
    accents: Vec<bool>,
    cases: Vec<bool>,
}

impl SortKey {
    fn new(s: &str) -> Self {
        let mut key = Self::default();
        for c in s.nfd() {
            if is_combining_mark(c) {
                if let Some(last) = key.accents.last_mut() {
                    *last = true;
                }
                continue;
            }
            let upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                key.primary.push(lower);
                key.accents.push(false);
                key.cases.push(upper);
            }
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_names(a, b));
        v
    }

    #[test]
    fn case_does_not_dominate_order() {
        assert_eq!(sorted(&["banana", "Apple", "cherry"]), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn accented_letters_sort_with_their_base() {
        assert_eq!(
            sorted(&["pera", "Ñame", "manzana", "azúcar", "Arroz"]),
            ["Arroz", "azúcar", "manzana", "Ñame", "pera"]
        );
    }

    #[test]
    fn decomposed_names_sort_by_base_letters() {
        assert_eq!(compare_names("e\u{301}clair", "eclat"), Ordering::Less);
        assert_eq!(compare_names("eclat", "E\u{301}clair"), Ordering::Greater);
        assert_eq!(
            sorted(&["zanahoria", "n\u{303}ame", "Ñandú", "nabo"]),
            ["nabo", "n\u{303}ame", "Ñandú", "zanahoria"]
        );
    }

    #[test]
    fn marks_outside_latin_1_still_fold() {
        // ő, ș and ŷ carry marks but decompose like any other accented letter.
        assert_eq!(compare_names("őr", "os"), Ordering::Less);
        assert_eq!(compare_names("șa", "sb"), Ordering::Less);
        assert_eq!(compare_names("ŷa", "yb"), Ordering::Less);
    }

    #[test]
    fn precomposed_and_decomposed_tie_until_code_points() {
        let nfc = "caf\u{e9}";
        let nfd = "cafe\u{301}";
        assert_eq!(compare_names(nfc, "cafe"), Ordering::Greater);
        assert_eq!(compare_names(nfd, "cafe"), Ordering::Greater);
        assert_eq!(compare_names(nfc, "cafés"), Ordering::Less);
        assert_eq!(compare_names(nfd, "cafés"), Ordering::Less);
    }

    #[test]
    fn ties_broken_by_accent_then_case() {
        assert_eq!(sorted(&["Te", "té", "te"]), ["te", "Te", "té"]);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("Leche", "Leche"), Ordering::Equal);
        assert_ne!(compare_names("Leche", "leche"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Pan", "Pan integral"), Ordering::Less);
        assert_eq!(compare_names("", "a"), Ordering::Less);
    }
}
