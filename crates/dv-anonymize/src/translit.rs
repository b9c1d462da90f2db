//! Transliteration to lower-case, diacritic-free Latin text.
//!
//! Matching happens on the transliterated form only; the original text is
//! never modified here. The function expects NFD input (see
//! [`crate::normalize`]): diacritics arrive as combining marks and are
//! dropped as zero-width output, Cyrillic goes through a fixed romanization
//! table, and anything unrecognized passes through unchanged so offsets
//! never become undefined. Script-agnostic by construction.
//!
//! Dictionary entries are folded through this same function, so the engine
//! contract is internal consistency, not conformance to any external
//! romanization standard.

use unicode_normalization::char::is_combining_mark;

use crate::error::{AnonymizeError, Result};
use crate::offset_map::{OffsetMap, OffsetMapBuilder};

/// Transliterate NFD-normalized text, producing the folded text and the
/// offset map anchored at every source character boundary.
pub fn transliterate(text: &str) -> Result<(String, OffsetMap)> {
    let mut out = String::with_capacity(text.len());
    let mut builder = OffsetMapBuilder::new();

    for (idx, ch) in text.char_indices() {
        builder.anchor(idx, out.len());
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if is_combining_mark(lower) {
                continue;
            }
            match latin_fold(lower) {
                Some(folded) => out.push_str(folded),
                None => out.push(lower),
            }
        }
    }

    let map = builder
        .finish(text.len(), out.len())
        .map_err(AnonymizeError::Transliteration)?;
    Ok((out, map))
}

/// Table lookup for characters that do not decompose under NFD.
/// `None` means "keep the character as-is" (covers ASCII and unknown
/// scripts alike).
fn latin_fold(c: char) -> Option<&'static str> {
    let folded = match c {
        // Latin letters with no canonical decomposition
        'ł' => "l",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' => "d",
        'ð' => "d",
        'þ' => "th",
        'ı' => "i",
        // Cyrillic (Ukrainian national romanization, Russian extras).
        // Iotated letters like й/ї/ё decompose under NFD and reach this
        // table as their base letter plus a combining mark.
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'є' => "ie",
        'ж' => "zh",
        'з' => "z",
        'и' => "y",
        'і' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ю' => "iu",
        'я' => "ia",
        'ь' => "",
        'ъ' => "",
        'ы' => "y",
        'э' => "e",
        _ => return None,
    };
    Some(folded)
}
