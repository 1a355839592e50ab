//! Ordering of parsed files by effective path.

use super::model::ParsedFile;
use std::cmp::Ordering;

/// Stable-sort files by effective path using [`locale_cmp`].
///
/// Files with an empty effective path have nothing to compare on, so they
/// keep their original positions and the others are sorted around them.
pub fn sort_files(files: Vec<ParsedFile>) -> Vec<ParsedFile> {
    let fixed_slots: Vec<bool> = files
        .iter()
        .map(|file| file.effective_path().is_empty())
        .collect();
    let (mut sortable, fixed): (Vec<_>, Vec<_>) = files
        .into_iter()
        .partition(|file| !file.effective_path().is_empty());

    sortable.sort_by(|a, b| locale_cmp(a.effective_path(), b.effective_path()));

    let mut sortable = sortable.into_iter();
    let mut fixed = fixed.into_iter();
    fixed_slots
        .into_iter()
        .filter_map(|is_fixed| {
            if is_fixed {
                fixed.next()
            } else {
                sortable.next()
            }
        })
        .collect()
}

/// Compare strings roughly the way a root-locale collator does.
///
/// Primary order ignores case and ranks whitespace and punctuation before
/// digits before letters, with punctuation in collation-table order rather
/// than code point order. Ties are broken lowercase-first, then by code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key));

    primary
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
        .then_with(|| a.cmp(b))
}

/// ASCII whitespace, punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "\t\n\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn primary_key(c: char) -> (u8, u32) {
    if c.is_alphabetic() {
        (2, c.to_lowercase().next().unwrap_or(c) as u32)
    } else if c.is_numeric() {
        (1, c as u32)
    } else {
        (0, punctuation_rank(c))
    }
}

fn punctuation_rank(c: char) -> u32 {
    match PUNCTUATION_ORDER.find(c) {
        Some(idx) => idx as u32,
        None => PUNCTUATION_ORDER.len() as u32 + c as u32,
    }
}

fn case_key(c: char) -> bool {
    c.is_uppercase()
}
