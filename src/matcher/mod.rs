//! Fuzzy matching of resale item names against ingredient names.
//!
//! Beverage-like (per-unit) categories match strictly over the whole string
//! at 95/100; everything else uses a substring-tolerant partial score at
//! 85/100. The match is a heuristic, not a guarantee — misses land in the
//! run report for a human to review.

mod types;

pub use types::IngredientMatch;

use crate::rules::Rules;

/// Whole-string similarity on a 0-100 scale.
pub fn ratio(a: &str, b: &str) -> u32 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}

/// Substring-tolerant similarity: the best whole-string ratio of the shorter
/// string against every equal-length window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_len = shorter.chars().count();
    if short_len == 0 {
        return 0;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    if long_chars.len() == short_len {
        return ratio(shorter, longer);
    }

    let mut best = 0;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        let score = ratio(shorter, &candidate);
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

/// Find the best-matching ingredient name for a resale item, or `None` when
/// nothing clears the category's threshold.
///
/// Comparison is case-insensitive. The winner is the candidate with the
/// strictly highest qualifying score; on an exact tie the first candidate
/// seen keeps the spot. Iteration order of the ingredient table is therefore
/// observable — a non-guarantee, not a contract.
pub fn match_ingredient<'a>(
    item_name: &str,
    category: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    rules: &Rules,
) -> Option<IngredientMatch> {
    let strict = rules.is_per_unit(category);
    let threshold = rules.match_threshold(category);
    let item_lower = item_name.to_lowercase();

    let mut best: Option<IngredientMatch> = None;
    let mut best_score = 0;

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();
        let score = if strict {
            ratio(&item_lower, &candidate_lower)
        } else {
            partial_ratio(&item_lower, &candidate_lower)
        };

        if score > best_score && score >= threshold {
            best_score = score;
            best = Some(IngredientMatch {
                ingredient: candidate.to_string(),
                score,
            });
        }
    }

    best
}
