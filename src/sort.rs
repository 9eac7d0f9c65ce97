//! Member Ordering
//!
//! Orders the people inside one group: by title rank, then by name,
//! with open positions always last.

use std::cmp::Ordering;

use crate::models::Person;

/// Rank for titles matching nothing in the table
pub const UNRANKED: u8 = 99;

/// Title keywords by priority; the first matching row wins.
const RANK_TABLE: &[(&[&str], u8)] = &[
    (&["CEO"], 0),
    (&["CSO", "CMO", "CFO", "PM"], 1),
    (&["PRO", "프로"], 2),
    (&["인턴", "INTERN"], 3),
];

/// Priority of a free-text title (lower sorts first)
pub fn title_rank(title: &str) -> u8 {
    let upper = title.trim().to_uppercase();
    RANK_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| upper.contains(k)))
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED)
}

/// Case-insensitive comparison; names differing only in case put the
/// lowercase spelling first, as browser collation does.
///
/// Hangul syllables are laid out in dictionary order in Unicode, so comparing
/// lowercased code points gives 가나다 order for Korean names as well.
/// Accented Latin letters are not folded and sort after `z`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare_members(a: &Person, b: &Person) -> Ordering {
    match (a.is_hiring, b.is_hiring) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => title_rank(a.title_text())
            .cmp(&title_rank(b.title_text()))
            .then_with(|| locale_cmp(a.sort_name(), b.sort_name())),
    }
}

/// Return a sorted copy of `members`. The sort is stable.
pub fn sort_members(members: &[Person]) -> Vec<Person> {
    let mut sorted = members.to_vec();
    sorted.sort_by(compare_members);
    sorted
}
