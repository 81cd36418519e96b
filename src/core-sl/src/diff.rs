//! URL set diffing against a previous snapshot.

use std::collections::HashSet;

/// Returns every URL in `current` that is absent from `previous`.
///
/// Membership is exact string equality; no normalization of trailing slashes,
/// query strings, or case. The order of `current` is preserved.
///
/// # Examples
///
/// ```
/// # use core_sl::find_new_urls;
/// let current = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let previous = vec!["a".to_string()];
/// assert_eq!(find_new_urls(&current, &previous), vec!["b", "c"]);
/// ```
pub fn find_new_urls(current: &[String], previous: &[String]) -> Vec<String> {
    let previous_set: HashSet<&str> = previous.iter().map(String::as_str).collect();
    current
        .iter()
        .filter(|url| !previous_set.contains(url.as_str()))
        .cloned()
        .collect()
}
