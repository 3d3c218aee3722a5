//! Display titles from grouping keys

/// Turn a grouping key into a display title.
///
/// `"midnight_dreams"` becomes `"Midnight Dreams"`. Runs of `_`/`-`
/// collapse to a single space.
pub fn humanize_title(group_key: &str) -> String {
    group_key
        .split(|c: char| c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(&chars.as_str().to_lowercase());
    capitalized
}
