//! Basename normalization into grouping keys
//!
//! Collapses naming variants such as `Track_v2`, `Track_Final` or
//! `Track_kick` onto one key so bounces, stems and sessions of the same work
//! land in the same project.
//!
//! Keys are lower-cased, so `Drop_Final` and `DROP_final` always merge. Two
//! genuinely different works that only differ in case or in a stripped
//! suffix will merge as well; the reviewing user splits them.

use super::rules::{IntakeRules, SuffixPattern, DEFAULT_FALLBACK_KEY, TOKEN_DELIMITERS};

/// Derives grouping keys from basenames using a fixed rule table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    suffixes: Vec<SuffixPattern>,
    stem_keywords: Vec<String>,
    fallback_key: String,
}

impl Normalizer {
    /// A blank fallback key in `rules` is replaced by `DEFAULT_FALLBACK_KEY`.
    pub fn new(rules: &IntakeRules) -> Self {
        let fallback_key = match rules.fallback_key.trim() {
            "" => DEFAULT_FALLBACK_KEY.to_string(),
            key => key.to_lowercase(),
        };

        Self {
            suffixes: rules.suffix_patterns.iter().map(SuffixPattern::to_lowercase).collect(),
            stem_keywords: rules.stem_keywords.iter().map(|k| k.to_lowercase()).collect(),
            fallback_key,
        }
    }

    /// Compute the grouping key for `basename`.
    ///
    /// Suffix patterns, then stem keywords, are each tried once in table
    /// order against the end of the current value.
    pub fn group_key(&self, basename: &str) -> String {
        let lowered = basename.to_lowercase();
        let mut key = lowered.as_str();

        for pattern in &self.suffixes {
            if let Some(rest) = pattern.strip(key) {
                key = rest;
            }
        }

        for keyword in &self.stem_keywords {
            if let Some(rest) = strip_trailing_token(key, keyword) {
                key = rest;
            }
        }

        let key = key.trim_matches(|c: char| c.is_whitespace() || c == '_' || c == '-');
        if key.is_empty() {
            self.fallback_key.clone()
        } else {
            key.to_string()
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&IntakeRules::default())
    }
}

/// Strip `keyword` when it ends `value` as its own delimited token.
fn strip_trailing_token<'a>(value: &'a str, keyword: &str) -> Option<&'a str> {
    value
        .strip_suffix(keyword)?
        .strip_suffix(|c: char| TOKEN_DELIMITERS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Midnight_Dreams", "midnight_dreams" ; "plain")]
    #[test_case("random_loop_v2", "random_loop" ; "version number")]
    #[test_case("Track-v10", "track" ; "dash version")]
    #[test_case("Track_version3", "track" ; "long version")]
    #[test_case("Drop_Final", "drop" ; "final")]
    #[test_case("drop_final", "drop" ; "final lower")]
    #[test_case("Anthem_MASTER", "anthem" ; "case insensitive suffix")]
    #[test_case("Anthem_Instrumental", "anthem" ; "instrumental before inst")]
    #[test_case("Anthem_inst", "anthem" ; "inst")]
    #[test_case("Anthem_Radio", "anthem" ; "radio")]
    #[test_case("Midnight_Dreams_kick", "midnight_dreams" ; "stem keyword")]
    #[test_case("Midnight Dreams kick", "midnight dreams" ; "space delimited keyword")]
    #[test_case("Midnight-Dreams-808", "midnight-dreams" ; "dash delimited keyword")]
    #[test_case("Groove_HiHat", "groove" ; "hihat not hat")]
    #[test_case("Groove_drums", "groove" ; "plural drums")]
    #[test_case("Groove_sfx", "groove" ; "sfx")]
    #[test_case("Groove_kick_v2", "groove" ; "suffix then keyword")]
    #[test_case("Groove_bass_kick", "groove" ; "keywords in table order")]
    #[test_case("Groove_kick_bass", "groove_kick" ; "single ordered pass")]
    #[test_case("Bassline", "bassline" ; "keyword inside word")]
    #[test_case("kick", "kick" ; "undelimited keyword kept")]
    #[test_case("  __Hook-- ", "hook" ; "trims delimiters and whitespace")]
    fn test_group_key(basename: &str, expected: &str) {
        assert_eq!(Normalizer::default().group_key(basename), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("_kick" ; "only a keyword")]
    #[test_case("_final" ; "only a suffix")]
    #[test_case("__--" ; "only delimiters")]
    fn test_fallback_key(basename: &str) {
        assert_eq!(Normalizer::default().group_key(basename), "untitled");
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_blank_fallback_uses_default(fallback_key: &str) {
        let rules = IntakeRules {
            fallback_key: fallback_key.to_string(),
            ..IntakeRules::default()
        };
        assert_eq!(Normalizer::new(&rules).group_key("_kick"), DEFAULT_FALLBACK_KEY);
    }

    #[test]
    fn test_custom_rules() {
        let rules = IntakeRules {
            suffix_patterns: vec![SuffixPattern::literal("_WIP")],
            stem_keywords: vec!["cowbell".to_string()],
            fallback_key: "Unsorted".to_string(),
            ..IntakeRules::default()
        };
        let normalizer = Normalizer::new(&rules);

        assert_eq!(normalizer.group_key("Song_cowbell_wip"), "song");
        assert_eq!(normalizer.group_key("Song_final"), "song_final");
        assert_eq!(normalizer.group_key("_cowbell"), "unsorted");
    }
}
