/// "Did you mean" lookup for unknown option tokens.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::registry::MARKER;

/// Pick the registered name that best fuzzy-matches `token`.
///
/// Scores both directions (the token as a pattern over the name, and the name
/// over the token) so that truncated and over-long spellings both resolve.
/// Ties go to the lexicographically smaller name. `None` when nothing matches
/// or the token is only marker characters (a bare `-` matches every name).
pub(crate) fn closest_name<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    token: &str,
) -> Option<&'a str> {
    if token.trim_start_matches(MARKER).is_empty() {
        return None;
    }
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
    let typed = Pattern::parse(token, CaseMatching::Smart, Normalization::Smart);

    let mut best: Option<(&'a str, u32)> = None;
    for name in candidates {
        let mut buf = Vec::new();
        let forward = typed.score(Utf32Str::new(name, &mut buf), &mut matcher);

        let mut buf = Vec::new();
        let backward = Pattern::parse(name, CaseMatching::Smart, Normalization::Smart)
            .score(Utf32Str::new(token, &mut buf), &mut matcher);

        let Some(score) = forward.max(backward) else {
            continue;
        };
        let better = best.is_none_or(|(best_name, best_score)| {
            score > best_score || (score == best_score && name < best_name)
        });
        if better {
            best = Some((name, score));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_of_registered_name() {
        let names = ["-verbose", "-output", "-quiet"];
        assert_eq!(closest_name(names, "-verb"), Some("-verbose"));
    }

    #[test]
    fn test_registered_name_inside_token() {
        let names = ["-verbose", "-output", "-quiet"];
        assert_eq!(closest_name(names, "-outputfile"), Some("-output"));
    }

    #[test]
    fn test_no_plausible_match() {
        let names = ["-x", "-o"];
        assert_eq!(closest_name(names, "-z"), None);
    }

    #[test]
    fn test_bare_marker_gets_no_suggestion() {
        let names = ["-o", "-x", "--"];
        assert_eq!(closest_name(names, "-"), None);
        assert_eq!(closest_name(names, "---"), None);
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(closest_name(Vec::<&str>::new(), "-z"), None);
    }
}
