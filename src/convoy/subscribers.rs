/// A recognized subscriber metadata line format.
struct SubscriberFormat {
    prefix: &'static str,
    deprecated: bool,
}

/// Formats in priority order: the current `Subscribers:` form is always
/// tried first, the deprecated `Notify:` form only exists so descriptions
/// written before the rename keep reading correctly until rewritten.
const SUBSCRIBER_FORMATS: [SubscriberFormat; 2] = [
    SubscriberFormat {
        prefix: "Subscribers:",
        deprecated: false,
    },
    SubscriberFormat {
        prefix: "Notify:",
        deprecated: true,
    },
];

const CURRENT_PREFIX: &str = "Subscribers:";

/// Find the authoritative metadata line among the description's lines.
/// Formats are tried in priority order; within a format only the first
/// matching line counts. Returns the line index, the matched format, and
/// the payload after the prefix.
fn find_metadata_line<'a>(
    lines: &[&'a str],
) -> Option<(usize, &'static SubscriberFormat, &'a str)> {
    for format in &SUBSCRIBER_FORMATS {
        for (index, line) in lines.iter().enumerate() {
            if let Some(payload) = line.trim().strip_prefix(format.prefix) {
                return Some((index, format, payload));
            }
        }
    }
    None
}

/// Split a metadata payload into trimmed subscriber tokens.
/// Tokens that trim to nothing are dropped, so a blank payload yields an
/// empty list rather than a single empty token.
fn split_payload(payload: &str) -> Vec<String> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Extract the subscriber list from a convoy description.
/// Returns an empty list when no metadata line is present or its payload
/// is blank. Never fails; malformed lines are simply not recognized.
pub fn extract_subscribers(description: &str) -> Vec<String> {
    let lines: Vec<&str> = description.split('\n').collect();
    match find_metadata_line(&lines) {
        Some((_, _, payload)) => split_payload(payload),
        None => Vec::new(),
    }
}

/// Rewrite the description so its metadata line holds exactly `subscribers`,
/// always in the current `Subscribers:` format. An existing metadata line
/// (current or deprecated) is replaced in place; when none exists the new
/// line is appended. Every other line is preserved verbatim. Tokens are
/// joined as given: no re-trimming, no dedup, no sorting.
pub fn update_subscribers(description: &str, subscribers: &[String]) -> String {
    let rendered = format!("{} {}", CURRENT_PREFIX, subscribers.join(", "));
    let mut lines: Vec<&str> = description.split('\n').collect();

    if let Some((index, _, _)) = find_metadata_line(&lines) {
        lines[index] = &rendered;
        return lines.join("\n");
    }

    if description.is_empty() {
        rendered
    } else {
        format!("{}\n{}", description, rendered)
    }
}

/// Whether the metadata line the scan would read is still in a deprecated
/// format. Used to warn that the next update will rewrite it.
pub fn has_deprecated_line(description: &str) -> bool {
    let lines: Vec<&str> = description.split('\n').collect();
    matches!(find_metadata_line(&lines), Some((_, format, _)) if format.deprecated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_extract_single_subscriber() {
        let desc = "Convoy tracking 2 issues\nSubscribers: mayor/";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/"]));
    }

    #[test]
    fn test_extract_multiple_subscribers() {
        let desc = "Convoy tracking 2 issues\nSubscribers: mayor/, deacon/, human@email.com";
        assert_eq!(
            extract_subscribers(desc),
            subs(&["mayor/", "deacon/", "human@email.com"])
        );
    }

    #[test]
    fn test_extract_legacy_notify_format() {
        let desc = "Convoy tracking 2 issues\nNotify: mayor/";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/"]));
    }

    #[test]
    fn test_extract_no_metadata_line() {
        let desc = "Convoy tracking 2 issues\nMolecule: mol-123";
        assert!(extract_subscribers(desc).is_empty());
    }

    #[test]
    fn test_extract_empty_payload() {
        let desc = "Convoy tracking 2 issues\nSubscribers: ";
        assert!(extract_subscribers(desc).is_empty());
    }

    #[test]
    fn test_extract_trims_extra_whitespace() {
        let desc = "Convoy tracking 2 issues\nSubscribers:  mayor/ ,  deacon/  ";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/", "deacon/"]));
    }

    #[test]
    fn test_extract_stops_at_metadata_line() {
        let desc = "Convoy tracking 2 issues\nSubscribers: mayor/\nMolecule: mol-123";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/"]));
    }

    #[test]
    fn test_extract_drops_blank_tokens() {
        let desc = "Subscribers: mayor/, , deacon/,";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/", "deacon/"]));
    }

    #[test]
    fn test_extract_empty_description() {
        assert!(extract_subscribers("").is_empty());
    }

    #[test]
    fn test_update_appends_when_absent() {
        let got = update_subscribers("Convoy tracking 2 issues", &subs(&["mayor/"]));
        assert_eq!(got, "Convoy tracking 2 issues\nSubscribers: mayor/");
    }

    #[test]
    fn test_update_appends_multiple() {
        let got = update_subscribers("Convoy tracking 2 issues", &subs(&["mayor/", "deacon/"]));
        assert!(got.contains("Subscribers: mayor/, deacon/"));
    }

    #[test]
    fn test_update_replaces_existing_line() {
        let desc = "Convoy tracking 2 issues\nSubscribers: old@example.com";
        let got = update_subscribers(desc, &subs(&["new@example.com"]));
        assert_eq!(got, "Convoy tracking 2 issues\nSubscribers: new@example.com");
        assert!(!got.contains("old@example.com"));
    }

    #[test]
    fn test_update_migrates_legacy_notify() {
        let desc = "Convoy tracking 2 issues\nNotify: mayor/";
        let got = update_subscribers(desc, &subs(&["mayor/", "deacon/"]));
        assert!(got.contains("Subscribers: mayor/, deacon/"));
        assert!(!got.contains("Notify:"));
    }

    #[test]
    fn test_update_preserves_surrounding_lines() {
        let desc = "Convoy tracking 2 issues\nNotify: mayor/\nMolecule: mol-123";
        let got = update_subscribers(desc, &subs(&["deacon/"]));
        assert_eq!(
            got,
            "Convoy tracking 2 issues\nSubscribers: deacon/\nMolecule: mol-123"
        );
    }

    #[test]
    fn test_update_preserves_trailing_newline() {
        let desc = "Convoy tracking 2 issues\nSubscribers: mayor/\n";
        let got = update_subscribers(desc, &subs(&["deacon/"]));
        assert_eq!(got, "Convoy tracking 2 issues\nSubscribers: deacon/\n");
    }

    #[test]
    fn test_update_empty_description() {
        let got = update_subscribers("", &subs(&["mayor/"]));
        assert_eq!(got, "Subscribers: mayor/");
    }

    #[test]
    fn test_update_empty_list_keeps_line() {
        let desc = "Convoy tracking 2 issues\nSubscribers: mayor/";
        let got = update_subscribers(desc, &[]);
        assert_eq!(got, "Convoy tracking 2 issues\nSubscribers: ");
        assert!(extract_subscribers(&got).is_empty());
    }

    #[test]
    fn test_update_is_idempotent() {
        let desc = "Convoy tracking 2 issues\nNotify: mayor/";
        let list = subs(&["mayor/", "deacon/"]);
        let once = update_subscribers(desc, &list);
        let twice = update_subscribers(&once, &list);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_then_extract_round_trips() {
        let desc = "Convoy tracking 2 issues\nMolecule: mol-123";
        let list = subs(&["mayor/", "deacon/", "human@email.com"]);
        let updated = update_subscribers(desc, &list);
        assert_eq!(extract_subscribers(&updated), list);
    }

    #[test]
    fn test_both_formats_current_wins() {
        // Duplicates are out of contract; the current format stays
        // authoritative for read and replace.
        let desc = "Subscribers: mayor/\nNotify: deacon/";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/"]));
        let got = update_subscribers(desc, &subs(&["crew/"]));
        assert_eq!(got, "Subscribers: crew/\nNotify: deacon/");
    }

    #[test]
    fn test_metadata_line_indented() {
        let desc = "Convoy tracking 2 issues\n  Subscribers: mayor/";
        assert_eq!(extract_subscribers(desc), subs(&["mayor/"]));
    }

    #[test]
    fn test_has_deprecated_line() {
        assert!(has_deprecated_line("Notify: mayor/"));
        assert!(!has_deprecated_line("Subscribers: mayor/"));
        assert!(!has_deprecated_line("Molecule: mol-123"));
        // Current format shadows a stray deprecated line.
        assert!(!has_deprecated_line("Subscribers: mayor/\nNotify: deacon/"));
    }
}
