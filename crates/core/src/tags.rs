//! Tag-string parsing.
//!
//! Edit forms store tag collections as a single comma-delimited string; on
//! save it becomes a set-like ordered list of non-empty strings.

/// Split a comma-delimited tag string into a trimmed, de-duplicated list.
///
/// Order of first occurrence is preserved; empty segments are dropped.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for segment in input.split(',') {
        let tag = segment.trim();
        if !tag.is_empty() && !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Render a tag list back into the single-string form used by edit forms.
pub fn format_tag_list(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_trims() {
        assert_eq!(
            parse_tag_list(" code , dev,  bureau "),
            vec!["code", "dev", "bureau"]
        );
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(parse_tag_list("a,,b, ,c,"), vec!["a", "b", "c"]);
        assert_eq!(parse_tag_list(""), Vec::<String>::new());
        assert_eq!(parse_tag_list(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn deduplicates_preserving_first_occurrence() {
        assert_eq!(parse_tag_list("dev, code, dev, code"), vec!["dev", "code"]);
    }

    #[test]
    fn format_then_parse_round_trips() {
        let tags = vec!["code".to_string(), "dev".to_string()];
        assert_eq!(parse_tag_list(&format_tag_list(&tags)), tags);
    }
}
