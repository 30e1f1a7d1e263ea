use std::collections::HashSet;

/// Derive a post title from its markdown text.
///
/// Only the first non-blank line is considered: if it starts with `"# "` the
/// trimmed remainder is the title (or `fallback` when that remainder is
/// empty). Any other non-blank first line means the document has no title
/// heading and the fallback is used. Blank leading lines are skipped.
pub fn extract_title(markdown: &str, fallback: &str) -> String {
    for line in markdown.lines() {
        let stripped = line.trim();
        if let Some(rest) = stripped.strip_prefix("# ") {
            let title = rest.trim();
            return if title.is_empty() { fallback.to_string() } else { title.to_string() };
        }
        if !stripped.is_empty() {
            break;
        }
    }
    fallback.to_string()
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract hashtags from markdown text.
///
/// A tag is `#` followed by one or more word characters (ASCII alphanumeric
/// or underscore), optionally extended by `-word` groups. The character
/// before the `#`, if any, must not be a word character, so `a#notatag` does
/// not match while `(#bar` does. Matches are lowercased and deduplicated in
/// first-occurrence order.
pub fn extract_tags(markdown: &str) -> Vec<String> {
    let chars: Vec<char> = markdown.chars().collect();
    let mut tags = Vec::new();
    let mut seen = HashSet::new();

    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '#' || (i > 0 && is_word(chars[i - 1])) {
            i += 1;
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while end < chars.len() && is_word(chars[end]) {
            end += 1;
        }
        if end == start {
            i += 1;
            continue;
        }

        // Extend over "-word" groups; a dash without a following word
        // character ends the tag
        while end < chars.len() && chars[end] == '-' {
            let group_start = end + 1;
            let mut group_end = group_start;
            while group_end < chars.len() && is_word(chars[group_end]) {
                group_end += 1;
            }
            if group_end == group_start {
                break;
            }
            end = group_end;
        }

        let tag: String = chars[start..end].iter().collect::<String>().to_lowercase();
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
        i = end;
    }

    tags
}
