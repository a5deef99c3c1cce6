//! Hashtag and tag generation from a video title.

/// Hard cap on generated hashtags.
const MAX_HASHTAGS: usize = 5;
/// Hard cap on generated tags.
const MAX_TAGS: usize = 12;

/// Keyword candidates: words longer than 3 characters from the
/// lowercased title, in order of appearance.
fn long_words(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(String::from)
        .collect()
}

fn push_unique(out: &mut Vec<String>, tag: String) {
    if !tag.is_empty() && !out.contains(&tag) {
        out.push(tag);
    }
}

/// Up to five hashtags derived from the title plus evergreen fillers.
pub fn hashtag_suggestions(title: &str) -> Vec<String> {
    let words = long_words(title);
    let mut out = Vec::new();

    let joined: String = words.iter().take(2).map(String::as_str).collect();
    if !joined.is_empty() {
        out.push(format!("#{}", joined));
    }
    out.push("#Tutorial".to_string());
    out.push("#HowTo".to_string());
    out.push("#2026".to_string());
    if let Some(first) = words.first() {
        out.push(format!("#{}", first));
    }

    out.truncate(MAX_HASHTAGS);
    out
}

/// Up to twelve tags: the title itself, its keywords, and boilerplate
/// discovery terms. Set semantics with first-occurrence order.
pub fn tag_suggestions(title: &str) -> Vec<String> {
    let words = long_words(title);
    let mut out: Vec<String> = Vec::new();

    push_unique(&mut out, title.to_lowercase());
    for word in words.iter().take(5) {
        push_unique(&mut out, word.clone());
    }
    for boilerplate in ["tutorial", "how to", "guide", "2026"] {
        push_unique(&mut out, boilerplate.to_string());
    }
    if let Some(first) = words.first() {
        push_unique(&mut out, format!("{} tutorial", first));
        push_unique(&mut out, format!("{} guide", first));
    }

    out.truncate(MAX_TAGS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_derive_from_title_words() {
        let tags = hashtag_suggestions("Learn Rust Programming Fast");
        assert_eq!(tags[0], "#learnrust");
        assert!(tags.contains(&"#Tutorial".to_string()));
        assert!(tags.contains(&"#2026".to_string()));
        assert!(tags.len() <= 5);
    }

    #[test]
    fn hashtags_skip_short_words() {
        // "my" and "to" are too short to count as keywords
        let tags = hashtag_suggestions("my trip to Japan");
        assert_eq!(tags[0], "#tripjapan");
    }

    #[test]
    fn hashtags_from_empty_title_are_fillers_only() {
        let tags = hashtag_suggestions("");
        assert_eq!(tags, vec!["#Tutorial", "#HowTo", "#2026"]);
    }

    #[test]
    fn hashtags_never_exceed_five() {
        let tags = hashtag_suggestions("alpha bravo charlie delta echo foxtrot golf");
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn tags_start_with_lowercased_title() {
        let tags = tag_suggestions("Learn Rust Fast");
        assert_eq!(tags[0], "learn rust fast");
        assert!(tags.contains(&"learn tutorial".to_string()));
        assert!(tags.contains(&"learn guide".to_string()));
    }

    #[test]
    fn tags_are_unique_and_bounded() {
        let tags = tag_suggestions("tutorial tutorial tutorial guide guide");
        let mut deduped = tags.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tags.len(), "duplicates in {tags:?}");
        assert!(tags.len() <= 12);
    }

    #[test]
    fn tags_dedupe_boilerplate_collisions() {
        // "guide" appears both as a title keyword and as boilerplate
        let tags = tag_suggestions("The Complete Guide");
        let count = tags.iter().filter(|t| t.as_str() == "guide").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn tags_from_empty_title() {
        let tags = tag_suggestions("");
        assert_eq!(tags, vec!["tutorial", "how to", "guide", "2026"]);
    }
}
