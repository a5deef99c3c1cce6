//! Title rewriting helpers: casing, truncation, and alternative titles.

/// Display limit before search results cut a title off.
const TRUNCATE_AT: usize = 60;

/// Capitalize the first letter of each whitespace-delimited token and
/// lowercase the rest. Idempotent: applying it twice changes nothing.
pub fn to_title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase().next());
                    for c in chars {
                        out.extend(c.to_lowercase());
                    }
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pad a too-short title toward the 50-60 character sweet spot.
pub fn lengthen_title(title: &str) -> String {
    format!("{} - Complete Guide (Step by Step)", title)
}

/// Cut a long title so it fits in 60 characters, preferring a word
/// boundary when one is available past the halfway mark.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TRUNCATE_AT {
        return title.to_string();
    }
    let cut: String = title.chars().take(TRUNCATE_AT - 3).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > TRUNCATE_AT / 2 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end())
}

/// Three rewrites that each work a proven power word into the title.
pub fn power_word_alternatives(title: &str) -> Vec<String> {
    vec![
        format!("{} - The Complete Guide", title),
        format!("How to Get the Most Out of {}", title),
        format!("The Ultimate {} Breakdown", title),
    ]
}

/// Three rewrites that add a number to the title.
pub fn numbered_variants(title: &str) -> Vec<String> {
    vec![
        format!("{}: 5 Key Takeaways", title),
        format!("{} in 10 Minutes", title),
        format!("Top 7 Lessons from {}", title),
    ]
}

/// Three rewrites that add a bracketed qualifier to the title.
pub fn bracketed_variants(title: &str) -> Vec<String> {
    vec![
        format!("{} [2026]", title),
        format!("{} (Step by Step)", title),
        format!("{} [Full Tutorial]", title),
    ]
}
