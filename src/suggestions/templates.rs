//! Copy-paste description templates and checklists.

use super::keywords::hashtag_suggestions;

/// A full description skeleton: hook, timestamps, links, hashtags.
/// Ready to paste and fill in.
pub fn description_template(title: &str) -> String {
    let hashtags = hashtag_suggestions(title).join(" ");
    format!(
        "{title}\n\n\
         In this video you'll learn everything you need to get started. \
         Drop a comment with your biggest takeaway!\n\n\
         TIMESTAMPS\n\
         00:00 Intro\n\
         01:30 Main topic\n\
         05:00 Common mistakes\n\
         08:30 Recap\n\n\
         LINKS & RESOURCES\n\
         Website: https://yoursite.com\n\
         Free guide: https://yoursite.com/guide\n\
         Subscribe: https://youtube.com/@yourchannel?sub_confirmation=1\n\n\
         {hashtags}"
    )
}

/// Timestamp block to adapt to the video's actual chapters.
pub fn timestamp_template() -> String {
    "TIMESTAMPS\n\
     00:00 Intro\n\
     01:30 Main topic\n\
     05:00 Common mistakes\n\
     08:30 Recap"
        .to_string()
}

/// Steps to grow a description that exists but is thin.
pub fn expansion_checklist() -> Vec<String> {
    vec![
        "Expand the first two lines with your main keyword - they show in search".to_string(),
        "Add a TIMESTAMPS section for each chapter of the video".to_string(),
        "Link two or three related videos or playlists".to_string(),
        "Close with 3-5 relevant hashtags".to_string(),
    ]
}

/// Link ideas for a description with none.
pub fn link_checklist() -> Vec<String> {
    vec![
        "Add your website, blog, or latest lead magnet".to_string(),
        "Link your other social profiles".to_string(),
        "Link two or three related videos to keep viewers on your channel".to_string(),
    ]
}

/// Calls to action that lift a weak like ratio.
pub fn cta_checklist() -> Vec<String> {
    vec![
        "Ask viewers to like in the first 30 seconds".to_string(),
        "Add an end-screen reminder to like and subscribe".to_string(),
        "Pin a comment asking a question viewers can answer".to_string(),
    ]
}

/// Prompts that get a quiet comment section talking.
pub fn discussion_prompts() -> Vec<String> {
    vec![
        "End the video with one direct question for viewers".to_string(),
        "Pin a comment asking viewers to share their experience".to_string(),
        "Reply to every comment in the first 24 hours".to_string(),
    ]
}
