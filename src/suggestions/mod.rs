//! Deterministic suggestion generators for titles, tags, hashtags and
//! description templates. No randomness anywhere: the same video always
//! produces the same recommendations.

pub mod keywords;
pub mod templates;
pub mod titles;

pub use keywords::{hashtag_suggestions, tag_suggestions};
pub use templates::{
    cta_checklist, description_template, discussion_prompts, expansion_checklist, link_checklist,
    timestamp_template,
};
pub use titles::{
    bracketed_variants, lengthen_title, numbered_variants, power_word_alternatives, to_title_case,
    truncate_title,
};
