//! Channel input resolution: URLs, @handles, and raw channel ids.
//!
//! Classification fails closed: anything that is not a recognizable
//! channel reference resolves to `None`, never an error. Handles and
//! usernames still need a search round-trip to become a canonical id;
//! that happens in [`crate::youtube`].

use serde::{Deserialize, Serialize};
use url::Url;

/// How a channel was referenced by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ChannelIdentifier {
    /// Canonical channel id (`UC...`), usable directly.
    Id(String),
    /// `@handle`, kept verbatim including the `@`.
    Handle(String),
    /// Legacy `/c/` or `/user/` name.
    Username(String),
}

impl ChannelIdentifier {
    pub fn value(&self) -> &str {
        match self {
            ChannelIdentifier::Id(v)
            | ChannelIdentifier::Handle(v)
            | ChannelIdentifier::Username(v) => v,
        }
    }

    /// Whether this is already a channel id and needs no search round-trip.
    pub fn is_id(&self) -> bool {
        matches!(self, ChannelIdentifier::Id(_))
    }
}

/// Classify user input as a channel reference.
///
/// URLs are tried first; a host that is not youtube.com is rejected, and
/// so is any youtube.com path that is not `/channel/`, `/@`, `/c/` or
/// `/user/`. Non-URL input is accepted only as a verbatim `@handle` or a
/// 24-character `UC...` id. Input is never trimmed or case-normalized.
pub fn resolve(input: &str) -> Option<ChannelIdentifier> {
    match Url::parse(input) {
        Ok(parsed) => resolve_url(&parsed),
        Err(_) => {
            if input.starts_with('@') {
                Some(ChannelIdentifier::Handle(input.to_string()))
            } else if input.starts_with("UC") && input.chars().count() == 24 {
                Some(ChannelIdentifier::Id(input.to_string()))
            } else {
                None
            }
        }
    }
}

fn resolve_url(url: &Url) -> Option<ChannelIdentifier> {
    let host = url.host_str()?;
    if !host.contains("youtube.com") {
        return None;
    }

    let path = url.path();
    // Leading slash means segment 0 is always empty.
    let segments: Vec<&str> = path.split('/').collect();

    if path.starts_with("/channel/") {
        segments
            .get(2)
            .map(|s| ChannelIdentifier::Id((*s).to_string()))
    } else if path.starts_with("/@") {
        segments
            .get(1)
            .map(|s| ChannelIdentifier::Handle((*s).to_string()))
    } else if path.starts_with("/c/") || path.starts_with("/user/") {
        segments
            .get(2)
            .map(|s| ChannelIdentifier::Username((*s).to_string()))
    } else {
        None
    }
}
