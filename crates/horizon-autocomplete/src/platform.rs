//! Platform detection.

use std::sync::OnceLock;

use regex::Regex;

use crate::dom::EventKind;

static MOBILE_UA: OnceLock<Option<Regex>> = OnceLock::new();

fn mobile_pattern() -> Option<&'static Regex> {
    MOBILE_UA
        .get_or_init(|| {
            Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini|mobi")
                .ok()
        })
        .as_ref()
}

/// Returns `true` if `user_agent` belongs to a mobile browser.
///
/// ```
/// use horizon_autocomplete::platform::is_mobile_user_agent;
///
/// assert!(is_mobile_user_agent(
///     "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
/// ));
/// assert!(!is_mobile_user_agent(
///     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36"
/// ));
/// ```
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    mobile_pattern().is_some_and(|re| re.is_match(user_agent))
}

/// The pointer event that should select rows and dismiss the overlay.
///
/// Some mobile engines do not deliver synthetic clicks reliably, so mobile
/// browsers listen for touch-end instead.
pub fn pointer_event_for(user_agent: &str) -> EventKind {
    if is_mobile_user_agent(user_agent) {
        EventKind::TouchEnd
    } else {
        EventKind::Click
    }
}
