//! Match list rendering.

use dioxus::prelude::*;
use store::MatchInfo;

pub const NO_MATCHES: &str = "No matches yet. Keep swiping!";

/// Format a backend timestamp as a date in the browser's locale.
///
/// Native builds have no locale service and fall back to `M/D/YYYY`. Input
/// that does not parse is shown as received.
pub fn format_match_date(raw: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&js_sys::JsString::from(raw).into());
        if date.get_time().is_nan() {
            return raw.to_string();
        }
        String::from(date.to_locale_date_string("default", &js_sys::Object::new().into()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        parse_timestamp(raw)
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDate> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// The list of matches, or the empty-state text.
#[component]
pub fn MatchList(matches: Vec<MatchInfo>) -> Element {
    if matches.is_empty() {
        return rsx! {
            p { class: "matches-empty", "{NO_MATCHES}" }
        };
    }

    rsx! {
        div {
            class: "matches-list",
            for m in matches {
                div {
                    key: "{m.matched_user.id}",
                    class: "match-item",
                    div {
                        h3 { "{m.matched_user.name}" }
                        p { "{m.matched_user.bio_or_placeholder()}" }
                    }
                    if let Some(ref at) = m.matched_at {
                        div { class: "match-date", "{format_match_date(at)}" }
                    }
                }
            }
        }
    }
}
