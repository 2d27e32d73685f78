use crate::shared::date_utils::{format_absolute, format_relative, parse_instant};
use crate::shared::l10n::{use_messages, Messages};
use chrono::{DateTime, Local, TimeZone, Utc};
use leptos::prelude::*;

/// What a date label displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLabel {
    /// No date: muted placeholder, no tooltip
    Never { text: String },
    /// Relative text with the absolute timestamp as tooltip
    Dated { text: String, title: String },
}

/// Label for an optional server date, relative to `now`, absolute part in `tz`.
///
/// Only a missing (or empty) date gives [`DateLabel::Never`]. A value that
/// cannot be parsed is shown verbatim.
pub fn date_label<Tz>(
    date: Option<&str>,
    now: &DateTime<Utc>,
    tz: &Tz,
    messages: &Messages,
) -> DateLabel
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(date) = date.filter(|d| !d.is_empty()) else {
        return DateLabel::Never {
            text: messages.translate(&["never"]),
        };
    };

    match parse_instant(date) {
        Some(instant) => DateLabel::Dated {
            text: format_relative(&instant, now),
            title: format_absolute(&instant, tz),
        },
        None => DateLabel::Dated {
            text: date.to_string(),
            title: date.to_string(),
        },
    }
}

/// Relative date with the exact timestamp in a tooltip, or "never".
///
/// The input is memoized, so the label is rebuilt only when the date
/// string actually changes.
#[component]
#[allow(non_snake_case)]
pub fn RelativeDateLabel(#[prop(optional, into)] date: MaybeProp<String>) -> impl IntoView {
    let messages = use_messages();
    let date = Memo::new(move |_| date.get());

    move || match date.with(|d| date_label(d.as_deref(), &Utc::now(), &Local, &messages)) {
        DateLabel::Never { text } => view! {
            <span class="text-muted">{text}</span>
        }
        .into_any(),
        DateLabel::Dated { text, title } => view! {
            <span title=title data-toggle="tooltip">{text}</span>
        }
        .into_any(),
    }
}
