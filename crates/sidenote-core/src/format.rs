use crate::model::Note;
use std::fmt::Write as _;

/// Where a note list is being shown from; decides the summary's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Browsing the active document's notes: suffix is a relative time.
    CurrentFile,
    /// Browsing the whole project: suffix is the owning file path.
    Project,
}

/// Pick-list rendering of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub icon: &'static str,
    pub text: String,
}

const MAX_MESSAGE_CHARS: usize = 50;

/// Build the human-readable summary for a note: the (possibly truncated)
/// message followed by either its file path or its age, per `scope`.
pub fn summarize(note: &Note, scope: ListScope, now_ms: u64) -> Summary {
    let mut text = truncate_message(&note.message);
    match scope {
        ListScope::Project => {
            let _ = write!(text, " - {}", note.path.display());
        }
        ListScope::CurrentFile => {
            let _ = write!(text, " - {}", time_ago(now_ms, note.timestamp));
        }
    }
    Summary {
        icon: note.kind.icon(),
        text,
    }
}

fn truncate_message(message: &str) -> String {
    if message.chars().count() > MAX_MESSAGE_CHARS {
        let mut head: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
        head.push_str("...");
        head
    } else {
        message.to_string()
    }
}

/// Render an elapsed duration in the coarsest unit that keeps the
/// magnitude under its threshold: seconds (<60), minutes (<60),
/// hours (<24), days (<30), months (<12), then years. Lower bound
/// inclusive, upper exclusive: exactly 60s is "1 minute ago".
pub fn time_ago(now_ms: u64, timestamp_ms: u64) -> String {
    let mut delta = now_ms.saturating_sub(timestamp_ms) / 1000;
    if delta < 60 {
        return unit_ago(delta, "second");
    }
    delta /= 60;
    if delta < 60 {
        return unit_ago(delta, "minute");
    }
    delta /= 60;
    if delta < 24 {
        return unit_ago(delta, "hour");
    }
    delta /= 24;
    if delta < 30 {
        return unit_ago(delta, "day");
    }
    delta /= 30;
    if delta < 12 {
        return unit_ago(delta, "month");
    }
    unit_ago(delta / 12, "year")
}

fn unit_ago(magnitude: u64, unit: &str) -> String {
    if magnitude == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{magnitude} {unit}s ago")
    }
}
