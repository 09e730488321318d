//! Loose, case-insensitive matching of meetings against a free-text search term.
//!
//! A term is compared in its normalized form: lowercased, with spaces, hyphens and
//! underscores removed, and one trailing `s` folded away. That lets "Acme" find an invitee
//! at `jane@acme.com` and "labs" find a meeting titled "Lab Review".

use meeting_ai::MeetingRecord;

/// Separators dropped before comparing.
const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Canonicalize `text` for loose matching.
///
/// Only a single trailing `s` is stripped, and only when the compacted text is longer than
/// two characters, so short tokens such as `os` survive intact.
pub fn normalize(text: &str) -> String {
    let mut normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    if normalized.ends_with('s') && normalized.chars().count() > 2 {
        normalized.pop();
    }
    normalized
}

/// Whether `record` matches an already normalized search term.
///
/// Checked in order: title, meeting title, then each calendar invitee's name (normalized)
/// or email (lowercased only). Missing fields count as empty strings.
pub fn matches(record: &MeetingRecord, normalized_term: &str) -> bool {
    if normalize(record.title()).contains(normalized_term) {
        return true;
    }

    if normalize(record.meeting_title()).contains(normalized_term) {
        return true;
    }

    record.calendar_invitees().iter().any(|invitee| {
        normalize(invitee.name()).contains(normalized_term)
            || invitee.email().to_lowercase().contains(normalized_term)
    })
}
