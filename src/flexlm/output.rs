use super::types::Verdict;

/// Monitoring-friendly rendition: one status line, then one line per license
/// in use. Multi-line status text is collapsed so polling always sees a
/// single status line.
pub fn render_plain(verdict: &Verdict) -> String {
    let mut out = verdict.status_text.replace('\n', " ");
    out.push('\n');
    if let Some(usage) = &verdict.usage {
        for record in usage {
            out.push_str(&format!("{}: {} of {}\n", record.license, record.used, record.max));
        }
    }
    out
}

/// Structured rendition consumed by the web frontend.
pub fn render_json(verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string(verdict)
}
