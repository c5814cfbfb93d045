use chrono::{ DateTime, Local };
use super::parser::{ Extracted, LmstatReport };
use super::types::{ CheckState, Verdict };

pub const STATUS_OK: &str = "FlexLM OK: License Server and Vendor Daemon are UP.";
pub const STATUS_SERVER_DOWN: &str = "FlexLM CRIT: License Server is DOWN";
pub const STATUS_DAEMON_DOWN: &str = "FlexLM CRIT: Vendor Daemon is DOWN";
pub const STATUS_PORT_UNREACHABLE: &str = "FlexLM CRIT: LMutil was unable to connect to the port.";
pub const STATUS_SERVER_UNREACHABLE: &str =
    "FlexLM CRIT: LMutil was unable to connect to the server.";

// Phrases lmutil prints when it cannot reach the server at all
const CANNOT_CONNECT: &str = "Cannot connect to license server system.";
const SERVER_NOT_RESPONDING: &str = "License server machine is down or not responding.";

const UPDATED_FORMAT: &str = "%d %B %Y, %H:%M:%S ";

/// Reduces a parsed report plus the raw text to a single verdict. The branch
/// order is load-bearing: a down server masks a down vendor daemon, and the
/// raw-text phrase scan only runs when the primary patterns failed to match.
pub fn evaluate(report: &LmstatReport, raw: &str, now: DateTime<Local>) -> Verdict {
    let (server, daemon) = match (&report.server, &report.vendor_daemon) {
        (Extracted::Found(server), Extracted::Found(daemon)) => (server, daemon),
        _ => return fallback(report, raw, now),
    };

    if !server.up {
        log::warn!("License server {} reported DOWN", server.name);
        return Verdict::critical(STATUS_SERVER_DOWN, now);
    }
    if !daemon.up {
        log::warn!("Vendor daemon {} reported DOWN", daemon.name);
        return Verdict::critical(STATUS_DAEMON_DOWN, now);
    }

    log::info!(
        "License server {} and vendor daemon {} are up",
        server.name,
        daemon.name
    );
    Verdict {
        status_text: STATUS_OK.to_string(),
        ok: true,
        usage: if report.usage.is_empty() {
            None
        } else {
            Some(report.usage.clone())
        },
        details: if report.details.is_empty() {
            None
        } else {
            Some(report.details.clone())
        },
        updated: stamp(now),
        state: CheckState::Ok,
    }
}

fn fallback(report: &LmstatReport, raw: &str, now: DateTime<Local>) -> Verdict {
    if raw.contains(CANNOT_CONNECT) {
        log::warn!("lmutil could not connect to the license port");
        return Verdict::critical(STATUS_PORT_UNREACHABLE, now);
    }
    if raw.contains(SERVER_NOT_RESPONDING) {
        log::warn!("lmutil could not reach the license server machine");
        return Verdict::critical(STATUS_SERVER_UNREACHABLE, now);
    }
    Verdict::unknown(&describe_failures(report), raw, now)
}

fn describe_failures(report: &LmstatReport) -> String {
    let mut parts = Vec::new();
    match &report.server {
        Extracted::Missing => parts.push("no license server line in output".to_string()),
        Extracted::Invalid(reason) => parts.push(format!("license server line: {}", reason)),
        Extracted::Found(_) => {}
    }
    match &report.vendor_daemon {
        Extracted::Missing => parts.push("no vendor daemon block in output".to_string()),
        Extracted::Invalid(reason) => parts.push(format!("vendor daemon block: {}", reason)),
        Extracted::Found(_) => {}
    }
    parts.join("; ")
}

fn stamp(now: DateTime<Local>) -> String {
    now.format(UPDATED_FORMAT).to_string()
}

impl Verdict {
    pub fn critical(status_text: &str, now: DateTime<Local>) -> Self {
        Self {
            status_text: status_text.to_string(),
            ok: false,
            usage: None,
            details: None,
            updated: stamp(now),
            state: CheckState::Critical,
        }
    }

    /// Last-resort verdict carrying the failure and the raw report verbatim
    /// for operator diagnosis.
    pub fn unknown(error: &str, raw: &str, now: DateTime<Local>) -> Self {
        Self {
            status_text: format!(
                "FlexLM UNKNOWN: Unknown error. \n Error: {} \nRaw lmutil output:{}\n",
                error, raw
            ),
            ok: false,
            usage: None,
            details: None,
            updated: stamp(now),
            state: CheckState::Unknown,
        }
    }
}
