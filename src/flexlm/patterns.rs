use regex::Regex;

lazy_static::lazy_static! {
    pub static ref FLEXLM: PatternCatalog = PatternCatalog::flexlm();
}

/// The text-recognition rules applied to one lmstat report. The parser takes
/// the catalog as a parameter, so output variants of other tool versions can
/// be supported by swapping the catalog without touching the evaluator.
#[derive(Debug)]
pub struct PatternCatalog {
    server: Regex,
    vendor: Regex,
    usage: Regex,
    detail: Regex,
    session: Regex,
}

impl PatternCatalog {
    /// Rules matching the report format of lmutil's lmstat subcommand.
    pub fn flexlm() -> Self {
        Self {
            // "flex1srv: license server UP (MASTER) v11.16" -- the (MASTER)
            // marker and the version token are both optional
            server: Regex::new(r"(?m)^\s*(\S+): license server (\S+)(?:[ \t][^\n]*?(v\d[\d.]*))?")
                .expect("server-line rule"),
            // Labeled block, daemon line follows across a blank line:
            //   Vendor daemon status (on flex1srv):
            //
            //       adskflex: UP v11.16.2
            vendor: Regex::new(
                r"Vendor daemon status \(on [^)]*\):\s*\n\s*(\S+): (\S+)(?:[ \t]+(v\d[\d.]*))?"
            ).expect("vendor-daemon rule"),
            usage: Regex::new(
                r"Users of (\S+):\s+\(Total of (\d+) licenses? issued;\s+Total of (\d+) licenses? in use\)"
            ).expect("usage-line rule"),
            // Quoted feature header, then the per-user session block:
            //   "ACD_2020" v1.000, vendor: adskflex, expiry: 01-jan-2099
            //   floating license
            //
            //     jdoe WORKSTATION1 WORKSTATION1 (v1.0) (...), start Mar 15/24 09:30
            detail: Regex::new(
                r#""(\S+)"[^\n]*vendor: (\S+), expiry: (\S+)\s+floating license\s+((?:\S+ \S+[^\n]*[A-Za-z]{3} \d+/\d+ \d+:\d+\s*)*)"#
            ).expect("license-detail rule"),
            session: Regex::new(r"(\S+) (\S+)[^\n]*([A-Za-z]{3} \d+/\d+ \d+:\d+)")
                .expect("session-line rule"),
        }
    }

    /// First line announcing the license server, as (name, state, version).
    pub fn server_line(&self, text: &str) -> Option<(String, String, Option<String>)> {
        self.server.captures(text).map(|caps| {
            (
                caps[1].to_string(),
                caps[2].to_string(),
                caps.get(3).map(|m| m.as_str().to_string()),
            )
        })
    }

    /// First vendor daemon announced in the report, as (name, state, version).
    pub fn vendor_daemon(&self, text: &str) -> Option<(String, String, Option<String>)> {
        self.vendor.captures(text).map(|caps| {
            (
                caps[1].to_string(),
                caps[2].to_string(),
                caps.get(3).map(|m| m.as_str().to_string()),
            )
        })
    }

    /// Every usage line in the report, as (license, issued, in-use) digit strings.
    pub fn usage_lines(&self, text: &str) -> Vec<(String, String, String)> {
        self.usage
            .captures_iter(text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
            .collect()
    }

    /// Every license detail block, as (license, vendor, expiry, session block text).
    pub fn license_details(&self, text: &str) -> Vec<(String, String, String, String)> {
        self.detail
            .captures_iter(text)
            .map(|caps| {
                (
                    caps[1].to_string(),
                    caps[2].to_string(),
                    caps[3].to_string(),
                    caps[4].to_string(),
                )
            })
            .collect()
    }

    /// Session entries within one detail block, as (username, workstation, start).
    pub fn session_lines(&self, block: &str) -> Vec<(String, String, String)> {
        self.session
            .captures_iter(block)
            .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
            .collect()
    }
}
