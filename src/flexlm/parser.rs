use crate::error::CheckError;
use super::patterns::PatternCatalog;
use super::types::{ DaemonStatus, LicenseDetail, ServerStatus, SessionDetail, UsageRecord };

/// Outcome of applying a primary pattern to the report text. `Missing` means
/// the pattern found no occurrence at all, which is distinct from a server
/// that was found and reported DOWN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    Found(T),
    Missing,
    Invalid(String),
}

/// Everything recovered from one lmstat report.
#[derive(Debug, Clone, PartialEq)]
pub struct LmstatReport {
    pub server: Extracted<ServerStatus>,
    pub vendor_daemon: Extracted<DaemonStatus>,
    pub usage: Vec<UsageRecord>,
    pub details: Vec<LicenseDetail>,
}

impl LmstatReport {
    /// Applies the catalog to a raw report. Never fails: absent sections come
    /// back `Missing`/empty and unparseable usage counts degrade that record.
    pub fn parse(raw: &str, catalog: &PatternCatalog) -> Self {
        let server = match catalog.server_line(raw) {
            Some((name, state, _version)) => Extracted::Found(ServerStatus {
                up: state.eq_ignore_ascii_case("UP"),
                name,
            }),
            None => Extracted::Missing,
        };

        let vendor_daemon = match catalog.vendor_daemon(raw) {
            Some((name, state, _version)) => Extracted::Found(DaemonStatus {
                up: state.eq_ignore_ascii_case("UP"),
                name,
            }),
            None => Extracted::Missing,
        };

        let mut usage = Vec::new();
        for (license, issued, in_use) in catalog.usage_lines(raw) {
            let max = match parse_count(&license, "issued", &issued) {
                Ok(count) => count,
                Err(e) => {
                    log::warn!("Skipping usage line: {}", e);
                    continue;
                }
            };
            let used = match parse_count(&license, "in-use", &in_use) {
                Ok(count) => count,
                Err(e) => {
                    log::warn!("Skipping usage line: {}", e);
                    continue;
                }
            };
            // Zero-usage licenses are not worth reporting
            if used > 0 {
                usage.push(UsageRecord { license, max, used });
            }
        }

        let mut details = Vec::new();
        for (license, vendor, expires, block) in catalog.license_details(raw) {
            let sessions = catalog
                .session_lines(&block)
                .into_iter()
                .map(|(username, workstation, start)| SessionDetail {
                    username,
                    start,
                    workstation,
                })
                .collect();
            details.push(LicenseDetail {
                license,
                vendor,
                expires,
                details: sessions,
            });
        }

        Self {
            server,
            vendor_daemon,
            usage,
            details,
        }
    }
}

fn parse_count(license: &str, what: &str, digits: &str) -> Result<u32, CheckError> {
    digits.parse::<u32>().map_err(|e| {
        CheckError::Parse(format!("{} count for {} ({:?}): {}", what, license, digits, e))
    })
}
