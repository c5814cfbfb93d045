use serde::{ Serialize, Deserialize };

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatus {
    pub name: String,
    pub up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonStatus {
    pub name: String,
    pub up: bool,
}

/// Checked-out seat counts for one license feature. Zero-usage features
/// are dropped before a record is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub license: String,
    pub max: u32,
    pub used: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetail {
    pub username: String,
    pub start: String,
    pub workstation: String,
}

// The session list serializes as "details" and the vendor never serializes
// at all; both are frontend compatibility constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDetail {
    pub license: String,
    #[serde(skip)]
    pub vendor: String,
    pub expires: String,
    pub details: Vec<SessionDetail>,
}

/// Severity of a finished check, mapped onto Nagios exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Ok,
    Critical,
    Unknown,
}

impl CheckState {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckState::Ok => 0,
            CheckState::Critical => 2,
            CheckState::Unknown => 3,
        }
    }
}

impl Default for CheckState {
    fn default() -> Self {
        CheckState::Unknown
    }
}

/// Final health summary of one check invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<UsageRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<LicenseDetail>>,
    pub updated: String,
    #[serde(skip)]
    pub state: CheckState,
}
