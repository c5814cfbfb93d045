use std::path::PathBuf;
use chrono::Local;

use super::evaluator::evaluate;
use super::lmutil::run_lmstat;
use super::parser::LmstatReport;
use super::patterns;
use super::types::Verdict;

/// One synchronous health check against a FlexLM license server.
#[derive(Debug)]
pub struct FlexlmChecker {
    lmutil: PathBuf,
    server: String,
    port: u16,
}

impl FlexlmChecker {
    pub fn new(lmutil: PathBuf, server: String, port: u16) -> Self {
        Self { lmutil, server, port }
    }

    /// Always produces a verdict: a tool that cannot even be launched comes
    /// back as an Unknown verdict rather than an error.
    pub fn check(&self) -> Verdict {
        log::info!("[STEP 1/3] Querying license server {}:{}", self.server, self.port);
        let raw = match run_lmstat(&self.lmutil, &self.server, self.port) {
            Ok(output) => output,
            Err(e) => {
                log::error!("lmutil invocation failed: {}", e);
                return Verdict::unknown(&e.to_string(), "", Local::now());
            }
        };

        log::info!("[STEP 2/3] Parsing lmstat report ({} bytes)", raw.len());
        let report = LmstatReport::parse(&raw, &patterns::FLEXLM);

        log::info!("[STEP 3/3] Evaluating license server health");
        evaluate(&report, &raw, Local::now())
    }
}
