use std::io::Read;
use std::path::Path;
use std::process::{ Command, Stdio };
use std::sync::mpsc;
use std::thread;
use std::time::{ Duration, Instant };

use crate::error::CheckError;

// Bounded wait for the external tool; lmstat normally answers within seconds
const LMSTAT_TIMEOUT_SECS: u64 = 30;
const POLL_INTERVAL_MS: u64 = 100;
const OUTPUT_COLLECT_TIMEOUT_SECS: u64 = 5;

/// Runs `lmutil lmstat -a -c <port>@<server>` and returns its stdout. The
/// exit code is not inspected; only the report text matters.
pub fn run_lmstat(lmutil: &Path, server: &str, port: u16) -> Result<String, CheckError> {
    run_lmstat_with_timeout(lmutil, server, port, Duration::from_secs(LMSTAT_TIMEOUT_SECS))
}

pub(crate) fn run_lmstat_with_timeout(
    lmutil: &Path,
    server: &str,
    port: u16,
    timeout: Duration
) -> Result<String, CheckError> {
    let target = format!("{}@{}", port, server);
    log::info!("Running {} lmstat -a -c {}", lmutil.display(), target);

    let mut child = Command::new(lmutil)
        .arg("lmstat")
        .arg("-a")
        .arg("-c")
        .arg(&target)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| CheckError::Io(format!("Failed to spawn {}: {}", lmutil.display(), e)))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| CheckError::Io("Failed to capture lmutil stdout".to_string()))?;

    // Drain stdout on a helper thread so a chatty tool cannot fill the pipe
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut stdout = stdout;
        let mut output = String::new();
        if let Err(e) = stdout.read_to_string(&mut output) {
            log::warn!("Failed to read lmutil stdout: {}", e);
        }
        let _ = tx.send(output);
    });

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("lmutil exited with {}", status);
                break;
            }
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    return Err(CheckError::Timeout(format!(
                        "lmutil did not finish within {} seconds",
                        timeout.as_secs()
                    )));
                }
                thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
            }
            Err(e) => {
                let _ = child.kill();
                return Err(CheckError::Io(format!("Failed to wait for lmutil: {}", e)));
            }
        }
    }

    rx.recv_timeout(Duration::from_secs(OUTPUT_COLLECT_TIMEOUT_SECS))
        .map_err(|e| CheckError::Io(format!("Failed to collect lmutil output: {}", e)))
}
