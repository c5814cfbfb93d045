//! Canned lmstat reports used across the test modules.

/// Healthy server: usage on two features (one idle) and a detail block with
/// two active sessions.
pub const REPORT_OK: &str = r#"lmutil - Copyright (c) 1989-2018 Flexera. All Rights Reserved.
Flexible License Manager status on Wed 3/25/2020 10:15

[Detecting lmgrd processes...]
License server status: 27000@flex1srv
    License file(s) on flex1srv: /opt/flexlm/licenses/adsk.lic:

flex1srv: license server UP (MASTER) v11.16

Vendor daemon status (on flex1srv):

    adskflex: UP v11.16.2

Feature usage info:

Users of ACD_2020:  (Total of 25 licenses issued;  Total of 3 licenses in use)

  "ACD_2020" v1.000, vendor: adskflex, expiry: 01-jan-2099
  floating license

    jdoe WORKSTATION1 WORKSTATION1 (v1.0) (flex1srv/27000 101), start Mar 15/24 09:30
    asmith WORKSTATION2 WORKSTATION2 (v1.0) (flex1srv/27000 102), start Mar 15/24 10:02

Users of MAYA_2020:  (Total of 10 licenses issued;  Total of 0 licenses in use)
"#;

/// Master daemon down; the vendor daemon and a busy feature are still
/// reported so down-server precedence can be asserted.
pub const REPORT_SERVER_DOWN: &str = r#"Flexible License Manager status on Wed 3/25/2020 10:15

flex1srv: license server DOWN

Vendor daemon status (on flex1srv):

    adskflex: UP v11.16.2

Users of ACD_2020:  (Total of 25 licenses issued;  Total of 3 licenses in use)
"#;

/// Master daemon up but the vendor daemon is not.
pub const REPORT_DAEMON_DOWN: &str = r#"Flexible License Manager status on Wed 3/25/2020 10:15

flex1srv: license server UP (MASTER) v11.16

Vendor daemon status (on flex1srv):

    adskflex: DOWN
"#;

/// lmutil could not reach the license port.
pub const REPORT_CANNOT_CONNECT: &str = r#"lmutil - Copyright (c) 1989-2018 Flexera. All Rights Reserved.
Flexible License Manager status on Wed 3/25/2020 10:15

Error getting status: Cannot connect to license server system. (-15,10:111 "Connection refused")
"#;

/// lmutil could not reach the machine at all.
pub const REPORT_NOT_RESPONDING: &str = r#"lmutil - Copyright (c) 1989-2018 Flexera. All Rights Reserved.
Flexible License Manager status on Wed 3/25/2020 10:15

Error getting status: License server machine is down or not responding. (-96,7:2 "No such file or directory")
"#;

/// Output that is not an lmstat report at all.
pub const REPORT_GARBAGE: &str =
    "sh: ./lmutil: /lib/ld-lsb.so.3: bad ELF interpreter: No such file or directory\n";
