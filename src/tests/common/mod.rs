pub mod fixtures;

use chrono::{ DateTime, Local, TimeZone };

// Fixed evaluation instant so updated stamps are deterministic in tests
pub fn test_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2020, 3, 25, 10, 15, 0).unwrap()
}
