// Shared test helpers for writing report files.

use std::path::PathBuf;

use tempfile::TempDir;

/// A forwarded port-scan report from a vendor at `scan.example`.
#[allow(dead_code)] // Used by other test files
pub const FORWARDED_SCAN_REPORT: &str = "\
From: Helpdesk <helpdesk@isp.example>
Subject: Fwd: Port scan from your network
Date: Tue, 02 Jan 2024 09:00:00 +0000

Please take a look.

---------- Forwarded message ---------
From: Scan Watch <reports@scan.example>
Subject: Port scan from 192.0.2.55
Date: Tue, 02 Jan 2024 08:00:00 +0000

Source IP: 192.0.2.55
Port: 445
Detected: Jan 1 23:10:00
";

/// A report without any IP or URL.
#[allow(dead_code)]
pub const EMPTY_COMPLAINT: &str = "\
From: someone@example.org
Subject: Complaint

You keep sending me things.
";

/// Writes `contents` to `name` in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn write_report(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write report");
    (dir, path)
}
