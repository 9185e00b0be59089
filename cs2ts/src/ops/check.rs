//! Check operation - settings validation.

use cs2ts_config::SettingsFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The file has already been parsed and validated when it was opened, so
/// this only collects what to show.
pub fn check(file: &SettingsFile) -> CheckReport {
    CheckReport {
        config_path: file.path().to_path_buf(),
        config: file.config().clone(),
    }
}
