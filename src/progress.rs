//! Byte-based progress bars for the input read loops (stderr).

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

const FILE_TEMPLATE: &str = "{spinner:.green} {msg} {bytes:>10}/{total_bytes:<10} [{bar:.cyan/blue}] {percent:>3}%  \
                             {bytes_per_sec}  eta: {eta_precise}";

/// Progress bar sized to the on-disk length of `path`, or `None` when disabled.
/// Compressed inputs advance by compressed bytes, so the bar still ends at 100%.
pub fn file_progress(enabled: bool, path: &Path, label: &str) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let total = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let style = ProgressStyle::with_template(FILE_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    let pb = ProgressBar::new(total).with_style(style).with_message(format!("{} {}", label, path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(pb)
}
