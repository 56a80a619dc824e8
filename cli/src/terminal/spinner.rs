use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Steady-tick spinner shown while waiting on the daemon. Draws to
/// stderr, so it never mixes with report output.
pub fn start(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}").unwrap();
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
