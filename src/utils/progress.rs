use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const STEP_TEMPLATE: &str = "{spinner} {wide_msg}";

pub trait MultiProgressNew {
    /// Progress group that draws to stderr, or nowhere when `quiet`.
    fn for_terminal(quiet: bool) -> Self;

    fn add_step(&self, message: String) -> ProgressBar;
}

impl MultiProgressNew for MultiProgress {
    fn for_terminal(quiet: bool) -> Self {
        if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        }
    }

    fn add_step(&self, message: String) -> ProgressBar {
        let pb = self.add(ProgressBar::new_spinner());
        pb.set_style(step_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

fn step_style() -> ProgressStyle {
    ProgressStyle::with_template(STEP_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}
