use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

pub trait TrackerBuilder<T: Tracker<U>, U> {
    fn build(self) -> T;
}

pub trait Tracker<Inc> {
    fn step(&self, step: Inc) -> &Self;
    /// Run `f` with the tracker hidden so plain output does not tear it.
    fn suspend<R>(&self, f: impl FnOnce() -> R) -> R;
    fn finish(self);
}

const PB_STYLE: &str =
    "{spinner:.blue} {prefix:>8.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {human_pos}/{human_len} ({per_sec}, {eta}) {msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: LazyLock<Option<ProgressStyle>> = LazyLock::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK).progress_chars(PB_CHARS))
});

/// Counts finished tasks against the catalog length.
pub struct ProgressTracker {
    pb: ProgressBar,
    finish: Option<String>,
}

impl Tracker<u64> for ProgressTracker {
    fn step(&self, n: u64) -> &Self {
        self.pb.inc(n);
        self
    }

    fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.pb.suspend(f)
    }

    fn finish(self) {
        match self.finish {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressTrackerBuilder {
    len: Option<u64>,
    prefix: Option<String>,
    finish: Option<String>,
}

impl ProgressTrackerBuilder {
    pub fn with_len(mut self, len: u64) -> Self {
        self.len = Some(len);
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_finish(mut self, finish: &str) -> Self {
        self.finish = Some(finish.to_string());
        self
    }
}

impl TrackerBuilder<ProgressTracker, u64> for ProgressTrackerBuilder {
    fn build(self) -> ProgressTracker {
        let pb = match self.len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        let pb = match PB_TEMPLATE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };

        if let Some(prefix) = self.prefix {
            pb.set_prefix(prefix);
        }
        ProgressTracker {
            pb,
            finish: self.finish,
        }
    }
}
