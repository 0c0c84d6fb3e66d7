use console::{StyledObject, style};
use frontpage_fetch::{Severity, Summary, TaskReport};

use super::tracker::{ProgressTracker, Tracker};

/// Colour a report line by severity.
pub fn styled(report: &TaskReport) -> StyledObject<String> {
    let line = report.to_string();
    match report.severity() {
        Severity::Info => style(line),
        Severity::Success => style(line).green(),
        Severity::Error => style(line).red(),
    }
}

/// Prints one line per finished task and keeps the running totals.
pub struct Reporter {
    tracker: Option<ProgressTracker>,
    summary: Summary,
}

impl Reporter {
    pub fn new(tracker: Option<ProgressTracker>) -> Self {
        Self {
            tracker,
            summary: Summary::default(),
        }
    }

    pub fn report(&mut self, report: &TaskReport) {
        self.summary.record(report);
        let line = styled(report);

        match &self.tracker {
            Some(tracker) => {
                tracker.suspend(|| println!("{line}"));
                tracker.step(1);
            }
            None => println!("{line}"),
        }
    }

    pub fn finish(self) -> Summary {
        if let Some(tracker) = self.tracker {
            tracker.finish();
        }

        let line = self.summary.to_string();
        if self.summary.failed > 0 {
            println!("{}", style(line).yellow().bold());
        } else {
            println!("{}", style(line).bold());
        }
        self.summary
    }
}
