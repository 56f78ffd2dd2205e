//! Status monitor: re-polls the instrument on a timer and redraws the latest response
//! in place until the poll target settles or the display can no longer be refreshed.

use crate::error::TempoError;
use crate::settings::DisplayMode;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, warn};

mod poll;
mod screen;

pub use poll::{PollTarget, StatusPoller};
pub use screen::{detect as detect_screen, Dimensions, NullScreen, Screen, TerminalScreen};

/// One monitoring session's view of the instrument.
pub trait PollSession {
    /// Re-issue the poll request and return the observed state. Errors when the reply was
    /// not a successful, parseable response.
    fn advance(&mut self) -> Result<String, TempoError>;

    /// Whether polling continues after observing `state`.
    fn should_continue(&self, state: &str) -> bool;

    /// Rendering of the latest reply through the normal print path.
    fn render(&self, mode: DisplayMode) -> Result<String, TempoError>;
}

/// Text drawn for one refresh, with its line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub text: String,
    pub line_count: usize,
}

impl RenderSnapshot {
    pub fn new(text: String) -> Self {
        let line_count = text.lines().count();
        Self { text, line_count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Start,
    Polling,
    StoppedClean,
    StoppedFailed,
}

/// Result of a finished monitoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorReport {
    pub state: MonitorState,
    /// Number of times the poll step ran
    pub polls: u32,
}

impl MonitorReport {
    /// True only when polling ended because the target settled.
    pub fn success(&self) -> bool {
        self.state == MonitorState::StoppedClean
    }
}

/// Drives a `PollSession` and owns it for the duration of the session.
pub struct Monitor<'a, P> {
    session: P,
    screen: &'a mut dyn Screen,
    out: &'a mut dyn Write,
    interval: Duration,
    mode: DisplayMode,
    state: MonitorState,
    bottom_line: usize,
    polls: u32,
}

impl<'a, P: PollSession> Monitor<'a, P> {
    pub fn new(
        session: P,
        screen: &'a mut dyn Screen,
        out: &'a mut dyn Write,
        interval: Duration,
        mode: DisplayMode,
    ) -> Self {
        Self {
            session,
            screen,
            out,
            interval,
            mode,
            state: MonitorState::Start,
            bottom_line: 0,
            polls: 0,
        }
    }

    /// Run until a stop state, then print the final response once more.
    ///
    /// A refresh failure ends the session as `StoppedFailed` rather than an error. Errors
    /// are only returned for terminal I/O and for the final print.
    pub fn run(mut self) -> Result<MonitorReport, TempoError> {
        self.screen.clear_region(self.out, 0)?;

        while !self.is_stopped() {
            if self.state == MonitorState::Polling {
                std::thread::sleep(self.interval);
            }
            self.state = self.cycle()?;
        }

        self.finish()
    }

    fn is_stopped(&self) -> bool {
        matches!(
            self.state,
            MonitorState::StoppedClean | MonitorState::StoppedFailed
        )
    }

    /// One poll step plus redraw; returns the next state.
    fn cycle(&mut self) -> Result<MonitorState, TempoError> {
        self.polls += 1;
        let state = match self.session.advance() {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Poll failed, stopping monitor");
                return Ok(MonitorState::StoppedFailed);
            }
        };
        debug!(state = %state, polls = self.polls, "Polled");

        if !self.session.should_continue(&state) {
            info!(state = %state, "Monitored state settled");
            return Ok(MonitorState::StoppedClean);
        }

        match self.session.render(self.mode) {
            Ok(text) => {
                self.redraw(&RenderSnapshot::new(text))?;
                Ok(MonitorState::Polling)
            }
            Err(e) => {
                warn!(error = %e, "Unable to refresh display, stopping monitor");
                Ok(MonitorState::StoppedFailed)
            }
        }
    }

    /// Overwrite the display from the anchor, padding lines and wiping stale rows.
    fn redraw(&mut self, snapshot: &RenderSnapshot) -> Result<(), TempoError> {
        let (columns, rows) = self
            .screen
            .dimensions()
            .map(|d| (usize::from(d.columns), usize::from(d.rows)))
            .unwrap_or((0, 0));

        self.screen.move_home(self.out)?;
        for line in snapshot.text.lines() {
            writeln!(self.out, "{:<width$}", line, width = columns)?;
        }
        let blank = " ".repeat(columns);
        for row in snapshot.line_count..=rows {
            write!(self.out, "{}", blank)?;
            if row < rows {
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;

        self.bottom_line = snapshot.line_count;
        Ok(())
    }

    fn finish(mut self) -> Result<MonitorReport, TempoError> {
        let rows = self.screen.dimensions().map(|d| d.rows).unwrap_or(0);
        let row = u16::try_from(self.bottom_line).unwrap_or(u16::MAX).min(rows);
        self.screen.clear_region(self.out, row)?;

        let report = MonitorReport {
            state: self.state,
            polls: self.polls,
        };
        info!(success = report.success(), polls = report.polls, "Monitor stopped");

        let rendered = self.session.render(self.mode)?;
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(report)
    }
}
