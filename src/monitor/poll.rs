//! Poll targets and the session that drives them against the instrument.

use super::PollSession;
use crate::api::{self, RequestDescriptor};
use crate::client::TempoClient;
use crate::error::TempoError;
use crate::settings::DisplayMode;
use crate::transport::Transport;

/// What a monitoring session polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTarget {
    /// Lid position, `/tempo/lid`
    Lid,
    /// Instrument status, `/tempo/status`
    Instrument,
    /// Protocol run status, `/tempo/protocol-run`
    Run,
}

const LID_MOVING: [&str; 2] = ["opening", "closing"];
const RUN_ACTIVE: [&str; 2] = ["running", "paused"];

impl PollTarget {
    pub fn request(self) -> RequestDescriptor {
        match self {
            PollTarget::Lid => api::lid(),
            PollTarget::Instrument => api::status(),
            PollTarget::Run => api::run_status(),
        }
    }

    /// Response field that carries the polled state.
    pub fn state_field(self) -> &'static str {
        match self {
            PollTarget::Lid => "lid",
            PollTarget::Instrument | PollTarget::Run => "status",
        }
    }

    /// Continuation predicate: keep polling while the state is transitional.
    pub fn should_continue(self, state: &str) -> bool {
        match self {
            PollTarget::Lid => LID_MOVING.contains(&state),
            PollTarget::Instrument | PollTarget::Run => RUN_ACTIVE.contains(&state),
        }
    }
}

/// Polls one target through a borrowed client for the length of a monitoring session.
pub struct StatusPoller<'c, T> {
    client: &'c mut TempoClient<T>,
    target: PollTarget,
}

impl<'c, T: Transport> StatusPoller<'c, T> {
    pub fn new(client: &'c mut TempoClient<T>, target: PollTarget) -> Self {
        Self { client, target }
    }
}

impl<T: Transport> PollSession for StatusPoller<'_, T> {
    fn advance(&mut self) -> Result<String, TempoError> {
        self.client.send(&self.target.request());
        self.client.state(self.target.state_field())
    }

    fn should_continue(&self, state: &str) -> bool {
        self.target.should_continue(state)
    }

    fn render(&self, mode: DisplayMode) -> Result<String, TempoError> {
        self.client.render(mode)
    }
}
