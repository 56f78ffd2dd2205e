//! CLI route: single route table and run context.
//!
//! `plan` validates options and resolves the request for the active command without any
//! I/O. `RunContext::execute` carries the plan out: local commands run without a
//! connection, everything else goes through one `TempoClient`.

use crate::api::{self, RequestDescriptor};
use crate::cli::presentation::{license_text, version_report};
use crate::cli::validate;
use crate::client::TempoClient;
use crate::command::CommandId;
use crate::config::{ConfigLoader, TempoConfig};
use crate::error::TempoError;
use crate::format;
use crate::monitor::{Monitor, PollTarget, Screen, StatusPoller};
use crate::settings::Settings;
use crate::transport::Transport;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Whether and how a dispatched request hands over to the status monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monitoring {
    Off,
    /// Monitor from the first poll; the request is not sent on its own.
    Immediate(PollTarget),
    /// Send the request, then monitor only if the reply shows an active state.
    WhenActive(PollTarget),
}

/// A request to the instrument plus its monitoring mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub request: RequestDescriptor,
    pub monitoring: Monitoring,
}

impl Dispatch {
    fn plain(request: RequestDescriptor) -> Self {
        Self {
            request,
            monitoring: Monitoring::Off,
        }
    }

    fn monitorable(request: RequestDescriptor, monitor: bool, target: PollTarget) -> Self {
        let monitoring = if monitor {
            Monitoring::Immediate(target)
        } else {
            Monitoring::Off
        };
        Self {
            request,
            monitoring,
        }
    }
}

/// What one invocation does.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    License,
    Config,
    Version,
    Instrument(Dispatch),
}

/// Resolve the route for the active command. No command means the liveness probe.
pub fn plan(
    command: Option<CommandId>,
    settings: &Settings,
    now_millis: i64,
) -> Result<Route, TempoError> {
    let Some(command) = command else {
        return Ok(Route::Instrument(Dispatch::plain(api::ping())));
    };

    let dispatch = match command {
        CommandId::License => return Ok(Route::License),
        CommandId::Config => return Ok(Route::Config),
        CommandId::Version => return Ok(Route::Version),
        CommandId::Lid => Dispatch::monitorable(api::lid(), settings.monitor, PollTarget::Lid),
        CommandId::Status => Dispatch::monitorable(
            api::status(),
            settings.monitor,
            PollTarget::Instrument,
        ),
        CommandId::Run => {
            let request = validate::run_request(settings, now_millis)?;
            let monitoring = if settings.monitor {
                Monitoring::WhenActive(PollTarget::Run)
            } else {
                Monitoring::Off
            };
            Dispatch {
                request,
                monitoring,
            }
        }
        CommandId::Reports => Dispatch::plain(validate::reports_request(settings)?),
        CommandId::Open => Dispatch::plain(api::open_lid()),
        CommandId::Close => Dispatch::plain(api::close_lid()),
        CommandId::Errors => Dispatch::plain(api::faults(settings.clear_faults)),
        CommandId::Protocols => Dispatch::plain(api::protocols(settings.public_protocols)),
        CommandId::Stop => Dispatch::plain(api::stop_run()),
        CommandId::Skip => Dispatch::plain(api::skip_step()),
        CommandId::Pause => Dispatch::plain(api::pause_run()),
        CommandId::Resume => Dispatch::plain(api::resume_run()),
    };
    Ok(Route::Instrument(dispatch))
}

fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Runtime context for one invocation: resolved settings, the configuration `config`
/// persists and where it saves to.
pub struct RunContext<'a> {
    settings: &'a Settings,
    config: &'a TempoConfig,
    config_path: Option<PathBuf>,
    clock: fn() -> i64,
}

impl<'a> RunContext<'a> {
    pub fn new(settings: &'a Settings, config: &'a TempoConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            settings,
            config,
            config_path,
            clock: epoch_millis,
        }
    }

    /// Replace the epoch-millisecond clock used for run-start defaults.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Execute the selected command. `connect` is only called for commands that talk to
    /// the instrument, after their options have been validated.
    pub fn execute<T, F>(
        &self,
        selected: &[CommandId],
        connect: F,
        screen: &mut dyn Screen,
        out: &mut dyn Write,
    ) -> Result<(), TempoError>
    where
        T: Transport,
        F: FnOnce(&Settings) -> Result<T, TempoError>,
    {
        let command = CommandId::resolve(selected)?;
        info!(command = command.map_or("ping", CommandId::name), "Routing command");

        match plan(command, self.settings, (self.clock)())? {
            Route::License => writeln!(out, "{}", license_text())?,
            Route::Config => self.save_config(out)?,
            Route::Version => {
                let mut client = TempoClient::new(connect(self.settings)?);
                self.version(&mut client, out)?;
            }
            Route::Instrument(dispatch) => {
                let mut client = TempoClient::new(connect(self.settings)?);
                self.dispatch(&mut client, dispatch, screen, out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn dispatch<T: Transport>(
        &self,
        client: &mut TempoClient<T>,
        dispatch: Dispatch,
        screen: &mut dyn Screen,
        out: &mut dyn Write,
    ) -> Result<(), TempoError> {
        if let Monitoring::Immediate(target) = dispatch.monitoring {
            return self.monitor(client, target, screen, out);
        }

        client.send(&dispatch.request);

        if let Monitoring::WhenActive(target) = dispatch.monitoring {
            let active = client
                .state(target.state_field())
                .map(|state| target.should_continue(&state))
                .unwrap_or(false);
            if active {
                return self.monitor(client, target, screen, out);
            }
            debug!("Run is not active, skipping monitor");
        }

        client.print(self.settings.display, out)
    }

    fn monitor<T: Transport>(
        &self,
        client: &mut TempoClient<T>,
        target: PollTarget,
        screen: &mut dyn Screen,
        out: &mut dyn Write,
    ) -> Result<(), TempoError> {
        info!(poll_target = ?target, interval = self.settings.interval, "Starting monitor");
        let report = Monitor::new(
            StatusPoller::new(client, target),
            screen,
            out,
            Duration::from_secs(self.settings.interval),
            self.settings.display,
        )
        .run()?;

        if report.success() {
            Ok(())
        } else {
            Err(TempoError::MonitorFailed)
        }
    }

    fn version<T: Transport>(
        &self,
        client: &mut TempoClient<T>,
        out: &mut dyn Write,
    ) -> Result<(), TempoError> {
        client.send(&api::ping());
        let outcome = client.last().ok_or(TempoError::NoResponse)?;
        let (report, error) = version_report(outcome);

        writeln!(out, "{}", format::format_value(&report, self.settings.display)?)?;
        out.flush()?;
        error.map_or(Ok(()), Err)
    }

    /// Save the file and command line values as the new defaults, then print them.
    fn save_config(&self, out: &mut dyn Write) -> Result<(), TempoError> {
        self.config.validate().map_err(TempoError::ConfigError)?;

        let path = ConfigLoader::target_path(self.config_path.as_deref())?;
        ConfigLoader::save(&path, self.config)?;

        let view = format::format_value(&self.config.to_display_value(), self.settings.display)?;
        writeln!(out, "{}", view)?;
        Ok(())
    }
}
