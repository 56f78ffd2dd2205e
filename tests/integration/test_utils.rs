//! Shared test utilities for integration tests
//!
//! A scripted transport standing in for the instrument, plus isolated XDG directories
//! for tests that touch the global config file.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Mutex;
use tempfile::TempDir;
use tempo::api::RequestDescriptor;
use tempo::cli::{Cli, RunContext};
use tempo::command::CommandId;
use tempo::config::TempoConfig;
use tempo::error::{TempoError, TransportError};
use tempo::monitor::NullScreen;
use tempo::settings::Settings;
use tempo::transport::{HttpReply, Transport};

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Fixed clock for run-start defaults: suffix 4321.
pub const FIXED_MILLIS: i64 = 1_700_000_004_321;

fn fixed_clock() -> i64 {
    FIXED_MILLIS
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<HttpReply, TransportError>>,
    sent: Vec<RequestDescriptor>,
}

/// Transport that answers from a script and records every request. Clones share state,
/// so a test keeps one handle while the router owns another.
#[derive(Clone, Default)]
pub struct FakeTransport {
    script: Rc<RefCell<Script>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and JSON body.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.script
            .borrow_mut()
            .replies
            .push_back(Ok(HttpReply::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.script.borrow_mut().replies.push_back(Err(error));
        self
    }

    /// Requests sent so far, as "VERB /path?query".
    pub fn sent(&self) -> Vec<String> {
        self.script
            .borrow()
            .sent
            .iter()
            .map(|r| r.to_string())
            .collect()
    }

    pub fn sent_requests(&self) -> Vec<RequestDescriptor> {
        self.script.borrow().sent.clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<HttpReply, TransportError> {
        let mut script = self.script.borrow_mut();
        script.sent.push(request.clone());
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {}", request))
    }
}

/// Outcome of one routed invocation.
pub struct Invocation {
    pub result: Result<(), TempoError>,
    pub stdout: String,
    pub connected: bool,
}

/// Parse `args` like the binary does and route them against `transport`.
pub fn invoke(transport: &FakeTransport, args: &[&str]) -> Invocation {
    invoke_with_config(transport, &TempoConfig::default(), None, args)
}

pub fn invoke_with_config(
    transport: &FakeTransport,
    config: &TempoConfig,
    config_path: Option<std::path::PathBuf>,
    args: &[&str],
) -> Invocation {
    let mut argv = vec!["tempo"];
    argv.extend_from_slice(args);
    let cli = <Cli as clap::Parser>::try_parse_from(argv).expect("arguments parse");
    let settings = Settings::resolve(config, &cli);
    let selected: Vec<CommandId> = tempo::cli::selected_commands(&cli);
    route(transport, &settings, &config.with_cli(&cli), config_path, &selected)
}

/// Like the binary: load the configuration from disk and the environment, then route.
pub fn invoke_from_cli(transport: &FakeTransport, args: &[&str]) -> Invocation {
    let mut argv = vec!["tempo"];
    argv.extend_from_slice(args);
    let cli = <Cli as clap::Parser>::try_parse_from(argv).expect("arguments parse");
    let (settings, persisted) = Settings::load(&cli).expect("configuration loads");
    let selected: Vec<CommandId> = tempo::cli::selected_commands(&cli);
    route(transport, &settings, &persisted, cli.config.clone(), &selected)
}

/// Route an explicit command selection with the given settings.
pub fn route(
    transport: &FakeTransport,
    settings: &Settings,
    config: &TempoConfig,
    config_path: Option<std::path::PathBuf>,
    selected: &[CommandId],
) -> Invocation {
    let mut connected = false;
    let mut screen = NullScreen;
    let mut out = Vec::new();
    let context = RunContext::new(settings, config, config_path).with_clock(fixed_clock);
    let result = context.execute(
        selected,
        |_settings| {
            connected = true;
            Ok(transport.clone())
        },
        &mut screen,
        &mut out,
    );
    Invocation {
        result,
        stdout: String::from_utf8(out).expect("utf-8 output"),
        connected,
    }
}

/// Run `f` with XDG_CONFIG_HOME and HOME pointing into `test_dir`, restoring them after.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let home = std::env::var("HOME").ok();
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path());

    let result = f();

    match home {
        Some(orig) => std::env::set_var("HOME", orig),
        None => std::env::remove_var("HOME"),
    }
    match xdg_config_home {
        Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}
