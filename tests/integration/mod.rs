//! Integration tests for the Tempo client: the router driven end to end against a
//! scripted instrument.

mod monitor_sessions;
mod router_commands;
mod test_utils;
