//! CLI presentation: the reports the client builds itself rather than relaying from the
//! instrument.

mod license;
mod version;

pub use license::license_text;
pub use version::{
    client_major, compatibility, parse_api_major, version_report, Compatibility, CLIENT_VERSION,
};
