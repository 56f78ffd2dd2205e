//! License text printed by `tempo license`.

const CLIENT_LICENSE: &str = "\
tempo - PTC Tempo Automation API command line client

MIT License

Copyright (c) 2023 The tempo client authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

const THIRD_PARTY: &str = "\
Third-party components

This program links the following crates, each distributed under the MIT or
Apache-2.0 license: clap, config, chrono, crossterm, owo-colors, reqwest, semver,
serde, serde_json, thiserror, toml, tracing, tracing-subscriber.";

/// Client license followed by the third-party notice.
pub fn license_text() -> String {
    format!("{}\n\n{}", CLIENT_LICENSE, THIRD_PARTY)
}
