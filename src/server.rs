//! After the dev server binds, the user needs the addresses to open — rendered
//! through `Logger::info` so they share the banner and level filtering.

use crate::fmt::{Color, bold, colorize, dim};
use crate::logger::Log;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The port is the part users retype into browsers and proxies — bolding `:9000`
/// makes it scannable inside the colored URL. Anchored to the end so `:digits`
/// earlier in the URL (IPv6 hosts, path segments) is never mistaken for the port.
static PORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\d{1,5})(/?)$").expect("Invalid port regex"));

/// Resolved listen addresses, split the way users think about them.
#[derive(Debug, Clone, Default)]
pub struct ServerUrls {
    /// Loopback addresses, always present once the server binds.
    pub local: Vec<String>,
    /// LAN addresses — empty unless the server was exposed with a host option.
    pub network: Vec<String>,
}

/// Emits one info line per URL. When no network address exists and the user never
/// asked for one, a dimmed hint suggests `--host` instead of staying silent.
pub fn print_server_urls(urls: &ServerUrls, host_configured: bool, logger: &dyn Log) {
    for url in &urls.local {
        logger.info(&url_line("Local:", url));
    }
    for url in &urls.network {
        logger.info(&url_line("Network:", url));
    }

    if urls.network.is_empty() && !host_configured {
        logger.info(&format!(
            "  > {} {}",
            bold("Network:"),
            dim("use --host to expose the server on the network")
        ));
    }
}

fn url_line(label: &str, url: &str) -> String {
    format!("  > {} {}", bold(&format!("{label:<8}")), colorize_url(url))
}

/// Cyan URL with the trailing `:port` segment bolded inside it.
fn colorize_url(url: &str) -> String {
    let cyan = Color::cyan();
    let bolded = PORT_REGEX.replace(url, |caps: &Captures<'_>| {
        // Bold ends with a full SGR reset — re-assert the cyan foreground so the
        // rest of the URL doesn't render uncolored.
        format!("\x1b[1m:{}\x1b[0m{}{}", &caps[1], cyan.fg_ansi(), &caps[2])
    });
    colorize(&bolded, cyan)
}
