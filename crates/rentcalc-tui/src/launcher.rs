//! Browser launch seam for the outbound search.

use anyhow::Result;

/// Opens a URL in the user's default browser.
///
/// The model talks to this trait so tests can observe launches without
/// touching a real browser.
pub trait SearchLauncher {
    /// Open the URL in a new browsing context.
    fn open(&self, url: &str) -> Result<()>;
}

/// Production launcher backed by the `opener` crate.
pub struct OpenerLauncher;

impl SearchLauncher for OpenerLauncher {
    fn open(&self, url: &str) -> Result<()> {
        opener::open(url).map_err(|err| anyhow::anyhow!("failed to open browser: {err}"))
    }
}
