//! robots.txt presence probing.
//!
//! Only existence is checked: the file is never parsed and its rules are not
//! applied. Results are memoized per registrable domain for one run.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::{Config, ROBOTS_PATH};
use crate::error_handling::{
    categorize_reqwest_error, ErrorType, InfoType, InitializationError, ProcessingStats,
};
use crate::initialization::init_client;

/// Result of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// `/robots.txt` answered 200
    Present,
    /// The origin answered with this other status
    Missing(u16),
    /// No answer (timeout, DNS, refused) or no origin to ask
    Failed(ErrorType),
}

impl ProbeOutcome {
    /// Only an exact 200 counts as present.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeOutcome::Present)
    }
}

/// Builds `scheme://host[:port]/robots.txt` from the origin of `url`.
///
/// Returns `None` for URLs without a host.
pub fn robots_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed.host_str()?;
    parsed.join(ROBOTS_PATH).ok().map(String::from)
}

/// Issues robots.txt probes with their own (shorter) timeout.
#[derive(Debug, Clone)]
pub struct RobotsProbe {
    client: reqwest::Client,
}

impl RobotsProbe {
    /// Wraps a client whose timeout is meant for probes.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a probe using `config.robots_timeout()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_client(config, config.robots_timeout())?))
    }

    /// Probes the origin of `url`. Never fails; problems are logged at info level.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        let Some(target) = robots_url(url) else {
            info!("Cannot derive robots.txt location from {url}");
            return ProbeOutcome::Failed(ErrorType::InvalidUrl);
        };

        match self.client.get(&target).send().await {
            Ok(response) if response.status().as_u16() == 200 => {
                debug!("robots.txt present at {target}");
                ProbeOutcome::Present
            }
            Ok(response) => {
                debug!("robots.txt at {target} answered {}", response.status());
                ProbeOutcome::Missing(response.status().as_u16())
            }
            Err(e) => {
                info!("robots.txt check failed for {target}: {e}");
                ProbeOutcome::Failed(categorize_reqwest_error(&e))
            }
        }
    }
}

/// Per-run memo of robots.txt presence, keyed by registrable domain.
///
/// Lives for one run; never persisted or invalidated. Sequential use only:
/// each lookup completes its probe before the next URL is handled.
#[derive(Debug, Default)]
pub struct RobotsCache {
    entries: HashMap<String, bool>,
}

impl RobotsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached answer for `domain`, if it has been probed.
    pub fn get(&self, domain: &str) -> Option<bool> {
        self.entries.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cached answer for `domain`, probing the origin of `url` on a miss.
    ///
    /// Failed probes are cached as `false` too, so a dead origin costs one
    /// timeout per run rather than one per URL.
    pub async fn get_or_probe(
        &mut self,
        domain: &str,
        url: &str,
        probe: &RobotsProbe,
        stats: &ProcessingStats,
    ) -> bool {
        if let Some(present) = self.get(domain) {
            debug!("robots.txt cache hit for {domain}: {present}");
            stats.increment_info(InfoType::RobotsCacheHit);
            return present;
        }

        let outcome = probe.probe(url).await;
        stats.increment_info(match outcome {
            ProbeOutcome::Present => InfoType::RobotsTxtPresent,
            ProbeOutcome::Missing(_) => InfoType::RobotsTxtMissing,
            ProbeOutcome::Failed(_) => InfoType::RobotsProbeFailed,
        });

        let present = outcome.is_present();
        self.entries.insert(domain.to_string(), present);
        present
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
