//! Link integrity scan
//!
//! Hyperlinks are classified before any network traffic happens: same-page
//! anchors and non-navigating schemes are trivially valid, external links
//! are assumed reachable unless `include_external` is set, and everything
//! else gets an existence probe. Probes run sequentially in document order;
//! scan time grows linearly with the number of probed links, which keeps
//! the log interleaving predictable.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::config::Settings;
use crate::domain::{AuditLog, LinkIssue, LinkReport, LinkStatus};

/// Probe failure that is not an HTTP status
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// Existence check for one link target
pub trait LinkProbe {
    /// Returns the status code the target answered with
    fn probe(&self, href: &str) -> Result<u16, ProbeError>;
}

/// Probes targets with HEAD requests against a base URL
pub struct HttpProbe {
    agent: ureq::Agent,
    base: Url,
}

impl HttpProbe {
    pub fn new(base: Url, settings: &Settings) -> Self {
        Self {
            agent: build_agent(settings),
            base,
        }
    }
}

impl LinkProbe for HttpProbe {
    fn probe(&self, href: &str) -> Result<u16, ProbeError> {
        let target = self
            .base
            .join(href)
            .map_err(|e| ProbeError::Unreachable(e.to_string()))?;
        head_status(&self.agent, target.as_str())
    }
}

/// Probes relative targets against a site directory on disk
///
/// Absolute http(s) targets still go over the network, matching the
/// original automation suite.
pub struct FsProbe {
    root: PathBuf,
    agent: ureq::Agent,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self {
            root: root.into(),
            agent: build_agent(settings),
        }
    }
}

impl LinkProbe for FsProbe {
    fn probe(&self, href: &str) -> Result<u16, ProbeError> {
        if href.starts_with("http") {
            return head_status(&self.agent, href);
        }

        // Fragments and query strings never name a file
        let trimmed = href
            .split(['#', '?'])
            .next()
            .unwrap_or(href)
            .trim_start_matches('/');

        if self.root.join(trimmed).exists() {
            Ok(200)
        } else {
            Ok(404)
        }
    }
}

fn build_agent(settings: &Settings) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(settings.link_timeout_secs))
        .user_agent(&settings.user_agent)
        .build()
}

fn head_status(agent: &ureq::Agent, url: &str) -> Result<u16, ProbeError> {
    match agent.head(url).call() {
        Ok(response) => Ok(response.status()),
        Err(ureq::Error::Status(code, _)) => Ok(code),
        Err(e) => Err(ProbeError::Unreachable(e.to_string())),
    }
}

/// Runs the link check over an enumerated set of hrefs
pub struct LinkScanner<'a> {
    probe: &'a dyn LinkProbe,
    include_external: bool,
}

impl<'a> LinkScanner<'a> {
    pub fn new(probe: &'a dyn LinkProbe) -> Self {
        Self {
            probe,
            include_external: false,
        }
    }

    /// Probe http(s) links too instead of trusting them
    pub fn include_external(mut self, yes: bool) -> Self {
        self.include_external = yes;
        self
    }

    pub fn scan(&self, hrefs: &[String], log: &mut AuditLog) -> LinkReport {
        log.info("🔗 Starting link integrity scan...");

        let mut report = LinkReport {
            total: hrefs.len(),
            ..Default::default()
        };

        for href in hrefs {
            if is_trivially_valid(href) {
                report.record_ok(href);
                continue;
            }
            if href.starts_with("http") && !self.include_external {
                report.record_ok(href);
                continue;
            }

            match self.probe.probe(href) {
                Ok(status) if status < 400 => report.record_ok(href),
                Ok(status) => {
                    log.error(format!("Broken link: {} ({})", href, status));
                    report.broken.push(LinkIssue {
                        url: href.clone(),
                        status: LinkStatus::Code(status),
                    });
                }
                Err(_) => {
                    log.warning(format!("Could not reach: {}", href));
                    report.broken.push(LinkIssue {
                        url: href.clone(),
                        status: LinkStatus::Unreachable,
                    });
                }
            }
        }

        if report.broken.is_empty() {
            log.success("Link scan complete: All links OK");
        } else {
            log.warning(format!(
                "Link scan complete: {} broken links found",
                report.broken.len()
            ));
        }

        report
    }
}

/// Targets that never get probed: same-page anchors and non-navigating
/// schemes
fn is_trivially_valid(href: &str) -> bool {
    href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}
