//! Audit orchestration
//!
//! `AuditRunner` owns the audit target, the config, and the run log, and
//! sequences the individual checks: links, then images, then performance,
//! then recommendations. A full run refuses re-entry while one is already
//! in flight; individual checks stay independently invocable.

use std::path::PathBuf;
use std::time::Instant;

use url::Url;

use crate::config::Config;
use crate::domain::{AuditLog, ImageReport, LinkReport, PerfSnapshot, ScanResults};
use crate::page::{Page, PageError, find_pages};
use crate::scan::{
    FsImageProbe, FsProbe, HttpProbe, ImageProbe, ImageScanner, LinkProbe, LinkScanner,
    LocatedImage, generate_recommendations, sample_performance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Running,
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("an audit is already in progress")]
    Busy,

    #[error("no HTML pages found under {0}")]
    NoPages(PathBuf),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Sequences the audit checks against one site
pub struct AuditRunner {
    config: Config,
    root: PathBuf,
    /// Restrict the audit to a single page instead of the whole site
    page: Option<PathBuf>,
    /// When set, link probes go over HTTP against this base
    base_url: Option<Url>,
    started: Instant,
    state: RunnerState,
    pub log: AuditLog,
}

impl AuditRunner {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            config,
            root: root.into(),
            page: None,
            base_url: None,
            started: Instant::now(),
            state: RunnerState::Idle,
            log: AuditLog::new(),
        }
    }

    /// Echo log entries to stdout as they happen
    pub fn echo_log(mut self) -> Self {
        self.log = AuditLog::with_echo();
        self
    }

    pub fn with_page(mut self, page: impl Into<PathBuf>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Link scan over the audited pages
    pub fn scan_links(&mut self) -> Result<LinkReport, RunnerError> {
        let probe = self.link_probe();
        let pages = self.load_pages()?;
        Ok(self.scan_links_in(&pages, probe.as_ref()))
    }

    /// Image scan over the audited pages
    pub fn scan_images(&mut self) -> Result<ImageReport, RunnerError> {
        let pages = self.load_pages()?;
        Ok(self.scan_images_in(&pages, &FsImageProbe))
    }

    /// Performance snapshot for the audited pages
    pub fn sample_performance(&mut self) -> Result<PerfSnapshot, RunnerError> {
        let pages = self.load_pages()?;
        Ok(self.sample_performance_in(&pages))
    }

    /// Full sequential run with the default probes
    pub fn run_all(&mut self) -> Result<ScanResults, RunnerError> {
        let link_probe = self.link_probe();
        self.run_all_with(link_probe.as_ref(), &FsImageProbe)
    }

    /// Full sequential run with injected probes
    pub fn run_all_with(
        &mut self,
        link_probe: &dyn LinkProbe,
        image_probe: &dyn ImageProbe,
    ) -> Result<ScanResults, RunnerError> {
        if self.state == RunnerState::Running {
            return Err(RunnerError::Busy);
        }
        self.state = RunnerState::Running;

        let result = self.run_all_inner(link_probe, image_probe);

        // Idle again on every exit path, errors included
        self.state = RunnerState::Idle;
        result
    }

    fn run_all_inner(
        &mut self,
        link_probe: &dyn LinkProbe,
        image_probe: &dyn ImageProbe,
    ) -> Result<ScanResults, RunnerError> {
        self.log.info("🚀 Running full website audit...");

        let pages = self.load_pages()?;

        let links = self.scan_links_in(&pages, link_probe);
        let images = self.scan_images_in(&pages, image_probe);
        let performance = self.sample_performance_in(&pages);

        let recommendations = generate_recommendations(
            &links,
            &images,
            &performance,
            &self.config.settings,
        );

        self.log.success("🎉 Full audit complete!");

        Ok(ScanResults {
            links,
            images,
            performance: Some(performance),
            recommendations,
        })
    }

    fn scan_links_in(&mut self, pages: &[Page], probe: &dyn LinkProbe) -> LinkReport {
        let hrefs: Vec<String> = pages.iter().flat_map(|p| p.links.clone()).collect();
        LinkScanner::new(probe)
            .include_external(self.config.settings.include_external)
            .scan(&hrefs, &mut self.log)
    }

    fn scan_images_in(&mut self, pages: &[Page], probe: &dyn ImageProbe) -> ImageReport {
        let images: Vec<LocatedImage> = pages
            .iter()
            .flat_map(|page| {
                page.images
                    .iter()
                    .map(|img| LocatedImage::locate(img, &self.root, page.dir()))
                    .collect::<Vec<_>>()
            })
            .collect();
        ImageScanner::new(probe).scan(&images, &mut self.log)
    }

    fn sample_performance_in(&mut self, pages: &[Page]) -> PerfSnapshot {
        let dom_count = pages.iter().map(|p| p.element_count).sum();
        sample_performance(self.started, dom_count, Some(self.root.as_path()), &mut self.log)
    }

    fn link_probe(&self) -> Box<dyn LinkProbe> {
        match &self.base_url {
            Some(base) => Box::new(HttpProbe::new(base.clone(), &self.config.settings)),
            None => Box::new(FsProbe::new(&self.root, &self.config.settings)),
        }
    }

    fn load_pages(&self) -> Result<Vec<Page>, RunnerError> {
        let paths = match &self.page {
            Some(page) => vec![page.clone()],
            None => find_pages(&self.root),
        };
        if paths.is_empty() {
            return Err(RunnerError::NoPages(self.root.clone()));
        }

        paths
            .iter()
            .map(|p| Page::load(p).map_err(RunnerError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ProbeError;
    use std::path::Path;

    struct AllOk;

    impl LinkProbe for AllOk {
        fn probe(&self, _href: &str) -> Result<u16, ProbeError> {
            Ok(200)
        }
    }

    struct NoImages;

    impl ImageProbe for NoImages {
        fn dimensions(&self, _path: &Path) -> Option<(u32, u32)> {
            None
        }
    }

    fn site_with_index() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<html><body><a href=\"#top\">t</a></body></html>",
        )
        .unwrap();
        dir
    }

    #[test]
    fn empty_site_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = AuditRunner::new(dir.path(), Config::default());
        assert!(matches!(runner.run_all(), Err(RunnerError::NoPages(_))));
        // And the runner is usable again afterwards
        assert_eq!(runner.state(), RunnerState::Idle);
    }

    #[test]
    fn full_run_returns_to_idle() {
        let dir = site_with_index();
        let mut runner = AuditRunner::new(dir.path(), Config::default());

        let results = runner.run_all_with(&AllOk, &NoImages).unwrap();

        assert_eq!(runner.state(), RunnerState::Idle);
        assert_eq!(results.links.total, 1);
        assert!(results.performance.is_some());
        assert!(!results.recommendations.is_empty());
    }

    #[test]
    fn individual_scans_do_not_require_a_full_run() {
        let dir = site_with_index();
        let mut runner = AuditRunner::new(dir.path(), Config::default());

        let links = runner.scan_links().unwrap();
        assert_eq!(links.total, 1);
        assert_eq!(links.ok, vec!["#top"]);

        let perf = runner.sample_performance().unwrap();
        assert!(perf.dom_count >= 3);
    }
}
