//! End-to-end audit scenarios on temporary site fixtures

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use webaudit::config::Config;
use webaudit::domain::LinkStatus;
use webaudit::runner::AuditRunner;
use webaudit::scan::{FsProbe, ImageProbe};

/// Image probe answering from a fixed table keyed by file name
struct StubImages(HashMap<&'static str, (u32, u32)>);

impl ImageProbe for StubImages {
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        let name = path.file_name()?.to_str()?;
        self.0.get(name).copied()
    }
}

/// Creates a site directory with one index page
fn site_with_index(html: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("index.html"), html).expect("Failed to write index.html");
    dir
}

#[test]
fn broken_internal_link_is_the_only_issue() {
    // Anchor, external, and a missing internal page
    let site = site_with_index(
        r##"<html><body>
            <a href="#top">Top</a>
            <a href="https://example.com">Example</a>
            <a href="/missing-page">Missing</a>
        </body></html>"##,
    );

    let mut runner = AuditRunner::new(site.path(), Config::default());
    let report = runner.scan_links().expect("scan failed");

    assert_eq!(report.total, 3);
    assert_eq!(report.broken.len(), 1);
    assert_eq!(report.broken[0].url, "/missing-page");
    assert_eq!(report.broken[0].status, LinkStatus::Code(404));
    assert_eq!(report.ok, vec!["#top", "https://example.com"]);
}

#[test]
fn existing_internal_link_passes() {
    let site = site_with_index(r#"<a href="about.html">About</a>"#);
    fs::write(site.path().join("about.html"), "<html></html>").unwrap();

    let mut runner = AuditRunner::new(site.path(), Config::default());
    let report = runner.scan_links().expect("scan failed");

    assert!(report.broken.is_empty());
    assert_eq!(report.ok, vec!["about.html"]);
}

#[test]
fn zero_height_image_without_alt_is_broken() {
    let site = site_with_index(
        r#"<html><body>
            <img src="photo.png" alt="Photo">
            <img src="banner.png">
        </body></html>"#,
    );

    let probe = StubImages(HashMap::from([
        ("photo.png", (640, 480)),
        ("banner.png", (640, 0)),
    ]));

    let link_probe = FsProbe::new(site.path(), &Config::default().settings);
    let mut runner = AuditRunner::new(site.path(), Config::default());
    let results = runner.run_all_with(&link_probe, &probe).expect("audit failed");

    assert_eq!(results.images.total, 2);
    assert_eq!(results.images.ok, 1);
    assert_eq!(results.images.broken.len(), 1);
    assert_eq!(results.images.broken[0].src, "banner.png");
    assert_eq!(results.images.broken[0].alt, "No alt text");
}

#[test]
fn links_aggregate_across_pages_in_sorted_page_order() {
    let site = site_with_index(r##"<a href="#home">Home</a>"##);
    fs::write(
        site.path().join("about.html"),
        r##"<a href="#about">About</a><a href="/gone">Gone</a>"##,
    )
    .unwrap();

    let mut runner = AuditRunner::new(site.path(), Config::default());
    let report = runner.scan_links().expect("scan failed");

    // about.html sorts before index.html
    assert_eq!(report.total, 3);
    assert_eq!(report.ok, vec!["#about", "#home"]);
    assert_eq!(report.broken[0].url, "/gone");
}

#[test]
fn single_page_audit_ignores_the_rest_of_the_site() {
    let site = site_with_index(r#"<a href="/gone">Gone</a>"#);
    fs::write(site.path().join("clean.html"), r##"<a href="#ok">Ok</a>"##).unwrap();

    let mut runner =
        AuditRunner::new(site.path(), Config::default()).with_page(site.path().join("clean.html"));
    let report = runner.scan_links().expect("scan failed");

    assert_eq!(report.total, 1);
    assert!(report.broken.is_empty());
}

#[test]
fn full_run_is_idempotent_modulo_timing() {
    let site = site_with_index(
        r##"<html><body>
            <a href="#top">Top</a>
            <a href="/missing-page">Missing</a>
            <img src="logo.png" alt="Logo">
        </body></html>"##,
    );

    let probe = StubImages(HashMap::from([("logo.png", (64, 64))]));
    let link_probe = FsProbe::new(site.path(), &Config::default().settings);

    let mut runner = AuditRunner::new(site.path(), Config::default());
    let first = runner.run_all_with(&link_probe, &probe).expect("first run");
    let second = runner.run_all_with(&link_probe, &probe).expect("second run");

    assert_eq!(first.links.total, second.links.total);
    assert_eq!(first.links.broken, second.links.broken);
    assert_eq!(first.links.ok, second.links.ok);
    assert_eq!(first.images.total, second.images.total);
    assert_eq!(first.images.ok, second.images.ok);
    assert_eq!(first.images.broken, second.images.broken);
    assert_eq!(first.recommendations, second.recommendations);

    let first_perf = first.performance.unwrap();
    let second_perf = second.performance.unwrap();
    assert_eq!(first_perf.dom_count, second_perf.dom_count);
    assert_eq!(first_perf.assets.total_count(), second_perf.assets.total_count());
}

#[test]
fn full_run_produces_recommendations_and_log() {
    let site = site_with_index(
        r#"<html><body>
            <a href="/missing-page">Missing</a>
        </body></html>"#,
    );

    let probe = StubImages(HashMap::new());
    let link_probe = FsProbe::new(site.path(), &Config::default().settings);
    let mut runner = AuditRunner::new(site.path(), Config::default());
    let results = runner.run_all_with(&link_probe, &probe).expect("audit failed");

    // Rule 1 fires first, the unconditional rules close the list
    assert_eq!(results.recommendations[0].title, "Fix Broken Links");
    let last = results.recommendations.last().unwrap();
    assert_eq!(last.title, "Security Check");

    let messages: Vec<&str> = runner
        .log
        .entries()
        .iter()
        .map(|e| e.message.as_str())
        .collect();
    assert!(messages.iter().any(|m| m.contains("Broken link: /missing-page (404)")));
    assert!(messages.iter().any(|m| m.contains("Full audit complete")));
}

#[test]
fn report_files_reflect_the_audit() {
    let site = site_with_index(r#"<a href="/missing-page">Missing</a>"#);

    let probe = StubImages(HashMap::new());
    let link_probe = FsProbe::new(site.path(), &Config::default().settings);
    let mut runner = AuditRunner::new(site.path(), Config::default());
    let results = runner.run_all_with(&link_probe, &probe).expect("audit failed");

    let report_dir = site.path().join("reports");
    let paths = webaudit::report::write_reports(&results, &runner.log, site.path(), &report_dir)
        .expect("report failed");

    let json = fs::read_to_string(&paths.json).unwrap();
    assert!(json.contains("/missing-page"));
    assert!(json.contains("\"status\": 404"));

    let html = fs::read_to_string(&paths.html).unwrap();
    assert!(html.contains("1 ISSUES"));
    assert!(html.contains("Fix Broken Links"));
}
