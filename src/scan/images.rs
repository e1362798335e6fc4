//! Image resource scan
//!
//! An image counts as healthy when it resolves to a local file that decodes
//! with a nonzero intrinsic height. External and data: URIs are skipped
//! outright, so `total` can exceed `ok + broken.len()`; that undercount is
//! deliberate and mirrors the original tool skipping images that had not
//! finished loading.

use std::path::{Path, PathBuf};

use crate::domain::{AuditLog, ImageIssue, ImageReport};
use crate::page::PageImage;

/// Placeholder recorded when a broken image carries no alt text
pub const NO_ALT_TEXT: &str = "No alt text";

/// Reads the intrinsic dimensions of a local image file
pub trait ImageProbe {
    /// (width, height), or None when the file is missing or undecodable
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)>;
}

/// Default probe backed by the `image` crate's header-only dimension read
pub struct FsImageProbe;

impl ImageProbe for FsImageProbe {
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        image::image_dimensions(path).ok()
    }
}

/// An image element resolved against the site layout
#[derive(Debug, Clone)]
pub struct LocatedImage {
    pub src: String,
    pub alt: Option<String>,
    /// Local file the src resolves to; None for external and data: URIs
    pub path: Option<PathBuf>,
}

impl LocatedImage {
    /// Resolve a page image: root-relative srcs against the site root,
    /// other relative srcs against the page's own directory
    pub fn locate(image: &PageImage, site_root: &Path, page_dir: &Path) -> Self {
        let src = image.src.as_str();

        let path = if src.starts_with("http") || src.starts_with("data:") {
            None
        } else {
            let trimmed = src.split(['#', '?']).next().unwrap_or(src);
            if let Some(rooted) = trimmed.strip_prefix('/') {
                Some(site_root.join(rooted))
            } else {
                Some(page_dir.join(trimmed))
            }
        };

        Self {
            src: image.src.clone(),
            alt: image.alt.clone(),
            path,
        }
    }
}

/// Runs the image check over resolved image references
pub struct ImageScanner<'a> {
    probe: &'a dyn ImageProbe,
}

impl<'a> ImageScanner<'a> {
    pub fn new(probe: &'a dyn ImageProbe) -> Self {
        Self { probe }
    }

    pub fn scan(&self, images: &[LocatedImage], log: &mut AuditLog) -> ImageReport {
        log.info("🖼️ Starting image resource scan...");

        let mut report = ImageReport {
            total: images.len(),
            ..Default::default()
        };

        for image in images {
            let Some(path) = &image.path else {
                // External or data: URI, skipped without a verdict
                continue;
            };

            match self.probe.dimensions(path) {
                Some((_, height)) if height > 0 => {
                    report.ok += 1;
                    if image.alt.as_deref().unwrap_or("").trim().is_empty() {
                        log.warning(format!("Image missing alt text: {}", image.src));
                        report.missing_alt.push(image.src.clone());
                    }
                }
                _ => {
                    log.error(format!("Broken image: {}", image.src));
                    report.broken.push(ImageIssue {
                        src: image.src.clone(),
                        alt: image
                            .alt
                            .clone()
                            .filter(|a| !a.trim().is_empty())
                            .unwrap_or_else(|| NO_ALT_TEXT.to_string()),
                    });
                }
            }
        }

        if report.broken.is_empty() {
            log.success(format!(
                "Image scan complete: All {} images OK",
                report.ok
            ));
        } else {
            log.warning(format!(
                "Image scan complete: {} broken images found",
                report.broken.len()
            ));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Probe answering from a fixed table keyed by file name
    struct TableProbe(HashMap<&'static str, (u32, u32)>);

    impl ImageProbe for TableProbe {
        fn dimensions(&self, path: &Path) -> Option<(u32, u32)> {
            let name = path.file_name()?.to_str()?;
            self.0.get(name).copied()
        }
    }

    fn located(src: &str, alt: Option<&str>) -> LocatedImage {
        LocatedImage::locate(
            &PageImage {
                src: src.to_string(),
                alt: alt.map(String::from),
            },
            Path::new("/site"),
            Path::new("/site"),
        )
    }

    #[test]
    fn healthy_and_broken_images_split_the_total() {
        let probe = TableProbe(HashMap::from([
            ("logo.png", (120, 40)),
            ("hero.jpg", (800, 0)),
        ]));
        let scanner = ImageScanner::new(&probe);
        let mut log = AuditLog::new();

        let images = vec![located("logo.png", Some("Logo")), located("hero.jpg", None)];
        let report = scanner.scan(&images, &mut log);

        assert_eq!(report.total, 2);
        assert_eq!(report.ok, 1);
        assert_eq!(
            report.broken,
            vec![ImageIssue {
                src: "hero.jpg".into(),
                alt: NO_ALT_TEXT.into(),
            }]
        );
        assert_eq!(report.ok + report.broken.len(), report.total);
    }

    #[test]
    fn missing_file_is_broken() {
        let probe = TableProbe(HashMap::new());
        let scanner = ImageScanner::new(&probe);
        let mut log = AuditLog::new();

        let report = scanner.scan(&[located("ghost.png", Some("Ghost"))], &mut log);

        assert_eq!(report.broken[0].src, "ghost.png");
        assert_eq!(report.broken[0].alt, "Ghost");
    }

    #[test]
    fn external_and_data_uris_are_skipped() {
        let probe = TableProbe(HashMap::new());
        let scanner = ImageScanner::new(&probe);
        let mut log = AuditLog::new();

        let images = vec![
            located("https://cdn.example/pic.png", None),
            located("data:image/gif;base64,R0lGOD", None),
        ];
        let report = scanner.scan(&images, &mut log);

        assert_eq!(report.total, 2);
        assert_eq!(report.ok, 0);
        assert!(report.broken.is_empty());
    }

    #[test]
    fn healthy_image_without_alt_is_flagged_not_broken() {
        let probe = TableProbe(HashMap::from([("plain.png", (10, 10))]));
        let scanner = ImageScanner::new(&probe);
        let mut log = AuditLog::new();

        let report = scanner.scan(&[located("plain.png", None)], &mut log);

        assert_eq!(report.ok, 1);
        assert!(report.broken.is_empty());
        assert_eq!(report.missing_alt, vec!["plain.png"]);
    }

    #[test]
    fn locate_resolves_root_and_page_relative_srcs() {
        let img = PageImage {
            src: "/img/a.png".into(),
            alt: None,
        };
        let loc = LocatedImage::locate(&img, Path::new("/site"), Path::new("/site/blog"));
        assert_eq!(loc.path.as_deref(), Some(Path::new("/site/img/a.png")));

        let img = PageImage {
            src: "b.png".into(),
            alt: None,
        };
        let loc = LocatedImage::locate(&img, Path::new("/site"), Path::new("/site/blog"));
        assert_eq!(loc.path.as_deref(), Some(Path::new("/site/blog/b.png")));
    }
}
