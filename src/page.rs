//! HTML page model
//!
//! Parses a document with html5ever and exposes the read surface the
//! scanners need: hyperlinks and images in document order, plus the total
//! element count.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::path::{Path, PathBuf};

/// An image element with its src and optional alt attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub src: String,
    pub alt: Option<String>,
}

/// One parsed HTML document
#[derive(Debug, Clone)]
pub struct Page {
    /// Where the document came from
    pub path: PathBuf,
    /// href of every `a[href]`, document order
    pub links: Vec<String>,
    /// Every `img` carrying a src attribute, document order
    pub images: Vec<PageImage>,
    /// Total number of element nodes in the document
    pub element_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Page {
    /// Read and parse an HTML file
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let html = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(path, &html))
    }

    /// Parse an HTML string
    ///
    /// html5ever recovers from malformed markup, so parsing itself never
    /// fails.
    pub fn parse(path: impl Into<PathBuf>, html: &str) -> Self {
        let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let mut page = Self {
            path: path.into(),
            links: Vec::new(),
            images: Vec::new(),
            element_count: 0,
        };
        page.collect(&dom.document);
        page
    }

    /// Directory the page lives in, used to resolve relative srcs
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    fn collect(&mut self, handle: &Handle) {
        if let NodeData::Element { name, attrs, .. } = &handle.data {
            self.element_count += 1;

            match &*name.local {
                "a" => {
                    if let Some(href) = attr_value(attrs, "href") {
                        self.links.push(href);
                    }
                }
                "img" => {
                    if let Some(src) = attr_value(attrs, "src") {
                        self.images.push(PageImage {
                            src,
                            alt: attr_value(attrs, "alt"),
                        });
                    }
                }
                _ => {}
            }
        }

        for child in handle.children.borrow().iter() {
            self.collect(child);
        }
    }
}

fn attr_value(
    attrs: &std::cell::RefCell<Vec<html5ever::Attribute>>,
    name: &str,
) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}

/// Find every HTML file under a site directory, sorted for determinism
pub fn find_pages(root: &Path) -> Vec<PathBuf> {
    let mut pages = Vec::new();

    let walker = ignore::WalkBuilder::new(root).hidden(true).build();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") {
                pages.push(path.to_path_buf());
            }
        }
    }

    pages.sort();
    pages
}
