//! Recommendation engine
//!
//! A pure function of the three scan results plus the configured audit
//! viewport. Rules are evaluated in a fixed order and each appends at most
//! one advisory, so the output is deterministic for identical inputs.

use crate::config::Settings;
use crate::domain::{ImageReport, LinkReport, PerfSnapshot, Recommendation};

/// Evaluate the advisory rules against the completed scan results
pub fn generate_recommendations(
    links: &LinkReport,
    images: &ImageReport,
    perf: &PerfSnapshot,
    settings: &Settings,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !links.broken.is_empty() {
        recommendations.push(Recommendation::new(
            "🔗",
            "Fix Broken Links",
            format!(
                "There are {} broken links. Update them to maintain good SEO.",
                links.broken.len()
            ),
        ));
    }

    if !images.broken.is_empty() {
        recommendations.push(Recommendation::new(
            "🖼️",
            "Replace Missing Images",
            format!(
                "{} images are broken. Replace or remove them.",
                images.broken.len()
            ),
        ));
    }

    if perf.load_time_ms > settings.slow_load_ms {
        recommendations.push(Recommendation::new(
            "⚡",
            "Optimize Page Load Time",
            format!(
                "Page load time is {}ms. Consider optimizing images and assets.",
                perf.load_time_ms
            ),
        ));
    }

    if perf.dom_count > settings.dom_warning {
        recommendations.push(Recommendation::new(
            "📊",
            "Reduce DOM Complexity",
            format!(
                "Page has {} DOM elements. Consider simplifying structure.",
                perf.dom_count
            ),
        ));
    }

    // Fires when the configured audit viewport is wider than the mobile
    // breakpoint, i.e. the audit did not run in a narrow layout. Inherited
    // behavior, kept as-is; see DESIGN.md.
    if settings.viewport_width > settings.mobile_breakpoint {
        recommendations.push(Recommendation::new(
            "📱",
            "Test Mobile Responsiveness",
            "Test your site on mobile devices to ensure responsive design is working properly.",
        ));
    }

    recommendations.push(Recommendation::new(
        "🔍",
        "SEO Best Practices",
        "Ensure all pages have meta descriptions, proper heading hierarchy, and alt text on images.",
    ));

    recommendations.push(Recommendation::new(
        "🔒",
        "Security Check",
        "Review SSL certificate, HTTPS status, and security headers regularly.",
    ));

    recommendations
}
