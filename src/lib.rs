//! webaudit - website maintenance audits
//!
//! webaudit scans a static website for broken links and broken images,
//! samples performance figures, and turns the results into a prioritized
//! recommendation list. It works against a local site directory out of the
//! box and can probe links over HTTP against a served base URL instead.
//!
//! The pipeline is four independent checks plus an aggregator:
//! link scan -> image scan -> performance sample -> recommendations,
//! sequenced by [`runner::AuditRunner`] and reported through the audit log
//! and the optional JSON/HTML reports.

pub mod config;
pub mod domain;
pub mod page;
pub mod report;
pub mod runner;
pub mod scan;

pub use domain::*;
