//! The four audit checks: links, images, performance, recommendations

mod images;
mod links;
mod perf;
mod recommend;

pub use images::{FsImageProbe, ImageProbe, ImageScanner, LocatedImage};
pub use links::{FsProbe, HttpProbe, LinkProbe, LinkScanner, ProbeError};
pub use perf::sample_performance;
pub use recommend::generate_recommendations;
