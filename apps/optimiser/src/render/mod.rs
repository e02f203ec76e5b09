// Fixed-layout text-to-PDF renderer: the one non-trivial component.
// layout produces a pure list of draw operations; pdf serialises it.

pub mod layout;
pub mod metrics;
pub mod pdf;

pub use layout::{layout, DrawOp, Page, PageGeometry, RenderedDocument};
pub use metrics::{get_metrics, FontStyle};
