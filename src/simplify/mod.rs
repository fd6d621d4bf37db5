//! Polyline simplification.

mod rdp;
mod simplifier;

pub use rdp::{rdp, rdp_indices, rdp_indices_with};
pub use simplifier::Simplifier;
