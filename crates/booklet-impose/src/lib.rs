pub mod impose;
mod constants;
mod options;
mod stats;
mod transform;
mod types;

pub use constants::*;
pub use impose::{impose, plan_signatures};
pub use options::*;
pub use stats::calculate_statistics;
pub use transform::Transform;
pub use types::*;
