mod risky_term;
mod upload;

pub use risky_term::{RiskyTerm, Severity};
pub use upload::Upload;
