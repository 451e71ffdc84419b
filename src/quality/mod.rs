pub mod formatter;
pub mod issue;
pub mod metrics;
pub mod report;
pub mod scoring;

pub use formatter::*;
pub use issue::*;
pub use metrics::*;
pub use report::*;
pub use scoring::*;
