pub mod analysis;
pub mod config;

pub use analysis::TextAnalysis;
pub use config::Config;
