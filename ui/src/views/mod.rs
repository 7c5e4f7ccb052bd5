mod analysis;
mod home;

pub use analysis::{Analysis, AnalysisWorkspace};
pub use home::Home;
