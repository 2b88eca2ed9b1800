mod analysis_errors;
pub mod orchestrator;
pub mod report;
pub mod stages;

pub use analysis_errors::AnalysisErrors;
pub use orchestrator::{FlybyAnalysis, FlybyAnalysisOrchestrator, FlybyFailure, FlybyOutcome};
pub use stages::AnalysisStage;
