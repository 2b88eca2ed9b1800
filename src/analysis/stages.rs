use std::fmt;

/// Progress of a single flyby through the pipeline. Stages only move forward,
/// one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnalysisStage {
    Pending,
    Loaded,
    Sanitized,
    GeometryReduced,
    RegimesSolved,
    ModelsEvaluated,
    Done,
}

impl AnalysisStage {
    pub fn next(self) -> Option<AnalysisStage> {
        match self {
            AnalysisStage::Pending => Some(AnalysisStage::Loaded),
            AnalysisStage::Loaded => Some(AnalysisStage::Sanitized),
            AnalysisStage::Sanitized => Some(AnalysisStage::GeometryReduced),
            AnalysisStage::GeometryReduced => Some(AnalysisStage::RegimesSolved),
            AnalysisStage::RegimesSolved => Some(AnalysisStage::ModelsEvaluated),
            AnalysisStage::ModelsEvaluated => Some(AnalysisStage::Done),
            AnalysisStage::Done => None,
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisStage::Pending => write!(f, "Pending"),
            AnalysisStage::Loaded => write!(f, "Loaded"),
            AnalysisStage::Sanitized => write!(f, "Sanitized"),
            AnalysisStage::GeometryReduced => write!(f, "Geometry Reduced"),
            AnalysisStage::RegimesSolved => write!(f, "Regimes Solved"),
            AnalysisStage::ModelsEvaluated => write!(f, "Models Evaluated"),
            AnalysisStage::Done => write!(f, "Done"),
        }
    }
}

/// Per-flyby state machine
pub struct FlybyPipeline {
    label: String,
    current_stage: AnalysisStage,
}

impl FlybyPipeline {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            current_stage: AnalysisStage::Pending,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn get_current_stage(&self) -> AnalysisStage {
        self.current_stage
    }

    /// Move to the following stage. Returns the new stage, or `None` once done.
    pub fn advance(&mut self) -> Option<AnalysisStage> {
        let next = self.current_stage.next()?;
        log::debug!("Flyby {}: {} -> {}", self.label, self.current_stage, next);
        self.current_stage = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_walks_every_stage_in_order() {
        let mut pipeline = FlybyPipeline::new("C3");
        let mut visited = vec![pipeline.get_current_stage()];
        while let Some(stage) = pipeline.advance() {
            visited.push(stage);
        }

        assert_eq!(
            visited,
            vec![
                AnalysisStage::Pending,
                AnalysisStage::Loaded,
                AnalysisStage::Sanitized,
                AnalysisStage::GeometryReduced,
                AnalysisStage::RegimesSolved,
                AnalysisStage::ModelsEvaluated,
                AnalysisStage::Done,
            ]
        );
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(pipeline.advance(), None);
        assert_eq!(pipeline.get_current_stage(), AnalysisStage::Done);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(AnalysisStage::GeometryReduced.to_string(), "Geometry Reduced");
    }
}
