use super::analysis_errors::AnalysisErrors;
use super::stages::{AnalysisStage, FlybyPipeline};
use crate::config::flybys::FlybyCatalog;
use crate::config::regimes::{RegimeCatalog, Region};
use crate::coordinates::flyby_geometry::{ClosestApproach, GeometryReducer, GeometrySeries};
use crate::data::flyby_record::FlybyRecord;
use crate::data::source::TableSource;
use crate::ephemeris::TimeOracle;
use crate::models::body::BodyProperties;
use crate::physics::pileup::{ModelCurve, PileupFieldModel};
use crate::physics::pressure_balance::{mean_pressure, PressureBalanceSolver};
use thiserror::Error;

/// Pile-up model of one region, evaluated along a flyby
#[derive(Debug, Clone)]
pub struct RegionModel {
    pub region: Region,
    pub model: PileupFieldModel,
    pub curve: ModelCurve,
}

/// Everything derived for one flyby
#[derive(Debug, Clone)]
pub struct FlybyAnalysis {
    pub record: FlybyRecord,
    pub geometry: GeometrySeries,
    pub closest_approach: Option<ClosestApproach>,
    pub ionosphere_pressure: f64,
    pub regions: Vec<RegionModel>,
}

impl FlybyAnalysis {
    pub fn label(&self) -> &str {
        self.record.label()
    }

    pub fn relative_time(&self) -> &[f64] {
        self.record.relative_time()
    }

    /// Observed |B| (nT), NaN where missing
    pub fn observed(&self) -> Vec<f64> {
        self.record.magnitudes()
    }

    pub fn region(&self, region: Region) -> Option<&RegionModel> {
        self.regions.iter().find(|r| r.region == region)
    }
}

/// A flyby that could not be analyzed. `stage` is the last stage it completed.
#[derive(Debug, Error)]
#[error("flyby {label} failed after stage {stage}: {error}")]
pub struct FlybyFailure {
    pub label: String,
    pub stage: AnalysisStage,
    #[source]
    pub error: AnalysisErrors,
}

pub type FlybyOutcome = Result<FlybyAnalysis, FlybyFailure>;

pub struct FlybyAnalysisOrchestrator<'a, B: BodyProperties, S: TableSource, O: TimeOracle> {
    body: &'a B,
    catalog: &'a FlybyCatalog,
    regimes: &'a RegimeCatalog,
    source: S,
    oracle: O,
}

impl<'a, B: BodyProperties, S: TableSource, O: TimeOracle> FlybyAnalysisOrchestrator<'a, B, S, O> {
    pub fn new(
        body: &'a B,
        catalog: &'a FlybyCatalog,
        regimes: &'a RegimeCatalog,
        source: S,
        oracle: O,
    ) -> Self {
        Self {
            body,
            catalog,
            regimes,
            source,
            oracle,
        }
    }

    /// Analyze every catalogued flyby.
    pub fn run_catalog(&self) -> Vec<FlybyOutcome> {
        self.run_batch(&self.catalog.labels())
    }

    /// Analyze the requested flybys. One outcome per label, in order; a failed
    /// flyby never stops the others.
    pub fn run_batch(&self, labels: &[&str]) -> Vec<FlybyOutcome> {
        labels
            .iter()
            .map(|label| {
                let outcome = self.analyze(label);
                if let Err(failure) = &outcome {
                    log::warn!("{}", failure);
                }
                outcome
            })
            .collect()
    }

    pub fn analyze(&self, label: &str) -> FlybyOutcome {
        let mut pipeline = FlybyPipeline::new(label);
        self.run_pipeline(&mut pipeline).map_err(|error| FlybyFailure {
            label: label.to_string(),
            stage: pipeline.get_current_stage(),
            error,
        })
    }

    fn run_pipeline(&self, pipeline: &mut FlybyPipeline) -> Result<FlybyAnalysis, AnalysisErrors> {
        let label = pipeline.label().to_string();
        let (orbit, entry) = self.catalog.lookup(&label)?;
        let table_id = self.body.magnetometer_table(orbit);
        let closest_approach = self.oracle.utc_to_epoch(&entry.closest_approach_utc)?;

        let raw = self
            .source
            .load(&table_id)
            .map_err(|e| AnalysisErrors::data_unavailable(&table_id, e))?;
        pipeline.advance();

        let record = FlybyRecord::from_table(
            &label,
            &raw,
            closest_approach,
            self.body.radius(),
            &self.oracle,
        )
        .map_err(|e| AnalysisErrors::data_unavailable(&table_id, e))?;
        pipeline.advance();

        let positions = record.positions();
        let geometry = GeometryReducer::new(self.body.radius())?.reduce(&positions)?;
        let closest = geometry.closest_approach(&positions);
        let inside = geometry.below_surface();
        if !inside.is_empty() {
            log::warn!(
                "Flyby {}: {} samples lie below the surface of {}",
                label,
                inside.len(),
                self.body.name()
            );
        }
        pipeline.advance();

        let ionosphere_pressure = mean_pressure(&self.regimes.ionosphere)?;
        let mut solved = Vec::with_capacity(Region::ALL.len());
        for region in Region::ALL {
            let regime = self.regimes.region(region);
            let amplitude = PressureBalanceSolver::solve(regime, ionosphere_pressure)?;
            log::debug!(
                "Flyby {}: {} A = {:.3}, plasma field = {:.2} nT",
                label,
                region,
                amplitude.factor,
                amplitude.field_amplitude
            );
            solved.push((region, regime.background_field, amplitude));
        }
        pipeline.advance();

        let mut regions = Vec::with_capacity(solved.len());
        for (region, background_field, amplitude) in solved {
            let model =
                PileupFieldModel::from_amplitude(&amplitude, background_field, self.body.radius());
            let field = model.evaluate(&geometry.distance_above_surface, &geometry.polar_angle)?;
            regions.push(RegionModel {
                region,
                model,
                curve: ModelCurve { amplitude, field },
            });
        }
        pipeline.advance();

        match &closest {
            Some(ca) => log::info!(
                "Flyby {}: {} samples, closest approach {:.2} km",
                label,
                record.len(),
                ca.distance_above_surface / 1000.0
            ),
            None => log::info!("Flyby {}: {} samples, no position data", label, record.len()),
        }
        pipeline.advance();

        Ok(FlybyAnalysis {
            record,
            geometry,
            closest_approach: closest,
            ionosphere_pressure,
            regions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::callisto::Callisto;
    use crate::config::regimes::RegimeParameters;
    use crate::data::source::InMemorySource;
    use crate::ephemeris::UtcTimeOracle;
    use approx::assert_abs_diff_eq;

    const C3_TABLE: &str = "\
1996-11-04T13:33:00.000  1.0 2.0 3.0   10.00      1.0 0.0 0.0
1996-11-04T13:34:00.000  1.0 2.0 3.0   999999.99  1.0 0.0 0.0
1996-11-04T13:35:00.000  1.0 2.0 3.0   12.00      1.0 0.0 0.0
";

    fn source() -> InMemorySource {
        InMemorySource::new().with_table("ORB03_CALL_CPHIO.TAB", C3_TABLE)
    }

    #[test]
    fn test_analyze_produces_three_aligned_curves() {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source(), UtcTimeOracle);

        let analysis = orchestrator.analyze("C3").unwrap();
        assert_eq!(analysis.label(), "C3");
        assert_eq!(analysis.regions.len(), 3);
        for region in Region::ALL {
            let model = analysis.region(region).unwrap();
            assert_eq!(model.curve.field.len(), 3);
            // Every sample sits on the surface at the equator
            let peak = model.model.background_field() + model.curve.amplitude.field_amplitude;
            for value in &model.curve.field {
                assert_abs_diff_eq!(*value, peak, epsilon = 1e-6);
            }
        }
        let closest = analysis.closest_approach.unwrap();
        assert_eq!(closest.index, 0);
        assert_abs_diff_eq!(closest.distance_above_surface, 0.0);
    }

    #[test]
    fn test_missing_table_fails_before_loading() {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source(), UtcTimeOracle);

        let failure = orchestrator.analyze("C9").unwrap_err();
        assert_eq!(failure.label, "C9");
        assert_eq!(failure.stage, AnalysisStage::Pending);
        assert!(matches!(
            failure.error,
            AnalysisErrors::DataUnavailable { ref table, .. } if table == "ORB09_CALL_CPHIO.TAB"
        ));
    }

    #[test]
    fn test_malformed_table_fails_after_loading() {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let source = InMemorySource::new().with_table("ORB03_CALL_CPHIO.TAB", "garbage row\n");
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source, UtcTimeOracle);

        let failure = orchestrator.analyze("C3").unwrap_err();
        assert_eq!(failure.stage, AnalysisStage::Loaded);
        assert!(matches!(failure.error, AnalysisErrors::DataUnavailable { .. }));
    }

    #[test]
    fn test_infinite_position_is_a_malformed_table() {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let source = InMemorySource::new().with_table(
            "ORB03_CALL_CPHIO.TAB",
            "1996-11-04T13:33:00.000  1.0 2.0 3.0  10.00  inf 0.0 0.0\n",
        );
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source, UtcTimeOracle);

        let failure = orchestrator.analyze("C3").unwrap_err();
        assert_eq!(failure.stage, AnalysisStage::Loaded);
        assert!(matches!(failure.error, AnalysisErrors::DataUnavailable { .. }));
    }

    #[test]
    fn test_inconsistent_regime_fails_at_solving() {
        let catalog = FlybyCatalog::default();
        let mut regimes = RegimeCatalog::default();
        regimes.inner_lobe = RegimeParameters {
            molecular_mass: 0.0,
            ..regimes.inner_lobe
        };
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source(), UtcTimeOracle);

        let failure = orchestrator.analyze("C3").unwrap_err();
        assert_eq!(failure.stage, AnalysisStage::GeometryReduced);
        assert!(matches!(failure.error, AnalysisErrors::InvalidRegime(_)));
    }

    #[test]
    fn test_batch_keeps_going_past_failures() {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let orchestrator =
            FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source(), UtcTimeOracle);

        let outcomes = orchestrator.run_batch(&["C99", "C3", "C9"]);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(
            &outcomes[0],
            Err(FlybyFailure { error: AnalysisErrors::UnknownFlyby(_), .. })
        ));
        assert!(outcomes[1].is_ok());
        assert!(outcomes[2].is_err());
    }
}
