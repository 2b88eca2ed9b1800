use super::analysis_errors::AnalysisErrors;
use super::orchestrator::FlybyAnalysis;
use crate::config::regimes::Region;
use csv::Writer;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CurveRow {
    #[serde(rename = "Time From CA (s)")]
    time: f64,
    #[serde(rename = "Observed |B| (nT)")]
    observed: f64,
    #[serde(rename = "Distance Above Surface (km)")]
    distance_km: f64,
    #[serde(rename = "Polar Angle (deg)")]
    polar_angle_deg: f64,
    #[serde(rename = "Current Sheet Model (nT)")]
    current_sheet: f64,
    #[serde(rename = "Inner Lobe Model (nT)")]
    inner_lobe: f64,
    #[serde(rename = "Outer Lobe Model (nT)")]
    outer_lobe: f64,
}

#[derive(Debug, Serialize)]
struct AmplitudeRow {
    #[serde(rename = "Flyby")]
    flyby: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "A")]
    factor: f64,
    #[serde(rename = "Plasma Field (nT)")]
    field_amplitude: f64,
    #[serde(rename = "Background Field (nT)")]
    background_field: f64,
    #[serde(rename = "Reference Pressure")]
    reference_pressure: f64,
    #[serde(rename = "Ionosphere Pressure")]
    ionosphere_pressure: f64,
}

/// Write one row per sample: observed magnitude, geometry and the three model
/// curves. Missing values are written as NaN. Every column must have one value
/// per sample, otherwise nothing is written.
pub fn write_curves<W: Write>(analysis: &FlybyAnalysis, out: W) -> Result<(), AnalysisErrors> {
    let curve = |region: Region| -> Vec<f64> {
        analysis
            .region(region)
            .map(|r| r.curve.field.clone())
            .unwrap_or_else(|| vec![f64::NAN; analysis.record.len()])
    };
    let current_sheet = curve(Region::CurrentSheet);
    let inner_lobe = curve(Region::InnerLobe);
    let outer_lobe = curve(Region::OuterLobe);
    let observed = analysis.observed();

    let samples = analysis.relative_time().len();
    let columns = [
        ("observed |B|", observed.len()),
        ("distance above surface", analysis.geometry.distance_above_surface.len()),
        ("polar angle", analysis.geometry.polar_angle.len()),
        ("current sheet model", current_sheet.len()),
        ("inner lobe model", inner_lobe.len()),
        ("outer lobe model", outer_lobe.len()),
    ];
    if let Some((name, len)) = columns.iter().find(|(_, len)| *len != samples) {
        return Err(AnalysisErrors::InvalidGeometry(format!(
            "flyby {}: {} has {} values for {} samples",
            analysis.label(),
            name,
            len,
            samples
        )));
    }

    let mut writer = Writer::from_writer(out);
    for (i, &time) in analysis.relative_time().iter().enumerate() {
        writer.serialize(CurveRow {
            time,
            observed: observed[i],
            distance_km: analysis.geometry.distance_above_surface[i] / 1000.0,
            polar_angle_deg: analysis.geometry.polar_angle[i].to_degrees(),
            current_sheet: current_sheet[i],
            inner_lobe: inner_lobe[i],
            outer_lobe: outer_lobe[i],
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the solved amplitude of every region.
pub fn write_amplitudes<W: Write>(analysis: &FlybyAnalysis, out: W) -> Result<(), AnalysisErrors> {
    let mut writer = Writer::from_writer(out);

    for region in &analysis.regions {
        writer.serialize(AmplitudeRow {
            flyby: analysis.label().to_string(),
            region: region.region.to_string(),
            factor: region.curve.amplitude.factor,
            field_amplitude: region.curve.amplitude.field_amplitude,
            background_field: region.model.background_field(),
            reference_pressure: region.curve.amplitude.reference_pressure,
            ionosphere_pressure: analysis.ionosphere_pressure,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::orchestrator::FlybyAnalysisOrchestrator;
    use crate::config::callisto::Callisto;
    use crate::config::flybys::FlybyCatalog;
    use crate::config::regimes::RegimeCatalog;
    use crate::data::source::InMemorySource;
    use crate::ephemeris::UtcTimeOracle;

    const TABLE: &str = "\
1997-06-25T13:46:00.000  1.0 2.0 3.0   20.00      1.5 0.0 0.0
1997-06-25T13:47:00.000  1.0 2.0 3.0   999999.99  1.2 0.0 0.0
";

    fn analysis() -> FlybyAnalysis {
        let catalog = FlybyCatalog::default();
        let regimes = RegimeCatalog::default();
        let source = InMemorySource::new().with_table("ORB09_CALL_CPHIO.TAB", TABLE);
        FlybyAnalysisOrchestrator::new(&Callisto, &catalog, &regimes, source, UtcTimeOracle)
            .analyze("C9")
            .unwrap()
    }

    #[test]
    fn test_write_curves() {
        let mut out = Vec::new();
        write_curves(&analysis(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Time From CA (s),Observed |B| (nT)"));
        assert!(lines[1].starts_with("-60.0,20.0,"));
        assert!(lines[2].starts_with("0.0,NaN,"));
    }

    #[test]
    fn test_write_amplitudes() {
        let analysis = analysis();
        let mut out = Vec::new();
        write_amplitudes(&analysis, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().ends_with(
            "Background Field (nT),Reference Pressure,Ionosphere Pressure"
        ));
        let sheet = analysis.region(Region::CurrentSheet).unwrap();
        let row: Vec<f64> = text
            .lines()
            .nth(1)
            .unwrap()
            .rsplit(',')
            .take(2)
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(row[1], sheet.curve.amplitude.reference_pressure);
        assert_eq!(row[0], analysis.ionosphere_pressure);
        assert!(text.contains("C9,current sheet,"));
        assert!(text.contains("C9,inner lobe,"));
        assert!(text.contains("C9,outer lobe,"));
    }

    #[test]
    fn test_write_curves_rejects_misaligned_columns() {
        let mut truncated = analysis();
        truncated.geometry.polar_angle.pop();

        let mut out = Vec::new();
        let result = write_curves(&truncated, &mut out);
        assert!(matches!(result, Err(AnalysisErrors::InvalidGeometry(_))));
        assert!(out.is_empty());

        let mut short_curve = analysis();
        short_curve.regions[1].curve.field.truncate(1);
        assert!(matches!(
            write_curves(&short_curve, Vec::new()),
            Err(AnalysisErrors::InvalidGeometry(_))
        ));
    }
}
