use pileup::analysis::report::{write_amplitudes, write_curves};
use pileup::analysis::FlybyAnalysisOrchestrator;
use pileup::config::callisto::Callisto;
use pileup::config::flybys::FlybyCatalog;
use pileup::config::regimes::RegimeCatalog;
use pileup::data::DirectorySource;
use pileup::ephemeris::UtcTimeOracle;
use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

// Directory holding the ORBnn_CALL_CPHIO.TAB magnetometer tables
const DATA_DIR_VAR: &str = "PILEUP_DATA_DIR";
// Optional CSV flyby catalog replacing the built-in one
const CATALOG_VAR: &str = "PILEUP_CATALOG";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = env::var(DATA_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let catalog = match env::var(CATALOG_VAR) {
        Ok(path) => FlybyCatalog::from_csv_reader(File::open(path)?)?,
        Err(_) => FlybyCatalog::default(),
    };
    let regimes = RegimeCatalog::default();

    let orchestrator = FlybyAnalysisOrchestrator::new(
        &Callisto,
        &catalog,
        &regimes,
        DirectorySource::new(&data_dir),
        UtcTimeOracle,
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let mut failed = 0;
    for outcome in orchestrator.run_catalog() {
        match outcome {
            Ok(analysis) => {
                let label = analysis.label().to_lowercase();
                write_curves(&analysis, File::create(output_dir.join(format!("{}_curves.csv", label)))?)?;
                write_amplitudes(
                    &analysis,
                    File::create(output_dir.join(format!("{}_amplitudes.csv", label)))?,
                )?;
                println!(
                    "{}: {} samples written to output/{}_curves.csv",
                    analysis.label(),
                    analysis.record.len(),
                    label
                );
            }
            Err(failure) => {
                log::error!("{}", failure);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        println!("{} flybys could not be analyzed", failed);
    }

    Ok(())
}
