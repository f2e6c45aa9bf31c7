mod error;
mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use render::{CaseReport, LimitsTable, RecommendationPanel};
use ss_case::schema::{CaseDef, ContaminantsDef, EnvironmentDef, FluidDef, OperatingDef, Study};
use ss_core::units::{PressureUnit, TemperatureUnit};
use ss_rules::Recommendation;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(about = "SealSelect CLI - API 682 mechanical seal selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate study file syntax and value ranges
    Validate {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// List cases in a study
    Cases {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// Evaluate the cases of a study
    Evaluate {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
        /// Only evaluate this case
        #[arg(long)]
        case: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Evaluate a single case given on the command line
    Quick(QuickArgs),
    /// Print the service category limits
    Limits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Args)]
struct QuickArgs {
    /// Seal chamber pressure (gauge)
    #[arg(long)]
    pressure: f64,
    /// Unit of --pressure: bar, psi, kpa
    #[arg(long, default_value = "bar")]
    pressure_unit: String,
    /// Pumping temperature
    #[arg(long)]
    temperature: f64,
    /// Unit of --temperature: c, f, k
    #[arg(long, default_value = "c")]
    temperature_unit: String,
    /// Shaft speed (m/s)
    #[arg(long)]
    speed: f64,
    /// Hydrocarbon or Nonhydrocarbon
    #[arg(long, default_value = "Hydrocarbon")]
    fluid_type: String,
    #[arg(long)]
    flashing: bool,
    #[arg(long)]
    hazardous: bool,
    #[arg(long)]
    toxic: bool,
    #[arg(long)]
    flammable: bool,
    #[arg(long)]
    polymerizing: bool,
    #[arg(long)]
    poor_lubricity: bool,
    #[arg(long)]
    caustic: bool,
    #[arg(long)]
    h2s: bool,
    #[arg(long)]
    amines: bool,
    #[arg(long)]
    ammonia: bool,
    /// Abrasive particles / solids present
    #[arg(long)]
    abrasive: bool,
    #[arg(long)]
    exposure_hazard: bool,
    #[arg(long)]
    vapor_risk: bool,
    #[arg(long)]
    environmental_limits: bool,
    #[arg(long)]
    zero_leakage: bool,
    /// Relative density < 0.4
    #[arg(long)]
    low_density: bool,
    /// Vapor pressure > 0.414 kPa at 38 °C
    #[arg(long)]
    high_vapor_pressure: bool,
    /// Mandated arrangement (1, 2 or 3)
    #[arg(long)]
    mandated: Option<u8>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl QuickArgs {
    fn to_case(&self) -> CliResult<CaseDef> {
        let pressure_unit: PressureUnit = self
            .pressure_unit
            .parse()
            .map_err(|e: &str| CliError::InvalidArgument(format!("{e}: {}", self.pressure_unit)))?;
        let temperature_unit: TemperatureUnit = self.temperature_unit.parse().map_err(|e: &str| {
            CliError::InvalidArgument(format!("{e}: {}", self.temperature_unit))
        })?;

        Ok(CaseDef {
            id: "quick".to_string(),
            name: "Command line case".to_string(),
            operating: OperatingDef {
                pressure_bar_g: pressure_unit.to_bar_g(self.pressure),
                temperature_c: temperature_unit.to_degc(self.temperature),
                speed_mps: self.speed,
            },
            fluid: FluidDef {
                fluid_type: self.fluid_type.clone(),
                flashing: self.flashing,
                hazardous: self.hazardous,
                toxic: self.toxic,
                flammable: self.flammable,
                polymerizing: self.polymerizing,
                poor_lubricity: self.poor_lubricity,
                contaminants: ContaminantsDef {
                    caustic: self.caustic,
                    h2s: self.h2s,
                    amines: self.amines,
                    ammonia: self.ammonia,
                    abrasive: self.abrasive,
                },
            },
            environment: EnvironmentDef {
                exposure_hazard: self.exposure_hazard,
                vapor_risk: self.vapor_risk,
                environmental_limits: self.environmental_limits,
                zero_leakage: self.zero_leakage,
                low_density: self.low_density,
                high_vapor_pressure: self.high_vapor_pressure,
                mandated_arrangement: self.mandated,
            },
            notes: None,
        })
    }
}

fn main() -> CliResult<()> {
    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Cases { study_path } => cmd_cases(&study_path),
        Commands::Evaluate {
            study_path,
            case,
            format,
        } => cmd_evaluate(&study_path, case.as_deref(), format),
        Commands::Quick(args) => cmd_quick(&args),
        Commands::Limits => {
            print!("{LimitsTable}");
            Ok(())
        }
    }
}

fn load_study(path: &Path) -> CliResult<Study> {
    ss_case::load(path).map_err(|source| CliError::StudyLoad {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_validate(study_path: &Path) -> CliResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_study(study_path)?;
    println!("✓ Study is valid ({} cases)", study.cases.len());
    Ok(())
}

fn cmd_cases(study_path: &Path) -> CliResult<()> {
    let study = load_study(study_path)?;

    if study.cases.is_empty() {
        println!("No cases found in study");
    } else {
        println!("Cases in study '{}':", study.name);
        for case in &study.cases {
            println!("  {} - {}", case.id, case.name);
        }
    }
    Ok(())
}

/// The named case, or every case in file order.
fn select_cases<'a>(study: &'a Study, case_id: Option<&str>) -> CliResult<Vec<&'a CaseDef>> {
    match case_id {
        Some(id) => study
            .find_case(id)
            .map(|case| vec![case])
            .ok_or_else(|| CliError::CaseNotFound(id.to_string())),
        None => Ok(study.cases.iter().collect()),
    }
}

fn cmd_evaluate(study_path: &Path, case_id: Option<&str>, format: OutputFormat) -> CliResult<()> {
    let study = load_study(study_path)?;

    let results = match case_id {
        None => ss_case::evaluate_study(&study)?,
        Some(id) => {
            let mut results = Vec::new();
            for case in select_cases(&study, Some(id))? {
                results.push((case, ss_rules::evaluate(&case.to_input()?)));
            }
            results
        }
    };

    for (case, rec) in &results {
        tracing::info!(case = %case.id, in_scope = rec.is_within_scope(), "case evaluated");
    }

    emit(&results, format)
}

fn cmd_quick(args: &QuickArgs) -> CliResult<()> {
    let case = args.to_case()?;
    let rec = ss_rules::evaluate(&case.to_input()?);
    emit(&[(&case, rec)], args.format)
}

fn emit(results: &[(&CaseDef, Recommendation)], format: OutputFormat) -> CliResult<()> {
    let reports: Vec<CaseReport<'_>> = results
        .iter()
        .map(|(case, rec)| CaseReport {
            id: &case.id,
            name: &case.name,
            recommendation: *rec,
        })
        .collect();

    match format {
        OutputFormat::Text => {
            if reports.is_empty() {
                println!("No cases to evaluate");
            }
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let title = if report.name.is_empty() {
                    report.id.to_string()
                } else {
                    format!("{} - {}", report.id, report.name)
                };
                let panel = RecommendationPanel {
                    title: &title,
                    recommendation: &report.recommendation,
                };
                print!("{panel}");
            }
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}
