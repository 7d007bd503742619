use clap::{Parser, ValueEnum};
use fogconf::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;

/// Output format of the serialized configuration.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    /// The JSON request body the backend accepts
    Json,
    /// The simulator's appliances.xml and devices.xml
    Xml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlacementCli {
    /// The y axis folds using the x draw, as existing configurations do
    Legacy,
    /// Both axes fold their own draw and stay within the radius
    Reflect,
}

/// Serializes a fog/cloud configuration snapshot for the simulator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration snapshot JSON file
    config_path: String,

    /// Identifier of the submitting user
    #[arg(short, long)]
    email: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: FormatCli,

    /// Output file for JSON, output directory for XML. JSON goes to stdout if omitted.
    #[arg(short, long)]
    output: Option<String>,

    /// Station placement rule
    #[arg(long, value_enum, default_value = "legacy")]
    placement: PlacementCli,

    /// Fixed timezone offset in minutes, positive west of UTC (defaults to the host's)
    #[arg(long, allow_hyphen_values = true)]
    tz_offset_minutes: Option<i32>,

    /// Seed for station placement, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigurationObject::from_file(&cli.config_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    log::info!(
        "Loaded '{}': {} node(s), {} station(s) expanding into {} device(s)",
        cli.config_path,
        config.nodes.len(),
        config.stations.len(),
        config.device_count()
    );

    let placement = match cli.placement {
        PlacementCli::Legacy => Placement::Legacy,
        PlacementCli::Reflect => Placement::Reflect,
    };
    let mut builder = Serializer::builder(cli.email.clone()).with_placement(placement);
    if let Some(raw) = cli.tz_offset_minutes {
        builder = builder.with_timezone_offset_minutes(raw);
    }
    let serializer = builder.build();

    let document = match cli.seed {
        Some(seed) => serializer.serialize_with_rng(&config, &mut StdRng::seed_from_u64(seed)),
        None => serializer.serialize(&config),
    };

    match cli.format {
        FormatCli::Json => write_json(&document, cli.output.as_deref()),
        FormatCli::Xml => write_xml(&document, cli.output.as_deref().unwrap_or(".")),
    }
}

fn write_json(document: &WireDocument, output: Option<&str>) {
    let json = document
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    match output {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            log::info!("Wrote wire document to '{}'", path);
        }
        None => println!("{}", json),
    }
}

fn write_xml(document: &WireDocument, output_dir: &str) {
    fs::create_dir_all(output_dir).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to create directory '{}': {}", output_dir, e))
    });

    let files = [
        ("appliances.xml", document.appliances_xml()),
        ("devices.xml", document.devices_xml()),
    ];
    for (file_name, rendered) in files {
        let xml = rendered.unwrap_or_else(|e| exit_with_error(&e.to_string()));
        let path = Path::new(output_dir).join(file_name);
        fs::write(&path, xml).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
        });
        log::info!("Wrote '{}'", path.display());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
