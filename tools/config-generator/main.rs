use clap::Parser;
use fogconf::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RESOURCES: [&str; 3] = ["LPDS_original", "LPDS_16", "LPDS_32"];
const INSTANCES: [&str; 3] = ["a1.large", "a1.xlarge", "a2.large"];
const STRATEGIES: [&str; 3] = ["random", "pliant", "runtime"];

/// A CLI tool to generate configuration snapshots for the fogconf serializer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_configuration.json")]
    output: String,

    /// Number of cloud nodes
    #[arg(long, default_value_t = 1)]
    clouds: u32,

    /// Number of fog nodes
    #[arg(long, default_value_t = 2)]
    fogs: u32,

    /// Number of stations
    #[arg(long, default_value_t = 3)]
    stations: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut state = ConfigurationState::new();
    let requested = NodesQuantity::new(cli.clouds, cli.fogs);
    if requested.total() > state.max_num_of_nodes() {
        eprintln!(
            "Error: {} nodes requested, but at most {} are allowed",
            requested.total(),
            state.max_num_of_nodes()
        );
        std::process::exit(1);
    }
    state.set_nodes_quantity(requested);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let nodes = (1..=cli.clouds)
        .map(|i| (format!("cloud{}", i), NodeCategory::Cloud))
        .chain((1..=cli.fogs).map(|i| (format!("fog{}", i), NodeCategory::Fog)));
    for (id, category) in nodes {
        let mut editor = generate_node(&mut rng, &id, category);
        // Spend some of the remaining replica budget on this node.
        while rng.random_bool(0.3) && editor.increase_quantity(state.quantity_counter_mut()) {}
        let node = editor.commit(&mut state);
        log::info!(
            "Generated {} node '{}' with {} application(s), {} replica(s)",
            category,
            node.id,
            node.applications.len(),
            node.quantity
        );
    }
    connect_fogs_to_clouds(&mut rng, &mut state, cli.clouds, cli.fogs);

    for i in 1..=cli.stations {
        let station = generate_station(&mut rng, &format!("station{}", i));
        state.save_station(station);
    }
    state.change_stations();

    let snapshot = state.snapshot();
    snapshot.save(&cli.output)?;
    println!(
        "Successfully generated {} node(s) and {} station(s) into '{}'",
        snapshot.nodes.len(),
        snapshot.stations.len(),
        cli.output
    );
    Ok(())
}

/// Builds a fully configured node through the editor.
fn generate_node(rng: &mut StdRng, id: &str, category: NodeCategory) -> NodeEditor {
    let resource = RESOURCES[rng.random_range(0..RESOURCES.len())];
    let mut editor = NodeEditor::new(id, category).with_resource(resource);

    let target = rng.random_range(1..=4);
    editor.set_application_target(target);

    let mut applications = ApplicationMap::new();
    let mut assigned = 0;
    let mut index = 1;
    while assigned < target {
        let quantity = rng.random_range(1..=target - assigned);
        applications.insert(Application {
            id: format!("{}-app{}", id, index),
            tasksize: rng.random_range(1_000..50_000),
            freq: rng.random_range(1..10) * 60_000,
            instance: INSTANCES[rng.random_range(0..INSTANCES.len())].to_string(),
            num_of_instruction: rng.random_range(100..2_000),
            threshold: rng.random_range(1..5),
            strategy: STRATEGIES[rng.random_range(0..STRATEGIES.len())].to_string(),
            can_join: rng.random_bool(0.5),
            quantity,
        });
        assigned += quantity;
        index += 1;
    }
    editor.apply_dialog(DialogOutcome::new(applications, true));
    editor
}

/// Every fog gets a random cloud as parent.
fn connect_fogs_to_clouds(rng: &mut StdRng, state: &mut ConfigurationState, clouds: u32, fogs: u32) {
    if clouds == 0 {
        return;
    }
    for i in 1..=fogs {
        let cloud = format!("cloud{}", rng.random_range(1..=clouds));
        let latency = rng.random_range(10..100);
        state.connect(&format!("fog{}", i), Neighbour::parent(cloud, latency));
    }
    state.generate_graph();
}

fn generate_station(rng: &mut StdRng, id: &str) -> Station {
    let starttime = rng.random_range(0..10) * 60_000;
    let mut station = Station {
        starttime,
        stoptime: starttime + rng.random_range(1..24) * 3_600_000,
        filesize: rng.random_range(50..500),
        freq: rng.random_range(1..10) * 60_000,
        sensor: rng.random_range(1..5),
        maxinbw: rng.random_range(10..100) * 1_000,
        maxoutbw: rng.random_range(10..100) * 1_000,
        diskbw: rng.random_range(10..100) * 1_000,
        reposize: rng.random_range(1..10) * 1_000_000,
        strategy: STRATEGIES[rng.random_range(0..STRATEGIES.len())].to_string(),
        radius: f64::from(rng.random_range(10..500u32)),
        quantity: rng.random_range(1..5),
        ..Station::new(id)
    };
    station.refresh_validity();
    station
}
