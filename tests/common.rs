//! Common test utilities for building configuration fixtures.
use fogconf::prelude::*;

/// The station from the documented example: radius 10, three instances.
#[allow(dead_code)]
pub fn example_station() -> Station {
    Station {
        starttime: 0,
        stoptime: 100,
        filesize: 5,
        freq: 1,
        sensor: 1,
        maxinbw: 10,
        maxoutbw: 10,
        diskbw: 10,
        reposize: 100,
        strategy: "x".to_string(),
        radius: 10.0,
        quantity: 3,
        valid: true,
        ..Station::new("s1")
    }
}

/// A fully described application with the given replication count.
#[allow(dead_code)]
pub fn sample_application(id: &str, quantity: u32) -> Application {
    Application {
        id: id.to_string(),
        tasksize: 2_500,
        freq: 60_000,
        instance: "a1.large".to_string(),
        num_of_instruction: 875,
        threshold: 1,
        strategy: "random".to_string(),
        can_join: true,
        quantity,
    }
}

/// A configured node hosting the given applications.
#[allow(dead_code)]
pub fn configured_node(id: &str, is_cloud: bool, apps: Vec<Application>) -> ComputingNode {
    ComputingNode {
        resource: "LPDS_original".to_string(),
        applications: apps.into_iter().collect(),
        is_configured: true,
        ..ComputingNode::new(id, is_cloud)
    }
}

/// One cloud, one fog (child of the cloud) and the example station.
///
/// Topology: `fog1 -> cloud1` (parent, latency 40), `cloud1 -> fog1` (latency 40).
#[allow(dead_code)]
pub fn create_session() -> ConfigurationState {
    let mut state = ConfigurationState::new();
    state.set_nodes_quantity(NodesQuantity::new(1, 1));
    state.save_node(configured_node(
        "cloud1",
        true,
        vec![sample_application("cloud-app", 2)],
    ));
    state.save_node(configured_node(
        "fog1",
        false,
        vec![
            sample_application("fog-app1", 1),
            sample_application("fog-app2", 1),
        ],
    ));
    state.connect("fog1", Neighbour::parent("cloud1", 40));
    state.connect("cloud1", Neighbour::new("fog1", 40));
    state.save_station(example_station());
    state
}

/// A configuration snapshot as a browser session would store it.
#[allow(dead_code)]
pub const SNAPSHOT_JSON: &str = r#"{
    "nodes": {
        "cloud1": {
            "id": "cloud1",
            "x": 0,
            "y": 0,
            "resource": "LPDS_original",
            "applications": {
                "app1": {
                    "id": "app1", "tasksize": 2500, "freq": 60000, "instance": "a1.large",
                    "numOfInstruction": 875, "threshold": 1, "strategy": "random",
                    "canJoin": true, "quantity": 1
                }
            },
            "isCloud": true,
            "isConfigured": true,
            "quantity": 1
        },
        "fog1": {
            "id": "fog1",
            "resource": "LPDS_16",
            "applications": {},
            "isCloud": false,
            "isConfigured": true,
            "quantity": 2,
            "neighbours": [
                {"name": "cloud1", "latency": 55, "parent": true}
            ]
        }
    },
    "stations": {
        "s1": {
            "id": "s1", "starttime": 0, "stoptime": 100, "filesize": 5, "freq": 1,
            "sensor": 1, "maxinbw": 10, "maxoutbw": 10, "diskbw": 10, "reposize": 100,
            "strategy": "x", "radius": 10, "quantity": 3, "valid": true
        }
    }
}"#;
