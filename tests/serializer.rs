//! Tests for the wire document: expansion, placement, timezone and rendering.
mod common;
use common::*;
use fogconf::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

fn serializer(tz_minutes: i32) -> Serializer {
    Serializer::builder("user@example.com")
        .with_timezone_offset_minutes(tz_minutes)
        .build()
}

fn reflecting() -> Serializer {
    Serializer::builder("user@example.com")
        .with_placement(Placement::Reflect)
        .with_timezone_offset_minutes(0)
        .build()
}

fn serialize_seeded(config: &ConfigurationObject, seed: u64) -> WireDocument {
    serializer(0).serialize_with_rng(config, &mut StdRng::seed_from_u64(seed))
}

fn station_only(station: Station) -> ConfigurationObject {
    let mut config = ConfigurationObject::new();
    config.stations.insert(station.id.clone(), station);
    config
}

#[test]
fn test_station_expands_into_single_devices() {
    let document = serialize_seeded(&station_only(example_station()), 7);
    let devices = document.devices();

    assert_eq!(devices.len(), 3);
    for device in devices {
        assert_eq!(device.name, "s1");
        assert_eq!(device.number, 1);
        assert_eq!(device.starttime, 0);
        assert_eq!(device.stoptime, 100);
        assert_eq!(device.filesize, 5);
        assert!((0.0..=10.0).contains(&device.x_coord));
        assert!((-10.0..=10.0).contains(&device.y_coord));
    }
}

#[test]
fn test_reflect_keeps_example_station_within_radius() {
    let config = station_only(example_station());
    let document = reflecting().serialize_with_rng(&config, &mut StdRng::seed_from_u64(7));

    assert_eq!(document.devices().len(), 3);
    for device in document.devices() {
        assert!((0.0..=10.0).contains(&device.x_coord));
        assert!((0.0..=10.0).contains(&device.y_coord));
    }
}

#[test]
fn test_empty_configuration() {
    let document = serialize_seeded(&ConfigurationObject::new(), 1);
    assert!(document.appliances().is_empty());
    assert!(document.devices().is_empty());

    let json: Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
    assert_eq!(json["configuration"]["email"], "user@example.com");
    assert_eq!(
        json["configuration"]["appliances"]["appliances"]["appliance"],
        Value::Array(vec![])
    );
    assert_eq!(
        json["configuration"]["devices"]["devices"]["device"],
        Value::Array(vec![])
    );
}

#[test]
fn test_zero_radius_places_at_origin() {
    let station = Station {
        radius: 0.0,
        ..example_station()
    };
    let document = serialize_seeded(&station_only(station), 3);
    for device in document.devices() {
        assert_eq!((device.x_coord, device.y_coord), (0.0, 0.0));
    }
}

#[test]
fn test_appliances_do_not_depend_on_rng() {
    let config = create_session().snapshot();
    let first = serialize_seeded(&config, 1);
    let second = serialize_seeded(&config, 99);
    assert_eq!(first.appliances(), second.appliances());

    let names: Vec<_> = first.appliances().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["cloud1", "fog1"]);
}

#[test]
fn test_same_seed_gives_same_document() {
    let config = create_session().snapshot();
    assert_eq!(serialize_seeded(&config, 42), serialize_seeded(&config, 42));
}

#[test]
fn test_appliance_fields() {
    let document = serialize_seeded(&create_session().snapshot(), 5);
    let cloud = &document.appliances()[0];

    assert_eq!(cloud.name, "cloud1");
    assert_eq!(cloud.file, "LPDS_original");
    assert_eq!((cloud.xcoord, cloud.ycoord), (0.0, 0.0));
    let app = &cloud.applications.application[0];
    assert_eq!(app.name, "cloud-app");
    assert_eq!(app.tasksize, 2_500);
    assert_eq!(app.num_of_instruction, 875);
    assert!(app.can_join);
}

#[test]
fn test_neighbour_rendering() {
    let mut config = create_session().snapshot();
    let mut lone = ComputingNode::new("cloud2", true);
    lone.resource = "LPDS_32".to_string();
    config.nodes.insert(lone.id.clone(), lone);

    let document = serialize_seeded(&config, 11);
    let json: Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
    let appliances = &json["configuration"]["appliances"]["appliances"]["appliance"];

    // cloud1 -> fog1: plain relation, no parent key.
    let cloud1 = &appliances[0]["neighbours"]["neighbour"][0];
    assert_eq!(cloud1["name"], "fog1");
    assert_eq!(cloud1["latency"], 40);
    assert!(cloud1.get("parent").is_none());

    // cloud2 has no topology at all.
    assert_eq!(appliances[1]["name"], "cloud2");
    assert_eq!(appliances[1]["neighbours"], serde_json::json!({}));

    // fog1 -> cloud1 is a parent relation.
    let fog1 = &appliances[2]["neighbours"]["neighbour"][0];
    assert_eq!(fog1["name"], "cloud1");
    assert_eq!(fog1["parent"], true);
}

#[test]
fn test_wire_key_names() {
    let document = serialize_seeded(&create_session().snapshot(), 2);
    let json: Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
    let configuration = &json["configuration"];

    assert!(configuration.get("tzOffset").is_some());
    let app = &configuration["appliances"]["appliances"]["appliance"][0]["applications"]
        ["application"][0];
    for key in [
        "$tasksize",
        "name",
        "freq",
        "instance",
        "numOfInstruction",
        "threshold",
        "strategy",
        "canJoin",
    ] {
        assert!(app.get(key).is_some(), "missing application key {}", key);
    }
    let device = &configuration["devices"]["devices"]["device"][0];
    for key in [
        "$starttime",
        "$stoptime",
        "$number",
        "$filesize",
        "xCoord",
        "yCoord",
        "reposize",
    ] {
        assert!(device.get(key).is_some(), "missing device key {}", key);
    }
    assert!(device.get("radius").is_none());
    assert!(device.get("quantity").is_none());
}

#[test]
fn test_whole_coordinates_have_no_fraction_on_the_wire() {
    let station = Station {
        radius: 0.0,
        ..example_station()
    };
    let mut config = station_only(station);
    let node = configured_node("cloud1", true, vec![sample_application("app1", 1)]);
    config.nodes.insert(node.id.clone(), node);

    let json = serialize_seeded(&config, 6).to_json().unwrap();
    assert!(json.contains(r#""xcoord":0,"ycoord":0,"#));
    assert!(json.contains(r#""xCoord":0,"yCoord":0}"#));
    assert!(!json.contains("0.0"));
}

#[test]
fn test_timezone_offset() {
    assert_eq!(serializer(300).timezone_offset(), -5);
    assert_eq!(serializer(-120).timezone_offset(), 2);
    assert_eq!(serializer(0).timezone_offset(), 0);

    let document = serializer(300)
        .serialize_with_rng(&ConfigurationObject::new(), &mut StdRng::seed_from_u64(0));
    assert_eq!(document.configuration.tz_offset, -5);
}

#[test]
fn test_default_placement_is_legacy() {
    let station = Station {
        quantity: 50,
        ..example_station()
    };
    let config = station_only(station);
    let explicit = Serializer::builder("user@example.com")
        .with_placement(Placement::Legacy)
        .with_timezone_offset_minutes(0)
        .build();
    assert_eq!(serializer(0).placement(), Placement::Legacy);

    let document = explicit.serialize_with_rng(&config, &mut StdRng::seed_from_u64(8));
    assert_eq!(document, serialize_seeded(&config, 8));
    for device in document.devices() {
        assert!((0.0..=10.0).contains(&device.x_coord));
        assert!((-10.0..=10.0).contains(&device.y_coord));
    }
}

#[test]
fn test_default_y_fold_reuses_x_draw() {
    assert_eq!(Placement::default().fold(10.0, 4.0, 12.0), (4.0, -6.0));
    assert_eq!(Placement::Reflect.fold(10.0, 4.0, 12.0), (4.0, 2.0));
}

#[test]
fn test_xml_rendering() {
    let document = serialize_seeded(&create_session().snapshot(), 4);

    let appliances = document.appliances_xml().unwrap();
    assert!(appliances.starts_with("<?xml"));
    assert!(appliances.contains("<appliances>"));
    assert!(appliances.contains("<name>cloud1</name>"));
    assert!(appliances.contains(r#"<application tasksize="2500">"#));
    assert!(appliances.contains("<parent>true</parent>"));

    let devices = document.devices_xml().unwrap();
    assert_eq!(devices.matches("<device ").count(), 3);
    assert!(devices.contains(r#"number="1""#));
    assert!(devices.contains("<name>s1</name>"));
}

#[test]
fn test_round_to_one_decimal() {
    assert_eq!(round_half_up(3.14159), 3.1);
    assert_eq!(round_half_up(2.25), 2.3);
    assert_eq!(round_half_up(0.04), 0.0);
}

fn round_half_up(value: f64) -> f64 {
    fogconf::serializer::round_to(value, 1)
}

proptest! {
    #[test]
    fn prop_reflect_keeps_devices_within_radius(
        radius in 0.0f64..1_000.0,
        quantity in 1u32..20,
        seed in any::<u64>()
    ) {
        // Only the reflecting fold stays within the radius; the default
        // legacy fold can push y below zero.
        let station = Station { radius, quantity, ..example_station() };
        let document = reflecting()
            .serialize_with_rng(&station_only(station), &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(document.devices().len(), quantity as usize);
        // Rounding to one decimal may push a coordinate up to 0.05 past the radius.
        let bound = radius + 0.05;
        for device in document.devices() {
            prop_assert_eq!(device.number, 1);
            prop_assert!(device.x_coord >= 0.0 && device.x_coord <= bound);
            prop_assert!(device.y_coord >= 0.0 && device.y_coord <= bound);
        }
    }

    #[test]
    fn prop_device_count_matches_quantities(
        quantities in prop::collection::vec(1u32..6, 0..6)
    ) {
        let mut config = ConfigurationObject::new();
        for (i, quantity) in quantities.iter().enumerate() {
            let station = Station {
                quantity: *quantity,
                ..Station::new(format!("s{}", i))
            };
            config.stations.insert(station.id.clone(), station);
        }
        let document = serialize_seeded(&config, 0);
        let expected: u32 = quantities.iter().sum();
        prop_assert_eq!(document.devices().len() as u64, u64::from(expected));
        prop_assert_eq!(config.device_count(), u64::from(expected));
    }
}
