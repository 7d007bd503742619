//! Turns a [`ConfigurationObject`] into the [`WireDocument`] the simulator
//! backend accepts.
//!
//! The transform is pure apart from station placement, which draws random
//! device positions. Inputs are expected to have passed editor validation;
//! the serializer does not check them again. A node without applications,
//! for example, simply yields an appliance with an empty application list.

use crate::model::{ComputingNode, ConfigurationObject, Station};
use itertools::Itertools;
use rand::Rng;

mod document;
mod placement;
mod timezone;
mod xml;

pub use document::*;
pub use placement::{Placement, round_to};
pub use timezone::{host_offset_minutes, timezone_offset_hours};

/// Builds the wire document for one user.
#[derive(Debug, Clone)]
pub struct Serializer {
    email: String,
    placement: Placement,
    raw_tz_offset_minutes: Option<i32>,
}

pub struct SerializerBuilder {
    email: String,
    placement: Placement,
    raw_tz_offset_minutes: Option<i32>,
}

impl SerializerBuilder {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            placement: Placement::default(),
            raw_tz_offset_minutes: None,
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Pins the timezone instead of reading the host's. Takes the raw
    /// `getTimezoneOffset`-style value (minutes, positive west of UTC).
    pub fn with_timezone_offset_minutes(mut self, raw_offset_minutes: i32) -> Self {
        self.raw_tz_offset_minutes = Some(raw_offset_minutes);
        self
    }

    pub fn build(self) -> Serializer {
        Serializer {
            email: self.email,
            placement: self.placement,
            raw_tz_offset_minutes: self.raw_tz_offset_minutes,
        }
    }
}

impl Serializer {
    pub fn builder(email: impl Into<String>) -> SerializerBuilder {
        SerializerBuilder::new(email)
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Serializes using the thread-local RNG for placement.
    pub fn serialize(&self, config: &ConfigurationObject) -> WireDocument {
        self.serialize_with_rng(config, &mut rand::rng())
    }

    pub fn serialize_with_rng<R: Rng>(
        &self,
        config: &ConfigurationObject,
        rng: &mut R,
    ) -> WireDocument {
        let appliance = config
            .nodes
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
            .map(Self::appliance)
            .collect();

        let mut device = Vec::new();
        for station in config.stations.values().sorted_by(|a, b| a.id.cmp(&b.id)) {
            self.push_devices(station, rng, &mut device);
        }

        let tz_offset = self.timezone_offset();
        log::info!(
            "Serialized configuration for '{}': {} appliance(s), {} device(s), tzOffset {}",
            self.email,
            config.nodes.len(),
            device.len(),
            tz_offset
        );

        WireDocument {
            configuration: WireConfiguration {
                email: self.email.clone(),
                tz_offset,
                appliances: AppliancesSection {
                    appliances: Appliances { appliance },
                },
                devices: DevicesSection {
                    devices: Devices { device },
                },
            },
        }
    }

    /// Offset in whole hours, east of UTC positive.
    pub fn timezone_offset(&self) -> i32 {
        let raw = self
            .raw_tz_offset_minutes
            .unwrap_or_else(host_offset_minutes);
        timezone_offset_hours(raw)
    }

    fn appliance(node: &ComputingNode) -> Appliance {
        let application = node
            .applications
            .iter()
            .map(|app| ApplicationEntry {
                tasksize: app.tasksize,
                name: app.id.clone(),
                freq: app.freq,
                instance: app.instance.clone(),
                num_of_instruction: app.num_of_instruction,
                threshold: app.threshold,
                strategy: app.strategy.clone(),
                can_join: app.can_join,
            })
            .collect();

        let neighbour = node.neighbours.as_ref().map(|neighbours| {
            neighbours
                .iter()
                .map(|n| NeighbourEntry {
                    name: n.name.clone(),
                    latency: n.latency,
                    parent: n.parent.then_some(true),
                })
                .collect()
        });

        Appliance {
            name: node.id.clone(),
            xcoord: node.x,
            ycoord: node.y,
            file: node.resource.clone(),
            applications: ApplicationList { application },
            neighbours: NeighbourList { neighbour },
        }
    }

    /// Expands a station into one device per instance, each placed on its own.
    fn push_devices<R: Rng>(&self, station: &Station, rng: &mut R, out: &mut Vec<Device>) {
        for _ in 0..station.quantity {
            let (x_coord, y_coord) = self.placement.place(station.radius, rng);
            out.push(Device {
                starttime: station.starttime,
                stoptime: station.stoptime,
                number: 1,
                filesize: station.filesize,
                name: station.id.clone(),
                freq: station.freq,
                sensor: station.sensor,
                maxinbw: station.maxinbw,
                maxoutbw: station.maxoutbw,
                diskbw: station.diskbw,
                reposize: station.reposize,
                strategy: station.strategy.clone(),
                x_coord,
                y_coord,
            });
        }
    }
}

/// Serializes with default settings: host timezone, legacy placement and
/// the thread-local RNG.
pub fn to_wire_document(config: &ConfigurationObject, email: &str) -> WireDocument {
    Serializer::builder(email).build().serialize(config)
}
