use super::xml;
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

// Field names below are what the simulator backend parses. A `$` prefix
// marks a field the backend turns into an XML attribute.

/// The document submitted to the simulator backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDocument {
    pub configuration: WireConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfiguration {
    pub email: String,
    #[serde(rename = "tzOffset")]
    pub tz_offset: i32,
    pub appliances: AppliancesSection,
    pub devices: DevicesSection,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppliancesSection {
    pub appliances: Appliances,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Appliances {
    pub appliance: Vec<Appliance>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DevicesSection {
    pub devices: Devices,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Devices {
    pub device: Vec<Device>,
}

/// One computing node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    #[serde(serialize_with = "serialize_coordinate")]
    pub xcoord: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub ycoord: f64,
    pub file: String,
    pub applications: ApplicationList,
    /// Always present; empty when the node has no topology.
    pub neighbours: NeighbourList,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationList {
    pub application: Vec<ApplicationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEntry {
    #[serde(rename = "$tasksize")]
    pub tasksize: u64,
    pub name: String,
    pub freq: u64,
    pub instance: String,
    #[serde(rename = "numOfInstruction")]
    pub num_of_instruction: u64,
    pub threshold: u32,
    pub strategy: String,
    #[serde(rename = "canJoin")]
    pub can_join: bool,
}

/// `{}` for a node without topology, `{"neighbour": [...]}` otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NeighbourList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbour: Option<Vec<NeighbourEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighbourEntry {
    pub name: String,
    pub latency: u64,
    /// Only present for parent relations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<bool>,
}

/// One physical instance of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "$starttime")]
    pub starttime: u64,
    #[serde(rename = "$stoptime")]
    pub stoptime: u64,
    #[serde(rename = "$number")]
    pub number: u32,
    #[serde(rename = "$filesize")]
    pub filesize: u64,
    pub name: String,
    pub freq: u64,
    pub sensor: u64,
    pub maxinbw: u64,
    pub maxoutbw: u64,
    pub diskbw: u64,
    pub reposize: u64,
    pub strategy: String,
    #[serde(rename = "xCoord", serialize_with = "serialize_coordinate")]
    pub x_coord: f64,
    #[serde(rename = "yCoord", serialize_with = "serialize_coordinate")]
    pub y_coord: f64,
}

/// Whole-number coordinates go out as integers (`5`, not `5.0`), which is
/// how the backend has always received them.
fn serialize_coordinate<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Beyond 2^53 an f64 no longer maps onto a unique integer.
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl WireDocument {
    pub fn appliances(&self) -> &[Appliance] {
        &self.configuration.appliances.appliances.appliance
    }

    pub fn devices(&self) -> &[Device] {
        &self.configuration.devices.devices.device
    }

    /// The request body for the backend.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::JsonError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::JsonError(e.to_string()))
    }

    /// The simulator's appliance description file.
    pub fn appliances_xml(&self) -> Result<String, DocumentError> {
        xml::render_appliances(&self.configuration.appliances.appliances)
    }

    /// The simulator's device description file.
    pub fn devices_xml(&self) -> Result<String, DocumentError> {
        xml::render_devices(&self.configuration.devices.devices)
    }
}
