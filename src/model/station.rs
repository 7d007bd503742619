use serde::{Deserialize, Serialize};

/// An edge station template. Each of its `quantity` instances becomes one
/// simulator device, placed at random within `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub starttime: u64,
    pub stoptime: u64,
    pub filesize: u64,
    pub freq: u64,
    pub sensor: u64,
    pub maxinbw: u64,
    pub maxoutbw: u64,
    pub diskbw: u64,
    pub reposize: u64,
    pub strategy: String,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_coord: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_coord: Option<f64>,
    pub quantity: u32,
    #[serde(default)]
    pub valid: bool,
    /// Name of the editor input that currently has focus. UI-only.
    #[serde(skip)]
    pub focused_input_name: Option<String>,
}

impl Default for Station {
    fn default() -> Self {
        Self {
            id: String::new(),
            starttime: 0,
            stoptime: 0,
            filesize: 0,
            freq: 0,
            sensor: 0,
            maxinbw: 0,
            maxoutbw: 0,
            diskbw: 0,
            reposize: 0,
            strategy: String::new(),
            radius: 0.0,
            x_coord: None,
            y_coord: None,
            quantity: 1,
            valid: false,
            focused_input_name: None,
        }
    }
}

impl Station {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Recomputes `valid` from the structural rules and returns it.
    pub fn refresh_validity(&mut self) -> bool {
        self.valid = !self.id.trim().is_empty()
            && self.starttime <= self.stoptime
            && self.quantity >= 1
            && self.radius.is_finite()
            && self.radius >= 0.0;
        self.valid
    }

    pub fn is_focused(&self) -> bool {
        self.focused_input_name.is_some()
    }
}
