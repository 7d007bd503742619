use super::application::ApplicationMap;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two computing node categories. A node never changes category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Cloud,
    Fog,
}

impl NodeCategory {
    pub fn from_is_cloud(is_cloud: bool) -> Self {
        if is_cloud {
            NodeCategory::Cloud
        } else {
            NodeCategory::Fog
        }
    }

    pub fn is_cloud(self) -> bool {
        matches!(self, NodeCategory::Cloud)
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeCategory::Cloud => write!(f, "cloud"),
            NodeCategory::Fog => write!(f, "fog"),
        }
    }
}

/// Adjacency towards another computing node, looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbour {
    /// Id of the target node.
    pub name: String,
    pub latency: u64,
    #[serde(default)]
    pub parent: bool,
}

impl Neighbour {
    pub fn new(name: impl Into<String>, latency: u64) -> Self {
        Self {
            name: name.into(),
            latency,
            parent: false,
        }
    }

    pub fn parent(name: impl Into<String>, latency: u64) -> Self {
        Self {
            parent: true,
            ..Self::new(name, latency)
        }
    }
}

/// A cloud or fog resource definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputingNode {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Name of the resource description file the simulator loads for this node.
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub applications: ApplicationMap,
    pub is_cloud: bool,
    #[serde(default)]
    pub is_configured: bool,
    #[serde(default = "default_node_quantity")]
    pub quantity: u32,
    /// `None` until the topology step has connected the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbours: Option<Vec<Neighbour>>,
}

fn default_node_quantity() -> u32 {
    1
}

impl ComputingNode {
    /// Creates an unconfigured node placed at the origin.
    pub fn new(id: impl Into<String>, is_cloud: bool) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            resource: String::new(),
            applications: ApplicationMap::new(),
            is_cloud,
            is_configured: false,
            quantity: default_node_quantity(),
            neighbours: None,
        }
    }

    pub fn category(&self) -> NodeCategory {
        NodeCategory::from_is_cloud(self.is_cloud)
    }
}

/// Desired number of cloud and fog nodes, as chosen on the quantity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodesQuantity {
    pub clouds: u32,
    pub fogs: u32,
}

impl NodesQuantity {
    pub fn new(clouds: u32, fogs: u32) -> Self {
        Self { clouds, fogs }
    }

    pub fn total(&self) -> u32 {
        self.clouds.saturating_add(self.fogs)
    }
}

/// Configured computing nodes, one id space per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputingNodes {
    pub clouds: AHashMap<String, ComputingNode>,
    pub fogs: AHashMap<String, ComputingNode>,
}

impl ComputingNodes {
    pub fn category(&self, category: NodeCategory) -> &AHashMap<String, ComputingNode> {
        match category {
            NodeCategory::Cloud => &self.clouds,
            NodeCategory::Fog => &self.fogs,
        }
    }

    pub fn category_mut(&mut self, category: NodeCategory) -> &mut AHashMap<String, ComputingNode> {
        match category {
            NodeCategory::Cloud => &mut self.clouds,
            NodeCategory::Fog => &mut self.fogs,
        }
    }

    /// Looks a node up by id, clouds first.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ComputingNode> {
        if self.clouds.contains_key(id) {
            return self.clouds.get_mut(id);
        }
        self.fogs.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.clouds.len() + self.fogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty() && self.fogs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComputingNode> {
        self.clouds.values().chain(self.fogs.values())
    }
}
