//! Session-scoped configuration state.
//!
//! [`ConfigurationState`] is the single source of truth while a user builds a
//! configuration. It is constructed once per session and passed by reference
//! to every editor and to the serializer; nothing in this crate keeps a
//! global instance.

use crate::model::{
    ComputingNode, ComputingNodes, ConfigurationObject, Neighbour, NodeCategory, NodesQuantity,
    Station,
};
use crate::quantity::{DEFAULT_NODE_FLOOR, QuantityCounter};
use ahash::AHashMap;
use itertools::Itertools;

mod channel;

pub use channel::{EventChannel, LatestValue, SubscriptionId, SubscriptionIds};

/// Default cap on the total number of node replicas (clouds + fogs).
pub const DEFAULT_MAX_NODES: u32 = 10;

#[derive(Debug)]
pub struct ConfigurationState {
    max_num_of_nodes: u32,
    computing_nodes: ComputingNodes,
    stations: AHashMap<String, Station>,
    nodes_quantity: LatestValue<NodesQuantity>,
    quantity_counter: QuantityCounter,
    subscription_ids: SubscriptionIds,
    generate_graph: EventChannel,
    stations_changed: EventChannel,
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationState {
    pub fn new() -> Self {
        Self::with_max_nodes(DEFAULT_MAX_NODES)
    }

    pub fn with_max_nodes(max_num_of_nodes: u32) -> Self {
        Self::with_limits(max_num_of_nodes, DEFAULT_NODE_FLOOR)
    }

    /// `node_floor` is the lowest replica count a node may be decreased to.
    pub fn with_limits(max_num_of_nodes: u32, node_floor: u32) -> Self {
        Self {
            max_num_of_nodes,
            computing_nodes: ComputingNodes::default(),
            stations: AHashMap::new(),
            nodes_quantity: LatestValue::new(),
            quantity_counter: QuantityCounter::with_limits(max_num_of_nodes, node_floor),
            subscription_ids: SubscriptionIds::new(),
            generate_graph: EventChannel::new(),
            stations_changed: EventChannel::new(),
        }
    }

    pub fn max_num_of_nodes(&self) -> u32 {
        self.max_num_of_nodes
    }

    // --- Node quantity (replaying) ---

    /// Publishes the desired cloud/fog split. Late subscribers still receive
    /// the most recent value. The replica tally is recounted for the new split.
    pub fn set_nodes_quantity(&mut self, quantity: NodesQuantity) {
        log::debug!(
            "Nodes quantity set to {} cloud(s), {} fog(s)",
            quantity.clouds,
            quantity.fogs
        );
        self.nodes_quantity.set(quantity);
        self.recount_replicas();
    }

    pub fn nodes_quantity(&self) -> Option<NodesQuantity> {
        self.nodes_quantity.get().copied()
    }

    pub fn subscribe_nodes_quantity(
        &mut self,
        callback: impl FnMut(&NodesQuantity) + 'static,
    ) -> SubscriptionId {
        self.nodes_quantity
            .subscribe(&mut self.subscription_ids, callback)
    }

    /// The session's replica counter. There is exactly one per session, so
    /// replicas granted through it stay counted for every later editor.
    pub fn quantity_counter(&self) -> &QuantityCounter {
        &self.quantity_counter
    }

    pub fn quantity_counter_mut(&mut self) -> &mut QuantityCounter {
        &mut self.quantity_counter
    }

    /// Saved nodes count with their replicas, requested nodes not saved yet
    /// with one each.
    fn recount_replicas(&mut self) {
        let requested = self.nodes_quantity().unwrap_or_default();
        let count = |category: NodeCategory, requested: u32| {
            let saved = self.computing_nodes.category(category);
            let replicas = saved
                .values()
                .fold(0u32, |total, node| total.saturating_add(node.quantity));
            let pending = requested.saturating_sub(u32::try_from(saved.len()).unwrap_or(u32::MAX));
            replicas.saturating_add(pending)
        };
        let replicas = NodesQuantity::new(
            count(NodeCategory::Cloud, requested.clouds),
            count(NodeCategory::Fog, requested.fogs),
        );
        self.quantity_counter.reseed(replicas);
    }

    // --- Notifications (fire-and-forget) ---

    pub fn generate_graph(&mut self) {
        self.generate_graph.emit();
    }

    pub fn change_stations(&mut self) {
        self.stations_changed.emit();
    }

    pub fn on_generate_graph(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.generate_graph
            .subscribe(&mut self.subscription_ids, callback)
    }

    pub fn on_stations_changed(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.stations_changed
            .subscribe(&mut self.subscription_ids, callback)
    }

    /// Removes a subscription from whichever channel holds it.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.nodes_quantity.unsubscribe(id)
            || self.generate_graph.unsubscribe(id)
            || self.stations_changed.unsubscribe(id)
    }

    // --- Stations ---

    /// Upserts a station by id. Every other station loses its input focus,
    /// so at most one station is focused afterwards.
    pub fn save_station(&mut self, station: Station) {
        for other in self.stations.values_mut() {
            if other.id != station.id && other.focused_input_name.is_some() {
                other.focused_input_name = None;
            }
        }
        log::debug!("Saving station '{}'", station.id);
        self.stations.insert(station.id.clone(), station);
    }

    /// All stored stations. The order carries no meaning.
    pub fn get_station_array(&self) -> Vec<Station> {
        self.stations.values().cloned().collect()
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn remove_station(&mut self, id: &str) -> Option<Station> {
        self.stations.remove(id)
    }

    // --- Computing nodes ---

    /// Upserts a node into its own category.
    pub fn save_node(&mut self, node: ComputingNode) {
        log::debug!(
            "Saving {} node '{}' (configured: {})",
            node.category(),
            node.id,
            node.is_configured
        );
        self.computing_nodes
            .category_mut(node.category())
            .insert(node.id.clone(), node);
    }

    /// Removes a node and gives its replicas back to the counter.
    pub fn remove_node(&mut self, id: &str, is_cloud: bool) -> Option<ComputingNode> {
        let category = NodeCategory::from_is_cloud(is_cloud);
        let node = self.computing_nodes.category_mut(category).remove(id)?;
        self.quantity_counter.release(category, node.quantity);
        Some(node)
    }

    pub fn computing_nodes(&self) -> &ComputingNodes {
        &self.computing_nodes
    }

    /// Adds (or replaces) a neighbour relation on the node `from`.
    /// Returns `false` when no node with that id exists.
    pub fn connect(&mut self, from: &str, neighbour: Neighbour) -> bool {
        let Some(node) = self.computing_nodes.find_mut(from) else {
            log::warn!("Cannot connect unknown node '{}' to '{}'", from, neighbour.name);
            return false;
        };
        let neighbours = node.neighbours.get_or_insert_with(Vec::new);
        match neighbours.iter_mut().find(|n| n.name == neighbour.name) {
            Some(existing) => *existing = neighbour,
            None => neighbours.push(neighbour),
        }
        true
    }

    // --- Session ---

    /// Collects the session into a [`ConfigurationObject`].
    ///
    /// Clouds and fogs share one id space in the result. Ids are only unique
    /// per category, so a fog overwrites a cloud with the same id.
    pub fn snapshot(&self) -> ConfigurationObject {
        let collisions: Vec<&String> = self
            .computing_nodes
            .clouds
            .keys()
            .chain(self.computing_nodes.fogs.keys())
            .duplicates()
            .collect();
        for id in &collisions {
            log::warn!("Node id '{}' is used by a cloud and a fog; the fog wins", id);
        }

        let nodes = self
            .computing_nodes
            .iter()
            .map(|node| (node.id.clone(), node.clone()))
            .collect();

        ConfigurationObject {
            nodes,
            stations: self.stations.clone(),
        }
    }

    /// Drops all configured nodes, stations, the quantity split and the
    /// replica tally. Subscriptions stay registered.
    pub fn reset(&mut self) {
        log::info!("Resetting configuration session");
        self.computing_nodes = ComputingNodes::default();
        self.stations.clear();
        self.nodes_quantity.clear();
        self.quantity_counter.reseed(NodesQuantity::default());
    }
}
