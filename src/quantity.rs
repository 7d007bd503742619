use crate::model::{NodeCategory, NodesQuantity};
use crate::store::DEFAULT_MAX_NODES;

/// Smallest replica count a single node may be decreased to by default.
pub const DEFAULT_NODE_FLOOR: u32 = 1;

/// Guards the increment/decrement controls of node replica counts.
///
/// Clouds and fogs share one cap on their combined total. The counter keeps
/// its own tally of accepted operations but never touches node records;
/// callers apply a change only when the counter returns `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityCounter {
    max_total: u32,
    floor: u32,
    clouds: u32,
    fogs: u32,
}

impl Default for QuantityCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantityCounter {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_NODES, DEFAULT_NODE_FLOOR)
    }

    /// `max_total` caps clouds + fogs, `floor` is the lowest replica count a
    /// node may be decreased to.
    pub fn with_limits(max_total: u32, floor: u32) -> Self {
        Self {
            max_total,
            floor,
            clouds: 0,
            fogs: 0,
        }
    }

    /// Seeds the tally with one replica per requested node.
    pub fn from_quantity(quantity: NodesQuantity, max_total: u32) -> Self {
        Self {
            clouds: quantity.clouds,
            fogs: quantity.fogs,
            ..Self::with_limits(max_total, DEFAULT_NODE_FLOOR)
        }
    }

    pub fn with_floor(mut self, floor: u32) -> Self {
        self.floor = floor;
        self
    }

    /// Replaces the tally, keeping the limits.
    pub fn reseed(&mut self, replicas: NodesQuantity) {
        self.clouds = replicas.clouds;
        self.fogs = replicas.fogs;
    }

    /// Gives back the replicas of a node that left the configuration.
    pub fn release(&mut self, category: NodeCategory, replicas: u32) {
        let tally = self.tally_mut(category);
        *tally = tally.saturating_sub(replicas);
    }

    pub fn increase_clouds(&mut self) -> bool {
        self.increase(NodeCategory::Cloud)
    }

    pub fn increase_fogs(&mut self) -> bool {
        self.increase(NodeCategory::Fog)
    }

    /// `current` is the replica count of the node being decreased.
    pub fn decrease_clouds(&mut self, current: u32) -> bool {
        self.decrease(NodeCategory::Cloud, current)
    }

    pub fn decrease_fogs(&mut self, current: u32) -> bool {
        self.decrease(NodeCategory::Fog, current)
    }

    pub fn increase(&mut self, category: NodeCategory) -> bool {
        if self.total() >= self.max_total {
            log::debug!(
                "Refusing to add a {} replica: total {} reached the maximum {}",
                category,
                self.total(),
                self.max_total
            );
            return false;
        }
        *self.tally_mut(category) += 1;
        true
    }

    pub fn decrease(&mut self, category: NodeCategory, current: u32) -> bool {
        if current <= self.floor {
            return false;
        }
        let tally = self.tally_mut(category);
        *tally = tally.saturating_sub(1);
        true
    }

    pub fn clouds(&self) -> u32 {
        self.clouds
    }

    pub fn fogs(&self) -> u32 {
        self.fogs
    }

    pub fn total(&self) -> u32 {
        self.clouds.saturating_add(self.fogs)
    }

    pub fn max_total(&self) -> u32 {
        self.max_total
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// How many more replicas may be added across both categories.
    pub fn remaining(&self) -> u32 {
        self.max_total.saturating_sub(self.total())
    }

    fn tally_mut(&mut self, category: NodeCategory) -> &mut u32 {
        match category {
            NodeCategory::Cloud => &mut self.clouds,
            NodeCategory::Fog => &mut self.fogs,
        }
    }
}
