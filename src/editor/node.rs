use super::reconcile::{DialogOutcome, accepts, truncate_applications};
use super::status::{AppsStatus, NodeStatusIcon, StatusInputs};
use crate::model::{ApplicationMap, ComputingNode, MAX_APPLICATIONS, NodeCategory};
use crate::quantity::QuantityCounter;
use crate::store::ConfigurationState;

/// Editing session for one computing node.
///
/// Holds the node's draft: resource, application target, the applications
/// reconciled through the dialog, and the replica count. Every mutating call
/// returns the node as it should now be reported to the store: a
/// not-configured record while the applications do not add up, a full one
/// once they do. The category is fixed when the editor is created.
#[derive(Debug, Clone)]
pub struct NodeEditor {
    id: String,
    category: NodeCategory,
    quantity: u32,
    resource: Option<String>,
    application_target: u32,
    applications: ApplicationMap,
    dialog_valid: bool,
}

impl NodeEditor {
    pub fn new(id: impl Into<String>, category: NodeCategory) -> Self {
        Self {
            id: id.into(),
            category,
            quantity: 1,
            resource: None,
            application_target: 0,
            applications: ApplicationMap::new(),
            dialog_valid: false,
        }
    }

    /// Starts an editor for an existing node record, keeping its id,
    /// category and replica count.
    pub fn for_node(node: &ComputingNode) -> Self {
        Self {
            quantity: node.quantity,
            ..Self::new(node.id.clone(), node.category())
        }
    }

    /// Preselects a resource, typically the first one the backend offers.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> NodeCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn application_target(&self) -> u32 {
        self.application_target
    }

    pub fn applications(&self) -> &ApplicationMap {
        &self.applications
    }

    pub fn set_resource(&mut self, resource: impl Into<String>) -> ComputingNode {
        self.resource = Some(resource.into());
        self.assemble()
    }

    /// Changes the number of applications the node should host. Lowering it
    /// truncates the existing applications to fit.
    pub fn set_application_target(&mut self, target: u32) -> ComputingNode {
        if target < self.application_target {
            let apps = std::mem::take(&mut self.applications);
            self.applications = truncate_applications(apps, target);
        }
        self.application_target = target;
        self.assemble()
    }

    /// Takes over the result of the application dialog.
    pub fn apply_dialog(&mut self, outcome: DialogOutcome) -> ComputingNode {
        let accepted = accepts(&outcome, self.form_valid(), self.application_target);
        if !accepted {
            log::debug!(
                "Applications of node '{}' not configured: {} of {} assigned",
                self.id,
                outcome.applications.total_quantity(),
                self.application_target
            );
        }
        self.applications = outcome.applications;
        self.dialog_valid = outcome.valid;
        self.assemble()
    }

    /// Mirrors the form validators: a resource is selected, the application
    /// target lies in `1..=MAX_APPLICATIONS` and at least one replica exists.
    pub fn form_valid(&self) -> bool {
        self.resource.is_some()
            && (1..=MAX_APPLICATIONS).contains(&self.application_target)
            && self.quantity >= 1
    }

    pub fn status(&self) -> AppsStatus {
        AppsStatus::derive(StatusInputs {
            target: self.application_target,
            configured_total: self.applications.total_quantity(),
            dialog_valid: self.dialog_valid,
            form_valid: self.form_valid(),
        })
    }

    pub fn status_icon(&self) -> NodeStatusIcon {
        NodeStatusIcon::from_configured(self.status().configured)
    }

    /// Builds the node record for the current draft.
    pub fn assemble(&self) -> ComputingNode {
        let mut node = ComputingNode::new(self.id.clone(), self.category.is_cloud());
        node.quantity = self.quantity;
        if self.status().configured {
            node.is_configured = true;
            node.resource = self.resource.clone().unwrap_or_default();
            node.applications = self.applications.clone();
        }
        node
    }

    /// Assembles the node and records it in the store.
    pub fn commit(&self, state: &mut ConfigurationState) -> ComputingNode {
        let node = self.assemble();
        state.save_node(node.clone());
        node
    }

    /// Adds a replica if the counter allows it.
    pub fn increase_quantity(&mut self, counter: &mut QuantityCounter) -> bool {
        if counter.increase(self.category) {
            self.quantity += 1;
            true
        } else {
            false
        }
    }

    /// Removes a replica if the counter allows it.
    pub fn decrease_quantity(&mut self, counter: &mut QuantityCounter) -> bool {
        if counter.decrease(self.category, self.quantity) {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }
}
