//! The non-visual half of the node editors: application reconciliation,
//! derived status, and assembly of the node record handed to the store.

mod node;
mod reconcile;
mod status;

pub use node::NodeEditor;
pub use reconcile::{DialogOutcome, accepts, truncate_applications};
pub use status::{AppsIcon, AppsStatus, AppsTooltip, NodeStatusIcon, StatusInputs};
