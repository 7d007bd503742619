//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the fogconf crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use fogconf::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = ConfigurationObject::from_file("path/to/configuration.json")?;
//! let document = to_wire_document(&config, "user@example.com");
//! std::fs::write("appliances.xml", document.appliances_xml()?)?;
//! std::fs::write("devices.xml", document.devices_xml()?)?;
//! # Ok(())
//! # }
//! ```

// Session state and quantity limits
pub use crate::quantity::QuantityCounter;
pub use crate::store::{ConfigurationState, DEFAULT_MAX_NODES, SubscriptionId};

// Domain model
pub use crate::model::{
    Application, ApplicationMap, ComputingNode, ConfigurationObject, MAX_APPLICATIONS,
    Neighbour, NodeCategory, NodesQuantity, Station,
};

// Editor core
pub use crate::editor::{AppsStatus, DialogOutcome, NodeEditor, truncate_applications};

// Serialization
pub use crate::serializer::{Placement, Serializer, WireDocument, to_wire_document};

// Error types
pub use crate::error::{ConfigError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
