//! # fogconf - Fog/Cloud Simulation Configuration Core
//!
//! **fogconf** holds the state of a fog/cloud simulation setup while a user
//! builds it, and turns the finished setup into the document the
//! DISSECT-CF-Fog simulator backend consumes.
//!
//! ## Core Workflow
//!
//! 1.  **Open a session**: create one [`ConfigurationState`](store::ConfigurationState)
//!     and pass it to everything that edits the configuration.
//! 2.  **Edit nodes and stations**: drive a [`NodeEditor`](editor::NodeEditor) per
//!     computing node; it reconciles the node's applications and reports the
//!     resulting record. Stations are saved directly.
//! 3.  **Snapshot**: `snapshot()` collects the session into a
//!     [`ConfigurationObject`](model::ConfigurationObject).
//! 4.  **Serialize**: a [`Serializer`](serializer::Serializer) produces the
//!     [`WireDocument`](serializer::WireDocument), which renders as the JSON
//!     request body or as the simulator's XML files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fogconf::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut state = ConfigurationState::new();
//!     state.set_nodes_quantity(NodesQuantity::new(1, 0));
//!
//!     // Configure a cloud hosting two replicas of one application.
//!     let mut editor = NodeEditor::new("cloud1", NodeCategory::Cloud).with_resource("LPDS_original");
//!     editor.set_application_target(2);
//!     let apps = vec![Application::new("app1", 2)].into_iter().collect();
//!     let node = editor.apply_dialog(DialogOutcome::new(apps, true));
//!     assert!(node.is_configured);
//!     editor.commit(&mut state);
//!
//!     // A station replicated into three devices.
//!     let mut station = Station {
//!         starttime: 0,
//!         stoptime: 100,
//!         radius: 10.0,
//!         quantity: 3,
//!         ..Station::new("s1")
//!     };
//!     station.refresh_validity();
//!     state.save_station(station);
//!
//!     let serializer = Serializer::builder("user@example.com").build();
//!     let document = serializer.serialize(&state.snapshot());
//!     println!("{}", document.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod model;
pub mod prelude;
pub mod quantity;
pub mod serializer;
pub mod store;
