pub mod application;
pub mod configuration;
pub mod node;
pub mod station;

pub use application::*;
pub use configuration::*;
pub use node::*;
pub use station::*;
