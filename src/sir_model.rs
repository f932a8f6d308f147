pub mod health_states;
pub use health_states::*;

pub mod random_source;
pub use random_source::*;

pub mod error;
pub use error::*;

pub mod agent;
pub use agent::*;

pub mod virus_options;
pub use virus_options::*;

pub mod contact_graph;
pub use contact_graph::*;

pub mod clock;
pub use clock::*;

pub mod metrics;
pub use metrics::*;

pub mod simulation_state;
pub use simulation_state::*;

pub mod engine;
pub use engine::*;

pub mod portrayal;
pub use portrayal::*;

pub mod curve_writer;
pub use curve_writer::*;
