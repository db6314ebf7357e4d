//! Driver interfaces used by the client.

mod graph_driver;

pub use graph_driver::{GraphDriver, GraphHandle};
