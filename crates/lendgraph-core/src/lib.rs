//! LendGraph Core Library
//!
//! Domain model and pure transformation logic for the direct lending graph.
//! Each node label has a closed property schema; the open-ended display
//! projection exists only at the API boundary (tooltips, detail JSON).

pub mod error;
pub mod model;
pub mod viz;

pub use error::{LendError, LendResult};
pub use model::{
    Borrower, Connection, Deal, GraphStats, Label, Lender, NodeDetail, NodeRecord, NodeRef,
    NodeSummary, RelKind, RelRecord, Sector,
};
pub use viz::{build_viz_graph, VizEdge, VizGraph, VizNode};
