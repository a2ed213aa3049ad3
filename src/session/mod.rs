//! Interview session flow
//!
//! [`SessionController`] drives one interview at a time through the phases
//! in [`Phase`]; views read it through [`FlowSnapshot`].

pub mod controller;
pub mod state;

pub use controller::{FlowSettings, SessionController};
pub use state::{FlowSnapshot, Pending, Phase};
