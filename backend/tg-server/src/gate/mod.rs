pub mod auth_outcome;
pub mod authentication_gate;
pub mod gate_error;
