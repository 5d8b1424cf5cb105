// handlers/mod.rs - Public (no gate) and protected (policy gated) handlers

pub mod protected;
pub mod public;
