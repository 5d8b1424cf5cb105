// handlers/public/mod.rs - Public handlers (no policy gate)

pub mod service;

pub use service::{health, root};
