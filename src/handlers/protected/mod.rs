// handlers/protected/mod.rs - Policy-gated handlers
//
// Every handler here sits behind the policy gate; item handlers also behind
// trade resolution, so they receive the loaded trade as an extension.

pub mod trades;

pub use trades::*;
