//! Client side of the trades API: a typed HTTP client, the view-model it
//! feeds, and the controller that ties the two together.

pub mod api;
pub mod controller;
pub mod view;

pub use api::{ClientError, TradesClient};
pub use controller::TradesController;
pub use view::{Location, StateParams, Transition, TradesView};
