pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::create as trades_create;
pub use collection::list as trades_list;
pub use record::delete as trade_delete;
pub use record::read as trade_read;
pub use record::update as trade_update;
