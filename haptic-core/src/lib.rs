pub mod action;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod events;
pub mod state;
pub mod trigger;
