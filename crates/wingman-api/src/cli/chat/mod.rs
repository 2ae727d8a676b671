//! Interactive terminal chat.

pub mod banner;
pub mod input;
pub mod loop_runner;

pub use loop_runner::run_chat;
