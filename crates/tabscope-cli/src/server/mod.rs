//! Web server for uploads.

pub mod app;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod state;
