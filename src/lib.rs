pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod packer;
pub mod state;
pub mod view;
