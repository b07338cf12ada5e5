pub mod core;
pub mod data;
pub mod event;
pub mod portfolio;
pub mod prompt;
pub mod stock;
pub mod user;
pub mod view;
