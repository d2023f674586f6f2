pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod paths;
pub mod registry;
pub mod router;
pub mod shell;
pub mod view;
