pub mod cli;
pub mod config;
pub mod display;
pub mod logging;
pub mod scan;
pub mod session;

pub use config::AppConfig;
pub use session::SessionController;
