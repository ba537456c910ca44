mod app;
pub use app::App;

pub mod logging;
pub mod prompt;
