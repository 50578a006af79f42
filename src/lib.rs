pub mod app;
pub mod errors;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod state;
pub mod ui;
pub mod widgets;

pub use app::router;
pub use state::AppState;
