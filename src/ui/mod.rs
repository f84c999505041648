// Module declarations
mod app;
pub mod dashboard;
pub mod panels;
pub mod splash;
pub mod theme;
// Re-exports for external use
pub use app::{App, UIConfig, run};
pub use dashboard::{DashboardState, render_snapshot};
