pub mod app;
pub mod dashboard;
pub mod html;
pub mod refresh;
pub mod table;
pub mod ui;

pub use app::App;
pub use dashboard::{HtmlDashboard, RefreshContext, TerminalDashboard};
pub use refresh::{CycleOutcome, RefreshLoop};
