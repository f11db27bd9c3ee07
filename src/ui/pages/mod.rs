pub mod analyze;
pub mod history;
pub mod settings;

pub use analyze::AnalyzePage;
pub use history::HistoryPage;
pub use settings::SettingsPage;
