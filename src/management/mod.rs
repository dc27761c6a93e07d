mod auth;
mod history;

pub use auth::TokenManager;
pub use history::HISTORY_LIMIT;
pub use history::HistoryError;
pub use history::PlaylistHistoryManager;
