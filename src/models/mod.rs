pub mod duration;
pub mod record;
pub mod store;

pub use duration::WorkDuration;
pub use record::HistoryRecord;
pub use store::Store;
