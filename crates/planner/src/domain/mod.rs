//! Domain facades: repositories over a shared store, the statistics
//! engine, and snapshot import/export.

mod categories;
mod snapshot;
mod statistics;
mod tasks;

pub use categories::CategoryRepository;
pub use snapshot::{ImportOutcome, Snapshot, SnapshotService, SNAPSHOT_VERSION};
pub use statistics::{compute, CategoryProgress, Statistics, StatisticsEngine};
pub use tasks::TaskRepository;
