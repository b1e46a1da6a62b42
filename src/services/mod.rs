pub mod report;
pub mod scheduler;
pub mod sync;
