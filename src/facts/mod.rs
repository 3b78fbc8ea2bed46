//! Recorded facts, as the client sees them

mod file;
mod store;

pub use file::load_facts_file;
pub use store::FactStore;
