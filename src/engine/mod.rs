pub mod scoring;
pub mod shuffle;
pub mod verify;

pub use verify::Verdict;
