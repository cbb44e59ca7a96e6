pub mod bathroom;
pub mod dental;
pub mod stats;
