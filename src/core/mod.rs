pub mod aliases;
pub mod events;
pub mod import;
pub mod log;
pub mod resolver;
pub mod stats;
