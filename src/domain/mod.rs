//! Pure data structures shared by the actors: configuration, per-philosopher
//! records and the printable events.

pub mod config;
pub mod event;
pub mod philosopher;

pub use config::*;
pub use event::*;
pub use philosopher::*;
