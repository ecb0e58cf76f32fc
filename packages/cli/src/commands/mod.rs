pub mod build;
pub mod replay;

pub use build::{build, BuildArgs};
pub use replay::{replay, ReplayArgs};
