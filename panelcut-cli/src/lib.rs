use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod parse;
pub mod session;
pub mod sink;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
