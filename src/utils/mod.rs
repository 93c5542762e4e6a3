pub mod time;

pub use time::{FramePacer, Timer};
