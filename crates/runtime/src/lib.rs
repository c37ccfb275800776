pub mod clock;
pub mod frame;
pub mod scheduler;
pub mod tween;

pub use clock::*;
pub use frame::*;
pub use scheduler::*;
pub use tween::*;
