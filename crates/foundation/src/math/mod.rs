pub mod rotation;
pub mod sphere;
pub mod vec;

pub use rotation::*;
pub use sphere::*;
pub use vec::*;
