pub mod backend;
pub mod camera;
pub mod renderer;
pub mod textures;

pub use backend::*;
pub use camera::*;
pub use renderer::*;
pub use textures::*;
