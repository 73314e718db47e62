pub mod geom;
pub mod color;
pub mod canvas;
pub mod bitmap;
pub mod loader;
pub mod normalize;
pub mod raster;
pub mod render;

pub use self::geom::*;
pub use self::color::*;
pub use self::canvas::*;
pub use self::bitmap::*;
pub use self::loader::*;
pub use self::normalize::*;
pub use self::raster::*;
pub use self::render::*;
