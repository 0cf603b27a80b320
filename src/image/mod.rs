pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::Grid;
pub use self::traits::{ImageView, ImageViewMut, Rows};
