pub mod direction;
pub mod geometry;
pub mod multi_index;
pub mod pixel;
pub mod wipes;
