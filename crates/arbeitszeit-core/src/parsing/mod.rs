pub mod normalize;
pub mod rows;
pub mod time;
