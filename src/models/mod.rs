pub mod geo;
pub mod item;
pub mod point;

pub use geo::{City, Uf};
pub use item::{Item, NewItem};
pub use point::NewPoint;
