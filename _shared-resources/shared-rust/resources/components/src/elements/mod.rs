// GUI Elements module
// Visual components that render UI elements

pub mod geometry_reader;
pub mod segment_control;
pub mod segment_item;

pub use geometry_reader::*;
pub use segment_control::*;
pub use segment_item::*;
