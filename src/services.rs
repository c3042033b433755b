pub mod mass;
pub mod messenger;
pub mod transformer;
