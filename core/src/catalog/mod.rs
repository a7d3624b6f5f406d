pub mod model;
pub mod parser;
pub mod render;
pub mod workflow;
