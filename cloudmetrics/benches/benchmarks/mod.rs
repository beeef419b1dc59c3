pub mod export;
pub mod labels;
pub mod resource;
