mod component;
mod filter;
mod menu;

pub use component::DatasetSelect;
