mod bindings;
mod component;
mod config;

pub use component::PlotlyChart;
pub use config::PlotConfig;
