pub mod dataset_select;
pub mod plotly_chart;
