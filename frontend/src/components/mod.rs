pub mod canvas;
pub mod performance_chart;

pub use performance_chart::PerformanceChart;
