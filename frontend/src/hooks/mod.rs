pub mod use_performance;
