pub mod activity;
pub mod gauge;
pub mod model;
pub mod radar;
pub mod scale;
pub mod sessions;
pub mod smooth;

pub use activity::ActivityChart;
pub use gauge::ScoreGauge;
pub use radar::PerformanceRadar;
pub use sessions::SessionChart;
