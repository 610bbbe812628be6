pub mod kpi;
pub mod params;
pub mod samples;
