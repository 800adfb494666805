pub mod chart;

pub mod util;
