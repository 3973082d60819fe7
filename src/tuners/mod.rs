mod counting_tuner;
mod standard_tuner;
mod throughput_tuner;

pub use counting_tuner::CountingTuner;
pub use standard_tuner::StandardTuner;
pub use throughput_tuner::ThroughputTuner;
