mod strength_meter;

pub use strength_meter::StrengthMeter;
