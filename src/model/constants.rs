// Model constants
pub const Z: f64 = 3.0;
pub const MU: f64 = 25.0;
pub const SIGMA: f64 = MU / Z;
pub const BETA: f64 = SIGMA / 2.0;
pub const EPSILON: f64 = 0.0001;
pub const TAU: f64 = MU / 300.0;

// Denominator guards for the truncated-moment functions
pub const MACHINE_EPSILON: f64 = f64::EPSILON;
pub const VT_DENOMINATOR_FLOOR: f64 = 1e-5;
