pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

#[cfg_attr(not(feature = "tracker"), allow(dead_code))]
pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn is_truthy(&self) -> bool;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    // Non-zero and not NaN, the way a loosely typed attribute reads as "set"
    fn is_truthy(&self) -> bool {
        !self.is_nan() && !self.is_zero()
    }
}
