/// Floor division: the quotient rounded towards negative infinity.
pub fn floor_div(lhs: f64, rhs: f64) -> f64 {
    (lhs / rhs).floor()
}
