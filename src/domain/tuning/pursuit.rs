/// Admission gate for "reachable" bounties.
///
/// A bounty qualifies through either tier: a narrow cone with a long reach, or a
/// wide cone that only applies up close.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitTuning {
    /// Max deviation in degrees between momentum and the bounty for the long tier.
    pub narrow_cone_degrees: f64,

    /// Max distance for the narrow-cone tier.
    pub narrow_range: f64,

    /// Max deviation in degrees for the short tier.
    pub wide_cone_degrees: f64,

    /// Max distance for the wide-cone tier.
    pub wide_range: f64,
}

impl Default for PursuitTuning {
    fn default() -> Self {
        Self {
            narrow_cone_degrees: 15.0,
            narrow_range: 200.0,
            wide_cone_degrees: 45.0,
            wide_range: 50.0,
        }
    }
}
