use crate::Point3d;

use bytemuck::{Pod, Zeroable};

/// The half-space `normal · p >= offset`.
///
/// `Pod` so that the `(a, b, c, d)` coefficient tuples of the wire format can be cast directly
/// into `&[Plane3]`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane3 {
    pub normal: Point3d,
    pub offset: f64,
}

impl Plane3 {
    #[inline]
    pub fn new(normal: Point3d, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// `a*x + b*y + c*z >= d`.
    #[inline]
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(Point3d::new(a, b, c), d)
    }

    /// `true` iff `point` is inside the half-space.
    #[inline]
    pub fn admits(&self, point: Point3d) -> bool {
        self.normal.dot(point) >= self.offset
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
