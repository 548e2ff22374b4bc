use bytemuck::{Pod, Zeroable};
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub, SubAssign};

/// A 3-dimensional point with `f64` coordinates. Convention is `[x, y, z]`.
///
/// `Pod` so that slices of raw `f64` triples handed over by a marshalling layer can be cast
/// directly into `&[Point3d]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point3d(pub [f64; 3]);

impl Point3d {
    pub const ZERO: Self = Point3d([0.0; 3]);

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub fn fill(value: f64) -> Self {
        Self([value; 3])
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// The componentwise average of `a` and `b`.
    #[inline]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self([
            (a.0[0] + b.0[0]) / 2.0,
            (a.0[1] + b.0[1]) / 2.0,
            (a.0[2] + b.0[2]) / 2.0,
        ])
    }

    #[inline]
    pub fn map_components(self, f: impl Fn(f64) -> f64) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }
}

impl Index<usize> for Point3d {
    type Output = f64;

    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl IndexMut<usize> for Point3d {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.0[axis]
    }
}

impl Add for Point3d {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl AddAssign for Point3d {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point3d {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl SubAssign for Point3d {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Point3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.map_components(|c| c * rhs)
    }
}

impl From<[f64; 3]> for Point3d {
    #[inline]
    fn from(coords: [f64; 3]) -> Self {
        Self(coords)
    }
}

impl From<Point3d> for [f64; 3] {
    #[inline]
    fn from(p: Point3d) -> Self {
        p.0
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
