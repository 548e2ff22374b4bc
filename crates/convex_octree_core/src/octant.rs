use crate::Point3d;

/// The 3-bit index selecting one of a node's 8 children.
///
/// Bit `i` is set iff the point's coordinate `i` is strictly greater than the node midpoint's
/// coordinate `i`; ties route to the "not greater" side. So child 0 is the low corner octant and
/// child 7 is the high corner octant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OctantCode(u8);

impl OctantCode {
    /// Classify `point` against `midpoint`.
    #[inline]
    pub fn for_point(point: Point3d, midpoint: Point3d) -> Self {
        let mut code = 0;
        for axis in 0..3 {
            if point[axis] > midpoint[axis] {
                code |= 1 << axis;
            }
        }

        Self(code)
    }

    #[inline]
    pub fn new_unchecked(code: u8) -> Self {
        debug_assert!(code < 8);

        Self(code)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// `true` iff this octant is on the high side of the midpoint along `axis`.
    #[inline]
    pub fn is_high(self, axis: usize) -> bool {
        self.0 & (1 << axis) != 0
    }

    /// All 8 codes in ascending order.
    #[inline]
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0u8..8).map(Self)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
