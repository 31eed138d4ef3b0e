/// Rotation in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Builds a rotation from a count of 90 degree steps. Any integer is
    /// accepted and reduced modulo 4, so `-1` is the same as `3`.
    pub const fn from_quadrants(quadrants: i32) -> Self {
        match quadrants.rem_euclid(4) {
            0 => Rotation::None,
            1 => Rotation::Quarter,
            2 => Rotation::Half,
            _ => Rotation::ThreeQuarter,
        }
    }

    pub const fn quadrants(self) -> u8 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }

    pub const fn degrees(self) -> u16 {
        self.quadrants() as u16 * 90
    }

    pub const fn is_identity(self) -> bool {
        matches!(self, Rotation::None)
    }

    /// Maps a point from device space back to user space, rotating about
    /// `(cx, cy)`.
    pub(crate) fn inverse(self, x: f64, y: f64, cx: f64, cy: f64) -> (f64, f64) {
        let (u, v) = (x - cx, y - cy);
        let (su, sv) = match self {
            Rotation::None => (u, v),
            Rotation::Quarter => (v, -u),
            Rotation::Half => (-u, -v),
            Rotation::ThreeQuarter => (-v, u),
        };
        (su + cx, sv + cy)
    }
}

impl From<i32> for Rotation {
    fn from(quadrants: i32) -> Self {
        Rotation::from_quadrants(quadrants)
    }
}
