/// Which pan directions are currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanHoldState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PanHoldState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.direction().is_none()
    }

    /// Unit vector in complex-plane orientation (`+imag` is up), or `None`
    /// when nothing is held or opposite keys cancel out.
    #[must_use]
    pub fn direction(&self) -> Option<[f64; 2]> {
        let x = axis_from_pair(self.right, self.left);
        let y = axis_from_pair(self.up, self.down);
        let length_sq = (x * x) + (y * y);

        if length_sq > 0.0 {
            let inv_length = length_sq.sqrt().recip();
            Some([x * inv_length, y * inv_length])
        } else {
            None
        }
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
