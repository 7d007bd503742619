use rand::Rng;

/// How a random draw in `[0, 2·radius)` is folded back into the station area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// The formula the backend's existing configurations were generated
    /// with: the y axis folds using the x draw, so y can end up in
    /// `[-radius, 0)`.
    #[default]
    Legacy,
    /// Both axes fold their own draw, keeping x and y in `[0, radius]`.
    /// Opt-in, since it changes the placement distribution.
    Reflect,
}

impl Placement {
    /// Draws one device position within `radius` and rounds it to one decimal.
    pub fn place<R: Rng>(self, radius: f64, rng: &mut R) -> (f64, f64) {
        let rx = rng.random::<f64>() * radius * 2.0;
        let ry = rng.random::<f64>() * radius * 2.0;
        let (x, y) = self.fold(radius, rx, ry);
        (round_to(x, 1), round_to(y, 1))
    }

    /// Folds the raw draws `rx`, `ry` into the placement area, unrounded.
    pub fn fold(self, radius: f64, rx: f64, ry: f64) -> (f64, f64) {
        let x = if rx > radius { rx - radius } else { rx };
        let y = match self {
            Placement::Legacy if ry > radius => rx - radius,
            Placement::Reflect if ry > radius => ry - radius,
            _ => ry,
        };
        (x, y)
    }
}

/// Rounds half up at `precision` decimals.
pub fn round_to(value: f64, precision: i32) -> f64 {
    let multiplier = 10f64.powi(precision);
    (value * multiplier + 0.5).floor() / multiplier
}
