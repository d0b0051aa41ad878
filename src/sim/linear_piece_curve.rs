/// A continuous piecewise-linear function through `N` `(x, y)` points,
/// flat before the first point and after the last.
#[derive(Clone, Copy, Debug)]
pub struct LinearPieceCurve<const N: usize> {
    points: [(f32, f32); N],
    /// `1 / (x[i] - x[i - 1])`, unused at index 0
    inv_spans: [f32; N],
}

impl<const N: usize> LinearPieceCurve<N> {
    /// `value_mappings` must be sorted by ascending `x` with no repeats.
    #[must_use]
    pub const fn new(value_mappings: [(f32, f32); N]) -> Self {
        assert!(N != 0);

        let mut inv_spans = [0.; N];
        let mut i = 1;
        while i < N {
            inv_spans[i] = 1. / (value_mappings[i].0 - value_mappings[i - 1].0);
            i += 1;
        }

        Self {
            points: value_mappings,
            inv_spans,
        }
    }

    #[must_use]
    pub fn get_output(&self, input: f32) -> f32 {
        let (first_x, first_y) = self.points[0];
        if input <= first_x {
            return first_y;
        }

        let Some(i) = (1..N).find(|&i| self.points[i].0 > input) else {
            return self.points[N - 1].1;
        };

        let (x0, y0) = self.points[i - 1];
        let (_, y1) = self.points[i];
        y0 + (y1 - y0) * (input - x0) * self.inv_spans[i]
    }

    /// Inverse lookup for curves whose `y` strictly decreases with `x`,
    /// such as speed to curvature.
    #[must_use]
    pub fn get_input_decreasing(&self, output: f32) -> f32 {
        let (first_x, first_y) = self.points[0];
        if output >= first_y {
            return first_x;
        }

        let Some(i) = (1..N).find(|&i| self.points[i].1 < output) else {
            return self.points[N - 1].0;
        };

        let (x0, y0) = self.points[i - 1];
        let (x1, y1) = self.points[i];
        x0 + (x1 - x0) * (output - y0) / (y1 - y0)
    }
}
