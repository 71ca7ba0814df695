//! Multi-stop color gradients.
//!
//! A [`Gradient`] holds an ordered list of stops spread evenly over
//! [0, 1]. Sampling finds the segment the scale falls into and mixes its
//! two stops with [`Rgba::mixed`] in the requested [`MixSpace`].
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{Gradient, MixSpace, Rgba};
//!
//! let ramp = Gradient::new(vec![Rgba::BLACK, Rgba::WHITE]);
//! let steps = ramp.color_palette(3, MixSpace::Rgb);
//! assert_eq!(steps[1], Rgba::rgb(0.5, 0.5, 0.5));
//! ```

use crate::mix::MixSpace;
use crate::space::Rgba;
use tinct_core::clip;

/// Evenly spaced color stops.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    stops: Vec<Rgba>,
}

impl Gradient {
    /// Creates a gradient from stops, first stop at scale 0.
    pub fn new(stops: Vec<Rgba>) -> Self {
        Self { stops }
    }

    /// The stops, in order.
    #[inline]
    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Number of stops.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if there are no stops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at `scale` (clipped to [0, 1]).
    ///
    /// An empty gradient yields [`Rgba::BLACK`]; a single stop is returned
    /// as-is for every scale.
    pub fn pick_color_at(&self, scale: f64, space: MixSpace) -> Rgba {
        match self.stops.as_slice() {
            [] => Rgba::BLACK,
            [only] => *only,
            stops => {
                let last = stops.len() - 1;
                let pos = clip(scale, 0.0, 1.0) * last as f64;
                // scale 1.0 lands on the final segment with a full weight
                let idx = (pos.floor() as usize).min(last - 1);
                let frac = pos - idx as f64;
                stops[idx].mixed(&stops[idx + 1], frac, space)
            }
        }
    }

    /// `amount` colors sampled at evenly spaced scales from 0 to 1 inclusive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::{Gradient, MixSpace, Rgba};
    ///
    /// let g = Gradient::new(vec![Rgba::BLACK, Rgba::WHITE]);
    /// assert!(g.color_palette(0, MixSpace::Rgb).is_empty());
    /// assert_eq!(g.color_palette(1, MixSpace::Rgb), vec![Rgba::BLACK]);
    /// ```
    pub fn color_palette(&self, amount: usize, space: MixSpace) -> Vec<Rgba> {
        match amount {
            0 => Vec::new(),
            1 => vec![self.pick_color_at(0.0, space)],
            n => {
                let denom = (n - 1) as f64;
                (0..n)
                    .map(|i| self.pick_color_at(i as f64 / denom, space))
                    .collect()
            }
        }
    }

    /// Same stops in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            stops: self.stops.iter().rev().copied().collect(),
        }
    }
}

impl From<Vec<Rgba>> for Gradient {
    fn from(stops: Vec<Rgba>) -> Self {
        Self::new(stops)
    }
}

impl FromIterator<Rgba> for Gradient {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb_ramp() -> Gradient {
        Gradient::new(vec![
            Rgba::rgb(1.0, 0.0, 0.0),
            Rgba::rgb(0.0, 1.0, 0.0),
            Rgba::rgb(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn test_empty_and_single() {
        let empty = Gradient::default();
        assert_eq!(empty.pick_color_at(0.3, MixSpace::Rgb), Rgba::BLACK);

        let c = Rgba::rgb(0.2, 0.4, 0.6);
        let single = Gradient::new(vec![c]);
        for scale in [-1.0, 0.0, 0.5, 1.0, 2.0] {
            assert_eq!(single.pick_color_at(scale, MixSpace::Lab), c);
        }
    }

    #[test]
    fn test_endpoints_and_stops() {
        let g = rgb_ramp();
        assert_eq!(g.pick_color_at(0.0, MixSpace::Rgb), g.stops()[0]);
        assert_eq!(g.pick_color_at(0.5, MixSpace::Rgb), g.stops()[1]);
        assert_eq!(g.pick_color_at(1.0, MixSpace::Rgb), g.stops()[2]);
        // out-of-range scale is clipped
        assert_eq!(g.pick_color_at(-3.0, MixSpace::Rgb), g.stops()[0]);
        assert_eq!(g.pick_color_at(7.0, MixSpace::Rgb), g.stops()[2]);
    }

    #[test]
    fn test_last_stop_exact() {
        let first = Rgba::new(0.98785, 0.9, 0.7, 0.98785);
        let last = Rgba::new(0.17999810070004427, 0.1, 0.3, 0.17999810070004427);
        let g = Gradient::new(vec![first, Rgba::rgb(0.33, 0.66, 0.99), last]);
        assert_eq!(g.pick_color_at(1.0, MixSpace::Rgb), last);
        assert_eq!(g.pick_color_at(0.0, MixSpace::Rgb), first);
        assert_eq!(g.color_palette(4, MixSpace::Rgb)[3], last);
    }

    #[test]
    fn test_segment_mix() {
        let g = rgb_ramp();
        let c = g.pick_color_at(0.75, MixSpace::Rgb);
        assert_abs_diff_eq!(c.red(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.green(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.blue(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_color_palette() {
        let g = Gradient::new(vec![Rgba::BLACK, Rgba::WHITE]);
        let p = g.color_palette(5, MixSpace::Rgb);
        assert_eq!(p.len(), 5);
        assert_eq!(p[0], Rgba::BLACK);
        assert_eq!(p[2], Rgba::rgb(0.5, 0.5, 0.5));
        assert_eq!(p[4], Rgba::WHITE);
    }

    #[test]
    fn test_reversed() {
        let g = rgb_ramp();
        let r = g.reversed();
        assert_eq!(r.stops()[0], g.stops()[2]);
        assert_eq!(r.pick_color_at(0.0, MixSpace::Rgb), g.pick_color_at(1.0, MixSpace::Rgb));
        assert_eq!(r.reversed(), g);
    }

    #[test]
    fn test_collect() {
        let g: Gradient = [Rgba::BLACK, Rgba::WHITE].into_iter().collect();
        assert_eq!(g.len(), 2);
        assert!(!g.is_empty());
    }
}
