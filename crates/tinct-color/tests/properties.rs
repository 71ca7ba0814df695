//! Property tests over the whole RGBA domain.

use approx::abs_diff_eq;
use proptest::prelude::*;
use tinct_color::{ContrastContext, MixSpace, Rgba};
use tinct_core::clip;

const ROUNDTRIP_TOLERANCE: f64 = 1e-3;

fn rgba() -> impl Strategy<Value = Rgba> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

fn mix_space() -> impl Strategy<Value = MixSpace> {
    prop::sample::select(MixSpace::ALL.to_vec())
}

fn close(a: Rgba, b: Rgba, eps: f64) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(x, y)| abs_diff_eq!(*x, *y, epsilon = eps))
}

proptest! {
    #[test]
    fn xyz_roundtrip(c in rgba()) {
        let back = Rgba::from_xyz(c.to_xyz(), c.alpha());
        prop_assert!(close(back, c, ROUNDTRIP_TOLERANCE), "{:?} -> {:?}", c, back);
    }

    #[test]
    fn lab_roundtrip(c in rgba()) {
        let back = Rgba::from_lab(c.to_lab(), c.alpha());
        prop_assert!(close(back, c, ROUNDTRIP_TOLERANCE), "{:?} -> {:?}", c, back);
    }

    #[test]
    fn hsl_roundtrip(c in rgba()) {
        let back = c.to_hsl().to_rgba();
        prop_assert!(close(back, c, ROUNDTRIP_TOLERANCE), "{:?} -> {:?}", c, back);
    }

    #[test]
    fn hsb_roundtrip(c in rgba()) {
        let back = c.to_hsba().to_rgba();
        prop_assert!(close(back, c, ROUNDTRIP_TOLERANCE), "{:?} -> {:?}", c, back);
    }

    #[test]
    fn adjusted_hue_stays_in_unit_turn(c in rgba(), degrees in -1.0e6f64..1.0e6) {
        let hue = c.adjusted_hue(degrees).to_hsl().hue();
        prop_assert!((0.0..1.0).contains(&hue), "hue {}", hue);
    }

    #[test]
    fn clip_is_idempotent(x in prop::num::f64::NORMAL, lo in -10.0f64..0.0, hi in 0.0f64..10.0) {
        let once = clip(x, lo, hi);
        prop_assert_eq!(clip(once, lo, hi), once);
    }

    #[test]
    fn contrast_is_symmetric(a in rgba(), b in rgba()) {
        prop_assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
        let ratio = a.contrast_ratio(&b);
        prop_assert!((1.0..=21.0).contains(&ratio));
        for ctx in ContrastContext::ALL {
            prop_assert_eq!(a.is_contrasting(&b, ctx), b.is_contrasting(&a, ctx));
        }
        prop_assert_eq!(a.is_contrasting_with(&b), b.is_contrasting_with(&a));
    }

    #[test]
    fn mix_endpoints(a in rgba(), b in rgba(), space in mix_space()) {
        let start = a.mixed(&b, 0.0, space);
        let end = a.mixed(&b, 1.0, space);
        prop_assert!(close(start, a, ROUNDTRIP_TOLERANCE), "{} weight 0: {:?} vs {:?}", space, start, a);
        prop_assert!(close(end, b, ROUNDTRIP_TOLERANCE), "{} weight 1: {:?} vs {:?}", space, end, b);
    }

    #[test]
    fn rgb_mix_endpoints_exact(a in rgba(), b in rgba()) {
        prop_assert_eq!(a.mixed(&b, 0.0, MixSpace::Rgb), a);
        prop_assert_eq!(a.mixed(&b, 1.0, MixSpace::Rgb), b);
    }

    #[test]
    fn hex_string_parses_back(c in rgba()) {
        let parsed: Rgba = c.to_hex_string().parse().unwrap();
        prop_assert_eq!(parsed.to_hex_rgba(), c.to_hex_rgba());
        prop_assert!(close(parsed, c, 0.5 / 255.0 + 1e-12));
    }
}
