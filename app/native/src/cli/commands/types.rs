//! Argument types shared by the transition commands.

use std::str::FromStr;

use crate::transition::{ScreenRect, Viewport};

/// Thumbnail bounds given as `LEFT,TOP,WIDTH,HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsArg(pub ScreenRect);

impl FromStr for BoundsArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_floats(s, ',')?;
        let [left, top, width, height] = parts[..] else {
            return Err(format!(
                "Invalid bounds '{s}'. Expected LEFT,TOP,WIDTH,HEIGHT (e.g. 40,200,300,300)."
            ));
        };

        ScreenRect::new(left, top, width, height)
            .map(Self)
            .map_err(|err| format!("Invalid bounds '{s}': {err}"))
    }
}

impl std::fmt::Display for BoundsArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.0;
        write!(f, "{},{},{},{}", r.left, r.top, r.width, r.height)
    }
}

/// Viewport size given as `WIDTHxHEIGHT`.
///
/// Zero sizes are accepted here so the fallback path can be exercised; the
/// transition itself decides what an unmeasured viewport means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportArg(pub Viewport);

impl FromStr for ViewportArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains('x') { 'x' } else { ',' };
        let parts = parse_floats(s, separator)?;
        let [width, height] = parts[..] else {
            return Err(format!("Invalid viewport '{s}'. Expected WIDTHxHEIGHT (e.g. 1080x2280)."));
        };

        if width < 0.0 || height < 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(format!("Invalid viewport '{s}'. Dimensions must be non-negative."));
        }

        Ok(Self(Viewport::new(width, height)))
    }
}

impl std::fmt::Display for ViewportArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0.width, self.0.height)
    }
}

fn parse_floats(s: &str, separator: char) -> Result<Vec<f32>, String> {
    s.split(separator)
        .map(|part| {
            let part = part.trim();
            part.parse::<f32>().map_err(|_| format!("Invalid number '{part}' in '{s}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_arg_parses() {
        let bounds: BoundsArg = "40,200,300,300".parse().unwrap();
        assert_eq!(bounds.0, ScreenRect::new(40.0, 200.0, 300.0, 300.0).unwrap());
        assert_eq!(bounds.to_string(), "40,200,300,300");
    }

    #[test]
    fn test_bounds_arg_allows_spaces_and_fractions() {
        let bounds: BoundsArg = " 1.5, 2 ,3,4.25".parse().unwrap();
        assert!((bounds.0.left - 1.5).abs() < f32::EPSILON);
        assert!((bounds.0.height - 4.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_arg_rejects_wrong_arity() {
        let err = "1,2,3".parse::<BoundsArg>().unwrap_err();
        assert!(err.contains("LEFT,TOP,WIDTH,HEIGHT"));
    }

    #[test]
    fn test_bounds_arg_rejects_negative_size() {
        assert!("0,0,-1,10".parse::<BoundsArg>().is_err());
    }

    #[test]
    fn test_bounds_arg_rejects_garbage() {
        let err = "a,b,c,d".parse::<BoundsArg>().unwrap_err();
        assert!(err.contains("Invalid number"));
    }

    #[test]
    fn test_viewport_arg_parses_both_forms() {
        let a: ViewportArg = "1080x2280".parse().unwrap();
        let b: ViewportArg = "1080,2280".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "1080x2280");
    }

    #[test]
    fn test_viewport_arg_accepts_zero() {
        let viewport: ViewportArg = "0x2280".parse().unwrap();
        assert!(!viewport.0.is_measured());
    }

    #[test]
    fn test_viewport_arg_rejects_negative() {
        assert!("-1x10".parse::<ViewportArg>().is_err());
    }
}
