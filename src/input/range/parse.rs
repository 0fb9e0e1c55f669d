//! Range text grammar, one of:
//!
//! - `x:<x1>..<x2>/y:<y1>..<y2>` explicit bounds
//! - `c:<re>+<im>i/w:<width>` centre and total width, height derived later

use crate::core::data::viewport::Viewport;
use crate::input::range::errors::RangeError;

const EXPLICIT_PREFIX: &str = "x:";
const EXPLICIT_Y_SEPARATOR: &str = "/y:";
const BOUNDS_SEPARATOR: &str = "..";
const CENTER_PREFIX: &str = "c:";
const WIDTH_SEPARATOR: &str = "i/w:";

pub fn parse_range(text: &str) -> Result<Viewport, RangeError> {
    let input = text.trim();
    let syntax = || RangeError::Syntax {
        input: input.to_string(),
    };
    let bounds = |source| RangeError::Bounds {
        input: input.to_string(),
        source,
    };

    if let Some(rest) = input.strip_prefix(EXPLICIT_PREFIX) {
        let (x1, x2, y1, y2) = parse_explicit(rest).ok_or_else(syntax)?;
        return Viewport::from_range(x1, x2, y1, y2).map_err(bounds);
    }

    if let Some(rest) = input.strip_prefix(CENTER_PREFIX) {
        let (cx, cy, width) = parse_center(rest).ok_or_else(syntax)?;
        return Viewport::from_center_width(cx, cy, width).map_err(bounds);
    }

    Err(syntax())
}

fn number(text: &str) -> Option<f64> {
    text.parse().ok()
}

fn parse_interval(text: &str) -> Option<(f64, f64)> {
    let (low, high) = text.split_once(BOUNDS_SEPARATOR)?;
    Some((number(low)?, number(high)?))
}

fn parse_explicit(text: &str) -> Option<(f64, f64, f64, f64)> {
    let (x, y) = text.split_once(EXPLICIT_Y_SEPARATOR)?;
    let (x1, x2) = parse_interval(x)?;
    let (y1, y2) = parse_interval(y)?;
    Some((x1, x2, y1, y2))
}

fn parse_center(text: &str) -> Option<(f64, f64, f64)> {
    let (complex, width) = text.split_once(WIDTH_SEPARATOR)?;
    let (real, imag) = parse_complex(complex)?;
    Some((real, imag, number(width)?))
}

/// Splits `<re>+<im>` (or `<re>-<im>`) at the first sign that leaves two
/// valid numbers, skipping exponent signs.
fn parse_complex(text: &str) -> Option<(f64, f64)> {
    text.char_indices()
        .filter(|&(index, ch)| index > 0 && (ch == '+' || ch == '-'))
        .filter(|&(index, _)| !text[..index].ends_with(['e', 'E']))
        .find_map(|(index, ch)| {
            let real = number(&text[..index])?;
            let imag = if ch == '+' {
                number(&text[index + 1..])?
            } else {
                number(&text[index..])?
            };
            Some((real, imag))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::ViewportError;

    #[test]
    fn test_explicit_bounds_are_exact() {
        let viewport = parse_range("x:-2.5..1/y:-1.5..1.5").unwrap();

        assert_eq!(
            (viewport.x1(), viewport.x2(), viewport.y1(), viewport.y2()),
            (-2.5, 1.0, -1.5, 1.5)
        );
    }

    #[test]
    fn test_center_form_leaves_height_degenerate() {
        let viewport = parse_range("c:-0.5+0i/w:3").unwrap();

        assert_eq!(viewport.x1(), -2.0);
        assert_eq!(viewport.x2(), 1.0);
        assert_eq!(viewport.y1(), 0.0);
        assert_eq!(viewport.y2(), 0.0);
    }

    #[test]
    fn test_center_form_with_negative_imaginary_part() {
        let with_minus = parse_range("c:-0.75-0.1i/w:0.5").unwrap();
        let with_plus_minus = parse_range("c:-0.75+-0.1i/w:0.5").unwrap();

        assert_eq!(with_minus.y1(), -0.1);
        assert_eq!(with_minus, with_plus_minus);
    }

    #[test]
    fn test_center_form_with_exponents() {
        let viewport = parse_range("c:-1.5e-1+1e-2i/w:2e-3").unwrap();

        assert!((viewport.center().real + 0.15).abs() < 1e-15);
        assert_eq!(viewport.y1(), 0.01);
        assert!((viewport.width() - 2e-3).abs() < 1e-15);
    }

    #[test]
    fn test_surrounding_whitespace_and_newline_are_ignored() {
        assert!(parse_range("  x:-1..1/y:-1..1\n").is_ok());
    }

    #[test]
    fn test_malformed_text_is_a_syntax_error() {
        for text in [
            "x:abc",
            "x:-1..1",
            "x:-1..1/y:0",
            "c:0+0/w:1",
            "c:0i/w:1",
            "y:-1..1/x:-1..1",
            "",
            "x:-1..1/y:-1..1trailing",
        ] {
            assert_eq!(
                parse_range(text),
                Err(RangeError::Syntax {
                    input: text.trim().to_string()
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        assert_eq!(
            parse_range("x:1..-1/y:-1..1"),
            Err(RangeError::Bounds {
                input: "x:1..-1/y:-1..1".to_string(),
                source: ViewportError::InvalidBounds {
                    x1: 1.0,
                    x2: -1.0,
                    y1: -1.0,
                    y2: 1.0
                }
            })
        );
    }

    #[test]
    fn test_zero_width_and_non_finite_are_rejected() {
        assert!(matches!(
            parse_range("c:0+0i/w:0"),
            Err(RangeError::Bounds { .. })
        ));
        assert!(matches!(
            parse_range("x:-inf..1/y:0..0"),
            Err(RangeError::Bounds { .. })
        ));
    }
}
