//! Geometric layout of two differently sized images onto one canvas.
//!
//! Both images are rescaled to share a common dimension (height when
//! side-by-side, width when stacked) and placed edge to edge with a fixed
//! white separator between them. Scaling uses the smaller of the two
//! source dimensions, so neither image is ever blown up past the other.

use tracing::debug;

use crate::options::Orientation;
use crate::{CompositeError, Result, SEPARATOR};

/// Where one source image lands on the working canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Computed layout for one invocation: both placements plus canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub before: Placement,
    pub after: Placement,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub orientation: Orientation,
}

impl LayoutPlan {
    /// The dimension label badges are sized against: canvas height for
    /// horizontal layouts, canvas width for vertical ones.
    pub fn cross_dimension(&self) -> u32 {
        match self.orientation {
            Orientation::Horizontal => self.canvas_height,
            Orientation::Vertical => self.canvas_width,
        }
    }
}

/// Rescale a side length proportionally, flooring the result.
fn scale_floor(side: u32, num: u32, den: u32) -> u32 {
    (u64::from(side) * u64::from(num) / u64::from(den)) as u32
}

/// Total canvas span along the composited axis, in `u64` so two very wide
/// (or tall) placements cannot wrap; spans past `u32::MAX` are rejected.
fn checked_span(first: u32, second: u32) -> Result<u32> {
    let span = u64::from(first) + u64::from(SEPARATOR) + u64::from(second);
    u32::try_from(span).map_err(|_| CompositeError::CanvasTooLarge { span })
}

/// Compute placements for two images of independent aspect ratios.
///
/// Returns [`CompositeError::InvalidDimensions`] if either image has a
/// zero side, before any division happens, and
/// [`CompositeError::CanvasTooLarge`] when the combined placements do not
/// fit a `u32` canvas.
pub fn compute_layout(
    before: (u32, u32),
    after: (u32, u32),
    orientation: Orientation,
) -> Result<LayoutPlan> {
    for (width, height) in [before, after] {
        if width == 0 || height == 0 {
            return Err(CompositeError::InvalidDimensions { width, height });
        }
    }

    let plan = match orientation {
        Orientation::Horizontal => {
            let h = before.1.min(after.1);
            let w_before = scale_floor(before.0, h, before.1);
            let w_after = scale_floor(after.0, h, after.1);
            let canvas_width = checked_span(w_before, w_after)?;
            LayoutPlan {
                before: Placement {
                    x: 0,
                    y: 0,
                    width: w_before,
                    height: h,
                },
                after: Placement {
                    x: w_before + SEPARATOR,
                    y: 0,
                    width: w_after,
                    height: h,
                },
                canvas_width,
                canvas_height: h,
                orientation,
            }
        }
        Orientation::Vertical => {
            let w = before.0.min(after.0);
            let h_before = scale_floor(before.1, w, before.0);
            let h_after = scale_floor(after.1, w, after.0);
            let canvas_height = checked_span(h_before, h_after)?;
            LayoutPlan {
                before: Placement {
                    x: 0,
                    y: 0,
                    width: w,
                    height: h_before,
                },
                after: Placement {
                    x: 0,
                    y: h_before + SEPARATOR,
                    width: w,
                    height: h_after,
                },
                canvas_width: w,
                canvas_height,
                orientation,
            }
        }
    };

    debug!(
        canvas_width = plan.canvas_width,
        canvas_height = plan.canvas_height,
        ?orientation,
        "Computed comparison layout"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_matches_min_height() {
        // 800x600 beside 400x300: common height 300, both scale to 400 wide.
        let plan = compute_layout((800, 600), (400, 300), Orientation::Horizontal).unwrap();
        assert_eq!(
            plan.before,
            Placement {
                x: 0,
                y: 0,
                width: 400,
                height: 300
            }
        );
        assert_eq!(
            plan.after,
            Placement {
                x: 415,
                y: 0,
                width: 400,
                height: 300
            }
        );
        assert_eq!((plan.canvas_width, plan.canvas_height), (815, 300));
    }

    #[test]
    fn vertical_matches_min_width() {
        let plan = compute_layout((800, 600), (400, 300), Orientation::Vertical).unwrap();
        assert_eq!(
            plan.before,
            Placement {
                x: 0,
                y: 0,
                width: 400,
                height: 300
            }
        );
        assert_eq!(
            plan.after,
            Placement {
                x: 0,
                y: 315,
                width: 400,
                height: 300
            }
        );
        assert_eq!((plan.canvas_width, plan.canvas_height), (400, 615));
    }

    #[test]
    fn placed_widths_floor_the_rescale() {
        // 1000x750 beside 640x480: h = 480, 1000 * 480 / 750 = 640 exactly.
        let plan = compute_layout((1000, 750), (640, 480), Orientation::Horizontal).unwrap();
        assert_eq!(plan.before.width, 640);
        assert_eq!(plan.after.width, 640);
        assert_eq!(plan.canvas_width, 640 + 640 + SEPARATOR);

        // 333x100 at h = 50 floors 166.5 down to 166.
        let plan = compute_layout((333, 100), (200, 50), Orientation::Horizontal).unwrap();
        assert_eq!(plan.before.width, 166);
    }

    #[test]
    fn common_dimension_never_exceeds_either_source() {
        let plan = compute_layout((1920, 1080), (640, 480), Orientation::Horizontal).unwrap();
        assert_eq!(plan.before.height, 480);
        assert_eq!(plan.after.height, 480);

        let plan = compute_layout((1920, 1080), (640, 480), Orientation::Vertical).unwrap();
        assert_eq!(plan.before.width, 640);
        assert_eq!(plan.after.width, 640);
    }

    #[test]
    fn canvas_spans_both_placements_plus_separator() {
        let plan = compute_layout((1234, 567), (890, 123), Orientation::Horizontal).unwrap();
        assert_eq!(
            plan.canvas_width,
            plan.before.width + plan.after.width + SEPARATOR
        );
        assert_eq!(plan.canvas_height, plan.before.height);

        let plan = compute_layout((1234, 567), (890, 123), Orientation::Vertical).unwrap();
        assert_eq!(
            plan.canvas_height,
            plan.before.height + plan.after.height + SEPARATOR
        );
        assert_eq!(plan.canvas_width, plan.before.width);
    }

    #[test]
    fn zero_dimension_is_rejected_before_any_division() {
        for dims in [(0, 100), (100, 0), (0, 0)] {
            let err = compute_layout(dims, (400, 300), Orientation::Horizontal).unwrap_err();
            assert!(matches!(err, CompositeError::InvalidDimensions { .. }));

            let err = compute_layout((400, 300), dims, Orientation::Vertical).unwrap_err();
            assert!(matches!(err, CompositeError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn large_sources_do_not_overflow() {
        let plan = compute_layout(
            (u32::MAX / 2, 1000),
            (1000, 1000),
            Orientation::Horizontal,
        )
        .unwrap();
        assert_eq!(plan.before.width, u32::MAX / 2);
    }

    #[test]
    fn oversized_spans_are_rejected_not_wrapped() {
        // Two same-height sources whose placed widths sum past u32::MAX.
        let err = compute_layout(
            (4_000_000_000, 1000),
            (4_000_000_000, 1000),
            Orientation::Horizontal,
        )
        .unwrap_err();
        assert!(matches!(err, CompositeError::CanvasTooLarge { .. }));

        let err = compute_layout(
            (1000, 4_000_000_000),
            (1000, 4_000_000_000),
            Orientation::Vertical,
        )
        .unwrap_err();
        assert!(matches!(err, CompositeError::CanvasTooLarge { .. }));
    }

    #[test]
    fn cross_dimension_follows_orientation() {
        let plan = compute_layout((800, 600), (400, 300), Orientation::Horizontal).unwrap();
        assert_eq!(plan.cross_dimension(), 300);

        let plan = compute_layout((800, 600), (400, 300), Orientation::Vertical).unwrap();
        assert_eq!(plan.cross_dimension(), 400);
    }
}
