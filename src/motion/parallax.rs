/// Linear interpolation between `start` and `end` at `progress`.
///
/// Written as a weighted sum so that progress 0 and 1 land exactly on the
/// endpoints. Values outside `[0, 1]` extrapolate along the same line.
pub fn lerp(start: f64, end: f64, progress: f64) -> f64 {
    (1.0 - progress) * start + progress * end
}

/// Normalised scroll progress of a page.
///
/// Returns 0 when the document is not taller than the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !range.is_finite() {
        0.0
    } else {
        scroll_y / range
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn at(&self, progress: f64) -> f64 {
        lerp(self.start, self.end, progress)
    }
}

/// Scroll-keyed start/end values for one floating element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub x: Span,
    pub y: Span,
    pub scale: Span,
    pub opacity: Span,
}

impl Motion {
    pub fn at(&self, progress: f64) -> Frame {
        Frame {
            x: self.x.at(progress),
            y: self.y.at(progress),
            scale: self.scale.at(progress),
            opacity: self.opacity.at(progress),
        }
    }
}

/// Resolved style values for a single element at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Frame {
    pub fn transform(&self) -> String {
        format!(
            "translateX({}px) translateY({}px) scale({})",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.scale)
        )
    }

    pub fn to_style(&self, z_index: i32) -> String {
        format!(
            "transform: {}; opacity: {}; z-index: {};",
            self.transform(),
            fmt_num(self.opacity),
            z_index
        )
    }
}

/// Vertical offset, in percent of the element's own height.
pub fn shift_y_style(span: &Span, progress: f64) -> String {
    format!("transform: translateY({}%);", fmt_num(span.at(progress)))
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOTION: Motion = Motion {
        x: Span::new(-280.0, -140.0),
        y: Span::new(-200.0, -100.0),
        scale: Span::new(0.6, 0.9),
        opacity: Span::new(0.4, 0.8),
    };

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(MOTION.at(0.0), Frame { x: -280.0, y: -200.0, scale: 0.6, opacity: 0.4 });
        assert_eq!(MOTION.at(1.0), Frame { x: -140.0, y: -100.0, scale: 0.9, opacity: 0.8 });
    }

    #[test]
    fn midpoint_is_linear() {
        let frame = MOTION.at(0.5);
        assert!((frame.x - -210.0).abs() < 1e-9);
        assert!((frame.scale - 0.75).abs() < 1e-9);
    }

    #[test]
    fn progress_outside_unit_range_extrapolates() {
        let span = Span::new(10.0, 20.0);
        assert!((span.at(1.5) - 25.0).abs() < 1e-9);
        assert!((span.at(-0.5) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn style_string_carries_every_axis() {
        let style = MOTION.at(0.0).to_style(45);
        assert_eq!(
            style,
            "transform: translateX(-280px) translateY(-200px) scale(0.6); opacity: 0.4; z-index: 45;"
        );
    }

    #[test]
    fn shift_style_uses_percent() {
        assert_eq!(shift_y_style(&Span::new(0.0, 50.0), 1.0), "transform: translateY(50%);");
        assert_eq!(shift_y_style(&Span::new(0.0, -20.0), 0.0), "transform: translateY(0%);");
    }

    #[test]
    fn progress_from_scroll_metrics() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }
}
