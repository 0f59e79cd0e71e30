//! Vector surface: collects one frame of draw commands as an SVG document.

use std::fmt::Write as _;

use hyperview::frame::{GradientStop, Rgba, Surface};
use hyperview::projection::Viewport;
use hyperview::Point2;

const BACKGROUND: &str = "#0f172a";

/// SVG target. Every line gets its own `userSpaceOnUse` gradient so the color
/// runs from one endpoint to the other, as on a canvas.
#[derive(Debug, Default)]
pub struct SvgSurface {
    display: Viewport,
    backing: Viewport,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            display: size,
            ..Self::default()
        }
    }

    pub fn to_svg(&self) -> String {
        let Viewport { width, height } = self.backing;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n\
             <defs>\n{}</defs>\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND}\"/>\n{}</svg>\n",
            self.defs, self.body
        )
    }
}

fn rgb(c: &Rgba) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

impl Surface for SvgSurface {
    fn display_size(&self) -> Viewport {
        self.display
    }

    fn size(&self) -> Viewport {
        self.backing
    }

    fn resize(&mut self, size: Viewport) {
        self.backing = size;
    }

    fn clear(&mut self) {
        self.defs.clear();
        self.body.clear();
        self.gradients = 0;
    }

    fn draw_line(&mut self, from: Point2, to: Point2, stops: &[GradientStop; 2], width: f64) {
        let id = format!("g{}", self.gradients);
        self.gradients += 1;
        // Writing into a String cannot fail.
        let _ = write!(
            self.defs,
            "<linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
             x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\">",
            from.x, from.y, to.x, to.y
        );
        for s in stops {
            let _ = write!(
                self.defs,
                "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                s.offset,
                rgb(&s.color),
                s.color.a
            );
        }
        self.defs.push_str("</linearGradient>\n");
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"url(#{id})\" stroke-width=\"{width}\"/>",
            from.x, from.y, to.x, to.y
        );
    }

    fn fill_circle(&mut self, center: Point2, radius: f64, color: Rgba) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.3}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            center.x,
            center.y,
            radius,
            rgb(&color),
            color.a
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview::prelude::*;

    #[test]
    fn renders_a_frame_with_one_gradient_per_line() {
        let vp = Viewport::new(320, 240);
        let mut svg = SvgSurface::new(vp);
        let mut s = FrameScheduler::new(ShapeKind::Pentachoron);
        let cfg = FrameConfig::default().with_shape(ShapeKind::Pentachoron);
        s.render(FrameTick::default(), &cfg, &mut svg);
        s.render(FrameTick { index: 1, ..FrameTick::default() }, &cfg, &mut svg);

        let doc = svg.to_svg();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("width=\"320\" height=\"240\""));
        // Cleared between frames: only the last frame's 10 edges and 5 points.
        assert_eq!(doc.matches("<linearGradient").count(), 10);
        assert_eq!(doc.matches("<line ").count(), 10);
        assert_eq!(doc.matches("<circle").count(), 5);
        assert!(doc.contains("stroke=\"url(#g9)\""));
    }
}
