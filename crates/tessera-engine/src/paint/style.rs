use super::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum PenStyle {
    Solid,
    Dash,
    Dot,
    DashDot,
    /// No stroke is drawn.
    #[default]
    Null,
}

/// Hatch pattern of a hatched fill.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hatch {
    Horizontal,
    Vertical,
    ForwardDiagonal,
    BackwardDiagonal,
    Cross,
    DiagonalCross,
}

/// Fill kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BrushStyle {
    Solid,
    /// No fill is drawn.
    #[default]
    Hollow,
    Hatched(Hatch),
}

/// Stroke description.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub style: PenStyle,
    /// Stroke width in scene units.
    pub width: f32,
    pub color: Color,
}

impl Pen {
    #[inline]
    pub const fn new(style: PenStyle, width: f32, color: Color) -> Self {
        Self {
            style,
            width,
            color,
        }
    }

    #[inline]
    pub const fn solid(width: f32, color: Color) -> Self {
        Self::new(PenStyle::Solid, width, color)
    }

    /// True if this pen produces visible output.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.style != PenStyle::Null && self.width > 0.0
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(PenStyle::Null, 6.0, Color::white())
    }
}

/// Fill description.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Brush {
    pub style: BrushStyle,
    pub color: Color,
}

impl Brush {
    #[inline]
    pub const fn new(style: BrushStyle, color: Color) -> Self {
        Self { style, color }
    }

    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::new(BrushStyle::Solid, color)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.style != BrushStyle::Hollow
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(BrushStyle::Hollow, Color::black())
    }
}

/// Stroke and fill used for one object.
///
/// Styles are passed by value to every surface call; a surface never keeps
/// a style selected between calls.
///
/// The default draws nothing: a null pen and a hollow brush.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DrawStyle {
    pub pen: Pen,
    pub brush: Brush,
}

impl DrawStyle {
    #[inline]
    pub fn new(pen: Pen, brush: Brush) -> Self {
        Self { pen, brush }
    }

    pub fn set_pen(&mut self, style: PenStyle, width: f32, color: Color) -> &mut Self {
        self.pen = Pen::new(style, width, color);
        self
    }

    pub fn set_brush(&mut self, style: BrushStyle, color: Color) -> &mut Self {
        self.brush = Brush::new(style, color);
        self
    }

    #[inline]
    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }

    #[inline]
    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    #[inline]
    pub fn strokes(&self) -> bool {
        self.pen.is_visible()
    }

    #[inline]
    pub fn fills(&self) -> bool {
        self.brush.is_visible()
    }

    /// True if neither stroke nor fill would produce output.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        !self.strokes() && !self.fills()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_invisible() {
        let style = DrawStyle::default();
        assert_eq!(style.pen.style, PenStyle::Null);
        assert_eq!(style.pen.width, 6.0);
        assert_eq!(style.pen.color, Color::white());
        assert_eq!(style.brush.style, BrushStyle::Hollow);
        assert!(style.is_invisible());
    }

    #[test]
    fn setters_chain() {
        let mut style = DrawStyle::default();
        style
            .set_pen(PenStyle::Solid, 3.0, Color::black())
            .set_brush(BrushStyle::Hatched(Hatch::Cross), Color::rgb(0, 255, 0));
        assert!(style.strokes());
        assert!(style.fills());
        assert_eq!(style.brush.style, BrushStyle::Hatched(Hatch::Cross));
    }

    #[test]
    fn zero_width_pen_is_invisible() {
        let style = DrawStyle::default().with_pen(Pen::solid(0.0, Color::black()));
        assert!(!style.strokes());
        let style = style.with_brush(Brush::solid(Color::rgb(255, 0, 0)));
        assert!(style.fills());
        assert!(!style.is_invisible());
    }
}
