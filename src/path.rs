use egui::{Color32, Pos2};

/// The drawing tools offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tool {
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Line,
}

impl Tool {
    /// Brush and Eraser grow a point list over time; the shape tools
    /// keep exactly an anchor and a current endpoint.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}

/// One stroke or shape: rendering attributes plus an ordered point list.
///
/// Tool, color and size are fixed at creation; only the point list changes
/// while the path is being drawn. Freehand paths have at least one point,
/// shape paths always exactly two (anchor, current).
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    tool: Tool,
    color: Color32,
    size: f32,
    points: Vec<Pos2>,
}

impl Path {
    /// Start a freehand path (Brush/Eraser) at `start`.
    pub fn freehand(tool: Tool, color: Color32, size: f32, start: Pos2) -> Self {
        debug_assert!(tool.is_freehand());
        Self {
            tool,
            color,
            size,
            points: vec![start],
        }
    }

    /// Start a shape path with the anchor duplicated as the current endpoint.
    pub fn shape(tool: Tool, color: Color32, size: f32, anchor: Pos2) -> Self {
        debug_assert!(!tool.is_freehand());
        Self {
            tool,
            color,
            size,
            points: vec![anchor, anchor],
        }
    }

    /// Append a point to a freehand path.
    pub fn push_point(&mut self, point: Pos2) {
        debug_assert!(self.tool.is_freehand());
        self.points.push(point);
    }

    /// Replace the current endpoint of a shape path.
    pub fn set_endpoint(&mut self, point: Pos2) {
        debug_assert!(!self.tool.is_freehand());
        self.points[1] = point;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// First point: the pointer-down position.
    pub fn anchor(&self) -> Pos2 {
        self.points[0]
    }

    /// Last point: the most recent pointer position.
    pub fn endpoint(&self) -> Pos2 {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn freehand_starts_with_one_point_and_grows() {
        let mut path = Path::freehand(Tool::Brush, Color32::BLACK, 5.0, pos2(1.0, 2.0));
        assert_eq!(path.points(), &[pos2(1.0, 2.0)]);

        path.push_point(pos2(3.0, 4.0));
        path.push_point(pos2(5.0, 6.0));
        assert_eq!(path.points().len(), 3);
        assert_eq!(path.endpoint(), pos2(5.0, 6.0));
    }

    #[test]
    fn shape_duplicates_anchor_and_replaces_endpoint() {
        let mut path = Path::shape(Tool::Rectangle, Color32::RED, 3.0, pos2(10.0, 10.0));
        assert_eq!(path.points(), &[pos2(10.0, 10.0), pos2(10.0, 10.0)]);

        path.set_endpoint(pos2(50.0, 40.0));
        path.set_endpoint(pos2(60.0, 45.0));
        assert_eq!(path.points(), &[pos2(10.0, 10.0), pos2(60.0, 45.0)]);
        assert_eq!(path.anchor(), pos2(10.0, 10.0));
    }

    #[test]
    fn attributes_are_fixed_at_creation() {
        let path = Path::freehand(Tool::Eraser, Color32::WHITE, 12.0, pos2(0.0, 0.0));
        assert_eq!(path.tool(), Tool::Eraser);
        assert_eq!(path.color(), Color32::WHITE);
        assert_eq!(path.size(), 12.0);
    }

    #[test]
    fn freehand_classification() {
        assert!(Tool::Brush.is_freehand());
        assert!(Tool::Eraser.is_freehand());
        assert!(!Tool::Rectangle.is_freehand());
        assert!(!Tool::Circle.is_freehand());
        assert!(!Tool::Line.is_freehand());
    }
}
