//! Replays committed paths onto the raster surface.
//!
//! Rendering is deterministic and order-preserving: `redraw` with the same
//! background and committed sequence always yields pixel-identical paint.

use egui::Pos2;

use crate::path::{Path, Tool};
use crate::surface::{Blend, Surface};

/// Fill with the background, then draw each path in insertion order.
pub fn redraw(surface: &mut Surface, committed: &[Path]) {
    surface.clear();
    for path in committed {
        draw_path(surface, path);
    }
}

/// Draw one path according to its tool.
pub fn draw_path(surface: &mut Surface, path: &Path) {
    let blend = blend_for(path.tool());
    match path.tool() {
        Tool::Brush | Tool::Eraser => {
            let points = path.points();
            if points.len() == 1 {
                // A click without movement still leaves a dot.
                surface.stroke_segment(points[0], points[0], path.size(), path.color(), blend);
            }
            for pair in points.windows(2) {
                surface.stroke_segment(pair[0], pair[1], path.size(), path.color(), blend);
            }
        }
        Tool::Rectangle => {
            let (a, b) = (path.anchor(), path.endpoint());
            // Corner order handles negative extents in either direction.
            let corners = [
                a,
                Pos2::new(b.x, a.y),
                b,
                Pos2::new(a.x, b.y),
            ];
            for i in 0..4 {
                surface.stroke_segment(
                    corners[i],
                    corners[(i + 1) % 4],
                    path.size(),
                    path.color(),
                    blend,
                );
            }
        }
        Tool::Circle => {
            let radius = (path.endpoint() - path.anchor()).length();
            surface.stroke_ring(path.anchor(), radius, path.size(), path.color(), blend);
        }
        Tool::Line => {
            surface.stroke_segment(
                path.anchor(),
                path.endpoint(),
                path.size(),
                path.color(),
                blend,
            );
        }
    }
}

/// Stroke just the newest freehand segment, avoiding a full redraw.
pub fn draw_segment(surface: &mut Surface, path: &Path, a: Pos2, b: Pos2) {
    surface.stroke_segment(a, b, path.size(), path.color(), blend_for(path.tool()));
}

fn blend_for(tool: Tool) -> Blend {
    match tool {
        Tool::Eraser => Blend::DestOut,
        _ => Blend::SourceOver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn brush(points: &[Pos2]) -> Path {
        let mut path = Path::freehand(Tool::Brush, Color32::BLACK, 4.0, points[0]);
        for &p in &points[1..] {
            path.push_point(p);
        }
        path
    }

    #[test]
    fn redraw_is_idempotent() {
        let committed = vec![
            brush(&[pos2(5.0, 5.0), pos2(20.0, 10.0), pos2(30.0, 25.0)]),
            Path::shape(Tool::Line, Color32::RED, 2.0, pos2(0.0, 0.0)),
        ];

        let mut first = Surface::new(40, 40, Color32::WHITE);
        redraw(&mut first, &committed);
        let once = first.paint().to_vec();

        redraw(&mut first, &committed);
        assert_eq!(first.paint(), &once[..]);

        // A fresh surface with the same inputs matches too.
        let mut second = Surface::new(40, 40, Color32::WHITE);
        redraw(&mut second, &committed);
        assert_eq!(second.paint(), &once[..]);
    }

    #[test]
    fn incremental_segments_match_full_redraw() {
        let points = [pos2(5.0, 5.0), pos2(15.0, 8.0), pos2(25.0, 20.0)];

        // Incremental: dot, then one segment per new point.
        let mut incremental = Surface::new(40, 40, Color32::WHITE);
        let mut path = Path::freehand(Tool::Brush, Color32::BLACK, 4.0, points[0]);
        draw_path(&mut incremental, &path);
        for &p in &points[1..] {
            let prev = path.endpoint();
            path.push_point(p);
            draw_segment(&mut incremental, &path, prev, p);
        }

        let mut full = Surface::new(40, 40, Color32::WHITE);
        redraw(&mut full, std::slice::from_ref(&path));
        assert_eq!(incremental.paint(), full.paint());
    }

    #[test]
    fn rectangle_strokes_the_outline_only() {
        let mut rect = Path::shape(Tool::Rectangle, Color32::BLACK, 2.0, pos2(10.0, 10.0));
        rect.set_endpoint(pos2(50.0, 40.0));

        let mut surface = Surface::new(60, 60, Color32::WHITE);
        redraw(&mut surface, std::slice::from_ref(&rect));

        assert_eq!(surface.pixel(10, 25), Color32::BLACK); // left edge
        assert_eq!(surface.pixel(30, 10), Color32::BLACK); // top edge
        assert_eq!(surface.pixel(50, 25), Color32::BLACK); // right edge
        assert_eq!(surface.pixel(30, 40), Color32::BLACK); // bottom edge
        assert_eq!(surface.pixel(30, 25), Color32::WHITE); // interior
    }

    #[test]
    fn rectangle_handles_negative_extents() {
        // Dragged up-left: endpoint above and left of the anchor.
        let mut rect = Path::shape(Tool::Rectangle, Color32::BLACK, 2.0, pos2(50.0, 40.0));
        rect.set_endpoint(pos2(10.0, 10.0));

        let mut surface = Surface::new(60, 60, Color32::WHITE);
        redraw(&mut surface, std::slice::from_ref(&rect));

        assert_eq!(surface.pixel(10, 25), Color32::BLACK);
        assert_eq!(surface.pixel(30, 10), Color32::BLACK);
        assert_eq!(surface.pixel(30, 25), Color32::WHITE);
    }

    #[test]
    fn circle_radius_is_anchor_to_endpoint_distance() {
        let mut circle = Path::shape(Tool::Circle, Color32::BLACK, 5.0, pos2(100.0, 100.0));
        circle.set_endpoint(pos2(130.0, 100.0));

        let mut surface = Surface::new(200, 200, Color32::WHITE);
        redraw(&mut surface, std::slice::from_ref(&circle));

        // Radius 30: the outline passes through (130, 100) and (70, 100).
        assert_eq!(surface.pixel(130, 100), Color32::BLACK);
        assert_eq!(surface.pixel(70, 100), Color32::BLACK);
        assert_eq!(surface.pixel(100, 100), Color32::WHITE);
    }

    #[test]
    fn eraser_removes_paint_but_not_background() {
        let stroke = brush(&[pos2(10.0, 20.0), pos2(50.0, 20.0)]);
        let mut eraser = Path::freehand(Tool::Eraser, Color32::BLACK, 8.0, pos2(25.0, 20.0));
        eraser.push_point(pos2(35.0, 20.0));

        let mut surface = Surface::new(60, 40, Color32::WHITE);
        redraw(&mut surface, &[stroke, eraser]);

        // Erased span shows the background fill.
        assert_eq!(surface.pixel(30, 20), Color32::WHITE);
        // The stroke survives outside the eraser's path.
        assert_eq!(surface.pixel(12, 20), Color32::BLACK);
        assert_eq!(surface.pixel(48, 20), Color32::BLACK);
    }

    #[test]
    fn paint_reverts_to_source_over_after_an_eraser() {
        let stroke = brush(&[pos2(10.0, 10.0), pos2(30.0, 10.0)]);
        let mut eraser = Path::freehand(Tool::Eraser, Color32::BLACK, 20.0, pos2(10.0, 10.0));
        eraser.push_point(pos2(30.0, 10.0));
        let after = brush(&[pos2(15.0, 10.0), pos2(25.0, 10.0)]);

        let mut surface = Surface::new(40, 20, Color32::WHITE);
        redraw(&mut surface, &[stroke, eraser, after]);

        // The brush stroke drawn after the eraser paints normally.
        assert_eq!(surface.pixel(20, 10), Color32::BLACK);
    }
}
