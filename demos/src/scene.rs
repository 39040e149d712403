// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireframe scene: projected octant edges and sphere outlines, exported as SVG.

use kurbo::{BezPath, Circle, Line, Shape, Size};
use understory_octree::{Octree, Sphere};

use crate::camera::Camera;

/// Flattening tolerance used when converting circles to paths.
const TOLERANCE: f64 = 0.1;

/// What to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneOptions {
    /// Draw an outline for every stored sphere.
    pub draw_points: bool,
    /// Draw the edges of tree nodes.
    pub draw_octants: bool,
    /// Also draw nodes without elements (internal nodes and empty leaves).
    pub draw_empty_octants: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            draw_points: true,
            draw_octants: true,
            draw_empty_octants: true,
        }
    }
}

/// Projected 2D geometry for one frame.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Drawing surface size.
    pub size: Size,
    /// Projected node edges.
    pub lines: Vec<Line>,
    /// Projected sphere outlines.
    pub circles: Vec<Circle>,
}

impl Scene {
    /// Project a tree through `camera`.
    pub fn from_tree(tree: &Octree<Sphere>, camera: &Camera, options: SceneOptions) -> Self {
        let mut scene = Self {
            size: camera.viewport,
            ..Self::default()
        };
        if options.draw_points {
            scene.circles.extend(
                tree.elements()
                    .map(|s| Circle::new(camera.project(s.center), s.radius)),
            );
        }
        if options.draw_octants {
            for node in tree.traverse() {
                if !options.draw_empty_octants && node.elements().is_empty() {
                    continue;
                }
                scene.lines.extend(
                    node.bounds()
                        .edges()
                        .iter()
                        .map(|(a, b)| Line::new(camera.project(*a), camera.project(*b))),
                );
            }
        }
        log::debug!(
            "scene: {} lines, {} circles",
            scene.lines.len(),
            scene.circles.len()
        );
        scene
    }

    /// Render as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let Size { width, height } = self.size;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        svg.push_str(&format!(
            "<rect width=\"{width}\" height=\"{height}\" fill=\"black\"/>\n"
        ));
        if !self.lines.is_empty() {
            let mut path = BezPath::new();
            for line in &self.lines {
                path.move_to(line.p0);
                path.line_to(line.p1);
            }
            svg.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"#3c9\" stroke-width=\"0.5\"/>\n",
                path.to_svg()
            ));
        }
        if !self.circles.is_empty() {
            let mut path = BezPath::new();
            for circle in &self.circles {
                path.extend(circle.path_elements(TOLERANCE));
            }
            svg.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"white\" stroke-width=\"0.5\"/>\n",
                path.to_svg()
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Project a tree and render it to SVG in one step.
pub fn render_svg(tree: &Octree<Sphere>, camera: &Camera, options: SceneOptions) -> String {
    Scene::from_tree(tree, camera, options).to_svg()
}
