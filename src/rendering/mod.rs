use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, Quad, Rect};
use ggez::Context;

use crate::app::palette::BORDER_COLOR;
use crate::basic::Cell;
use crate::color::Color;
use crate::config::{BORDER_THICKNESS, GRID_SIZE};
use crate::error::{Error, ErrorConversion, Result};

/// Anything cells can be painted onto
pub trait Surface {
    /// Fill `cell` with `color`, `border` adds an outline in the border color
    fn fill_cell(&mut self, cell: Cell, color: Color, border: bool);
}

/// Entities render themselves at their current position
/// with their own colors
pub trait Drawable {
    fn render(&self, target: &mut dyn Surface);
}

/// Outline of a single cell at the origin, translated to
/// each cell when drawn
pub fn cell_border_mesh(ctx: &Context) -> Result<Mesh> {
    let bounds = Rect::new(0., 0., GRID_SIZE as f32, GRID_SIZE as f32);
    Mesh::new_rectangle(ctx, DrawMode::stroke(BORDER_THICKNESS), bounds, BORDER_COLOR.0)
        .map_err(Error::from)
        .with_trace_step("cell_border_mesh")
}

pub struct CanvasSurface<'a> {
    canvas: &'a mut Canvas,
    cell_border: &'a Mesh,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a mut Canvas, cell_border: &'a Mesh) -> Self {
        Self { canvas, cell_border }
    }
}

impl Surface for CanvasSurface<'_> {
    fn fill_cell(&mut self, cell: Cell, color: Color, border: bool) {
        self.canvas
            .draw(&Quad, DrawParam::default().dest_rect(cell.to_rect()).color(color));
        if border {
            self.canvas
                .draw(self.cell_border, DrawParam::default().dest(cell));
        }
    }
}

/// Remembers every painted cell in order
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface(pub Vec<(Cell, Color, bool)>);

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_cell(&mut self, cell: Cell, color: Color, border: bool) {
        self.0.push((cell, color, border));
    }
}
