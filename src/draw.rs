/*
draw.rs

Copyright 2025 Hervé Quatremain

This file is part of Pentawalk.

Pentawalk is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pentawalk is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pentawalk. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Draw paths with Cairo.
//!
//! Each move of a path is drawn as a 72° arc. The pen starts at the center of the surface,
//! heading up. After each arc, the pen moves to the end of the chord and, when the arc bends
//! the same way as the previous one, rotates by 72°.

use log::{Level, debug, log_enabled};
use std::f64::consts::PI;
use strum_macros::FromRepr;

use gtk::cairo::*;

use crate::generator::lazy::{chain, consume, constant, defer, head, single, tail};
use crate::generator::path::{Path, Turn};

/// Size of the reference canvas. The drawing is scaled from this size to the drawing area.
const CANVAS_SIZE: f64 = 512.0;

/// Scaling factor applied on top of the canvas scaling.
const ZOOM: f64 = 0.7;

/// Radius of the arcs.
const RADIUS: f64 = 15.0;

const LINE_WIDTH: f64 = 10.0;

/// Color of the arcs. Consecutive arcs alternate between the two colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
enum StrokeColor {
    Red,
    Blue,
}

/// Colors for the light and dark styles.
///
/// Color components are integers between 0 and 255.
#[derive(Debug, Clone)]
pub struct PathColor {
    /// Background.
    bg: (u8, u8, u8, u8),

    /// Even arcs.
    red: (u8, u8, u8, u8),

    /// Odd arcs.
    blue: (u8, u8, u8, u8),

    bg_dark: (u8, u8, u8, u8),
    red_dark: (u8, u8, u8, u8),
    blue_dark: (u8, u8, u8, u8),

    is_dark: bool,
}

impl Default for PathColor {
    fn default() -> Self {
        Self {
            bg: (0xd4, 0xe2, 0xd6, 255),
            red: (200, 50, 40, 179),
            blue: (40, 30, 110, 179),
            bg_dark: (0x24, 0x2c, 0x26, 255),
            red_dark: (230, 97, 80, 179),
            blue_dark: (130, 120, 230, 179),
            is_dark: false,
        }
    }
}

impl PathColor {
    /// Set the color scheme.
    pub fn set_dark(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
    }

    /// Convert a color in the 0-255 range to the 0-1 range.
    fn to_cairo(&self, color: (u8, u8, u8, u8)) -> (f64, f64, f64, f64) {
        (
            color.0 as f64 / 255.0,
            color.1 as f64 / 255.0,
            color.2 as f64 / 255.0,
            color.3 as f64 / 255.0,
        )
    }

    /// Return the background color.
    pub fn get_bg(&self) -> (f64, f64, f64, f64) {
        self.to_cairo(if self.is_dark { self.bg_dark } else { self.bg })
    }

    /// Return the color of an arc.
    fn get_stroke(&self, color: StrokeColor) -> (f64, f64, f64, f64) {
        let c: (u8, u8, u8, u8) = match (color, self.is_dark) {
            (StrokeColor::Red, false) => self.red,
            (StrokeColor::Red, true) => self.red_dark,
            (StrokeColor::Blue, false) => self.blue,
            (StrokeColor::Blue, true) => self.blue_dark,
        };
        self.to_cairo(c)
    }
}

/// Pen state while drawing the arcs of a path.
struct Pen<'a> {
    ctx: &'a Context,
    colors: &'a PathColor,

    /// Position of the next arc in the path.
    index: usize,

    /// Previous move. It selects the side of the chord the arc bulges on.
    prev: Turn,

    /// Length of the chord.
    chord: f64,

    /// Distance between the chord and the center of the arc.
    apothem: f64,
}

impl Pen<'_> {
    /// Stroke one arc and move the pen to its end.
    fn arc(&mut self, rotation: Turn) -> Result<()> {
        let color: StrokeColor =
            StrokeColor::from_repr(self.index % 2).unwrap_or(StrokeColor::Red);
        let (r, g, b, a) = self.colors.get_stroke(color);
        self.ctx.set_source_rgba(r, g, b, a);

        self.ctx.new_path();
        if self.prev.value() > 0 {
            self.ctx.arc(
                self.chord / 2.0,
                self.apothem,
                RADIUS,
                (270.0_f64 - 36.0).to_radians(),
                (270.0_f64 + 36.0).to_radians(),
            );
        } else {
            self.ctx.arc(
                self.chord / 2.0,
                -self.apothem,
                RADIUS,
                (90.0_f64 - 36.0).to_radians(),
                (90.0_f64 + 36.0).to_radians(),
            );
        }
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.stroke()?;

        self.ctx.translate(self.chord, 0.0);
        if rotation == self.prev {
            self.ctx
                .rotate(72.0_f64.to_radians() * f64::from(rotation.value()));
        }
        self.prev = rotation;
        self.index += 1;
        Ok(())
    }
}

/// Draw object that renders one path per frame.
#[derive(Debug, Default)]
pub struct Draw {
    colors: PathColor,
}

impl Draw {
    /// Set the color scheme.
    pub fn set_dark(&mut self, is_dark: bool) {
        self.colors.set_dark(is_dark);
    }

    /// Draw a frame: the background and, if provided, the path.
    pub fn frame(
        &self,
        ctx: &Context,
        width: f64,
        height: f64,
        path: Option<&Path>,
    ) -> Result<()> {
        let (bg_r, bg_g, bg_b, bg_a) = self.colors.get_bg();

        ctx.save()?;
        ctx.set_source_rgba(bg_r, bg_g, bg_b, bg_a);
        ctx.rectangle(0.0, 0.0, width, height);
        ctx.fill()?;

        if let Some(path) = path
            && !path.is_empty()
        {
            self.path(ctx, width, height, path)?;
        }
        ctx.restore()
    }

    /// Draw the arcs of a path. The path must not be empty.
    fn path(&self, ctx: &Context, width: f64, height: f64, path: &Path) -> Result<()> {
        let scale: f64 = width.min(height) / CANVAS_SIZE * ZOOM;
        let chord: f64 = 2.0 * RADIUS * (PI / 5.0).sin();
        let apothem: f64 = (RADIUS * RADIUS - (chord / 2.0) * (chord / 2.0)).sqrt();

        if log_enabled!(Level::Debug) {
            debug!("Draw path:");
            debug!("     width = {width}");
            debug!("    height = {height}");
            debug!("     scale = {scale}");
            debug!("     chord = {chord}");
            debug!("   apothem = {apothem}");
        }

        ctx.translate(width / 2.0, height / 2.0);
        ctx.rotate(-PI / 2.0);
        ctx.scale(scale, scale);
        ctx.set_line_cap(LineCap::Butt);

        // The first move is drawn last, after the pen has gone around the path
        let first: Turn = head(path);
        let moves = chain(tail(path), Some(defer(constant(single(first)))));

        let mut pen = Pen {
            ctx,
            colors: &self.colors,
            index: 0,
            prev: first,
            chord,
            apothem,
        };
        let mut status: Result<()> = Ok(());
        consume(
            |rotation: Turn| {
                if status.is_ok() {
                    status = pen.arc(rotation);
                }
            },
            moves,
        );
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::enumerator::PathEnumerator;

    const SIZE: i32 = 256;

    /// Render a frame and return the number of pixels that differ from the corner pixel.
    fn render(draw: &Draw, path: Option<&Path>) -> (Vec<u8>, usize) {
        let mut surface = ImageSurface::create(Format::ARgb32, SIZE, SIZE).unwrap();
        {
            let ctx = Context::new(&surface).unwrap();
            draw.frame(&ctx, SIZE as f64, SIZE as f64, path).unwrap();
        }
        let stride: usize = surface.stride() as usize;
        let data = surface.data().unwrap();
        let corner: Vec<u8> = data[0..4].to_vec();
        let mut changed: usize = 0;
        for y in 0..SIZE as usize {
            for x in 0..SIZE as usize {
                let offset: usize = y * stride + x * 4;
                if data[offset..offset + 4] != corner[..] {
                    changed += 1;
                }
            }
        }
        (corner, changed)
    }

    #[test]
    fn stroke_colors_alternate() {
        assert_eq!(StrokeColor::from_repr(0), Some(StrokeColor::Red));
        assert_eq!(StrokeColor::from_repr(1), Some(StrokeColor::Blue));
        assert_eq!(StrokeColor::from_repr(2), None);
    }

    #[test]
    fn background_only() {
        let (corner, changed) = render(&Draw::default(), None);
        // ARGB32 pixels are stored in native endianness
        let pixel: u32 = u32::from_ne_bytes([corner[0], corner[1], corner[2], corner[3]]);
        assert_eq!(pixel, 0xffd4_e2d6);
        assert_eq!(changed, 0);

        let (_, changed) = render(&Draw::default(), Some(&Path::Empty));
        assert_eq!(changed, 0);
    }

    #[test]
    fn dark_background() {
        let mut draw = Draw::default();
        draw.set_dark(true);
        let (corner, _) = render(&draw, None);
        let pixel: u32 = u32::from_ne_bytes([corner[0], corner[1], corner[2], corner[3]]);
        assert_eq!(pixel, 0xff24_2c26);
    }

    #[test]
    fn paths_are_drawn() {
        let enumerator = PathEnumerator::new(10).unwrap();
        for path in enumerator.paths().iter() {
            let (_, changed) = render(&Draw::default(), Some(&path));
            assert!(changed > 0);
        }
    }
}
