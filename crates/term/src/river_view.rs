//! RiverView: maps a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Board cells map 1:1 onto terminal cells,
//! with the status bar on the rows below the board.

use crate::core::World;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlayerStatus, BULLET_GLYPH, FUEL_SEGMENT, MAX_FUEL};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BANK: Rgb = Rgb::new(40, 150, 60);
const WATER: Rgb = Rgb::new(40, 90, 200);
const STATUS_BG: Rgb = Rgb::new(90, 90, 90);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const CYAN: Rgb = Rgb::new(60, 200, 210);
const RED: Rgb = Rgb::new(220, 60, 60);
const YELLOW: Rgb = Rgb::new(240, 210, 60);

/// Gauge text; one character per fuel segment.
const GAUGE: &str = " F U E L  ";

/// Segments at or below this many are drawn red.
const GAUGE_LOW_SEGMENTS: u32 = 3;

/// A lightweight terminal renderer for the river.
#[derive(Debug, Clone)]
pub struct RiverView {
    show_help: bool,
}

impl Default for RiverView {
    fn default() -> Self {
        Self { show_help: true }
    }
}

impl RiverView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the key help in the status bar.
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render the world into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, world: &World, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        self.draw_river(fb, world);
        self.draw_things(fb, world);
        self.draw_player(fb, world);
        self.draw_status_bar(fb, world);
        self.draw_overlay(fb, world);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }

    fn draw_river(&self, fb: &mut FrameBuffer, world: &World) {
        let bank = CellStyle::new(WHITE, BANK);
        let water = CellStyle::new(WHITE, WATER);
        let w = clamp_u16(world.width()).min(fb.width());

        for (y, row) in world.river().rows().iter().enumerate() {
            let y = y as u16;
            for x in 0..w {
                let style = if row.contains(x as i32) { water } else { bank };
                fb.put_char(x, y, ' ', style);
            }
        }
    }

    fn draw_things(&self, fb: &mut FrameBuffer, world: &World) {
        for bullet in world.bullets() {
            put_on_board(fb, bullet.location.x, bullet.location.y, BULLET_GLYPH, WHITE);
        }

        for enemy in world.enemies() {
            put_on_board(fb, enemy.location.x, enemy.location.y, enemy.symbol, WHITE);
        }

        for fuel in world.fuels() {
            for (i, (loc, ch)) in fuel.cells().enumerate() {
                // Stripes: cyan on the top row, alternating with white.
                let bg = if i % 2 == 0 { CYAN } else { WHITE };
                if let (Some(x), Some(y)) = (to_u16(loc.x), to_u16(loc.y)) {
                    if (y as i32) < world.height() {
                        fb.put_char(x, y, ch, CellStyle::new(BLACK, bg));
                    }
                }
            }
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, world: &World) {
        let p = world.player();
        put_on_board(fb, p.location.x, p.location.y, p.symbol, WHITE);
    }

    fn draw_status_bar(&self, fb: &mut FrameBuffer, world: &World) {
        let top = clamp_u16(world.height());
        let w = clamp_u16(world.width()).min(fb.width());
        let bar = CellStyle::new(WHITE, STATUS_BG);
        let rows = fb.height().saturating_sub(top);
        fb.fill_rect(0, top, w, rows, ' ', bar);

        let player = world.player();
        let line1 = top.saturating_add(1);
        let line2 = top.saturating_add(2);

        let score_x = w / 4;
        fb.put_str(score_x, line1, "Score: ", bar);
        fb.put_u32(score_x + 7, line1, player.score, bar);

        let lives_x = (w / 2).saturating_sub(4);
        fb.put_str(lives_x, line2, "Lives: ", bar);
        fb.put_u32(lives_x + 7, line2, player.lives, bar);

        if self.show_help {
            fb.put_str(w / 4 * 3, line1, "q: quit, p: pause", bar);
        }

        self.draw_fuel_gauge(fb, (w / 2).saturating_sub(5), line1, player.fuel);
    }

    fn draw_fuel_gauge(&self, fb: &mut FrameBuffer, x: u16, y: u16, fuel: i32) {
        fb.put_str(x, y, GAUGE, CellStyle::new(BLACK, CYAN));

        let segments = (fuel.clamp(0, MAX_FUEL) / FUEL_SEGMENT) as u32;
        let color = if segments <= GAUGE_LOW_SEGMENTS { RED } else { YELLOW };
        for (i, ch) in GAUGE.chars().take(segments as usize).enumerate() {
            fb.put_char(x.saturating_add(i as u16), y, ch, CellStyle::new(BLACK, color));
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, world: &World) {
        let player = world.player();
        let cx = clamp_u16(world.width()).min(fb.width()) / 2;
        let cy = clamp_u16(world.height()) / 2;
        let style = CellStyle::new(WHITE, BLACK).bold();

        let mut lines: [Option<String>; 4] = Default::default();
        match player.status {
            PlayerStatus::Dead if player.is_game_over() => {
                lines[0] = Some("You burned! Game over.".to_string());
                lines[1] = Some(format!("Your score: {}", player.score));
            }
            PlayerStatus::DeadBody => {
                lines[0] = Some(format!("Oh no! {}", player.message()));
                lines[1] = Some(format!("Your score: {}", player.score));
                lines[2] = Some(format!("Lives remaining: {}", player.lives));
                lines[3] = Some("Press space to continue...".to_string());
            }
            PlayerStatus::Paused => {
                lines[0] = Some("Paused. Press space to continue.".to_string());
                lines[1] = Some(format!("Your score: {}", player.score));
            }
            _ => {}
        }

        for (i, line) in lines.iter().enumerate() {
            if let Some(text) = line {
                fb.put_str_centered(cx, cy.saturating_add(i as u16), text, style);
            }
        }
    }
}

/// Draw a glyph on a board cell, keeping the river color under it.
fn put_on_board(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, fg: Rgb) {
    if let (Some(x), Some(y)) = (to_u16(x), to_u16(y)) {
        fb.overlay_char(x, y, ch, fg);
    }
}

fn to_u16(v: i32) -> Option<u16> {
    u16::try_from(v).ok()
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
