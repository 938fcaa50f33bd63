//! Entities - the things that move on the board
//!
//! Enemies and fuel pickups share the two-phase destroy lifecycle from
//! [`ThingStatus`]: `Alive -> DeadBody -> Dead -> removed`, one step per
//! clock tick, so the wreckage is visible for exactly one frame.

use crate::types::{
    ThingStatus, ENEMY_GLYPH, FUEL_GLYPHS, FUEL_SPRITE_HEIGHT, FUEL_WRECK_GLYPHS, WRECK_GLYPH,
};

/// Grid cell coordinate. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell directly above.
    pub fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The cell directly below.
    pub fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bullet {
    pub location: Location,
}

impl Bullet {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enemy {
    pub location: Location,
    pub status: ThingStatus,
    pub symbol: char,
}

impl Enemy {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            status: ThingStatus::Alive,
            symbol: ENEMY_GLYPH,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == ThingStatus::Alive
    }

    /// Alive -> DeadBody. Returns false if it was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status = ThingStatus::DeadBody;
        self.symbol = WRECK_GLYPH;
        true
    }
}

/// A fuel depot. `location` is the bottom cell of a sprite
/// [`FUEL_SPRITE_HEIGHT`] rows tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuelPickup {
    pub location: Location,
    pub status: ThingStatus,
    /// Glyphs top row first.
    pub symbol: [char; 4],
}

impl FuelPickup {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            status: ThingStatus::Alive,
            symbol: FUEL_GLYPHS,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == ThingStatus::Alive
    }

    /// Alive -> DeadBody. Returns false if it was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status = ThingStatus::DeadBody;
        self.symbol = FUEL_WRECK_GLYPHS;
        true
    }

    /// Topmost row of the sprite.
    pub fn top(&self) -> i32 {
        self.location.y - (FUEL_SPRITE_HEIGHT - 1)
    }

    /// Whether `loc` is one of the sprite's cells (`top..=location.y`).
    pub fn covers(&self, loc: Location) -> bool {
        loc.x == self.location.x && loc.y >= self.top() && loc.y <= self.location.y
    }

    /// Cells of the sprite with their glyphs, top row first.
    pub fn cells(&self) -> impl Iterator<Item = (Location, char)> + '_ {
        let top = self.top();
        self.symbol
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (Location::new(self.location.x, top + i as i32), ch))
    }
}

/// Advance a destroyed thing one step along its lifecycle.
///
/// Returns false once the thing should be removed.
pub(crate) fn age_wreck(status: &mut ThingStatus) -> bool {
    match *status {
        ThingStatus::Alive => true,
        ThingStatus::DeadBody => {
            *status = ThingStatus::Dead;
            true
        }
        ThingStatus::Dead => false,
    }
}
