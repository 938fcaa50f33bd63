//! River module - procedural channel generation
//!
//! The river is a column of [`RiverRow`]s, one per board row. Every physics
//! tick the rows scroll down by one, and the new top row steps each of its
//! boundaries at most one cell towards a wander target. Targets are re-rolled
//! with [`RETARGET_THRESHOLD`] odds once a boundary reaches its target or the
//! channel narrows to [`MIN_CHANNEL_WIDTH`].

use crate::rng::SimpleRng;
use crate::types::{
    INITIAL_CHANNEL_HALF_WIDTH, INITIAL_TARGET_HALF_WIDTH, MIN_CHANNEL_WIDTH,
    RETARGET_BAND_JITTER, RETARGET_MAX_BAND, RETARGET_SHIFT, RETARGET_THRESHOLD,
};

/// Navigable span of one row: columns `left..right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverRow {
    pub left: i32,
    pub right: i32,
}

impl RiverRow {
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Whether a craft at column `x` is on water.
    pub fn contains(&self, x: i32) -> bool {
        x >= self.left && x < self.right
    }

    /// Bullets die on the bank cells and on the left boundary column itself.
    pub fn blocks_bullet(&self, x: i32) -> bool {
        x <= self.left || x >= self.right
    }

    /// Column halfway across the channel.
    pub fn middle(&self) -> i32 {
        (self.left + self.right) / 2
    }
}

/// The scrolling river plus its wander targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct River {
    rows: Vec<RiverRow>,
    board_width: i32,
    next_start: i32,
    next_end: i32,
}

impl River {
    /// A straight channel in the middle of the board.
    pub fn new(board_width: i32, height: i32) -> Self {
        let mid = board_width / 2;
        let row = RiverRow::new(
            mid - INITIAL_CHANNEL_HALF_WIDTH,
            mid + INITIAL_CHANNEL_HALF_WIDTH,
        );
        let mut river = Self::filled(board_width, height, row);
        river.next_start = mid - INITIAL_TARGET_HALF_WIDTH;
        river.next_end = mid + INITIAL_TARGET_HALF_WIDTH;
        river
    }

    /// Every row set to `row`, targets equal to `row` (a river at rest).
    pub fn filled(board_width: i32, height: i32, row: RiverRow) -> Self {
        Self {
            rows: vec![row; height.max(1) as usize],
            board_width,
            next_start: row.left,
            next_end: row.right,
        }
    }

    pub fn rows(&self) -> &[RiverRow] {
        &self.rows
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn row(&self, y: i32) -> Option<RiverRow> {
        if y < 0 {
            return None;
        }
        self.rows.get(y as usize).copied()
    }

    /// Newest row (row 0).
    pub fn top(&self) -> RiverRow {
        self.rows[0]
    }

    /// Oldest row, nearest the player.
    pub fn bottom(&self) -> RiverRow {
        self.rows[self.rows.len() - 1]
    }

    /// Current `(next_start, next_end)` wander targets.
    pub fn targets(&self) -> (i32, i32) {
        (self.next_start, self.next_end)
    }

    pub fn set_targets(&mut self, next_start: i32, next_end: i32) {
        self.next_start = next_start;
        self.next_end = next_end;
    }

    /// Scroll one row and generate the new top row.
    ///
    /// Returns true if new wander targets were picked.
    pub fn shift(&mut self, rng: &mut SimpleRng) -> bool {
        let h = self.rows.len();
        if h > 1 {
            self.rows.copy_within(0..h - 1, 1);
        }

        let mut top = self.rows[0];
        top.left += (self.next_start - top.left).signum();
        top.right += (self.next_end - top.right).signum();
        self.rows[0] = top;

        let settled = top.left == self.next_start || top.right == self.next_end;
        let narrow = top.left + MIN_CHANNEL_WIDTH >= top.right;
        if (settled || narrow) && rng.next_range(10) > RETARGET_THRESHOLD {
            self.retarget(rng);
            return true;
        }
        false
    }

    /// Pick a new target band near the current start target.
    fn retarget(&mut self, rng: &mut SimpleRng) {
        let shift = rng.range_inclusive(-RETARGET_SHIFT, RETARGET_SHIFT);
        let band = RETARGET_MAX_BAND - rng.next_range(RETARGET_BAND_JITTER) as i32;

        let max_start = (self.board_width - MIN_CHANNEL_WIDTH).max(0);
        let start = (self.next_start + shift).clamp(0, max_start);
        let end = (start + band).min(self.board_width);

        tracing::trace!(start, end, "river retarget");
        self.next_start = start;
        self.next_end = end;
    }
}
