//! Rejection-sampling placement of apartment blocks.
//!
//! The allocator scatters fixed-size rectangular blocks inside a coverage
//! area so that no two blocks overlap. Candidate origins are drawn from two
//! pre-bounded uniform distributions (one per axis) so a candidate always
//! lies fully inside the area, and every candidate is tested against the
//! complete history of previously accepted blocks. A bounded retry budget
//! turns an overcrowded configuration into a fatal error instead of an
//! endless loop or an overlapping layout.

use log::debug;
use rand::Rng;

use super::geometry::{contains, overlaps};
use super::types::{Bounds, PlacedBlock};

/// Retry budget for positioning a single block. Exhausting it means the
/// requested density is infeasible for the area.
pub const PLACEMENT_ATTEMPT_LIMIT: u32 = 100;

/// Source of uniform random variates, injected by the caller so the
/// generation pass never owns global random state.
pub trait UniformSource {
    /// Draw the next value uniformly from `[min, max]`.
    fn next_in_range(&mut self, min: f64, max: f64) -> f64;
}

/// Adapter exposing any [`rand::Rng`] as a [`UniformSource`].
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_in_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }
}

/// Failures of the layout pass. All variants are terminal for the generation
/// pass; there is no recoverable category.
#[derive(Debug)]
pub enum LayoutError {
    /// The allocation area has inverted bounds.
    InvalidArea(Bounds),
    /// The retry budget ran out while positioning a block: too many blocks
    /// were requested, or the area is too small.
    BlockPlacement { block_index: usize, attempts: u32 },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidArea(bounds) => write!(
                f,
                "allocation area has inverted bounds: x [{}, {}], y [{}, {}]",
                bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
            ),
            LayoutError::BlockPlacement { block_index, attempts } => write!(
                f,
                "failed to position block {block_index} after {attempts} attempts: too many blocks or too small an area?"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Uniform distribution over `[min, max]`, pre-bounded at construction.
/// Empty (`max < min`) when no origin keeps the block inside the area.
#[derive(Debug, Clone, Copy)]
struct UniformSpan {
    min: f64,
    max: f64,
}

impl UniformSpan {
    fn is_empty(&self) -> bool {
        self.max < self.min
    }

    fn sample(&self, source: &mut impl UniformSource) -> f64 {
        source.next_in_range(self.min, self.max)
    }
}

/// Places non-overlapping apartment blocks inside a coverage area.
///
/// Placement is strictly sequential: every candidate is tested against the
/// full history of earlier acceptances, so later placements depend on the
/// outcome of all earlier ones. One allocator exclusively owns its random
/// source for the duration of the generation pass.
pub struct BlockAllocator<S> {
    area: Bounds,
    apartments_x: u32,
    floors: u32,
    x_size: f64,
    y_size: f64,
    x_min_var: UniformSpan,
    y_min_var: UniformSpan,
    previous_blocks: Vec<Bounds>,
    source: S,
}

impl<S: UniformSource> BlockAllocator<S> {
    /// Create an allocator for blocks of `apartments_x` apartments per
    /// building row and `floors` stacked floors.
    ///
    /// Fails fast on an inverted area rectangle. An area too small to fit a
    /// single block is accepted here; the first placement then fails with
    /// [`LayoutError::BlockPlacement`] without sampling.
    pub fn new(area: Bounds, apartments_x: u32, floors: u32, source: S) -> Result<Self, LayoutError> {
        if area.x_min > area.x_max || area.y_min > area.y_max {
            return Err(LayoutError::InvalidArea(area));
        }
        let (x_size, y_size) = PlacedBlock::footprint(apartments_x);
        Ok(Self {
            area,
            apartments_x,
            floors,
            x_size,
            y_size,
            x_min_var: UniformSpan {
                min: area.x_min,
                max: area.x_max - x_size,
            },
            y_min_var: UniformSpan {
                min: area.y_min,
                max: area.y_max - y_size,
            },
            previous_blocks: Vec::new(),
            source,
        })
    }

    /// Blocks accepted so far, in acceptance order.
    pub fn blocks(&self) -> &[Bounds] {
        &self.previous_blocks
    }

    /// Place one block, retrying freshly sampled candidates until one clears
    /// the overlap test or the attempt budget runs out.
    pub fn place_one(&mut self) -> Result<PlacedBlock, LayoutError> {
        let block_index = self.previous_blocks.len();
        let mut attempt: u32 = 0;
        let bounds = loop {
            if attempt >= PLACEMENT_ATTEMPT_LIMIT {
                return Err(LayoutError::BlockPlacement {
                    block_index,
                    attempts: attempt,
                });
            }
            attempt += 1;
            if self.x_min_var.is_empty() || self.y_min_var.is_empty() {
                // No origin admits the block at all; burn the attempt without
                // sampling so the call fails through the bounded path.
                continue;
            }
            let x_min = self.x_min_var.sample(&mut self.source);
            let y_min = self.y_min_var.sample(&mut self.source);
            let candidate = Bounds::new(x_min, x_min + self.x_size, y_min, y_min + self.y_size);
            debug_assert!(contains(&self.area, &candidate), "sampled candidate escaped the bounded spans");
            if !self.overlaps_any_previous(&candidate) {
                break candidate;
            }
        };
        debug!(
            "block {} placed at ({:.1}, {:.1}) after {} attempt(s)",
            block_index, bounds.x_min, bounds.y_min, attempt
        );
        self.previous_blocks.push(bounds);
        Ok(PlacedBlock {
            bounds,
            apartments_x: self.apartments_x,
            floors: self.floors,
        })
    }

    /// Place `n` blocks sequentially. Returns the accepted blocks in
    /// acceptance order, or the first placement failure.
    pub fn place_many(&mut self, n: u32) -> Result<Vec<PlacedBlock>, LayoutError> {
        (0..n).map(|_| self.place_one()).collect()
    }

    fn overlaps_any_previous(&self, candidate: &Bounds) -> bool {
        self.previous_blocks.iter().any(|block| overlaps(block, candidate))
    }
}
