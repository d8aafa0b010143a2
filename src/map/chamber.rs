use std::fmt;

use super::error::MapError;
use super::graph::{ChamberGraph, ChamberId, NUM_NEIGHBORS};

/// What a chamber is, as read from its map character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChamberKind {
    Entrance,
    Treasure,
    Lit,
    Dark,
    Sealed,
}

impl ChamberKind {
    /// Map character for this kind, as written by the loader's format.
    pub fn symbol(self) -> char {
        match self {
            ChamberKind::Entrance => 'E',
            ChamberKind::Treasure => 'T',
            ChamberKind::Lit => 'L',
            ChamberKind::Dark => 'D',
            ChamberKind::Sealed => 'S',
        }
    }
}

/// Visitation state of a chamber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unmarked,
    /// Currently on the path held by the search stack.
    OnPath,
    /// Visited, then popped off the path while backtracking.
    Abandoned,
}

/// A single cell of the hex grid.
#[derive(Clone, Debug)]
pub struct Chamber {
    row: usize,
    col: usize,
    kind: ChamberKind,
    mark: Mark,
    neighbors: [Option<ChamberId>; NUM_NEIGHBORS],
}

impl Chamber {
    pub fn new(row: usize, col: usize, kind: ChamberKind) -> Self {
        Self {
            row,
            col,
            kind,
            mark: Mark::Unmarked,
            neighbors: [None; NUM_NEIGHBORS],
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn kind(&self) -> ChamberKind {
        self.kind
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_sealed(&self) -> bool {
        self.kind == ChamberKind::Sealed
    }

    pub fn is_lit(&self) -> bool {
        self.kind == ChamberKind::Lit
    }

    pub fn is_treasure(&self) -> bool {
        self.kind == ChamberKind::Treasure
    }

    pub fn is_marked(&self) -> bool {
        self.mark != Mark::Unmarked
    }

    /// Returns the neighbour in slot `index`.
    ///
    /// # Errors
    /// Returns `MapError::InvalidNeighborIndex` for an index outside `0..NUM_NEIGHBORS`.
    pub fn neighbor(&self, index: usize) -> Result<Option<ChamberId>, MapError> {
        self.neighbors
            .get(index)
            .copied()
            .ok_or(MapError::InvalidNeighborIndex(index))
    }

    pub(crate) fn set_neighbor(&mut self, index: usize, neighbor: Option<ChamberId>) {
        if let Some(slot) = self.neighbors.get_mut(index) {
            *slot = neighbor;
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// ChamberMap – the loaded hex grid.
// Chambers are stored in an arena and addressed by `ChamberId`; `layout`
// keeps the row/column shape of the source map, with `None` for holes.
// ──────────────────────────────────────────────────────────────────────────────

/// A fully wired chamber grid with a single entrance.
#[derive(Clone, Debug)]
pub struct ChamberMap {
    chambers: Vec<Chamber>,
    layout: Vec<Vec<Option<ChamberId>>>,
    entrance: ChamberId,
    num_goals: usize,
}

impl ChamberMap {
    pub(crate) fn new(
        chambers: Vec<Chamber>,
        layout: Vec<Vec<Option<ChamberId>>>,
        entrance: ChamberId,
    ) -> Self {
        let num_goals = chambers.iter().filter(|c| c.is_treasure()).count();
        Self {
            chambers,
            layout,
            entrance,
            num_goals,
        }
    }

    /// Returns the chamber with the given id.
    pub fn chamber(&self, id: ChamberId) -> Option<&Chamber> {
        self.chambers.get(id)
    }

    /// Returns all chambers, indexed by `ChamberId`.
    pub fn chambers(&self) -> &[Chamber] {
        &self.chambers
    }

    /// Returns the id of the chamber at a grid position, if there is one.
    pub fn chamber_at(&self, row: usize, col: usize) -> Option<ChamberId> {
        self.layout.get(row)?.get(col).copied().flatten()
    }

    /// Returns the row/column shape of the map.
    pub fn layout(&self) -> &[Vec<Option<ChamberId>>] {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.chambers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chambers.is_empty()
    }

    /// Clears every mark so the map can be searched again.
    pub fn reset_marks(&mut self) {
        for chamber in &mut self.chambers {
            chamber.mark = Mark::Unmarked;
        }
    }

    fn set_mark(&mut self, id: ChamberId, mark: Mark) {
        if let Some(chamber) = self.chambers.get_mut(id) {
            chamber.mark = mark;
        }
    }
}

impl ChamberGraph for ChamberMap {
    fn entrance(&self) -> ChamberId {
        self.entrance
    }

    fn num_goals(&self) -> usize {
        self.num_goals
    }

    fn is_sealed(&self, id: ChamberId) -> bool {
        self.chamber(id).is_some_and(Chamber::is_sealed)
    }

    fn is_lit(&self, id: ChamberId) -> bool {
        self.chamber(id).is_some_and(Chamber::is_lit)
    }

    fn is_goal(&self, id: ChamberId) -> bool {
        self.chamber(id).is_some_and(Chamber::is_treasure)
    }

    fn is_marked(&self, id: ChamberId) -> bool {
        self.chamber(id).is_some_and(Chamber::is_marked)
    }

    fn mark_on_path(&mut self, id: ChamberId) {
        self.set_mark(id, Mark::OnPath);
    }

    fn mark_abandoned(&mut self, id: ChamberId) {
        self.set_mark(id, Mark::Abandoned);
    }

    fn neighbor(&self, id: ChamberId, index: usize) -> Result<Option<ChamberId>, MapError> {
        match self.chamber(id) {
            Some(chamber) => chamber.neighbor(index),
            None if index >= NUM_NEIGHBORS => Err(MapError::InvalidNeighborIndex(index)),
            None => Ok(None),
        }
    }
}
