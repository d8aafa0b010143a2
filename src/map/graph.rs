use super::error::MapError;

/// Represents a unique identifier for a chamber in a map.
pub type ChamberId = usize;

/// Number of neighbour slots of a hex chamber.
pub const NUM_NEIGHBORS: usize = 6;

/// The view of a chamber map that the path search consumes.
///
/// Topology is fixed once the map is built; only the per-chamber marks change
/// while a search runs, and only through `mark_on_path` / `mark_abandoned`.
pub trait ChamberGraph {
    /// The unique starting chamber.
    fn entrance(&self) -> ChamberId;

    /// Total number of treasure chambers in the map.
    fn num_goals(&self) -> usize;

    fn is_sealed(&self, id: ChamberId) -> bool;

    fn is_lit(&self, id: ChamberId) -> bool;

    fn is_goal(&self, id: ChamberId) -> bool;

    /// `true` once the chamber has been pushed, whether or not it is still on the path.
    fn is_marked(&self, id: ChamberId) -> bool;

    fn mark_on_path(&mut self, id: ChamberId);

    fn mark_abandoned(&mut self, id: ChamberId);

    /// Returns the neighbour in slot `index`, or `None` if the slot is empty.
    ///
    /// # Errors
    /// Returns `MapError::InvalidNeighborIndex` if `index` is not in `0..NUM_NEIGHBORS`.
    fn neighbor(&self, id: ChamberId, index: usize) -> Result<Option<ChamberId>, MapError>;
}
