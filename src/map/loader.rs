// loader.rs
// ──────────────────────────────────────────────────────────────────────────────
// Reads a chamber map from text and wires the hex neighbours.
//
// Format: one grid row per line, one character per cell.  Whitespace between
// cells is padding; blank lines and lines starting with '#' are skipped.
//
//   E entrance   T treasure   L lit   D dark   S sealed   - no chamber
//
// Rows use the "odd-r" offset layout: odd rows sit half a cell to the right.
// Neighbour slots go clockwise from north-east: 0 NE, 1 E, 2 SE, 3 SW, 4 W, 5 NW.
// ──────────────────────────────────────────────────────────────────────────────
use std::fs;
use std::path::Path;

use super::chamber::{Chamber, ChamberKind, ChamberMap};
use super::error::MapError;
use super::graph::{ChamberId, NUM_NEIGHBORS};

/// (row, col) offsets per neighbour slot, for even rows then odd rows.
const HEX_OFFSETS: [[(isize, isize); NUM_NEIGHBORS]; 2] = [
    [(-1, 0), (0, 1), (1, 0), (1, -1), (0, -1), (-1, -1)],
    [(-1, 1), (0, 1), (1, 1), (1, 0), (0, -1), (-1, 0)],
];

enum Cell {
    Hole,
    Chamber(ChamberKind),
}

fn parse_cell(ch: char) -> Option<Cell> {
    let kind = match ch.to_ascii_uppercase() {
        '-' => return Some(Cell::Hole),
        'E' => ChamberKind::Entrance,
        'T' => ChamberKind::Treasure,
        'L' => ChamberKind::Lit,
        'D' => ChamberKind::Dark,
        'S' => ChamberKind::Sealed,
        _ => return None,
    };
    Some(Cell::Chamber(kind))
}

/// Loads a chamber map from a file.
pub fn load_map_from_file<P: AsRef<Path>>(file_path: P) -> Result<ChamberMap, MapError> {
    let file_path = file_path.as_ref();
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| MapError::ReadFile(file_path.display().to_string(), e))?;
    parse_map(&file_content)
}

/// Parses a chamber map from its textual form.
pub fn parse_map(text: &str) -> Result<ChamberMap, MapError> {
    let mut chambers: Vec<Chamber> = Vec::new();
    let mut layout: Vec<Vec<Option<ChamberId>>> = Vec::new();
    let mut entrance: Option<(ChamberId, (usize, usize))> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = layout.len();
        let mut cells: Vec<Option<ChamberId>> = Vec::new();
        for (column_idx, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let col = cells.len();
            match parse_cell(ch) {
                Some(Cell::Hole) => cells.push(None),
                Some(Cell::Chamber(kind)) => {
                    let id = chambers.len();
                    if kind == ChamberKind::Entrance {
                        if let Some((_, first)) = entrance {
                            return Err(MapError::MultipleEntrances {
                                first,
                                second: (row, col),
                            });
                        }
                        entrance = Some((id, (row, col)));
                    }
                    chambers.push(Chamber::new(row, col, kind));
                    cells.push(Some(id));
                }
                None => {
                    return Err(MapError::InvalidMapCharacter {
                        ch,
                        line: line_idx + 1,
                        column: column_idx + 1,
                    })
                }
            }
        }
        layout.push(cells);
    }

    if chambers.is_empty() {
        return Err(MapError::EmptyMap);
    }
    let (entrance, _) = entrance.ok_or(MapError::MissingEntrance)?;

    wire_neighbors(&mut chambers, &layout);
    Ok(ChamberMap::new(chambers, layout, entrance))
}

/// Fills every chamber's neighbour slots from the grid layout.
fn wire_neighbors(chambers: &mut [Chamber], layout: &[Vec<Option<ChamberId>>]) {
    for (row, cells) in layout.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let Some(id) = *cell else { continue };
            for (index, &(dr, dc)) in HEX_OFFSETS[row % 2].iter().enumerate() {
                let neighbor = offset(row, dr)
                    .zip(offset(col, dc))
                    .and_then(|(r, c)| layout.get(r)?.get(c).copied().flatten());
                chambers[id].set_neighbor(index, neighbor);
            }
        }
    }
}

fn offset(base: usize, delta: isize) -> Option<usize> {
    base.checked_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{ChamberGraph, Mark};

    #[test]
    fn parses_kinds_and_counts_treasures() {
        let map = parse_map("# sample\nE L T\nd s t\n").unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map.num_goals(), 2);
        assert_eq!(map.entrance(), 0);

        let kinds: Vec<ChamberKind> = map.chambers().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ChamberKind::Entrance,
                ChamberKind::Lit,
                ChamberKind::Treasure,
                ChamberKind::Dark,
                ChamberKind::Sealed,
                ChamberKind::Treasure,
            ]
        );
        assert!(map.chambers().iter().all(|c| c.mark() == Mark::Unmarked));
    }

    #[test]
    fn odd_rows_are_shifted_right() {
        // Row 0: (0,0) (0,1) (0,2)
        // Row 1:   (1,0) (1,1) (1,2)
        let map = parse_map("EDD\nDDD\n").unwrap();
        let top_mid = map.chamber_at(0, 1).unwrap();
        let bottom_mid = map.chamber_at(1, 1).unwrap();

        // even row: SE is straight below, SW is one column left
        assert_eq!(map.neighbor(top_mid, 2).unwrap(), Some(bottom_mid));
        assert_eq!(map.neighbor(top_mid, 3).unwrap(), map.chamber_at(1, 0));
        // odd row: NW is straight above, NE is one column right
        assert_eq!(map.neighbor(bottom_mid, 5).unwrap(), Some(top_mid));
        assert_eq!(map.neighbor(bottom_mid, 0).unwrap(), map.chamber_at(0, 2));
    }

    #[test]
    fn neighbour_links_are_symmetric() {
        let map = parse_map("E L D T\nD - S L\nL D T D\nT D L -\n").unwrap();
        for id in 0..map.len() {
            for index in 0..NUM_NEIGHBORS {
                if let Some(other) = map.neighbor(id, index).unwrap() {
                    let opposite = (index + 3) % NUM_NEIGHBORS;
                    assert_eq!(
                        map.neighbor(other, opposite).unwrap(),
                        Some(id),
                        "chamber {} slot {} is not mirrored",
                        id,
                        index
                    );
                }
            }
        }
    }

    #[test]
    fn holes_and_short_rows_leave_slots_empty() {
        let map = parse_map("E-D\nD\n").unwrap();
        let entrance = map.entrance();
        assert_eq!(map.neighbor(entrance, 1).unwrap(), None); // hole to the east
        assert_eq!(map.neighbor(entrance, 4).unwrap(), None); // off the west edge
        assert_eq!(map.neighbor(entrance, 0).unwrap(), None); // off the top edge

        let far = map.chamber_at(0, 2).unwrap();
        assert_eq!(map.neighbor(far, 3).unwrap(), None); // row 1 has no column 1
        assert_eq!(map.chamber_at(1, 1), None);
    }

    #[test]
    fn out_of_range_neighbour_index_is_an_error() {
        let map = parse_map("E").unwrap();
        assert!(matches!(
            map.neighbor(map.entrance(), 6),
            Err(MapError::InvalidNeighborIndex(6))
        ));
    }

    #[test]
    fn rejects_unknown_characters_with_position() {
        let err = parse_map("E L\nD ? T\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::InvalidMapCharacter {
                ch: '?',
                line: 2,
                column: 3
            }
        ));
    }

    #[test]
    fn entrance_must_be_unique() {
        assert!(matches!(parse_map("D L T"), Err(MapError::MissingEntrance)));
        assert!(matches!(
            parse_map("E D\nD E"),
            Err(MapError::MultipleEntrances {
                first: (0, 0),
                second: (1, 1)
            })
        ));
        assert!(matches!(parse_map("# nothing\n\n"), Err(MapError::EmptyMap)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_map_from_file("does/not/exist.map").unwrap_err();
        match err {
            MapError::ReadFile(path, _) => assert!(path.ends_with("exist.map")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
