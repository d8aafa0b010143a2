//! Turns a finished search into text for the user.

use std::collections::HashSet;

use crate::map::{ChamberId, ChamberKind, ChamberMap};
use crate::path::SearchReport;

/// Formats a route as `(row,col) -> (row,col) -> ...`.
pub fn format_route(map: &ChamberMap, route: &[ChamberId]) -> String {
    if route.is_empty() {
        return "no route".to_string();
    }
    route
        .iter()
        .map(|&id| match map.chamber(id) {
            Some(chamber) => chamber.to_string(),
            None => format!("#{}", id),
        })
        .collect::<Vec<String>>()
        .join(" -> ")
}

/// Draws the map with `*` on every chamber of `route` except the entrance.
/// Odd rows are indented by one column to show the hex offset.
pub fn render_map(map: &ChamberMap, route: &[ChamberId]) -> String {
    let on_route: HashSet<ChamberId> = route.iter().copied().collect();
    let mut out = String::new();
    for (row, cells) in map.layout().iter().enumerate() {
        let line = cells
            .iter()
            .map(|cell| match (*cell).and_then(|id| map.chamber(id).map(|c| (id, c))) {
                None => '-',
                Some((_, chamber)) if chamber.kind() == ChamberKind::Entrance => 'E',
                Some((id, _)) if on_route.contains(&id) => '*',
                Some((_, chamber)) => chamber.kind().symbol(),
            })
            .map(String::from)
            .collect::<Vec<String>>()
            .join(" ");
        if row % 2 == 1 {
            out.push(' ');
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// One-line outcome of a search.
pub fn summary_line(report: &SearchReport) -> String {
    let status = if report.complete {
        "all treasure chambers reached"
    } else if report.path.is_empty() {
        "no route to the remaining treasure chambers"
    } else {
        "search stopped early"
    };
    format!(
        "Treasure chambers: {}/{} ({}); path length {}, {} backtrack(s).",
        report.goals_counted.min(report.goals_total),
        report.goals_total,
        status,
        report.path.len(),
        report.backtracks
    )
}

/// Full text output: route, summary and the annotated map.
pub fn full_report(map: &ChamberMap, report: &SearchReport) -> String {
    let route = report.route();
    format!(
        "Route: {}\n{}\n\n{}",
        format_route(map, &route),
        summary_line(report),
        render_map(map, &route)
    )
}
