use crate::constants::{LABEL_OFFSET_X, LABEL_OFFSET_Y};
use crate::levels::{Level, Rgb};
use crate::selection::Point;

/// One horizontal guide, in the same coordinate space as the input points.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLine {
    pub level: f64,
    pub color: Rgb,
    pub from: Point,
    pub to: Point,
    pub label: String,
    pub label_pos: Point,
}

pub fn level_y(start: Point, end: Point, level: f64) -> f64 {
    start.y + (end.y - start.y) * level
}

pub fn format_label(level: f64) -> String {
    format!("{level:.3}")
}

/// Lines for every enabled level, in list order. Nothing is produced until a
/// start point exists.
pub fn retracement_lines(
    start: Option<Point>,
    end: Option<Point>,
    levels: &[Level],
) -> Vec<LevelLine> {
    let Some(start) = start else {
        return Vec::new();
    };
    let end = end.unwrap_or(start);
    let label_x = start.x.min(end.x) + LABEL_OFFSET_X;

    levels
        .iter()
        .filter(|level| level.enabled)
        .map(|level| {
            let y = level_y(start, end, level.level);
            LevelLine {
                level: level.level,
                color: level.color,
                from: Point::new(start.x, y),
                to: Point::new(end.x, y),
                label: format_label(level.level),
                label_pos: Point::new(label_x, y + LABEL_OFFSET_Y),
            }
        })
        .collect()
}
