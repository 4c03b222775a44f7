use serde::{Deserialize, Serialize};
use std::fmt;

/// Anchor placement for overlay content on the canvas: one of the nine 3×3
/// grid cells, or `Hidden` to suppress the overlay entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Hidden,
}

impl Position {
    /// The nine visible anchor cells, row by row.
    pub const ANCHORS: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::CenterLeft,
        Position::Center,
        Position::CenterRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    pub fn is_hidden(&self) -> bool {
        matches!(self, Position::Hidden)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::CenterLeft => "center-left",
            Position::Center => "center",
            Position::CenterRight => "center-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
            Position::Hidden => "hidden",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_exclude_hidden() {
        assert_eq!(Position::ANCHORS.len(), 9);
        assert!(Position::ANCHORS.iter().all(|p| !p.is_hidden()));
    }

    #[test]
    fn test_hidden() {
        assert!(Position::Hidden.is_hidden());
        assert!(!Position::Center.is_hidden());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::BottomRight), "bottom-right");
        assert_eq!(format!("{}", Position::Hidden), "hidden");
    }
}
