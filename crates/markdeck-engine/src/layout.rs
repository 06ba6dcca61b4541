//! Pure tile-arrangement selection.
//!
//! The renderer asks, per slide, how its body items should tile. The answer
//! depends on the item count and nothing else.

use serde::Serialize;

/// How a slide's body tiles are grouped on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Nothing to tile.
    None,
    /// A single flex row of large tiles.
    Row,
    /// A uniform grid with a fixed column count.
    Grid,
    /// A denser tiered grid for long lists.
    Tiered,
}

/// Result of [`select_layout`]: the arrangement plus the column count for
/// grid-like arrangements (`None` for an empty or single-row layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileLayout {
    pub arrangement: Arrangement,
    pub columns: Option<u32>,
}

/// Classify an item count into a tiling arrangement.
///
/// Total over all counts; consults nothing but the count.
pub fn select_layout(item_count: usize) -> TileLayout {
    let (arrangement, columns) = match item_count {
        0 => (Arrangement::None, None),
        1..=3 => (Arrangement::Row, None),
        4 => (Arrangement::Grid, Some(2)),
        5..=6 => (Arrangement::Grid, Some(3)),
        7..=10 => (Arrangement::Tiered, Some(2)),
        11..=24 => (Arrangement::Tiered, Some(3)),
        _ => (Arrangement::Tiered, Some(4)),
    };
    TileLayout {
        arrangement,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Arrangement::None, None)]
    #[case(1, Arrangement::Row, None)]
    #[case(3, Arrangement::Row, None)]
    #[case(4, Arrangement::Grid, Some(2))]
    #[case(5, Arrangement::Grid, Some(3))]
    #[case(6, Arrangement::Grid, Some(3))]
    #[case(7, Arrangement::Tiered, Some(2))]
    #[case(10, Arrangement::Tiered, Some(2))]
    #[case(11, Arrangement::Tiered, Some(3))]
    #[case(24, Arrangement::Tiered, Some(3))]
    #[case(25, Arrangement::Tiered, Some(4))]
    #[case(100, Arrangement::Tiered, Some(4))]
    fn thresholds(
        #[case] count: usize,
        #[case] arrangement: Arrangement,
        #[case] columns: Option<u32>,
    ) {
        assert_eq!(
            select_layout(count),
            TileLayout {
                arrangement,
                columns
            }
        );
    }

    #[test]
    fn total_over_a_wide_range() {
        for count in 0..=256 {
            let layout = select_layout(count);
            match layout.arrangement {
                Arrangement::None | Arrangement::Row => assert!(layout.columns.is_none()),
                Arrangement::Grid | Arrangement::Tiered => {
                    assert!(matches!(layout.columns, Some(2..=4)));
                }
            }
        }
    }
}
