//! Decorative hairline grid with cross markers at chosen intersections.

use dioxus::prelude::*;

/// Edge length of one grid cell in CSS pixels.
pub const CELL_PX: f64 = 91.2;

fn extent(cells: u32) -> f64 {
    f64::from(cells) * CELL_PX
}

/// Inner white cover leaving only the outer ring of cells visible.
fn cover_style(rows: u32, columns: u32) -> Option<String> {
    if rows < 3 || columns < 3 {
        return None;
    }
    Some(format!(
        "width: {:.1}px; height: {:.1}px; position: absolute; top: {:.1}px; left: {:.1}px; \
         background-color: white; z-index: 1;",
        extent(columns - 2) - 2.0,
        extent(rows - 2) - 2.0,
        CELL_PX + 1.0,
        CELL_PX + 1.0,
    ))
}

#[component]
pub fn Grid(rows: u32, columns: u32, children: Element) -> Element {
    let width = extent(columns);
    let height = extent(rows);
    let cells = (0..rows * columns).map(|index| (index % columns + 1, index / columns + 1));
    let cover = cover_style(rows, columns);

    rsx! {
        div { style: "position: relative; width: {width:.1}px; height: {height:.1}px;",
            div {
                class: "grid-system",
                style: "grid-template-columns: repeat({columns}, 1fr); grid-template-rows: repeat({rows}, 1fr); width: {width:.1}px; height: {height:.1}px;",
                for (x, y) in cells {
                    div {
                        key: "bg-{x}-{y}",
                        class: "grid-system__cell",
                        style: "grid-column: {x} / span 1; grid-row: {y} / span 1;",
                    }
                }
                {children}
            }
            if let Some(cover) = cover {
                div { style: "{cover}" }
            }
        }
    }
}

/// Cross marker placed on a grid line intersection.
#[component]
pub fn GridCross(row: u32, column: u32) -> Element {
    rsx! {
        svg { class: "grid-cross", style: "grid-row: {row}; grid-column: {column};",
            line {
                x1: "0",
                y1: "8",
                x2: "16",
                y2: "8",
                stroke: "#4D4D4D",
                "stroke-width": "1",
                "vector-effect": "non-scaling-stroke",
            }
            line {
                x1: "8",
                y1: "0",
                x2: "8",
                y2: "16",
                stroke: "#4D4D4D",
                "stroke-width": "1",
                "vector-effect": "non-scaling-stroke",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_leaves_a_one_cell_ring() {
        let style = cover_style(4, 5).unwrap();
        assert!(style.contains("width: 271.6px"), "{style}");
        assert!(style.contains("height: 180.4px"), "{style}");
        assert!(style.contains("top: 92.2px"), "{style}");
    }

    #[test]
    fn small_grids_have_no_cover() {
        assert_eq!(cover_style(2, 8), None);
        assert_eq!(cover_style(8, 1), None);
    }

    #[test]
    #[cfg(feature = "server")]
    fn renders_one_cell_per_position() {
        let html = dioxus::ssr::render_element(rsx! {
            Grid { rows: 3, columns: 4,
                GridCross { row: 2, column: 2 }
            }
        });
        assert_eq!(html.matches("grid-system__cell").count(), 12, "{html}");
        assert!(html.contains("width: 364.8px"), "{html}");
        assert!(html.contains("grid-cross"), "{html}");
    }
}
