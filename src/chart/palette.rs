//! Deterministic color and marker assignment.
//!
//! Well-known structure names get fixed seed entries; everything else takes
//! the next unused entry from a fallback pool in sorted-name order, cycling
//! by index when the pool runs out. Re-running on the same name set always
//! reproduces identical assignments, which keeps figures comparable across
//! runs.

use std::collections::BTreeMap;

use plotters::style::RGBColor;

/// Marker shapes drawn at series data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    TriangleDown,
    Square,
    Diamond,
    TriangleUp,
    Plus,
    Cross,
    Star,
}

/// Seed colors for well-known structure names (ColorBrewer-inspired).
const SEED_COLORS: &[(&str, RGBColor)] = &[
    ("DS1", RGBColor(65, 138, 247)),
    ("DS2", RGBColor(95, 176, 117)),
    ("DS3", RGBColor(238, 97, 61)),
];

const SEED_MARKERS: &[(&str, Marker)] = &[
    ("DS1", Marker::Circle),
    ("DS2", Marker::TriangleDown),
    ("DS3", Marker::Square),
    ("DynamicArrayStore", Marker::Diamond),
    ("StaticArrayLinkedStore", Marker::TriangleUp),
];

/// Fallback colors for names outside the seed table.
const FALLBACK_COLORS: &[RGBColor] = &[
    RGBColor(55, 126, 184),
    RGBColor(255, 127, 0),
    RGBColor(77, 175, 74),
    RGBColor(247, 129, 191),
    RGBColor(166, 86, 40),
    RGBColor(152, 78, 163),
    RGBColor(153, 153, 153),
    RGBColor(228, 26, 28),
    RGBColor(222, 222, 0),
];

const FALLBACK_MARKERS: &[Marker] = &[
    Marker::Circle,
    Marker::TriangleDown,
    Marker::Square,
    Marker::Diamond,
    Marker::TriangleUp,
    Marker::Plus,
    Marker::Cross,
    Marker::Star,
];

fn assign<T: Copy, S: AsRef<str>>(
    names: &[S],
    seeds: &[(&str, T)],
    pool: &[T],
) -> BTreeMap<String, T> {
    let mut map: BTreeMap<String, T> = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        if let Some((_, value)) = seeds.iter().find(|(seed, _)| *seed == name) {
            map.insert(name.to_string(), *value);
        }
    }

    let mut sorted: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut idx = 0;
    for name in sorted {
        if map.contains_key(name) {
            continue;
        }
        map.insert(name.to_string(), pool[idx % pool.len()]);
        idx += 1;
    }
    map
}

/// Deterministic color per structure name.
pub fn build_color_map<S: AsRef<str>>(names: &[S]) -> BTreeMap<String, RGBColor> {
    assign(names, SEED_COLORS, FALLBACK_COLORS)
}

/// Deterministic marker per structure name.
pub fn build_marker_map<S: AsRef<str>>(names: &[S]) -> BTreeMap<String, Marker> {
    assign(names, SEED_MARKERS, FALLBACK_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_names_keep_their_entries() {
        let colors = build_color_map(&["DS2", "DS1", "Skippy"]);
        assert_eq!(colors["DS1"], RGBColor(65, 138, 247));
        assert_eq!(colors["DS2"], RGBColor(95, 176, 117));

        let markers = build_marker_map(&["DS3", "DynamicArrayStore"]);
        assert_eq!(markers["DS3"], Marker::Square);
        assert_eq!(markers["DynamicArrayStore"], Marker::Diamond);
    }

    #[test]
    fn assignment_is_order_independent() {
        let a = build_color_map(&["Treap", "AVL", "BST", "DS1"]);
        let b = build_color_map(&["DS1", "BST", "AVL", "Treap"]);
        assert_eq!(a, b);

        let a = build_marker_map(&["SkipList_p0.5", "AVL", "BST"]);
        let b = build_marker_map(&["BST", "AVL", "SkipList_p0.5"]);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_names_take_fallbacks_in_sorted_order() {
        let colors = build_color_map(&["Zeta", "Alpha"]);
        assert_eq!(colors["Alpha"], FALLBACK_COLORS[0]);
        assert_eq!(colors["Zeta"], FALLBACK_COLORS[1]);
    }

    #[test]
    fn pool_overflow_cycles_instead_of_failing() {
        let names: Vec<String> = (0..20).map(|i| format!("S{i:02}")).collect();
        let colors = build_color_map(&names);
        assert_eq!(colors.len(), 20);
        assert_eq!(colors["S00"], colors[&format!("S{:02}", FALLBACK_COLORS.len())]);

        let markers = build_marker_map(&names);
        assert_eq!(markers["S00"], markers[&format!("S{:02}", FALLBACK_MARKERS.len())]);
    }
}
