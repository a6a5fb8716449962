//! Hatch-pattern assignment for bar plots.
//!
//! Bars that differ only by fill color become indistinguishable in
//! black & white print. These helpers give every distinct fill color a
//! distinct hatch pattern, cycling through an assortment, so repeated
//! colors keep their hatch across bar groups.

/// Default hatch assortment, in assignment order. The empty string is a
/// plain fill.
pub const DEFAULT_HATCHES: [&str; 7] = ["", "///", "+", "x", "-", "*", "o"];

/// Assign a hatch to each bar based on its fill color.
///
/// The first time a color appears it is bound to the next hatch in
/// `hatches` (wrapping around when the assortment runs out); every later
/// occurrence of the same color reuses that hatch. Pass
/// [`DEFAULT_HATCHES`] unless a specific assortment is needed.
pub fn assign_hatches(colors: &[String], hatches: &[&str]) -> Vec<String> {
    let mut bound: Vec<(String, String)> = Vec::new();

    colors
        .iter()
        .map(|color| {
            if let Some((_, h)) = bound.iter().find(|(c, _)| c == color) {
                return h.clone();
            }
            let next = hatches
                .get(bound.len() % hatches.len().max(1))
                .copied()
                .unwrap_or("");
            bound.push((color.clone(), next.to_string()));
            next.to_string()
        })
        .collect()
}

/// SVG pattern content for a hatch string, or `None` for a plain fill.
///
/// Patterns are drawn in white over the bar's fill color, matching the
/// white-edged look used for print-friendly bars.
pub fn hatch_svg_pattern(hatch: &str) -> Option<&'static str> {
    match hatch {
        "///" => Some(r#"<path d="M0,6 l6,-6 M-1,1 l2,-2 M5,7 l2,-2" stroke="white" stroke-width="1"/>"#),
        "+" => Some(r#"<path d="M3,0 l0,6 M0,3 l6,0" stroke="white" stroke-width="1"/>"#),
        "x" => Some(r#"<path d="M0,0 l6,6 M6,0 l-6,6" stroke="white" stroke-width="1"/>"#),
        "-" => Some(r#"<path d="M0,3 l6,0" stroke="white" stroke-width="1"/>"#),
        "*" => Some(r#"<path d="M3,0 l0,6 M0,3 l6,0 M0,0 l6,6 M6,0 l-6,6" stroke="white" stroke-width="0.8"/>"#),
        "o" => Some(r#"<circle cx="3" cy="3" r="1.5" fill="none" stroke="white" stroke-width="1"/>"#),
        _ => None,
    }
}

/// Stable pattern element id for a hatch string.
pub fn hatch_pattern_id(hatch: &str) -> String {
    let name = match hatch {
        "///" => "diag",
        "+" => "plus",
        "x" => "cross",
        "-" => "dash",
        "*" => "star",
        "o" => "dot",
        other => other,
    };
    format!("hatch-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|&x| x.to_string()).collect()
    }

    #[test]
    fn distinct_colors_get_distinct_hatches() {
        let out = assign_hatches(&s(&["red", "green", "blue"]), &DEFAULT_HATCHES);
        assert_eq!(out, vec!["", "///", "+"]);
    }

    #[test]
    fn repeated_colors_reuse_their_hatch() {
        let out = assign_hatches(&s(&["red", "green", "red", "green"]), &DEFAULT_HATCHES);
        assert_eq!(out, vec!["", "///", "", "///"]);
    }

    #[test]
    fn assortment_wraps_when_exhausted() {
        let colors: Vec<String> = (0..9).map(|i| format!("c{i}")).collect();
        let out = assign_hatches(&colors, &DEFAULT_HATCHES);
        assert_eq!(out[7], "");
        assert_eq!(out[8], "///");
    }

    #[test]
    fn every_nonempty_hatch_has_a_pattern() {
        for h in DEFAULT_HATCHES {
            if h.is_empty() {
                assert!(hatch_svg_pattern(h).is_none());
            } else {
                assert!(hatch_svg_pattern(h).is_some(), "missing pattern for {h:?}");
            }
        }
    }
}
