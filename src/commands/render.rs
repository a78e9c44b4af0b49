//! Plain-text step rendering shared by `trace` and `play`.

use stepscope::trace::Step;

/// One-line summary of a step: position, source line, phase tag, description.
pub fn step_line(index: usize, total: usize, step: &Step) -> String {
    let position = format!("{}/{}", index + 1, total);
    match &step.phase {
        Some(phase) => format!(
            "{position:>7}  L{:<2} [{phase}] {}",
            step.line_number, step.description
        ),
        None => format!("{position:>7}  L{:<2} {}", step.line_number, step.description),
    }
}

/// The step's insight, if it carries one.
pub fn insight_line(step: &Step) -> Option<&str> {
    if step.insight.is_empty() {
        None
    } else {
        Some(&step.insight)
    }
}

/// Variable snapshot as `name=value` pairs, in stable key order.
pub fn variables_line(step: &Step) -> Option<String> {
    if step.variables.is_empty() {
        return None;
    }
    let pairs = step
        .variables
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>();
    Some(pairs.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn step_line_includes_phase_tag() {
        let step = Step::new(4, "Compare a[1] with a[2]").with_phase("scan");
        insta::assert_snapshot!(
            step_line(99, 999, &step),
            @"100/999  L4  [scan] Compare a[1] with a[2]"
        );
    }

    #[test]
    fn step_line_without_phase() {
        let step = Step::new(2, "Initialize lo=0, hi=5");
        insta::assert_snapshot!(
            step_line(999, 1000, &step),
            @"1000/1000  L2  Initialize lo=0, hi=5"
        );
    }

    #[test]
    fn short_positions_are_right_aligned() {
        let step = Step::new(2, "Initialize");
        assert_eq!(step_line(0, 12, &step), "   1/12  L2  Initialize");
    }

    #[test]
    fn insight_is_absent_for_plain_steps() {
        let plain = Step::new(3, "Advance i");
        assert_eq!(insight_line(&plain), None);

        let noted = Step::new(3, "Advance i").with_insight("The window only ever grows");
        assert_eq!(insight_line(&noted), Some("The window only ever grows"));
    }

    #[test]
    fn variables_render_in_stable_order() {
        let step = Step::new(2, "Initialize")
            .with_var("lo", json!(0))
            .with_var("hi", json!(5))
            .with_var("array", json!([1, 3, 5]));
        insta::assert_snapshot!(
            variables_line(&step).unwrap(),
            @"array=[1,3,5]  hi=5  lo=0"
        );
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        assert_eq!(variables_line(&Step::new(1, "Done")), None);
    }
}
