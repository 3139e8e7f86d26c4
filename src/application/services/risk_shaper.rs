use crate::domain::RiskyTerm;

/// Shapes raw model output into structured risk records.
///
/// The model is prompted to emit one risk per line as `Term: Explanation`.
/// Lines that are blank, carry no colon, or have an empty term or
/// explanation after trimming contribute nothing. Output order follows
/// input line order.
pub fn shape_risks(raw: &str) -> Vec<RiskyTerm> {
    raw.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            let (term, explanation) = line.split_once(':')?;
            let term = term.trim();
            let explanation = explanation.trim();

            if term.is_empty() || explanation.is_empty() {
                return None;
            }

            Some(RiskyTerm::new(term.to_string(), explanation.to_string()))
        })
        .collect()
}
