//! Type selection over collected callouts

use magpie_core::Callout;

/// The distinct callout types observed, in first-occurrence order.
pub fn distinct_types(callouts: &[Callout]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for callout in callouts {
        if !types.contains(&callout.callout_type) {
            types.push(callout.callout_type.clone());
        }
    }
    types
}

/// The callouts whose type equals `callout_type` exactly (case-sensitive),
/// in their original relative order.
pub fn filter_by_type(callouts: &[Callout], callout_type: &str) -> Vec<Callout> {
    callouts
        .iter()
        .filter(|callout| callout.callout_type == callout_type)
        .cloned()
        .collect()
}
