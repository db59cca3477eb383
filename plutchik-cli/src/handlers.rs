//! Handler functions for `plutchik` subcommands.
//!
//! Each handler returns a JSON value; `main` prints it as-is for `--json`
//! or renders the text form.

use anyhow::Result;
use plutchik_core::{
    describe_combined_state, Classifier, Dyad, DyadStyle, Emotion, EmotionalState,
};
use serde_json::{json, Value};

fn ranking_json(state: &EmotionalState) -> Vec<Value> {
    state
        .ranked()
        .iter()
        .rev()
        .map(|(emotion, magnitude)| {
            json!({
                "emotion": emotion.name(),
                "dimension": emotion.dimension().name(),
                "magnitude": magnitude,
            })
        })
        .collect()
}

/// Classify a state and report the description with its ranking.
pub fn handle_describe(classifier: &Classifier, state: &EmotionalState) -> Result<Value> {
    let description = classifier.classify(state);

    let mut value = serde_json::to_value(description)?;
    value["description"] = json!(description.to_string());
    value["dyad"] = serde_json::to_value(description.dyad())?;
    value["state"] = serde_json::to_value(state)?;
    value["ranking"] = Value::Array(ranking_json(state));

    Ok(value)
}

/// Active poles, strongest first.
pub fn handle_rank(state: &EmotionalState) -> Result<Value> {
    Ok(json!({
        "state": serde_json::to_value(state)?,
        "ranking": ranking_json(state),
    }))
}

/// Describe an explicit pair of emotions at an intensity.
pub fn handle_pair(first: Emotion, second: Emotion, intensity: f64) -> Result<Value> {
    Ok(json!({
        "first": first.name(),
        "second": second.name(),
        "intensity": intensity,
        "dyad": serde_json::to_value(Dyad::from_pair(first, second))?,
        "description": describe_combined_state(first, second, intensity),
    }))
}

/// All 28 unordered pairs rendered at one intensity.
pub fn handle_dyads(intensity: f64) -> Result<Value> {
    let mut pairs = Vec::with_capacity(28);
    for (i, &first) in Emotion::ALL.iter().enumerate() {
        for &second in &Emotion::ALL[i + 1..] {
            let dyad = Dyad::from_pair(first, second);
            let style = match dyad.map(Dyad::style) {
                Some(DyadStyle::Graded(_)) => Some("graded"),
                Some(DyadStyle::Prefixed(_)) => Some("prefixed"),
                None => None,
            };
            pairs.push(json!({
                "first": first.name(),
                "second": second.name(),
                "dyad": serde_json::to_value(dyad)?,
                "style": style,
                "description": describe_combined_state(first, second, intensity),
            }));
        }
    }

    Ok(json!({
        "intensity": intensity,
        "count": pairs.len(),
        "pairs": pairs,
    }))
}
