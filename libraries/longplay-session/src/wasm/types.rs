//! WASM-compatible type definitions

use crate::SeekOutcome;
use serde::{Deserialize, Serialize};

/// JS-friendly click result
///
/// `kind` is `"seeked"`, `"ignored"` or `"outside"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WasmSeekOutcome {
    pub kind: String,
    pub time: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl From<SeekOutcome> for WasmSeekOutcome {
    fn from(outcome: SeekOutcome) -> Self {
        match outcome {
            SeekOutcome::Seeked { time, point } => Self {
                kind: "seeked".to_string(),
                time: Some(time),
                x: Some(point.x),
                y: Some(point.y),
            },
            SeekOutcome::Ignored { time } => Self {
                kind: "ignored".to_string(),
                time: Some(time),
                x: None,
                y: None,
            },
            SeekOutcome::OutsideTrack => Self {
                kind: "outside".to_string(),
                time: None,
                x: None,
                y: None,
            },
        }
    }
}
