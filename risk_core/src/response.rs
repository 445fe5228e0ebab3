//! # Calculator Responses
//!
//! The service answers in one of two contracts:
//!
//! - **Legacy**: named percentages (`{risk}` or `{boy, girl, risk_level}`
//!   for thalassemia, `{boy, girl_carrier, girl_affected}` for hemophilia)
//! - **Current**: `{plot}`, a base64 PNG of the probability plot
//!
//! Both are parsed into the tagged [`CalculatorResponse`] so the renderer
//! matches on the variant instead of probing for fields. When a body carries
//! `plot` it wins over any percentage fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{RiskError, RiskResult};
use crate::request::Calculator;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// One named percentage (0–100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPercentage {
    pub label: String,
    pub value: f64,
}

impl LabeledPercentage {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        LabeledPercentage {
            label: label.into(),
            value,
        }
    }
}

/// Decoded probability plot image (PNG bytes)
#[derive(Clone, PartialEq, Eq)]
pub struct PlotImage {
    bytes: Vec<u8>,
}

impl PlotImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        PlotImage { bytes }
    }

    /// Decode a base64 payload, with or without a `data:` URI prefix
    pub fn from_base64(payload: &str) -> RiskResult<Self> {
        let raw = payload.trim();
        let raw = raw.strip_prefix(DATA_URI_PREFIX).unwrap_or(raw);
        let bytes = STANDARD
            .decode(raw)
            .map_err(|e| RiskError::connection_failure(format!("invalid plot payload: {}", e)))?;
        Ok(PlotImage { bytes })
    }

    /// Raw PNG bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:image/png;base64,<payload>` for embedding
    pub fn data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(&self.bytes))
    }
}

impl std::fmt::Debug for PlotImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotImage").field("len", &self.bytes.len()).finish()
    }
}

/// A parsed service response
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorResponse {
    /// Legacy contract: named percentages, plus the service's own risk level
    /// label when the body carries one
    Percentages {
        items: Vec<LabeledPercentage>,
        risk_level: Option<String>,
    },
    /// Current contract: rendered plot
    PlotImage(PlotImage),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThalassemiaWire {
    Plot { plot: String },
    Risk { risk: f64 },
    Split {
        boy: f64,
        girl: f64,
        #[serde(default)]
        risk_level: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HemophiliaWire {
    Plot {
        plot: String,
    },
    Split {
        #[serde(alias = "boy_affected")]
        boy: f64,
        girl_carrier: f64,
        girl_affected: f64,
    },
}

impl CalculatorResponse {
    /// Percentages without a service-assigned risk level
    pub fn percentages(items: Vec<LabeledPercentage>) -> Self {
        CalculatorResponse::Percentages { items, risk_level: None }
    }

    /// Parse a response body for the given calculator.
    ///
    /// Anything that matches neither contract is a `ConnectionFailure`.
    pub fn from_json(calculator: Calculator, body: &[u8]) -> RiskResult<Self> {
        let unparsable =
            |e: serde_json::Error| RiskError::connection_failure(format!("unparsable {} response: {}", calculator, e));

        match calculator {
            Calculator::Thalassemia => match serde_json::from_slice::<ThalassemiaWire>(body).map_err(unparsable)? {
                ThalassemiaWire::Plot { plot } => Ok(CalculatorResponse::PlotImage(PlotImage::from_base64(&plot)?)),
                ThalassemiaWire::Risk { risk } => Ok(CalculatorResponse::percentages(vec![LabeledPercentage::new(
                    "Autosomal Recessive Risk",
                    risk,
                )])),
                ThalassemiaWire::Split { boy, girl, risk_level } => Ok(CalculatorResponse::Percentages {
                    items: vec![
                        LabeledPercentage::new("Boy (Affected)", boy),
                        LabeledPercentage::new("Girl (Affected)", girl),
                    ],
                    risk_level: risk_level.filter(|level| !level.trim().is_empty()),
                }),
            },
            Calculator::Hemophilia => match serde_json::from_slice::<HemophiliaWire>(body).map_err(unparsable)? {
                HemophiliaWire::Plot { plot } => Ok(CalculatorResponse::PlotImage(PlotImage::from_base64(&plot)?)),
                HemophiliaWire::Split {
                    boy,
                    girl_carrier,
                    girl_affected,
                } => Ok(CalculatorResponse::percentages(vec![
                    LabeledPercentage::new("Boy (Affected)", boy),
                    LabeledPercentage::new("Girl (Carrier)", girl_carrier),
                    LabeledPercentage::new("Girl (Affected)", girl_affected),
                ])),
            },
        }
    }

    /// Short name of the contract, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            CalculatorResponse::Percentages { .. } => "percentages",
            CalculatorResponse::PlotImage(_) => "plot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thalassemia_legacy_risk() {
        let resp = CalculatorResponse::from_json(Calculator::Thalassemia, br#"{"risk": 12.5}"#).unwrap();
        assert_eq!(
            resp,
            CalculatorResponse::percentages(vec![LabeledPercentage::new("Autosomal Recessive Risk", 12.5)])
        );
    }

    #[test]
    fn test_thalassemia_boy_girl_variant() {
        let body = br#"{"boy": 3.2, "girl": 3.2, "risk_level": "Low"}"#;
        match CalculatorResponse::from_json(Calculator::Thalassemia, body).unwrap() {
            CalculatorResponse::Percentages { items, risk_level } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].label, "Girl (Affected)");
                assert_eq!(risk_level.as_deref(), Some("Low"));
            }
            other => panic!("expected percentages, got {:?}", other),
        }
    }

    #[test]
    fn test_hemophilia_legacy_fields() {
        let body = br#"{"boy": 25.0, "girl_carrier": 75.0, "girl_affected": 25.0}"#;
        match CalculatorResponse::from_json(Calculator::Hemophilia, body).unwrap() {
            CalculatorResponse::Percentages { items, risk_level } => {
                assert_eq!(risk_level, None);
                let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
                assert_eq!(labels, ["Boy (Affected)", "Girl (Carrier)", "Girl (Affected)"]);
                assert_eq!(items[1].value, 75.0);
            }
            other => panic!("expected percentages, got {:?}", other),
        }
    }

    #[test]
    fn test_hemophilia_model_field_alias() {
        let body = br#"{"boy_affected": 10.0, "girl_carrier": 10.0, "girl_affected": 0.0}"#;
        assert!(matches!(
            CalculatorResponse::from_json(Calculator::Hemophilia, body).unwrap(),
            CalculatorResponse::Percentages { .. }
        ));
    }

    #[test]
    fn test_blank_risk_level_dropped() {
        let body = br#"{"boy": 30.0, "girl": 30.0, "risk_level": " "}"#;
        let resp = CalculatorResponse::from_json(Calculator::Thalassemia, body).unwrap();
        assert!(matches!(resp, CalculatorResponse::Percentages { risk_level: None, .. }));
    }

    #[test]
    fn test_plot_wins_over_percentages() {
        let body = br#"{"plot": "iVBORw0K", "risk": 40.0}"#;
        let resp = CalculatorResponse::from_json(Calculator::Thalassemia, body).unwrap();
        match resp {
            CalculatorResponse::PlotImage(img) => {
                assert_eq!(&img.bytes()[..4], &[0x89, b'P', b'N', b'G']);
                assert_eq!(img.data_uri(), "data:image/png;base64,iVBORw0K");
            }
            other => panic!("expected plot, got {:?}", other),
        }
    }

    #[test]
    fn test_plot_with_data_uri_prefix() {
        let img = PlotImage::from_base64("data:image/png;base64,iVBORw0K").unwrap();
        assert_eq!(img.bytes().len(), 6);
    }

    #[test]
    fn test_bad_bodies_are_connection_failures() {
        let cases: [&[u8]; 4] = [b"<html>502</html>", b"{}", br#"{"plot": "***"}"#, br#"{"risk": "high"}"#];
        for body in cases {
            let err = CalculatorResponse::from_json(Calculator::Thalassemia, body).unwrap_err();
            assert_eq!(err.error_code(), "CONNECTION_FAILURE");
        }
        let err = CalculatorResponse::from_json(Calculator::Hemophilia, br#"{"boy": 1.0}"#).unwrap_err();
        assert!(matches!(err, RiskError::ConnectionFailure { .. }));
    }
}
