//! # Result Renderer
//!
//! Turns a [`CalculatorResponse`] into what the result panel shows and owns
//! the panel's visibility.
//!
//! - Plot images are shown at a size variant chosen by the calculator
//!   (thalassemia: small, hemophilia: large).
//! - Percentages (the legacy contract) become bars, one per value, coloured
//!   by [`RiskTier`]. A service-assigned risk level travels alongside the
//!   bars and is shown verbatim.
//!
//! Every render clears whatever was shown before and only then installs the
//! new content, so the panel never mixes bars from one run with a plot from
//! another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::Calculator;
use crate::response::{CalculatorResponse, LabeledPercentage, PlotImage};

/// Colour band for a percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Below 20%
    Low,
    /// 20% to 50% inclusive
    Medium,
    /// Above 50%
    High,
}

impl RiskTier {
    /// Classify a percentage (0–100)
    pub fn from_percent(value: f64) -> RiskTier {
        if value > 50.0 {
            RiskTier::High
        } else if value >= 20.0 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// RGB components in 0.0–1.0 (green / amber / red)
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            RiskTier::Low => [0.063, 0.725, 0.506],
            RiskTier::Medium => [0.961, 0.620, 0.043],
            RiskTier::High => [0.937, 0.267, 0.267],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

/// One rendered percentage bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Value as reported by the service
    pub value: f64,
    pub tier: RiskTier,
}

impl Bar {
    pub fn from_percentage(item: &LabeledPercentage) -> Self {
        Bar {
            label: item.label.clone(),
            value: item.value,
            tier: RiskTier::from_percent(item.value),
        }
    }

    /// Fill fraction in 0.0–1.0 (values outside 0–100 are clamped)
    pub fn fill_fraction(&self) -> f32 {
        (self.value.clamp(0.0, 100.0) / 100.0) as f32
    }

    /// Value text as shown next to the label
    pub fn value_text(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Plot size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotSize {
    Small,
    Large,
}

impl PlotSize {
    /// Variant used for a calculator's plot
    pub fn for_calculator(calculator: Calculator) -> PlotSize {
        match calculator {
            Calculator::Thalassemia => PlotSize::Small,
            Calculator::Hemophilia => PlotSize::Large,
        }
    }

    /// Display width in logical pixels
    pub fn width_px(&self) -> f32 {
        match self {
            PlotSize::Small => 320.0,
            PlotSize::Large => 720.0,
        }
    }
}

/// What the result panel currently holds
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Visualization {
    #[default]
    Empty,
    Bars { bars: Vec<Bar>, risk_level: Option<String> },
    Plot { image: PlotImage, size: PlotSize },
}

/// Result panel state: content plus visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    visualization: Visualization,
    visible: bool,
    calculator: Option<Calculator>,
    rendered_at: Option<DateTime<Utc>>,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visualization(&self) -> &Visualization {
        &self.visualization
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Calculator whose result is shown, if any
    pub fn calculator(&self) -> Option<Calculator> {
        self.calculator
    }

    /// When the shown result was rendered
    pub fn rendered_at(&self) -> Option<DateTime<Utc>> {
        self.rendered_at
    }

    /// Hide the panel and discard its content
    pub fn reset(&mut self) {
        self.visible = false;
        self.visualization = Visualization::Empty;
        self.calculator = None;
        self.rendered_at = None;
    }

    /// Clear prior output, install the new visualization and show the panel.
    pub fn render(&mut self, calculator: Calculator, response: CalculatorResponse) {
        self.reset();
        self.visualization = match response {
            CalculatorResponse::Percentages { items, risk_level } => Visualization::Bars {
                bars: items.iter().map(Bar::from_percentage).collect(),
                risk_level,
            },
            CalculatorResponse::PlotImage(image) => Visualization::Plot {
                image,
                size: PlotSize::for_calculator(calculator),
            },
        };
        self.calculator = Some(calculator);
        self.rendered_at = Some(Utc::now());
        self.visible = true;
    }

    /// Bars currently shown (empty unless in bar mode)
    pub fn bars(&self) -> &[Bar] {
        match &self.visualization {
            Visualization::Bars { bars, .. } => bars,
            _ => &[],
        }
    }

    /// Risk level label the service attached to the shown bars
    pub fn risk_level(&self) -> Option<&str> {
        match &self.visualization {
            Visualization::Bars { risk_level, .. } => risk_level.as_deref(),
            _ => None,
        }
    }

    /// Plot currently shown, with its size variant
    pub fn plot(&self) -> Option<(&PlotImage, PlotSize)> {
        match &self.visualization {
            Visualization::Plot { image, size } => Some((image, *size)),
            _ => None,
        }
    }
}
