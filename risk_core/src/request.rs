//! # Request Builder
//!
//! Assembles the request body for each calculator right before submission.
//!
//! - **Thalassemia** reads both parents' populations and the relation from
//!   the form, and derives the history category from the pedigree.
//! - **Hemophilia** passes its four form fields through as independent inputs.
//!
//! Field values are opaque ids. Nothing is validated here beyond presence;
//! rejecting bad values is the calculation service's job.
//!
//! ## JSON Serialization
//!
//! ```json
//! // POST /calculate_thalassemia
//! { "mother_population": "south_asian", "father_population": "european",
//!   "relation": "first_cousins", "history": "one_parent" }
//!
//! // POST /calculate_hemophilia
//! { "mother_carrier": "suspected", "mother_history": "one_generation",
//!   "mother_population": "african", "father_affected": "affected" }
//! ```

use serde::{Deserialize, Serialize};

use crate::options::{FatherStatus, MotherCarrier, MotherHistory, Population, Relation};
use crate::pedigree::{HistoryCategory, PedigreeState};

/// The two disease models, one tab and one endpoint each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    #[default]
    Thalassemia,
    Hemophilia,
}

impl Calculator {
    /// All calculators in tab order
    pub const ALL: [Calculator; 2] = [Calculator::Thalassemia, Calculator::Hemophilia];

    /// Service path for this model
    pub fn endpoint(&self) -> &'static str {
        match self {
            Calculator::Thalassemia => "/calculate_thalassemia",
            Calculator::Hemophilia => "/calculate_hemophilia",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::Thalassemia => "Thalassemia",
            Calculator::Hemophilia => "Hemophilia",
        }
    }

    /// Inheritance model the calculator covers
    pub fn inheritance(&self) -> &'static str {
        match self {
            Calculator::Thalassemia => "Autosomal recessive",
            Calculator::Hemophilia => "X-linked recessive",
        }
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Current values of the thalassemia form controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThalassemiaForm {
    pub mother_population: String,
    pub father_population: String,
    pub relation: String,
}

impl Default for ThalassemiaForm {
    fn default() -> Self {
        ThalassemiaForm {
            mother_population: Population::SouthAsian.id().to_string(),
            father_population: Population::SouthAsian.id().to_string(),
            relation: Relation::Unrelated.id().to_string(),
        }
    }
}

/// Current values of the hemophilia form controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HemophiliaForm {
    pub mother_carrier: String,
    pub mother_history: String,
    pub mother_population: String,
    pub father_affected: String,
}

impl Default for HemophiliaForm {
    fn default() -> Self {
        HemophiliaForm {
            mother_carrier: MotherCarrier::None.id().to_string(),
            mother_history: MotherHistory::None.id().to_string(),
            mother_population: Population::SouthAsian.id().to_string(),
            father_affected: FatherStatus::NotAffected.id().to_string(),
        }
    }
}

/// Body of `POST /calculate_thalassemia`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThalassemiaRequest {
    pub mother_population: String,
    pub father_population: String,
    pub relation: String,
    pub history: HistoryCategory,
}

/// Body of `POST /calculate_hemophilia`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HemophiliaRequest {
    pub mother_carrier: String,
    pub mother_history: String,
    pub mother_population: String,
    pub father_affected: String,
}

/// A request for either calculator.
///
/// Serializes as the bare body (no tag); the variant picks the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalculatorRequest {
    Thalassemia(ThalassemiaRequest),
    Hemophilia(HemophiliaRequest),
}

impl CalculatorRequest {
    /// Which calculator this request targets
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculatorRequest::Thalassemia(_) => Calculator::Thalassemia,
            CalculatorRequest::Hemophilia(_) => Calculator::Hemophilia,
        }
    }

    /// Service path this request is posted to
    pub fn endpoint(&self) -> &'static str {
        self.calculator().endpoint()
    }
}

/// Build the thalassemia request.
///
/// The history comes from the pedigree's parent statuses; the ancestor count
/// is only used when neither parent is affected.
pub fn build_thalassemia(
    form: &ThalassemiaForm,
    pedigree: &mut PedigreeState,
    ancestor_selected_count: usize,
) -> CalculatorRequest {
    let history = pedigree.derive_history(ancestor_selected_count);
    CalculatorRequest::Thalassemia(ThalassemiaRequest {
        mother_population: form.mother_population.clone(),
        father_population: form.father_population.clone(),
        relation: form.relation.clone(),
        history,
    })
}

/// Build the hemophilia request (direct inputs, no derived history)
pub fn build_hemophilia(form: &HemophiliaForm) -> CalculatorRequest {
    CalculatorRequest::Hemophilia(HemophiliaRequest {
        mother_carrier: form.mother_carrier.clone(),
        mother_history: form.mother_history.clone(),
        mother_population: form.mother_population.clone(),
        father_affected: form.father_affected.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::ParentSide;
    use serde_json::json;

    fn general_form() -> ThalassemiaForm {
        ThalassemiaForm {
            mother_population: "general".to_string(),
            father_population: "general".to_string(),
            relation: "none".to_string(),
        }
    }

    #[test]
    fn test_one_affected_parent_body() {
        let mut pedigree = PedigreeState::new();
        pedigree.set_parent_status(ParentSide::Male, true);
        pedigree.set_parent_status(ParentSide::Female, false);

        let request = build_thalassemia(&general_form(), &mut pedigree, 0);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "mother_population": "general",
                "father_population": "general",
                "relation": "none",
                "history": "one_parent"
            })
        );
        assert_eq!(request.endpoint(), "/calculate_thalassemia");
    }

    #[test]
    fn test_two_ancestors_without_affected_parents() {
        let mut pedigree = PedigreeState::new();
        let request = build_thalassemia(&general_form(), &mut pedigree, 2);
        match request {
            CalculatorRequest::Thalassemia(req) => assert_eq!(req.history, HistoryCategory::BothParents),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_hemophilia_passthrough() {
        let form = HemophiliaForm {
            mother_carrier: "suspected".to_string(),
            mother_history: "one_generation".to_string(),
            mother_population: "african".to_string(),
            father_affected: "affected".to_string(),
        };
        let request = build_hemophilia(&form);
        assert_eq!(request.calculator(), Calculator::Hemophilia);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "mother_carrier": "suspected",
                "mother_history": "one_generation",
                "mother_population": "african",
                "father_affected": "affected"
            })
        );
    }

    #[test]
    fn test_blank_values_pass_through() {
        let form = HemophiliaForm {
            mother_carrier: String::new(),
            ..HemophiliaForm::default()
        };
        let body = serde_json::to_value(build_hemophilia(&form)).unwrap();
        assert_eq!(body["mother_carrier"], "");
        assert_eq!(body["father_affected"], "not_affected");
    }
}
