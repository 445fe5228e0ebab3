//! # Form Option Catalogs
//!
//! The fixed option sets offered by the calculator forms. Ids match the
//! calculation service's lookup tables.
//!
//! Requests carry plain strings, not these enums, so an id the catalog does
//! not know (an older form, a service-side addition) still passes through
//! untouched. The catalogs exist for pick lists, CLI help and defaults.
//!
//! ## Example
//!
//! ```rust
//! use risk_core::options::Population;
//!
//! let pop = Population::from_str_flexible("South Asian").unwrap();
//! assert_eq!(pop.id(), "south_asian");
//! ```

use serde::{Deserialize, Serialize};

/// Common interface over every catalog, used by front ends to build pick lists.
pub trait FormOption: Copy + PartialEq + 'static {
    /// All options in display order
    fn all() -> &'static [Self];
    /// Identifier sent to the calculation service
    fn id(&self) -> &'static str;
    /// Human-readable label
    fn display_name(&self) -> &'static str;

    /// Parse from an id or a display name, ignoring case, spaces and dashes
    fn from_str_flexible(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        Self::all()
            .iter()
            .copied()
            .find(|opt| normalize(opt.id()) == wanted || normalize(opt.display_name()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '/'], "_")
}

macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => ($id:literal, $label:literal) ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants for UI selection
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Identifier sent to the calculation service
            pub fn id(&self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }

            /// Get display name
            pub fn display_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Parse from an id or display name
            pub fn from_str_flexible(s: &str) -> Option<Self> {
                <Self as FormOption>::from_str_flexible(s)
            }
        }

        impl FormOption for $name {
            fn all() -> &'static [Self] {
                Self::ALL
            }
            fn id(&self) -> &'static str {
                $name::id(self)
            }
            fn display_name(&self) -> &'static str {
                $name::display_name(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.display_name())
            }
        }
    };
}

form_option! {
    /// Ancestral population of a parent (sets the baseline carrier rate)
    Population {
        SouthAsian => ("south_asian", "South Asian"),
        African => ("african", "African"),
        European => ("european", "European"),
    }
}

form_option! {
    /// Blood relationship between the parents
    Relation {
        Unrelated => ("unrelated", "Unrelated"),
        SecondCousins => ("second_cousins", "Second cousins"),
        FirstCousins => ("first_cousins", "First cousins"),
    }
}

form_option! {
    /// Mother's carrier test status (hemophilia)
    MotherCarrier {
        None => ("none", "Unknown / not tested"),
        Suspected => ("suspected", "Suspected"),
        Confirmed => ("confirmed", "Confirmed"),
    }
}

form_option! {
    /// Hemophilia in the mother's family
    MotherHistory {
        None => ("none", "No family history"),
        OneGeneration => ("one_generation", "One generation"),
        MultipleGenerations => ("multiple_generations", "Multiple generations"),
    }
}

form_option! {
    /// Whether the father has hemophilia
    FatherStatus {
        NotAffected => ("not_affected", "Not affected"),
        Affected => ("affected", "Affected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(Population::from_str_flexible("EUROPEAN"), Some(Population::European));
        assert_eq!(Relation::from_str_flexible("first-cousins"), Some(Relation::FirstCousins));
        assert_eq!(MotherCarrier::from_str_flexible("Unknown / not tested"), Some(MotherCarrier::None));
        assert_eq!(FatherStatus::from_str_flexible("not affected"), Some(FatherStatus::NotAffected));
        assert_eq!(Population::from_str_flexible("martian"), None);
    }

    #[test]
    fn test_ids_match_serde() {
        for rel in Relation::ALL {
            let json = serde_json::to_string(rel).unwrap();
            assert_eq!(json, format!("\"{}\"", rel.id()));
        }
        for hist in MotherHistory::ALL {
            let json = serde_json::to_string(hist).unwrap();
            assert_eq!(json, format!("\"{}\"", hist.id()));
        }
    }
}
