//! # Option Catalog
//!
//! Fixed choice lists offered by the aerobics and focus steps.

/// Aerobic option that, once chosen, replaces every other selection.
pub const NO_AEROBICS: &str = "Não desejo no momento";

/// Aerobic activities in display order. The sentinel is always last.
pub static AEROBIC_OPTIONS: [&str; 7] = [
    "Caminhada",
    "Corrida",
    "Bicicleta",
    "Natação",
    "Elíptico",
    "Escada",
    NO_AEROBICS,
];

/// A body part the student wants to prioritise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusOption {
    /// Stable identifier stored in the record.
    pub id: &'static str,
    /// Label shown to the student and written into the summary.
    pub label: &'static str,
}

/// Focus areas in display order.
pub static FOCUS_OPTIONS: [FocusOption; 7] = [
    FocusOption {
        id: "abdomen",
        label: "Abdômen",
    },
    FocusOption {
        id: "gluteos",
        label: "Glúteos",
    },
    FocusOption {
        id: "pernas",
        label: "Pernas",
    },
    FocusOption {
        id: "bracos",
        label: "Braços",
    },
    FocusOption {
        id: "costas",
        label: "Costas",
    },
    FocusOption {
        id: "peitoral",
        label: "Peitoral",
    },
    FocusOption {
        id: "geral",
        label: "Corpo todo",
    },
];

/// Find a focus option by id.
#[must_use]
pub fn focus_option(id: &str) -> Option<&'static FocusOption> {
    FOCUS_OPTIONS.iter().find(|option| option.id == id)
}

/// Display label for a focus id, falling back to the raw id.
#[must_use]
pub fn focus_label(id: &str) -> &str {
    focus_option(id).map(|option| option.label).unwrap_or(id)
}
