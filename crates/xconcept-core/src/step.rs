//! # Wizard Steps
//!
//! The ten screens of the assessment, in order.
//!
//! | # | Step | Required to continue |
//! |---|------|----------------------|
//! | 1 | Welcome | nothing |
//! | 2 | Basic info | name, age, height and weight |
//! | 3 | Photos | nothing (photos are optional) |
//! | 4 | Measurements | nothing |
//! | 5 | Frequency | a frequency |
//! | 6 | Aerobics | nothing |
//! | 7 | Focus | a body part and a non-empty note |
//! | 8 | Injuries | a yes/no answer |
//! | 9 | Goal | nothing (display only) |
//! | 10 | Finish | terminal, never continues |

use crate::record::AssessmentRecord;
use serde::{Deserialize, Serialize};

/// Number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 10;

/// Steps that show the progress bar (everything between welcome and finish).
pub const PROGRESS_STEPS: u8 = TOTAL_STEPS - 2;

// =============================================================================
// STEP ENUM
// =============================================================================

/// One screen of the wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Welcome,
    BasicInfo,
    Photos,
    Measurements,
    Frequency,
    Aerobics,
    Focus,
    Injuries,
    Goal,
    Finish,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; TOTAL_STEPS as usize] = [
        Step::Welcome,
        Step::BasicInfo,
        Step::Photos,
        Step::Measurements,
        Step::Frequency,
        Step::Aerobics,
        Step::Focus,
        Step::Injuries,
        Step::Goal,
        Step::Finish,
    ];

    /// 1-based position in the wizard.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Step at a 1-based position.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Step> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
    }

    /// Get the next step, if any.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    /// Get the previous step, if any.
    #[must_use]
    pub fn previous(self) -> Option<Step> {
        Self::from_number(self.number() - 1)
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Step::Welcome)
    }

    /// Check if this step is terminal (Finish).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Step::Finish)
    }

    /// Whether the back action and progress bar are shown.
    #[must_use]
    pub const fn shows_navigation(self) -> bool {
        !self.is_first() && !self.is_terminal()
    }

    /// Whether the record satisfies this step's requirements.
    ///
    /// Only presence is checked; `"abc"` is an acceptable age.
    #[must_use]
    pub fn can_advance(self, record: &AssessmentRecord) -> bool {
        match self {
            Step::Welcome
            | Step::Photos
            | Step::Measurements
            | Step::Aerobics
            | Step::Goal => true,
            Step::BasicInfo => [&record.name, &record.age, &record.height, &record.weight]
                .iter()
                .all(|field| !field.is_empty()),
            Step::Frequency => record.frequency.is_set(),
            Step::Focus => !record.focus_body_part.is_empty() && !record.focus_notes.is_empty(),
            Step::Injuries => record.has_injuries.is_answered(),
            Step::Finish => false,
        }
    }

    /// Progress through the question steps, if shown on this step.
    #[must_use]
    pub fn progress(self) -> Option<Progress> {
        self.shows_navigation().then(|| Progress {
            current: self.number() - 1,
            total: PROGRESS_STEPS,
        })
    }

    /// Screen title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Bem-vindo ao XCONCEPT",
            Step::BasicInfo => "Dados Básicos",
            Step::Photos => "Avaliação por Fotos",
            Step::Measurements => "Medidas Corporais",
            Step::Frequency => "Frequência de Treino",
            Step::Aerobics => "Atividade Aeróbica",
            Step::Focus => "Foco do Treino",
            Step::Injuries => "Lesões ou Restrições",
            Step::Goal => "Sua Meta Inicial",
            Step::Finish => "Enviar Avaliação",
        }
    }

    /// Screen subtitle.
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Step::Welcome => {
                "Aqui você não começa perfeito.\nVocê começa possível.\nE evolui com método, acompanhamento e constância."
            }
            Step::BasicInfo => "Para começarmos a entender o seu perfil.",
            Step::Photos => "Use roupas confortáveis e boa iluminação.",
            Step::Measurements => "Medidas em centímetros.",
            Step::Frequency => "Quantas vezes por semana você consegue treinar?",
            Step::Aerobics => "O que você gosta de fazer?",
            Step::Focus => "O que você mais quer melhorar na composição corporal?",
            Step::Injuries => "Segurança em primeiro lugar.",
            Step::Goal => "Vamos trabalhar com uma meta clara, possível e mensurável.",
            Step::Finish => "Agora vamos enviar sua avaliação para acompanhamento profissional.",
        }
    }

    /// Closing copy shown under the step's actions.
    #[must_use]
    pub const fn closing(self) -> Option<&'static str> {
        match self {
            Step::Finish => {
                Some("Avaliação feita. Agora é sobre constância.\nMais treino. Menos ansiedade.")
            }
            _ => None,
        }
    }

    /// Label of the continue action.
    #[must_use]
    pub const fn continue_label(self) -> &'static str {
        match self {
            Step::Welcome => "Iniciar Avaliação Física",
            Step::Goal => "Finalizar Avaliação",
            _ => "Continuar",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}: {}", self.number(), TOTAL_STEPS, self.title())
    }
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Position within the question steps (2 through 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: u8,
    pub total: u8,
}

impl Progress {
    /// Completion percentage, capped at 100. Integer arithmetic only.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let pct = u16::from(self.current) * 100 / u16::from(self.total);
        pct.min(100) as u8
    }
}

// =============================================================================
// TESTS
// =============================================================================
