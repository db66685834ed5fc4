//! # Assessment Record
//!
//! The single data object accumulating every answer of a session, and the
//! partial update type used to change it.
//!
//! Updates are shallow merges: a [`RecordPatch`] replaces exactly the fields
//! it carries. Nested values (the aerobic selection) are replaced whole.
//! The goal dates live outside the patch and cannot be edited.

use crate::aerobics::AerobicSelection;
use crate::schedule::GoalSchedule;
use crate::types::{Frequency, InjuryAnswer, PhotoRef};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD
// =============================================================================

/// Every answer collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentRecord {
    // Basic info
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub basic_notes: String,

    // Photos
    pub photo_front: Option<PhotoRef>,
    pub photo_side: Option<PhotoRef>,
    pub photo_back: Option<PhotoRef>,
    pub photo_notes: String,

    // Measurements (cm)
    pub waist: String,
    pub hip: String,
    pub chest: String,
    pub arm: String,
    pub thigh: String,
    pub measurement_notes: String,

    pub frequency: Frequency,

    pub aerobics: AerobicSelection,
    pub aerobics_notes: String,

    pub focus_body_part: String,
    pub focus_notes: String,

    // Injuries
    pub has_injuries: InjuryAnswer,
    pub injury_location: String,
    pub injury_restriction: String,
    pub injury_avoid: String,
    pub injury_notes: String,

    #[serde(flatten)]
    schedule: GoalSchedule,
}

impl AssessmentRecord {
    /// An empty record whose goal starts on the schedule's start date.
    #[must_use]
    pub fn new(schedule: GoalSchedule) -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            basic_notes: String::new(),
            photo_front: None,
            photo_side: None,
            photo_back: None,
            photo_notes: String::new(),
            waist: String::new(),
            hip: String::new(),
            chest: String::new(),
            arm: String::new(),
            thigh: String::new(),
            measurement_notes: String::new(),
            frequency: Frequency::Unset,
            aerobics: AerobicSelection::new(),
            aerobics_notes: String::new(),
            focus_body_part: String::new(),
            focus_notes: String::new(),
            has_injuries: InjuryAnswer::Unanswered,
            injury_location: String::new(),
            injury_restriction: String::new(),
            injury_avoid: String::new(),
            injury_notes: String::new(),
            schedule,
        }
    }

    /// The derived goal dates.
    #[must_use]
    pub const fn schedule(&self) -> &GoalSchedule {
        &self.schedule
    }

    /// Number of photo slots filled.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        [&self.photo_front, &self.photo_side, &self.photo_back]
            .iter()
            .filter(|p| p.is_some())
            .count()
    }

    /// Replace the fields present in `patch`, leave the rest untouched.
    pub fn merge(&mut self, patch: RecordPatch) {
        let RecordPatch {
            name,
            age,
            height,
            weight,
            basic_notes,
            photo_front,
            photo_side,
            photo_back,
            photo_notes,
            waist,
            hip,
            chest,
            arm,
            thigh,
            measurement_notes,
            frequency,
            aerobics,
            aerobics_notes,
            focus_body_part,
            focus_notes,
            has_injuries,
            injury_location,
            injury_restriction,
            injury_avoid,
            injury_notes,
        } = patch;

        replace(&mut self.name, name);
        replace(&mut self.age, age);
        replace(&mut self.height, height);
        replace(&mut self.weight, weight);
        replace(&mut self.basic_notes, basic_notes);
        replace(&mut self.photo_front, photo_front);
        replace(&mut self.photo_side, photo_side);
        replace(&mut self.photo_back, photo_back);
        replace(&mut self.photo_notes, photo_notes);
        replace(&mut self.waist, waist);
        replace(&mut self.hip, hip);
        replace(&mut self.chest, chest);
        replace(&mut self.arm, arm);
        replace(&mut self.thigh, thigh);
        replace(&mut self.measurement_notes, measurement_notes);
        replace(&mut self.frequency, frequency);
        replace(&mut self.aerobics, aerobics);
        replace(&mut self.aerobics_notes, aerobics_notes);
        replace(&mut self.focus_body_part, focus_body_part);
        replace(&mut self.focus_notes, focus_notes);
        replace(&mut self.has_injuries, has_injuries);
        replace(&mut self.injury_location, injury_location);
        replace(&mut self.injury_restriction, injury_restriction);
        replace(&mut self.injury_avoid, injury_avoid);
        replace(&mut self.injury_notes, injury_notes);
    }
}

#[inline]
fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

// =============================================================================
// PATCH
// =============================================================================

/// A partial set of record fields. `None` means "leave as is".
///
/// Deserializes from a JSON object where missing keys are left untouched,
/// which is how the `preview` command feeds answers from a file. Photo slots
/// are doubly optional: `Some(None)` (JSON `null`) empties the slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_notes: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub photo_front: Option<Option<PhotoRef>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub photo_side: Option<Option<PhotoRef>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub photo_back: Option<Option<PhotoRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerobics: Option<AerobicSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerobics_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_body_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_injuries: Option<InjuryAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_restriction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_avoid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_notes: Option<String>,
}

/// Distinguish an explicit `null` (`Some(None)`) from a missing key (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl RecordPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> AssessmentRecord {
        let start = NaiveDate::from_ymd_opt(2026, 5, 4).expect("date");
        AssessmentRecord::new(GoalSchedule::starting(start))
    }

    #[test]
    fn new_record_is_blank() {
        let r = record();
        assert!(r.name.is_empty());
        assert_eq!(r.frequency, Frequency::Unset);
        assert_eq!(r.has_injuries, InjuryAnswer::Unanswered);
        assert!(r.aerobics.is_empty());
        assert_eq!(r.photo_count(), 0);
    }

    #[test]
    fn merge_replaces_only_provided_fields() {
        let mut r = record();
        r.merge(RecordPatch {
            name: Some("Ana".into()),
            age: Some("30".into()),
            ..RecordPatch::default()
        });
        r.merge(RecordPatch {
            age: Some("31".into()),
            ..RecordPatch::default()
        });

        assert_eq!(r.name, "Ana");
        assert_eq!(r.age, "31");
        assert!(r.height.is_empty());
    }

    #[test]
    fn merge_replaces_aerobics_whole() {
        let mut r = record();
        r.merge(RecordPatch {
            aerobics: Some(AerobicSelection::from_labels(["Corrida", "Escada"])),
            ..RecordPatch::default()
        });
        r.merge(RecordPatch {
            aerobics: Some(AerobicSelection::from_labels(["Natação"])),
            ..RecordPatch::default()
        });
        assert_eq!(r.aerobics.joined(), "Natação");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut r = record();
        let before = r.clone();
        let patch = RecordPatch::new();
        assert!(patch.is_empty());
        r.merge(patch);
        assert_eq!(r, before);
    }

    #[test]
    fn merge_can_set_empty_string() {
        let mut r = record();
        r.merge(RecordPatch {
            focus_notes: Some("Mais definição".into()),
            ..RecordPatch::default()
        });
        r.merge(RecordPatch {
            focus_notes: Some(String::new()),
            ..RecordPatch::default()
        });
        assert!(r.focus_notes.is_empty());
    }

    #[test]
    fn patch_deserializes_partial_json() {
        let json = r#"{
            "name": "Ana",
            "frequency": "3x",
            "aerobics": ["Corrida", "Natação"],
            "has_injuries": "yes",
            "photo_front": {"display_name": "frente.jpg"}
        }"#;
        let patch: RecordPatch = serde_json::from_str(json).expect("parse");
        assert_eq!(patch.name.as_deref(), Some("Ana"));
        assert_eq!(patch.frequency, Some(Frequency::ThreePerWeek));
        assert_eq!(patch.has_injuries, Some(InjuryAnswer::Yes));
        assert!(patch.age.is_none());

        let mut r = record();
        r.merge(patch);
        assert_eq!(r.photo_count(), 1);
        assert_eq!(r.aerobics.joined(), "Corrida, Natação");
    }

    #[test]
    fn photo_slot_can_be_emptied() {
        let mut r = record();
        r.merge(RecordPatch {
            photo_front: Some(Some(PhotoRef::new("frente.jpg"))),
            photo_back: Some(Some(PhotoRef::new("costas.jpg"))),
            ..RecordPatch::default()
        });
        r.merge(RecordPatch {
            photo_front: Some(None),
            ..RecordPatch::default()
        });

        assert!(r.photo_front.is_none());
        assert_eq!(r.photo_count(), 1);
    }

    #[test]
    fn patch_null_photo_empties_missing_photo_keeps() {
        let patch: RecordPatch =
            serde_json::from_str(r#"{"photo_side": null}"#).expect("parse");
        assert_eq!(patch.photo_side, Some(None));
        assert_eq!(patch.photo_front, None);

        let json = serde_json::to_value(&patch).expect("serialize");
        assert_eq!(json, serde_json::json!({"photo_side": null}));
    }

    #[test]
    fn patch_rejects_derived_dates() {
        let json = r#"{"review_date": "2030-01-01"}"#;
        assert!(serde_json::from_str::<RecordPatch>(json).is_err());
    }

    #[test]
    fn record_serializes_schedule_dates() {
        let json = serde_json::to_value(record()).expect("serialize");
        assert_eq!(json["start_date"], "2026-05-04");
        assert_eq!(json["review_date"], "2026-06-18");
    }
}
