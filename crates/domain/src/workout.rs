use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use derive_more::{AsRef, Display, Into};

use crate::{
    Catalog, CreateError, DeleteError, MuscleGroup, Name, ReadError, UpdateError, UserSettings,
    ValidationError, WorkoutSession,
};

entity_id!(WorkoutID);
entity_id!(ExerciseID);

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn get_workout(&self, id: WorkoutID) -> Result<Option<Workout>, ReadError> {
        Ok(self.get_workouts()?.into_iter().find(|w| w.id == id))
    }
    fn create_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError>;
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    fn validate_workout_name(&self, name: &str, id: WorkoutID) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_workouts() {
                Ok(workouts) => {
                    if workouts.iter().all(|w| w.id == id || w.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }

    /// Parses an optional day count, where a blank value disables the setting.
    fn validate_days(&self, value: &str) -> Result<Option<u32>, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<u32>() {
            Ok(days) if days > 0 => Ok(Some(days)),
            _ => Err(ValidationError::Other(
                "Days must be a positive whole number".into(),
            )),
        }
    }
}

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError>;
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub description: String,
    pub exercises: Vec<Exercise>,
    /// Minimum number of days after a completed session before the workout is due again.
    pub repeat_frequency_days: Option<u32>,
    pub deadline: Option<NaiveDate>,
    pub has_global_warmup: bool,
    /// Day count the deadline was derived from, kept to renew the deadline later.
    pub days_for_deadline: Option<u32>,
}

impl Workout {
    #[must_use]
    pub fn from_draft(id: WorkoutID, draft: WorkoutDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            exercises: draft.exercises,
            repeat_frequency_days: draft.repeat_frequency_days,
            deadline: draft.deadline,
            has_global_warmup: draft.has_global_warmup,
            days_for_deadline: draft.days_for_deadline,
        }
    }

    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.exercises.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .flat_map(|e| e.muscle_groups.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn deadline_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days_for_deadline
            .filter(|days| *days > 0)
            .and_then(|days| today.checked_add_days(Days::new(u64::from(days))))
    }

    /// Moves the deadline forward from `today`, if the workout keeps a deadline day count.
    pub fn renew_deadline(&mut self, today: NaiveDate) -> bool {
        match self.deadline_from(today) {
            Some(deadline) => {
                self.deadline = Some(deadline);
                true
            }
            None => false,
        }
    }

    /// Most recent completed session of this workout.
    #[must_use]
    pub fn last_completed<'a>(&self, sessions: &'a [WorkoutSession]) -> Option<&'a WorkoutSession> {
        sessions
            .iter()
            .filter(|s| s.workout_id == self.id && s.is_completed)
            .max_by_key(|s| s.date)
    }
}

/// Workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub name: Name,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub repeat_frequency_days: Option<u32>,
    pub deadline: Option<NaiveDate>,
    pub has_global_warmup: bool,
    pub days_for_deadline: Option<u32>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            description: String::new(),
            exercises: vec![],
            repeat_frequency_days: None,
            deadline: None,
            has_global_warmup: false,
            days_for_deadline: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub notes: String,
    pub has_warmup: bool,
}

impl Exercise {
    /// New exercise prefilled from the user defaults and, if known, the catalog entry.
    #[must_use]
    pub fn prefilled(name: &str, settings: &UserSettings, catalog: &Catalog) -> Self {
        let model = catalog.find_exercise(name);
        Self {
            id: ExerciseID::new_v4(),
            name: name.trim().to_string(),
            sets: settings.default_sets,
            reps: settings.default_reps.clone(),
            weight: model
                .and_then(|m| m.default_weight)
                .unwrap_or_default()
                .to_string(),
            muscle_groups: model
                .map(|m| m.muscle_groups.to_vec())
                .unwrap_or_default(),
            notes: String::new(),
            has_warmup: crate::needs_warmup(model),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub const DEFAULT: Sets = Sets(3);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

/// Free-form repetition target such as "8-12" or "30s".
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Reps(String);

impl Reps {
    pub fn new(value: &str) -> Result<Self, RepsError> {
        let trimmed_value = value.trim();

        if trimmed_value.is_empty() {
            return Err(RepsError::Empty);
        }

        let len = trimmed_value.chars().count();

        if len > 32 {
            return Err(RepsError::TooLong(len));
        }

        Ok(Self(trimmed_value.to_string()))
    }
}

impl Default for Reps {
    fn default() -> Self {
        Self("10-12".to_string())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must not be empty")]
    Empty,
    #[error("Reps must be 32 characters or fewer ({0} > 32)")]
    TooLong(usize),
}
