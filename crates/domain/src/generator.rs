use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};

use crate::{
    Catalog, Exercise, ExerciseID, ModelExercise, MuscleGroup, Name, NameError, ReadError,
    UserSettings, Workout, WorkoutDraft, WorkoutTemplate, needs_warmup,
};

/// Days between sessions suggested for compact core and accessory workouts.
const CORE_FREQUENCY_DAYS: u32 = 2;

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("workout template \"{0}\" not found")]
    TemplateNotFound(String),
    #[error("invalid template name: {0}")]
    InvalidTemplateName(#[from] NameError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Degraded but non-fatal outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    InsufficientCandidates {
        muscle_group: MuscleGroup,
        required: usize,
        found: usize,
    },
    NoExercisesGenerated,
}

/// Draft produced from a template.
///
/// The draft itself never carries a repeat frequency or deadline. The suggested values are
/// applied only on request by [`GeneratedWorkout::apply_suggestions`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedWorkout {
    pub draft: WorkoutDraft,
    pub suggested_frequency_days: Option<u32>,
    pub suggested_deadline: Option<NaiveDate>,
    pub warnings: Vec<GenerationWarning>,
}

impl GeneratedWorkout {
    #[must_use]
    pub fn apply_suggestions(self) -> WorkoutDraft {
        let mut draft = self.draft;
        if let Some(days) = self.suggested_frequency_days {
            draft.repeat_frequency_days = Some(days);
            draft.days_for_deadline = Some(days);
        }
        if let Some(deadline) = self.suggested_deadline {
            draft.deadline = Some(deadline);
        }
        draft
    }
}

pub struct WorkoutGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> WorkoutGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        template_key: &str,
        settings: &UserSettings,
        existing_workouts: &[Workout],
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<GeneratedWorkout, GenerateError> {
        let Some(template) = self.catalog.template(template_key) else {
            warn!("workout template \"{template_key}\" not found");
            return Err(GenerateError::TemplateNotFound(template_key.to_string()));
        };

        let existing_names = existing_workouts
            .iter()
            .flat_map(Workout::exercise_names)
            .collect::<HashSet<_>>();
        let mut used_names = HashSet::new();
        let mut exercises = vec![];
        let mut warnings = vec![];

        for (muscle_group, required) in template.targets {
            let selected = self.select(
                template,
                *muscle_group,
                *required,
                &existing_names,
                &used_names,
                rng,
            );

            if selected.len() < *required {
                warn!(
                    "only {} of {required} exercises found for {muscle_group} in \"{}\" ({} missing)",
                    selected.len(),
                    template.key,
                    required - selected.len()
                );
                warnings.push(GenerationWarning::InsufficientCandidates {
                    muscle_group: *muscle_group,
                    required: *required,
                    found: selected.len(),
                });
            }

            for (position, model) in selected.into_iter().enumerate() {
                used_names.insert(model.name);
                let first_in_group = *required <= 1 || position == 0;
                exercises.push(exercise(model, settings, first_in_group && needs_warmup(Some(model))));
            }
        }

        if exercises.is_empty() {
            warn!("no exercises generated for \"{}\"", template.key);
            warnings.push(GenerationWarning::NoExercisesGenerated);
        } else {
            debug!(
                "generated \"{}\": {}",
                template.key,
                exercises
                    .iter()
                    .map(|e| e.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let suggested_frequency_days = self.suggested_frequency_days(template, &exercises);
        let suggested_deadline = suggested_frequency_days
            .and_then(|days| today.checked_add_days(Days::new(u64::from(days))));

        let mut draft = WorkoutDraft::new(Name::new(template.name)?);
        draft.description = template.description.to_string();
        draft.exercises = exercises;
        draft.has_global_warmup = template.has_global_warmup;

        Ok(GeneratedWorkout {
            draft,
            suggested_frequency_days,
            suggested_deadline,
            warnings,
        })
    }

    fn select<R: Rng + ?Sized>(
        &self,
        template: &WorkoutTemplate,
        muscle_group: MuscleGroup,
        required: usize,
        existing_names: &HashSet<&str>,
        used_names: &HashSet<&str>,
        rng: &mut R,
    ) -> Vec<&'static ModelExercise> {
        let mut candidates = if template.is_core() {
            self.catalog.accessory_pool(muscle_group)
        } else {
            self.catalog
                .exercises()
                .filter(|e| e.targets(muscle_group))
                .collect::<Vec<_>>()
        };

        let mut seen = HashSet::new();
        candidates.retain(|e| !used_names.contains(e.name) && seen.insert(e.name));
        candidates.sort_by_key(|e| e.muscle_groups.len());

        let (mut new, mut used_elsewhere): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|e| !existing_names.contains(e.name));
        new.shuffle(rng);
        used_elsewhere.shuffle(rng);

        new.into_iter().chain(used_elsewhere).take(required).collect()
    }

    fn suggested_frequency_days(
        &self,
        template: &WorkoutTemplate,
        exercises: &[Exercise],
    ) -> Option<u32> {
        let mut muscle_groups = exercises.iter().flat_map(|e| e.muscle_groups.iter());

        let days = if template.is_mini() {
            if muscle_groups.any(|m| m.is_slow_recovering()) {
                Some(2)
            } else {
                Some(1)
            }
        } else if template.is_core() {
            Some(CORE_FREQUENCY_DAYS)
        } else {
            muscle_groups.filter_map(|m| self.catalog.rest_days(*m)).max()
        };

        days.filter(|days| *days > 0)
    }
}

fn exercise(model: &ModelExercise, settings: &UserSettings, has_warmup: bool) -> Exercise {
    Exercise {
        id: ExerciseID::new_v4(),
        name: model.name.to_string(),
        sets: settings.default_sets,
        reps: settings.default_reps.clone(),
        weight: model.default_weight.unwrap_or_default().to_string(),
        muscle_groups: model.muscle_groups.to_vec(),
        notes: model.description.to_string(),
        has_warmup,
    }
}
