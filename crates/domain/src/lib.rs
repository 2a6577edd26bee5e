#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

macro_rules! entity_id {
    ($name: ident) => {
        #[derive(
            derive_more::Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        pub struct $name(uuid::Uuid);

        impl $name {
            #[must_use]
            pub fn nil() -> Self {
                Self(uuid::Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            #[must_use]
            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(uuid::Uuid::from_bytes(value.to_be_bytes()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod catalog;
mod clock;
mod error;
mod generator;
mod muscle;
mod name;
mod queue;
mod schedule;
mod service;
mod settings;
pub mod template;
mod workout;
mod workout_session;

pub use catalog::{CATALOG, Catalog, ExerciseCategory, ModelExercise, needs_warmup};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError,
};
pub use generator::{GenerateError, GeneratedWorkout, GenerationWarning, WorkoutGenerator};
pub use muscle::{MuscleGroup, MuscleGroupError};
pub use name::{Name, NameError};
pub use queue::{DeadlineStatus, QueuedWorkout, TrainingQueueService, training_queue};
pub use schedule::{
    ScheduledWorkout, ScheduledWorkoutID, ScheduledWorkoutRepository, ScheduledWorkoutService,
    upcoming,
};
pub use service::Service;
pub use settings::{SettingsRepository, SettingsService, UserSettings};
pub use template::WorkoutTemplate;
pub use workout::{
    Exercise, ExerciseID, Reps, RepsError, Sets, SetsError, Workout, WorkoutDraft, WorkoutID,
    WorkoutRepository, WorkoutService,
};
pub use workout_session::{
    SessionExercisePerformance, WorkoutSession, WorkoutSessionID, WorkoutSessionRepository,
    WorkoutSessionService,
};
