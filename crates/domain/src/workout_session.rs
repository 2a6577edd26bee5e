use chrono::NaiveDateTime;

use crate::{
    CreateError, DeleteError, ExerciseID, ReadError, UpdateError, Workout, WorkoutID,
};

entity_id!(WorkoutSessionID);

pub trait WorkoutSessionService {
    fn get_workout_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    fn start_workout_session(&self, workout_id: WorkoutID) -> Result<WorkoutSession, CreateError>;
    fn modify_workout_session(
        &self,
        id: WorkoutSessionID,
        notes: Option<String>,
        exercises: Option<Vec<SessionExercisePerformance>>,
    ) -> Result<WorkoutSession, UpdateError>;
    fn complete_workout_session(&self, id: WorkoutSessionID)
    -> Result<WorkoutSession, UpdateError>;
    fn delete_workout_session(&self, id: WorkoutSessionID)
    -> Result<WorkoutSessionID, DeleteError>;
    /// Workout a session was started from, or `None` if it has been deleted since.
    fn get_session_workout(&self, session: &WorkoutSession) -> Result<Option<Workout>, ReadError>;
}

pub trait WorkoutSessionRepository {
    fn read_workout_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    fn create_workout_session(
        &self,
        workout_id: WorkoutID,
        workout_name: String,
        date: NaiveDateTime,
        exercises: Vec<SessionExercisePerformance>,
    ) -> Result<WorkoutSession, CreateError>;
    fn replace_workout_session(
        &self,
        workout_session: WorkoutSession,
    ) -> Result<WorkoutSession, UpdateError>;
    fn delete_workout_session(
        &self,
        id: WorkoutSessionID,
    ) -> Result<WorkoutSessionID, DeleteError>;
}

/// Performed instance of a workout.
///
/// `workout_name` is a snapshot taken when the session starts. It is not updated when the
/// workout is renamed, and it stays available after the workout is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub workout_id: WorkoutID,
    pub workout_name: String,
    pub date: NaiveDateTime,
    pub is_completed: bool,
    pub notes: String,
    pub exercises: Vec<SessionExercisePerformance>,
}

impl WorkoutSession {
    /// Replaces the logged performance of one exercise.
    ///
    /// Returns `false` if the session does not contain the exercise.
    pub fn record_performance(&mut self, performance: SessionExercisePerformance) -> bool {
        match self
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == performance.exercise_id)
        {
            Some(entry) => {
                *entry = performance.normalized();
                true
            }
            None => false,
        }
    }

    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    #[must_use]
    pub fn num_completed_exercises(&self) -> usize {
        self.exercises
            .iter()
            .filter(|e| e.is_exercise_completed)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExercisePerformance {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub has_warmup: bool,
    pub is_warmup_completed: bool,
    pub weight_used: String,
    pub is_exercise_completed: bool,
    pub rest_seconds: Option<u32>,
}

impl SessionExercisePerformance {
    pub const NO_WEIGHT: &'static str = "0";

    /// Initial performance entries for each exercise of a workout.
    #[must_use]
    pub fn for_workout(workout: &Workout) -> Vec<Self> {
        workout
            .exercises
            .iter()
            .map(|e| Self {
                exercise_id: e.id,
                exercise_name: e.name.clone(),
                has_warmup: e.has_warmup,
                is_warmup_completed: false,
                weight_used: Self::NO_WEIGHT.to_string(),
                is_exercise_completed: false,
                rest_seconds: None,
            })
            .collect()
    }

    #[must_use]
    pub fn normalized(mut self) -> Self {
        let weight_used = self.weight_used.trim();
        self.weight_used = if weight_used.is_empty() {
            Self::NO_WEIGHT.to_string()
        } else {
            weight_used.to_string()
        };
        self
    }
}
