use chrono::NaiveDateTime;

use crate::{CreateError, DeleteError, ReadError, ValidationError, WorkoutID};

entity_id!(ScheduledWorkoutID);

pub trait ScheduledWorkoutService {
    fn get_scheduled_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError>;
    fn get_upcoming_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError>;
    fn schedule_workout(
        &self,
        workout_id: WorkoutID,
        date_time: NaiveDateTime,
    ) -> Result<ScheduledWorkout, CreateError>;
    fn delete_scheduled_workout(
        &self,
        id: ScheduledWorkoutID,
    ) -> Result<ScheduledWorkoutID, DeleteError>;

    fn validate_schedule_date_time(
        &self,
        value: &str,
        now: NaiveDateTime,
    ) -> Result<NaiveDateTime, ValidationError> {
        match NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M") {
            Ok(date_time) => {
                if date_time > now {
                    Ok(date_time)
                } else {
                    Err(ValidationError::Other(
                        "Date and time must be in the future".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other("Invalid date and time".into())),
        }
    }
}

pub trait ScheduledWorkoutRepository {
    fn read_scheduled_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError>;
    fn create_scheduled_workout(
        &self,
        workout_id: WorkoutID,
        workout_name: String,
        date_time: NaiveDateTime,
    ) -> Result<ScheduledWorkout, CreateError>;
    fn delete_scheduled_workout(
        &self,
        id: ScheduledWorkoutID,
    ) -> Result<ScheduledWorkoutID, DeleteError>;
}

/// Single planned occurrence of a workout.
///
/// Like a session, it keeps a snapshot of the workout name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledWorkout {
    pub id: ScheduledWorkoutID,
    pub workout_id: WorkoutID,
    pub workout_name: String,
    pub date_time: NaiveDateTime,
}

/// Scheduled workouts after `now`, earliest first.
#[must_use]
pub fn upcoming(scheduled_workouts: &[ScheduledWorkout], now: NaiveDateTime) -> Vec<ScheduledWorkout> {
    let mut result = scheduled_workouts
        .iter()
        .filter(|s| s.date_time > now)
        .cloned()
        .collect::<Vec<_>>();
    result.sort_by(|a, b| {
        a.date_time
            .cmp(&b.date_time)
            .then_with(|| a.workout_name.cmp(&b.workout_name))
    });
    result
}
