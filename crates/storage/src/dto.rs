use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use treino_domain as domain;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a local timestamp, also accepting RFC 3339 timestamps with an offset.
fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.naive_local())
        })
}

/// Weights were stored as numbers by earlier versions.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Weight {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Weight::deserialize(deserializer)? {
        Weight::Text(text) => text,
        Weight::Number(number) => number.to_string(),
    })
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid date and time \"{value}\" of {id}")]
pub struct DateTimeError {
    pub id: Uuid,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_frequency_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub has_global_warmup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_for_deadline: Option<u32>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            repeat_frequency_days: value.repeat_frequency_days,
            deadline: value
                .deadline
                .map(|deadline| deadline.format(DATE_FORMAT).to_string()),
            has_global_warmup: value.has_global_warmup,
            days_for_deadline: value.days_for_deadline,
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let deadline = value.deadline.as_deref().and_then(|deadline| {
            NaiveDate::parse_from_str(deadline, DATE_FORMAT)
                .inspect_err(|err| {
                    warn!(
                        "dropping invalid deadline \"{deadline}\" of workout {}: {err}",
                        value.id
                    );
                })
                .ok()
        });
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            repeat_frequency_days: value.repeat_frequency_days.filter(|days| *days > 0),
            deadline,
            has_global_warmup: value.has_global_warmup,
            days_for_deadline: value.days_for_deadline.filter(|days| *days > 0),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub has_warmup: bool,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            sets: value.sets.into(),
            reps: value.reps.to_string(),
            weight: value.weight.clone(),
            muscle_groups: value.muscle_groups.iter().map(ToString::to_string).collect(),
            notes: value.notes.clone(),
            has_warmup: value.has_warmup,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = WorkoutError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(&value.reps)?,
            weight: value.weight,
            muscle_groups: value
                .muscle_groups
                .iter()
                .filter_map(|tag| {
                    tag.parse::<domain::MuscleGroup>()
                        .inspect_err(|err| {
                            warn!("dropping muscle group of exercise \"{}\": {err}", value.name);
                        })
                        .ok()
                })
                .collect(),
            name: value.name,
            notes: value.notes,
            has_warmup: value.has_warmup,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub workout_name: String,
    pub date: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercises: Vec<SessionExercisePerformance>,
}

impl From<&domain::WorkoutSession> for WorkoutSession {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            id: *value.id,
            workout_id: *value.workout_id,
            workout_name: value.workout_name.clone(),
            date: format_date_time(value.date),
            is_completed: value.is_completed,
            notes: value.notes.clone(),
            exercises: value
                .exercises
                .iter()
                .map(SessionExercisePerformance::from)
                .collect(),
        }
    }
}

impl TryFrom<WorkoutSession> for domain::WorkoutSession {
    type Error = DateTimeError;

    fn try_from(value: WorkoutSession) -> Result<Self, Self::Error> {
        let Some(date) = parse_date_time(&value.date) else {
            return Err(DateTimeError {
                id: value.id,
                value: value.date,
            });
        };
        Ok(Self {
            id: value.id.into(),
            workout_id: value.workout_id.into(),
            workout_name: value.workout_name,
            date,
            is_completed: value.is_completed,
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::SessionExercisePerformance::from)
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercisePerformance {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[serde(default)]
    pub has_warmup: bool,
    #[serde(default)]
    pub is_warmup_completed: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight_used: String,
    #[serde(default)]
    pub is_exercise_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

impl From<&domain::SessionExercisePerformance> for SessionExercisePerformance {
    fn from(value: &domain::SessionExercisePerformance) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.clone(),
            has_warmup: value.has_warmup,
            is_warmup_completed: value.is_warmup_completed,
            weight_used: value.weight_used.clone(),
            is_exercise_completed: value.is_exercise_completed,
            rest_seconds: value.rest_seconds,
        }
    }
}

impl From<SessionExercisePerformance> for domain::SessionExercisePerformance {
    fn from(value: SessionExercisePerformance) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: value.exercise_name,
            has_warmup: value.has_warmup,
            is_warmup_completed: value.is_warmup_completed,
            weight_used: value.weight_used,
            is_exercise_completed: value.is_exercise_completed,
            rest_seconds: value.rest_seconds,
        }
        .normalized()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkout {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub workout_name: String,
    pub date_time: String,
}

impl From<&domain::ScheduledWorkout> for ScheduledWorkout {
    fn from(value: &domain::ScheduledWorkout) -> Self {
        Self {
            id: *value.id,
            workout_id: *value.workout_id,
            workout_name: value.workout_name.clone(),
            date_time: format_date_time(value.date_time),
        }
    }
}

impl TryFrom<ScheduledWorkout> for domain::ScheduledWorkout {
    type Error = DateTimeError;

    fn try_from(value: ScheduledWorkout) -> Result<Self, Self::Error> {
        let Some(date_time) = parse_date_time(&value.date_time) else {
            return Err(DateTimeError {
                id: value.id,
                value: value.date_time,
            });
        };
        Ok(Self {
            id: value.id.into(),
            workout_id: value.workout_id.into(),
            workout_name: value.workout_name,
            date_time,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub default_sets: u32,
    pub default_reps: String,
}

impl From<&domain::UserSettings> for UserSettings {
    fn from(value: &domain::UserSettings) -> Self {
        Self {
            default_sets: value.default_sets.into(),
            default_reps: value.default_reps.to_string(),
        }
    }
}

impl TryFrom<UserSettings> for domain::UserSettings {
    type Error = UserSettingsError;

    fn try_from(value: UserSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            default_sets: domain::Sets::new(value.default_sets)?,
            default_reps: domain::Reps::new(&value.default_reps)?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UserSettingsError {
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn workout() -> domain::Workout {
        domain::Workout {
            id: 1.into(),
            name: domain::Name::new("Pernas").unwrap(),
            description: "Foco em quadríceps".to_string(),
            exercises: vec![domain::Exercise {
                id: 2.into(),
                name: "Agachamento Livre".to_string(),
                sets: domain::Sets::new(4).unwrap(),
                reps: domain::Reps::new("6-8").unwrap(),
                weight: "60kg".to_string(),
                muscle_groups: vec![domain::MuscleGroup::Quads, domain::MuscleGroup::Glutes],
                notes: String::new(),
                has_warmup: true,
            }],
            repeat_frequency_days: Some(3),
            deadline: Some(date(13)),
            has_global_warmup: true,
            days_for_deadline: Some(3),
        }
    }

    #[test]
    fn test_workout_try_from() {
        assert_eq!(
            domain::Workout::try_from(Workout::from(&workout())),
            Ok(workout())
        );
    }

    #[test]
    fn test_workout_serde() {
        let serialized = json!(Workout::from(&workout()));
        assert_eq!(
            serialized,
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Pernas",
                "description": "Foco em quadríceps",
                "exercises": [{
                    "id": "00000000-0000-0000-0000-000000000002",
                    "name": "Agachamento Livre",
                    "sets": 4,
                    "reps": "6-8",
                    "weight": "60kg",
                    "muscleGroups": ["Pernas (Quadríceps)", "Glúteos"],
                    "notes": "",
                    "hasWarmup": true
                }],
                "repeatFrequencyDays": 3,
                "deadline": "2024-06-13",
                "hasGlobalWarmup": true,
                "daysForDeadline": 3
            })
        );
        let deserialized: Workout = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, Workout::from(&workout()));
    }

    #[rstest]
    #[case(json!("13/06/2024"))]
    #[case(json!("2024-13-40"))]
    #[case(json!(""))]
    fn test_workout_invalid_deadline(#[case] deadline: serde_json::Value) {
        let mut value = json!(Workout::from(&workout()));
        value["deadline"] = deadline;
        let stored: Workout = serde_json::from_value(value).unwrap();

        let workout = domain::Workout::try_from(stored).unwrap();

        assert_eq!(workout.deadline, None);
        assert_eq!(workout.days_for_deadline, Some(3));
    }

    #[test]
    fn test_workout_minimal() {
        let stored: Workout = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Cardio"
        }))
        .unwrap();

        let workout = domain::Workout::try_from(stored).unwrap();

        assert_eq!(workout.name.as_ref(), "Cardio");
        assert!(workout.exercises.is_empty());
        assert_eq!(workout.repeat_frequency_days, None);
        assert_eq!(workout.deadline, None);
        assert!(!workout.has_global_warmup);
    }

    #[test]
    fn test_exercise_unknown_muscle_group() {
        let mut stored = Exercise::from(&workout().exercises[0]);
        stored.muscle_groups = vec![
            "Glúteos".to_string(),
            "Pescoço".to_string(),
            "peito".to_string(),
        ];

        assert_eq!(
            domain::Exercise::try_from(stored).unwrap().muscle_groups,
            vec![domain::MuscleGroup::Glutes, domain::MuscleGroup::Chest]
        );
    }

    #[rstest]
    #[case(0, "8", WorkoutError::InvalidSets(domain::SetsError::OutOfRange))]
    #[case(3, " ", WorkoutError::InvalidReps(domain::RepsError::Empty))]
    fn test_exercise_invalid(#[case] sets: u32, #[case] reps: &str, #[case] expected: WorkoutError) {
        let mut stored = Exercise::from(&workout().exercises[0]);
        stored.sets = sets;
        stored.reps = reps.to_string();

        assert_eq!(domain::Exercise::try_from(stored), Err(expected));
    }

    #[test]
    fn test_workout_session_from() {
        let session = domain::WorkoutSession {
            id: 3.into(),
            workout_id: 1.into(),
            workout_name: "Pernas".to_string(),
            date: date(10).and_hms_opt(7, 30, 0).unwrap(),
            is_completed: true,
            notes: "Cansado".to_string(),
            exercises: vec![domain::SessionExercisePerformance {
                exercise_id: 2.into(),
                exercise_name: "Agachamento Livre".to_string(),
                has_warmup: true,
                is_warmup_completed: true,
                weight_used: "62.5".to_string(),
                is_exercise_completed: true,
                rest_seconds: Some(120),
            }],
        };

        let stored = WorkoutSession::from(&session);

        assert_eq!(json!(stored)["date"], json!("2024-06-10T07:30:00"));
        assert_eq!(
            json!(stored)["exercises"][0]["weightUsed"],
            json!("62.5")
        );
        assert_eq!(domain::WorkoutSession::try_from(stored), Ok(session));
    }

    #[rstest]
    #[case("2024-06-10T07:30:00", Some((7, 30)))]
    #[case("2024-06-10T07:30:00.000", Some((7, 30)))]
    #[case("2024-06-10T07:30:00.000Z", Some((7, 30)))]
    #[case("2024-06-10T07:30:00-03:00", Some((7, 30)))]
    #[case("10/06/2024 07:30", None)]
    #[case("", None)]
    fn test_workout_session_date(#[case] value: &str, #[case] expected: Option<(u32, u32)>) {
        let stored: WorkoutSession = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000003",
            "workoutId": "00000000-0000-0000-0000-000000000001",
            "workoutName": "Pernas",
            "date": value
        }))
        .unwrap();

        assert_eq!(
            domain::WorkoutSession::try_from(stored).map(|session| session.date),
            expected
                .map(|(hour, minute)| date(10).and_hms_opt(hour, minute, 0).unwrap())
                .ok_or(DateTimeError {
                    id: Uuid::from_u128(3),
                    value: value.to_string(),
                })
        );
    }

    #[test]
    fn test_session_exercise_performance_blank_weight() {
        let stored: SessionExercisePerformance = serde_json::from_value(json!({
            "exerciseId": "00000000-0000-0000-0000-000000000002",
            "exerciseName": "Agachamento Livre"
        }))
        .unwrap();

        let performance = domain::SessionExercisePerformance::from(stored);

        assert_eq!(performance.weight_used, "0");
        assert!(!performance.is_exercise_completed);
        assert_eq!(performance.rest_seconds, None);
    }

    #[test]
    fn test_scheduled_workout_from() {
        let scheduled_workout = domain::ScheduledWorkout {
            id: 4.into(),
            workout_id: 1.into(),
            workout_name: "Pernas".to_string(),
            date_time: date(12).and_hms_opt(18, 0, 0).unwrap(),
        };
        assert_eq!(
            domain::ScheduledWorkout::try_from(ScheduledWorkout::from(&scheduled_workout)),
            Ok(scheduled_workout)
        );
    }

    #[test]
    fn test_scheduled_workout_invalid_date_time() {
        let stored = ScheduledWorkout {
            id: Uuid::from_u128(4),
            workout_id: Uuid::from_u128(1),
            workout_name: "Pernas".to_string(),
            date_time: "amanhã".to_string(),
        };

        assert_eq!(
            domain::ScheduledWorkout::try_from(stored),
            Err(DateTimeError {
                id: Uuid::from_u128(4),
                value: "amanhã".to_string(),
            })
        );
    }

    #[rstest]
    #[case(json!(20), "20")]
    #[case(json!(20.5), "20.5")]
    #[case(json!("22,5"), "22,5")]
    fn test_weight_number(#[case] weight: serde_json::Value, #[case] expected: &str) {
        let mut value = json!(Exercise::from(&workout().exercises[0]));
        value["weight"] = weight.clone();
        let exercise: Exercise = serde_json::from_value(value).unwrap();

        let performance: SessionExercisePerformance = serde_json::from_value(json!({
            "exerciseId": "00000000-0000-0000-0000-000000000002",
            "exerciseName": "Agachamento Livre",
            "weightUsed": weight
        }))
        .unwrap();

        assert_eq!(exercise.weight, expected);
        assert_eq!(performance.weight_used, expected);
    }

    #[rstest]
    #[case(json!({"defaultSets": 4, "defaultReps": "8-10"}), Ok((4, "8-10")))]
    #[case(
        json!({"defaultSets": 0, "defaultReps": "8-10"}),
        Err(UserSettingsError::InvalidSets(domain::SetsError::OutOfRange))
    )]
    #[case(
        json!({"defaultSets": 3, "defaultReps": ""}),
        Err(UserSettingsError::InvalidReps(domain::RepsError::Empty))
    )]
    fn test_user_settings_try_from(
        #[case] value: serde_json::Value,
        #[case] expected: Result<(u32, &str), UserSettingsError>,
    ) {
        let stored: UserSettings = serde_json::from_value(value).unwrap();
        assert_eq!(
            domain::UserSettings::try_from(stored)
                .map(|s| (u32::from(s.default_sets), s.default_reps.to_string())),
            expected.map(|(sets, reps)| (sets, reps.to_string()))
        );
    }
}
