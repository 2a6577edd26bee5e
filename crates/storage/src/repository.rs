use std::error::Error;

use chrono::NaiveDateTime;
use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use treino_domain::{
    self as domain, CreateError, DeleteError, ReadError, ScheduledWorkoutID, UpdateError,
    WorkoutID, WorkoutSessionID,
};
use uuid::Uuid;

use crate::{Backend, Collection, dto};

/// Stores the domain entities in a [`Backend`].
pub struct Repository<B> {
    backend: B,
}

impl<B: Backend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn read_all<D: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<D>, ReadError> {
        Ok(self.backend.get_all(collection)?.unwrap_or_default())
    }

    fn read_entities<D, E>(&self, collection: Collection) -> Result<Vec<E>, ReadError>
    where
        D: DeserializeOwned,
        E: TryFrom<D>,
        E::Error: Error + 'static,
    {
        self.read_all::<D>(collection)?
            .into_iter()
            .map(|value| E::try_from(value).map_err(|err| ReadError::Other(Box::new(err))))
            .collect()
    }

    /// Skips entries that cannot be converted instead of failing the whole collection.
    fn read_valid_entities<D, E>(&self, collection: Collection) -> Result<Vec<E>, ReadError>
    where
        D: DeserializeOwned,
        E: TryFrom<D>,
        E::Error: Error,
    {
        Ok(self
            .read_all::<D>(collection)?
            .into_iter()
            .filter_map(|value| {
                E::try_from(value)
                    .inspect_err(|err| warn!("skipping entry of {}: {err}", collection.as_ref()))
                    .ok()
            })
            .collect())
    }

    fn save_all<D: Serialize>(&self, collection: Collection, values: &[D]) -> Result<(), ReadError> {
        Ok(self.backend.save_all(collection, &values)?)
    }

    fn replace<D, E>(
        &self,
        collection: Collection,
        entity: E,
        id: impl Fn(&D) -> Uuid,
    ) -> Result<E, UpdateError>
    where
        D: Serialize + DeserializeOwned + for<'a> From<&'a E>,
    {
        let value = D::from(&entity);
        let mut values = self.read_all::<D>(collection)?;
        let entry = values
            .iter_mut()
            .find(|v| id(v) == id(&value))
            .ok_or(UpdateError::NotFound)?;
        *entry = value;
        self.save_all(collection, &values)?;
        Ok(entity)
    }

    fn delete<D>(
        &self,
        collection: Collection,
        uuid: Uuid,
        id: impl Fn(&D) -> Uuid,
    ) -> Result<(), DeleteError>
    where
        D: Serialize + DeserializeOwned,
    {
        let mut values = self.read_all::<D>(collection)?;
        values.retain(|v| id(v) != uuid);
        self.save_all(collection, &values)?;
        Ok(())
    }

    fn create<D, E>(&self, collection: Collection, entity: E) -> Result<E, CreateError>
    where
        D: Serialize + DeserializeOwned + for<'a> From<&'a E>,
    {
        let mut values = self.read_all::<D>(collection)?;
        values.push(D::from(&entity));
        self.save_all(collection, &values)?;
        Ok(entity)
    }
}

impl<B: Backend> domain::WorkoutRepository for Repository<B> {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, ReadError> {
        self.read_entities::<dto::Workout, _>(Collection::Workouts)
    }

    fn create_workout(&self, draft: domain::WorkoutDraft) -> Result<domain::Workout, CreateError> {
        let workout = domain::Workout::from_draft(WorkoutID::new_v4(), draft);
        self.create::<dto::Workout, _>(Collection::Workouts, workout)
    }

    fn replace_workout(&self, workout: domain::Workout) -> Result<domain::Workout, UpdateError> {
        self.replace(Collection::Workouts, workout, |w: &dto::Workout| w.id)
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        self.delete(Collection::Workouts, *id, |w: &dto::Workout| w.id)?;
        Ok(id)
    }
}

impl<B: Backend> domain::WorkoutSessionRepository for Repository<B> {
    fn read_workout_sessions(&self) -> Result<Vec<domain::WorkoutSession>, ReadError> {
        self.read_valid_entities::<dto::WorkoutSession, _>(Collection::Sessions)
    }

    fn create_workout_session(
        &self,
        workout_id: WorkoutID,
        workout_name: String,
        date: NaiveDateTime,
        exercises: Vec<domain::SessionExercisePerformance>,
    ) -> Result<domain::WorkoutSession, CreateError> {
        let session = domain::WorkoutSession {
            id: WorkoutSessionID::new_v4(),
            workout_id,
            workout_name,
            date,
            is_completed: false,
            notes: String::new(),
            exercises: exercises
                .into_iter()
                .map(domain::SessionExercisePerformance::normalized)
                .collect(),
        };
        self.create::<dto::WorkoutSession, _>(Collection::Sessions, session)
    }

    fn replace_workout_session(
        &self,
        workout_session: domain::WorkoutSession,
    ) -> Result<domain::WorkoutSession, UpdateError> {
        self.replace(
            Collection::Sessions,
            workout_session,
            |s: &dto::WorkoutSession| s.id,
        )
    }

    fn delete_workout_session(
        &self,
        id: WorkoutSessionID,
    ) -> Result<WorkoutSessionID, DeleteError> {
        self.delete(Collection::Sessions, *id, |s: &dto::WorkoutSession| s.id)?;
        Ok(id)
    }
}

impl<B: Backend> domain::ScheduledWorkoutRepository for Repository<B> {
    fn read_scheduled_workouts(&self) -> Result<Vec<domain::ScheduledWorkout>, ReadError> {
        self.read_valid_entities::<dto::ScheduledWorkout, _>(Collection::ScheduledWorkouts)
    }

    fn create_scheduled_workout(
        &self,
        workout_id: WorkoutID,
        workout_name: String,
        date_time: NaiveDateTime,
    ) -> Result<domain::ScheduledWorkout, CreateError> {
        let scheduled_workout = domain::ScheduledWorkout {
            id: ScheduledWorkoutID::new_v4(),
            workout_id,
            workout_name,
            date_time,
        };
        self.create::<dto::ScheduledWorkout, _>(Collection::ScheduledWorkouts, scheduled_workout)
    }

    fn delete_scheduled_workout(
        &self,
        id: ScheduledWorkoutID,
    ) -> Result<ScheduledWorkoutID, DeleteError> {
        self.delete(
            Collection::ScheduledWorkouts,
            *id,
            |s: &dto::ScheduledWorkout| s.id,
        )?;
        Ok(id)
    }
}

impl<B: Backend> domain::SettingsRepository for Repository<B> {
    fn read_settings(&self) -> Result<domain::UserSettings, ReadError> {
        match self
            .backend
            .get_all::<dto::UserSettings>(Collection::UserSettings)?
        {
            Some(settings) => domain::UserSettings::try_from(settings)
                .map_err(|err| ReadError::Other(Box::new(err))),
            None => Ok(domain::UserSettings::default()),
        }
    }

    fn write_settings(
        &self,
        settings: domain::UserSettings,
    ) -> Result<domain::UserSettings, UpdateError> {
        self.backend
            .save_all(Collection::UserSettings, &dto::UserSettings::from(&settings))?;
        Ok(settings)
    }
}
