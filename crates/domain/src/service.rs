use chrono::NaiveDateTime;
use log::{debug, error, warn};
use rand::Rng;

use crate::{
    CATALOG, Clock, CreateError, DeleteError, GenerateError, GeneratedWorkout, QueuedWorkout,
    ReadError, ScheduledWorkout, ScheduledWorkoutID, ScheduledWorkoutRepository,
    ScheduledWorkoutService, SessionExercisePerformance, SettingsRepository, SettingsService,
    SystemClock, TrainingQueueService, UpdateError, UserSettings, Workout, WorkoutDraft,
    WorkoutGenerator, WorkoutID, WorkoutRepository, WorkoutService, WorkoutSession,
    WorkoutSessionID, WorkoutSessionRepository, WorkoutSessionService, training_queue, upcoming,
};

pub struct Service<R, C = SystemClock> {
    repository: R,
    clock: C,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C: Clock> Service<R, C> {
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R, C> Service<R, C>
where
    R: WorkoutRepository + SettingsRepository,
    C: Clock,
{
    /// Builds a workout draft from the template with the given key.
    ///
    /// The draft is not stored. Exercises already used by saved workouts are avoided where
    /// the catalog offers alternatives.
    pub fn generate_workout<G: Rng + ?Sized>(
        &self,
        template_key: &str,
        rng: &mut G,
    ) -> Result<GeneratedWorkout, GenerateError> {
        let settings = self.get_settings()?;
        let workouts = self.get_workouts()?;
        WorkoutGenerator::new(&CATALOG).generate(
            template_key,
            &settings,
            &workouts,
            self.clock.today(),
            rng,
        )
    }
}

impl<R: WorkoutRepository, C> WorkoutService for Service<R, C> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    fn create_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(draft),
            CreateError,
            "create",
            "workout"
        )
    }

    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(workout),
            UpdateError,
            "replace",
            "workout"
        )
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R, C> Service<R, C>
where
    R: WorkoutRepository + WorkoutSessionRepository,
    C: Clock,
{
    fn start(&self, workout_id: WorkoutID) -> Result<WorkoutSession, CreateError> {
        let Some(workout) = self.get_workout(workout_id)? else {
            return Err(CreateError::Other(
                format!("workout {workout_id} not found").into(),
            ));
        };
        self.repository.create_workout_session(
            workout.id,
            workout.name.to_string(),
            self.clock.now(),
            SessionExercisePerformance::for_workout(&workout),
        )
    }

    fn find_session(&self, id: WorkoutSessionID) -> Result<WorkoutSession, UpdateError> {
        self.repository
            .read_workout_sessions()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(UpdateError::NotFound)
    }

    fn modify(
        &self,
        id: WorkoutSessionID,
        notes: Option<String>,
        exercises: Option<Vec<SessionExercisePerformance>>,
    ) -> Result<WorkoutSession, UpdateError> {
        let mut session = self.find_session(id)?;
        if let Some(notes) = notes {
            session.notes = notes;
        }
        for performance in exercises.unwrap_or_default() {
            let exercise_id = performance.exercise_id;
            if !session.record_performance(performance) {
                warn!("ignoring performance of exercise {exercise_id} not in session {id}");
            }
        }
        self.repository.replace_workout_session(session)
    }

    fn complete(&self, id: WorkoutSessionID) -> Result<WorkoutSession, UpdateError> {
        let mut session = self.find_session(id)?;
        session.complete();
        let session = self.repository.replace_workout_session(session)?;

        let workout = self
            .repository
            .read_workouts()?
            .into_iter()
            .find(|w| w.id == session.workout_id);
        if let Some(mut workout) = workout {
            if workout.renew_deadline(self.clock.today()) {
                self.repository.replace_workout(workout)?;
            }
        } else {
            debug!(
                "workout {} of session {id} no longer exists, deadline not renewed",
                session.workout_id
            );
        }

        Ok(session)
    }
}

impl<R, C> WorkoutSessionService for Service<R, C>
where
    R: WorkoutRepository + WorkoutSessionRepository,
    C: Clock,
{
    fn get_workout_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
        log_on_error!(
            self.repository.read_workout_sessions(),
            ReadError,
            "get",
            "workout sessions"
        )
    }

    fn start_workout_session(&self, workout_id: WorkoutID) -> Result<WorkoutSession, CreateError> {
        log_on_error!(
            self.start(workout_id),
            CreateError,
            "start",
            "workout session"
        )
    }

    fn modify_workout_session(
        &self,
        id: WorkoutSessionID,
        notes: Option<String>,
        exercises: Option<Vec<SessionExercisePerformance>>,
    ) -> Result<WorkoutSession, UpdateError> {
        log_on_error!(
            self.modify(id, notes, exercises),
            UpdateError,
            "modify",
            "workout session"
        )
    }

    fn complete_workout_session(
        &self,
        id: WorkoutSessionID,
    ) -> Result<WorkoutSession, UpdateError> {
        log_on_error!(
            self.complete(id),
            UpdateError,
            "complete",
            "workout session"
        )
    }

    fn delete_workout_session(
        &self,
        id: WorkoutSessionID,
    ) -> Result<WorkoutSessionID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout_session(id),
            DeleteError,
            "delete",
            "workout session"
        )
    }

    fn get_session_workout(&self, session: &WorkoutSession) -> Result<Option<Workout>, ReadError> {
        self.get_workout(session.workout_id)
    }
}

impl<R, C> ScheduledWorkoutService for Service<R, C>
where
    R: WorkoutRepository + ScheduledWorkoutRepository,
    C: Clock,
{
    fn get_scheduled_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
        log_on_error!(
            self.repository.read_scheduled_workouts(),
            ReadError,
            "get",
            "scheduled workouts"
        )
    }

    fn get_upcoming_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
        Ok(upcoming(&self.get_scheduled_workouts()?, self.clock.now()))
    }

    fn schedule_workout(
        &self,
        workout_id: WorkoutID,
        date_time: NaiveDateTime,
    ) -> Result<ScheduledWorkout, CreateError> {
        let Some(workout) = self.get_workout(workout_id)? else {
            return Err(CreateError::Other(
                format!("workout {workout_id} not found").into(),
            ));
        };
        log_on_error!(
            self.repository.create_scheduled_workout(
                workout.id,
                workout.name.to_string(),
                date_time
            ),
            CreateError,
            "schedule",
            "workout"
        )
    }

    fn delete_scheduled_workout(
        &self,
        id: ScheduledWorkoutID,
    ) -> Result<ScheduledWorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_scheduled_workout(id),
            DeleteError,
            "delete",
            "scheduled workout"
        )
    }
}

impl<R: SettingsRepository, C> SettingsService for Service<R, C> {
    fn get_settings(&self) -> Result<UserSettings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    fn set_settings(&self, settings: UserSettings) -> Result<UserSettings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}

impl<R, C> TrainingQueueService for Service<R, C>
where
    R: WorkoutRepository + WorkoutSessionRepository,
    C: Clock,
{
    fn get_training_queue(&self) -> Result<Vec<QueuedWorkout>, ReadError> {
        let workouts = self.get_workouts()?;
        let sessions = self.get_workout_sessions()?;
        Ok(training_queue(&workouts, &sessions, self.clock.today()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::{fixture, rstest};

    use crate::{
        Exercise, FixedClock, GenerationWarning, MuscleGroup, Name, Reps, Sets, StorageError,
    };

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        workouts: RefCell<Vec<Workout>>,
        sessions: RefCell<Vec<WorkoutSession>>,
        scheduled_workouts: RefCell<Vec<ScheduledWorkout>>,
        settings: RefCell<Option<UserSettings>>,
        unavailable: Cell<bool>,
        next_id: Cell<u128>,
    }

    impl FakeRepository {
        fn check(&self) -> Result<(), StorageError> {
            if self.unavailable.get() {
                Err(StorageError::Unavailable)
            } else {
                Ok(())
            }
        }

        fn next_id(&self) -> u128 {
            self.next_id.set(self.next_id.get() + 1);
            100 + self.next_id.get()
        }
    }

    impl WorkoutRepository for FakeRepository {
        fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
            self.check()?;
            Ok(self.workouts.borrow().clone())
        }

        fn create_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError> {
            self.check()?;
            let workout = Workout::from_draft(self.next_id().into(), draft);
            self.workouts.borrow_mut().push(workout.clone());
            Ok(workout)
        }

        fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
            self.check()?;
            let mut workouts = self.workouts.borrow_mut();
            let entry = workouts
                .iter_mut()
                .find(|w| w.id == workout.id)
                .ok_or(UpdateError::NotFound)?;
            *entry = workout.clone();
            Ok(workout)
        }

        fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
            self.check()?;
            self.workouts.borrow_mut().retain(|w| w.id != id);
            Ok(id)
        }
    }

    impl WorkoutSessionRepository for FakeRepository {
        fn read_workout_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
            self.check()?;
            Ok(self.sessions.borrow().clone())
        }

        fn create_workout_session(
            &self,
            workout_id: WorkoutID,
            workout_name: String,
            date: NaiveDateTime,
            exercises: Vec<SessionExercisePerformance>,
        ) -> Result<WorkoutSession, CreateError> {
            self.check()?;
            let session = WorkoutSession {
                id: self.next_id().into(),
                workout_id,
                workout_name,
                date,
                is_completed: false,
                notes: String::new(),
                exercises,
            };
            self.sessions.borrow_mut().push(session.clone());
            Ok(session)
        }

        fn replace_workout_session(
            &self,
            workout_session: WorkoutSession,
        ) -> Result<WorkoutSession, UpdateError> {
            self.check()?;
            let mut sessions = self.sessions.borrow_mut();
            let entry = sessions
                .iter_mut()
                .find(|s| s.id == workout_session.id)
                .ok_or(UpdateError::NotFound)?;
            *entry = workout_session.clone();
            Ok(workout_session)
        }

        fn delete_workout_session(
            &self,
            id: WorkoutSessionID,
        ) -> Result<WorkoutSessionID, DeleteError> {
            self.check()?;
            self.sessions.borrow_mut().retain(|s| s.id != id);
            Ok(id)
        }
    }

    impl ScheduledWorkoutRepository for FakeRepository {
        fn read_scheduled_workouts(&self) -> Result<Vec<ScheduledWorkout>, ReadError> {
            self.check()?;
            Ok(self.scheduled_workouts.borrow().clone())
        }

        fn create_scheduled_workout(
            &self,
            workout_id: WorkoutID,
            workout_name: String,
            date_time: NaiveDateTime,
        ) -> Result<ScheduledWorkout, CreateError> {
            self.check()?;
            let scheduled_workout = ScheduledWorkout {
                id: self.next_id().into(),
                workout_id,
                workout_name,
                date_time,
            };
            self.scheduled_workouts
                .borrow_mut()
                .push(scheduled_workout.clone());
            Ok(scheduled_workout)
        }

        fn delete_scheduled_workout(
            &self,
            id: ScheduledWorkoutID,
        ) -> Result<ScheduledWorkoutID, DeleteError> {
            self.check()?;
            self.scheduled_workouts.borrow_mut().retain(|s| s.id != id);
            Ok(id)
        }
    }

    impl SettingsRepository for FakeRepository {
        fn read_settings(&self) -> Result<UserSettings, ReadError> {
            self.check()?;
            Ok(self.settings.borrow().clone().unwrap_or_default())
        }

        fn write_settings(&self, settings: UserSettings) -> Result<UserSettings, UpdateError> {
            self.check()?;
            *self.settings.borrow_mut() = Some(settings.clone());
            Ok(settings)
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn date_time(day: u32, hour: u32) -> NaiveDateTime {
        date(day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn workout(id: u128, name: &str) -> Workout {
        Workout {
            id: id.into(),
            name: Name::new(name).unwrap(),
            description: String::new(),
            exercises: vec![
                Exercise {
                    id: 1.into(),
                    name: "Supino Reto com Barra".to_string(),
                    sets: Sets::new(4).unwrap(),
                    reps: Reps::new("6-8").unwrap(),
                    weight: "40kg".to_string(),
                    muscle_groups: vec![MuscleGroup::Chest, MuscleGroup::Triceps],
                    notes: String::new(),
                    has_warmup: true,
                },
                Exercise {
                    id: 2.into(),
                    name: "Crucifixo com Halteres".to_string(),
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new("10-12").unwrap(),
                    weight: String::new(),
                    muscle_groups: vec![MuscleGroup::Chest],
                    notes: String::new(),
                    has_warmup: false,
                },
            ],
            repeat_frequency_days: Some(3),
            deadline: Some(date(5)),
            has_global_warmup: true,
            days_for_deadline: Some(4),
        }
    }

    #[fixture]
    fn service() -> Service<FakeRepository, FixedClock> {
        let repository = FakeRepository::default();
        repository
            .workouts
            .borrow_mut()
            .extend([workout(1, "Peitoral"), workout(2, "Costas")]);
        Service::with_clock(repository, FixedClock(date_time(10, 7)))
    }

    #[rstest]
    #[case("Pernas", 1, true)]
    #[case(" Costas ", 2, true)]
    #[case("Costas", 1, false)]
    #[case("", 1, false)]
    fn test_validate_workout_name(
        service: Service<FakeRepository, FixedClock>,
        #[case] name: &str,
        #[case] id: u128,
        #[case] valid: bool,
    ) {
        assert_eq!(
            service.validate_workout_name(name, id.into()).is_ok(),
            valid
        );
    }

    #[rstest]
    #[case("", Some(None))]
    #[case(" 7 ", Some(Some(7)))]
    #[case("0", None)]
    #[case("-1", None)]
    #[case("2.5", None)]
    fn test_validate_days(
        service: Service<FakeRepository, FixedClock>,
        #[case] value: &str,
        #[case] expected: Option<Option<u32>>,
    ) {
        assert_eq!(service.validate_days(value).ok(), expected);
    }

    #[rstest]
    fn test_start_workout_session(service: Service<FakeRepository, FixedClock>) {
        let session = service.start_workout_session(1.into()).unwrap();

        assert_eq!(session.workout_id, WorkoutID::from(1));
        assert_eq!(session.workout_name, "Peitoral");
        assert_eq!(session.date, date_time(10, 7));
        assert!(!session.is_completed);
        assert_eq!(
            session
                .exercises
                .iter()
                .map(|e| (e.exercise_name.as_str(), e.has_warmup, e.weight_used.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("Supino Reto com Barra", true, "0"),
                ("Crucifixo com Halteres", false, "0")
            ]
        );
        assert_eq!(service.get_workout_sessions().unwrap(), vec![session]);
    }

    #[rstest]
    fn test_start_workout_session_unknown_workout(service: Service<FakeRepository, FixedClock>) {
        assert!(matches!(
            service.start_workout_session(9.into()),
            Err(CreateError::Other(_))
        ));
        assert!(service.get_workout_sessions().unwrap().is_empty());
    }

    #[rstest]
    fn test_complete_workout_session_renews_deadline(
        service: Service<FakeRepository, FixedClock>,
    ) {
        let session = service.start_workout_session(1.into()).unwrap();

        let completed = service.complete_workout_session(session.id).unwrap();

        assert!(completed.is_completed);
        assert_eq!(
            service.get_workout(1.into()).unwrap().unwrap().deadline,
            Some(date(14))
        );
        assert_eq!(
            service.get_workout(2.into()).unwrap().unwrap().deadline,
            Some(date(5))
        );
    }

    #[rstest]
    fn test_complete_workout_session_without_deadline_days(
        service: Service<FakeRepository, FixedClock>,
    ) {
        let mut workout = service.get_workout(1.into()).unwrap().unwrap();
        workout.days_for_deadline = None;
        service.replace_workout(workout).unwrap();
        let session = service.start_workout_session(1.into()).unwrap();

        service.complete_workout_session(session.id).unwrap();

        assert_eq!(
            service.get_workout(1.into()).unwrap().unwrap().deadline,
            Some(date(5))
        );
    }

    #[rstest]
    fn test_complete_workout_session_of_deleted_workout(
        service: Service<FakeRepository, FixedClock>,
    ) {
        let session = service.start_workout_session(1.into()).unwrap();
        service.delete_workout(1.into()).unwrap();

        let completed = service.complete_workout_session(session.id).unwrap();

        assert!(completed.is_completed);
        assert_eq!(completed.workout_name, "Peitoral");
        assert_eq!(service.get_session_workout(&completed).unwrap(), None);
    }

    #[rstest]
    fn test_complete_workout_session_not_found(service: Service<FakeRepository, FixedClock>) {
        assert!(matches!(
            service.complete_workout_session(9.into()),
            Err(UpdateError::NotFound)
        ));
    }

    #[rstest]
    fn test_modify_workout_session(service: Service<FakeRepository, FixedClock>) {
        let session = service.start_workout_session(1.into()).unwrap();
        service.complete_workout_session(session.id).unwrap();
        let mut performance = session.exercises[1].clone();
        performance.weight_used = " ".to_string();
        performance.is_exercise_completed = true;
        performance.rest_seconds = Some(60);
        let mut unknown = session.exercises[0].clone();
        unknown.exercise_id = 9.into();

        let modified = service
            .modify_workout_session(
                session.id,
                Some("Boa sessão".to_string()),
                Some(vec![performance, unknown]),
            )
            .unwrap();

        assert!(modified.is_completed);
        assert_eq!(modified.notes, "Boa sessão");
        assert_eq!(modified.exercises[0], session.exercises[0]);
        assert_eq!(modified.exercises[1].weight_used, "0");
        assert!(modified.exercises[1].is_exercise_completed);
        assert_eq!(modified.exercises[1].rest_seconds, Some(60));
        assert_eq!(modified.num_completed_exercises(), 1);
    }

    #[rstest]
    fn test_get_training_queue(service: Service<FakeRepository, FixedClock>) {
        let session = service.start_workout_session(1.into()).unwrap();
        service.complete_workout_session(session.id).unwrap();

        let queue = service.get_training_queue().unwrap();

        assert_eq!(
            queue.iter().map(|q| q.workout.id).collect::<Vec<_>>(),
            vec![WorkoutID::from(2)]
        );
        assert!(queue[0].is_overdue());
    }

    #[rstest]
    fn test_schedule_workout(service: Service<FakeRepository, FixedClock>) {
        let later = service
            .schedule_workout(2.into(), date_time(12, 18))
            .unwrap();
        let sooner = service
            .schedule_workout(1.into(), date_time(11, 7))
            .unwrap();
        service.schedule_workout(1.into(), date_time(9, 7)).unwrap();

        assert_eq!(later.workout_name, "Costas");
        assert_eq!(service.get_scheduled_workouts().unwrap().len(), 3);
        assert_eq!(
            service.get_upcoming_workouts().unwrap(),
            vec![sooner.clone(), later]
        );

        service.delete_scheduled_workout(sooner.id).unwrap();
        assert_eq!(service.get_upcoming_workouts().unwrap().len(), 1);
    }

    #[rstest]
    fn test_schedule_unknown_workout(service: Service<FakeRepository, FixedClock>) {
        assert!(matches!(
            service.schedule_workout(9.into(), date_time(12, 18)),
            Err(CreateError::Other(_))
        ));
    }

    #[rstest]
    fn test_settings(service: Service<FakeRepository, FixedClock>) {
        assert_eq!(service.get_settings().unwrap(), UserSettings::default());

        let settings = UserSettings {
            default_sets: Sets::new(5).unwrap(),
            default_reps: Reps::new("5").unwrap(),
        };
        service.set_settings(settings.clone()).unwrap();

        assert_eq!(service.get_settings().unwrap(), settings);
    }

    #[rstest]
    fn test_generate_workout(service: Service<FakeRepository, FixedClock>) {
        service
            .set_settings(UserSettings {
                default_sets: Sets::new(4).unwrap(),
                default_reps: Reps::new("8").unwrap(),
            })
            .unwrap();

        let generated = service
            .generate_workout("Peitoral_Mini", &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(generated.draft.exercises.len(), 1);
        let exercise = &generated.draft.exercises[0];
        assert_ne!(exercise.name, "Supino Reto com Barra");
        assert_ne!(exercise.name, "Crucifixo com Halteres");
        assert_eq!(exercise.sets, Sets::new(4).unwrap());
        assert_eq!(exercise.reps, Reps::new("8").unwrap());
        assert!(exercise.muscle_groups.contains(&MuscleGroup::Chest));
        assert!(exercise.has_warmup);
        assert_eq!(generated.suggested_frequency_days, Some(2));
        assert_eq!(generated.suggested_deadline, Some(date(12)));
        assert_eq!(generated.warnings, Vec::<GenerationWarning>::new());

        let workout = service
            .create_workout(generated.apply_suggestions())
            .unwrap();
        assert_eq!(workout.repeat_frequency_days, Some(2));
        assert_eq!(workout.days_for_deadline, Some(2));
    }

    #[rstest]
    fn test_generate_workout_unknown_template(service: Service<FakeRepository, FixedClock>) {
        assert!(matches!(
            service.generate_workout("Nope", &mut StdRng::seed_from_u64(0)),
            Err(GenerateError::TemplateNotFound(key)) if key == "Nope"
        ));
    }

    #[rstest]
    fn test_storage_unavailable(service: Service<FakeRepository, FixedClock>) {
        service.repository.unavailable.set(true);

        assert!(matches!(
            service.get_workouts(),
            Err(ReadError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.get_training_queue(),
            Err(ReadError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.start_workout_session(1.into()),
            Err(CreateError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.generate_workout("Peitoral", &mut StdRng::seed_from_u64(0)),
            Err(GenerateError::Read(ReadError::Storage(
                StorageError::Unavailable
            )))
        ));
    }
}
