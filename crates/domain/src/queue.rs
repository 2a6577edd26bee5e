use std::cmp::Ordering;

use chrono::{Days, NaiveDate};

use crate::{ReadError, Workout, WorkoutSession};

pub trait TrainingQueueService {
    /// Workouts that are due, most urgent first.
    fn get_training_queue(&self) -> Result<Vec<QueuedWorkout>, ReadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    None,
    Overdue(NaiveDate),
    Due { days: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedWorkout {
    pub workout: Workout,
    pub deadline_status: DeadlineStatus,
    pub last_completed: Option<NaiveDate>,
    pub next_available: Option<NaiveDate>,
}

impl QueuedWorkout {
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        matches!(self.deadline_status, DeadlineStatus::Overdue(_))
    }

    #[must_use]
    pub fn days_until_deadline(&self) -> Option<i64> {
        match self.deadline_status {
            DeadlineStatus::Due { days } => Some(days),
            DeadlineStatus::None | DeadlineStatus::Overdue(_) => None,
        }
    }

    fn cmp_urgency(&self, other: &Self) -> Ordering {
        let by_status = match (self.deadline_status, other.deadline_status) {
            (DeadlineStatus::Overdue(a), DeadlineStatus::Overdue(b)) => a.cmp(&b),
            (DeadlineStatus::Overdue(_), _) => Ordering::Less,
            (_, DeadlineStatus::Overdue(_)) => Ordering::Greater,
            (DeadlineStatus::Due { days: a }, DeadlineStatus::Due { days: b }) => a.cmp(&b),
            (DeadlineStatus::Due { .. }, DeadlineStatus::None) => Ordering::Less,
            (DeadlineStatus::None, DeadlineStatus::Due { .. }) => Ordering::Greater,
            (DeadlineStatus::None, DeadlineStatus::None) => Ordering::Equal,
        };
        by_status.then_with(|| self.workout.name.cmp(&other.workout.name))
    }
}

/// Workouts with a repeat frequency that are available on `today`, ordered by urgency.
///
/// Overdue workouts come first (oldest deadline first), then workouts with an upcoming
/// deadline (nearest first), then workouts without a deadline. Ties are ordered by name.
#[must_use]
pub fn training_queue(
    workouts: &[Workout],
    sessions: &[WorkoutSession],
    today: NaiveDate,
) -> Vec<QueuedWorkout> {
    let mut queue = workouts
        .iter()
        .filter_map(|workout| {
            let frequency_days = workout.repeat_frequency_days.filter(|days| *days > 0)?;
            let last_completed = workout.last_completed(sessions).map(|s| s.date.date());
            let next_available = last_completed
                .and_then(|date| date.checked_add_days(Days::new(u64::from(frequency_days))));

            if let Some(next_available) = next_available {
                if today < next_available {
                    return None;
                }
            } else if last_completed.is_some() {
                return None;
            }

            Some(QueuedWorkout {
                workout: workout.clone(),
                deadline_status: deadline_status(workout.deadline, today),
                last_completed,
                next_available,
            })
        })
        .collect::<Vec<_>>();
    queue.sort_by(QueuedWorkout::cmp_urgency);
    queue
}

fn deadline_status(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    match deadline {
        Some(deadline) if deadline < today => DeadlineStatus::Overdue(deadline),
        Some(deadline) => DeadlineStatus::Due {
            days: (deadline - today).num_days(),
        },
        None => DeadlineStatus::None,
    }
}
