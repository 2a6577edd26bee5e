use std::{fmt, slice::Iter, str::FromStr};

/// Muscle-group tag attached to catalog entries and exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Quads,
    Hamstrings,
    Glutes,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    LowerBack,
    Forearms,
    Calves,
    Traps,
    Cardio,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 14] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
            MuscleGroup::LowerBack,
            MuscleGroup::Forearms,
            MuscleGroup::Calves,
            MuscleGroup::Traps,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUPS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Peito",
            MuscleGroup::Back => "Costas",
            MuscleGroup::Quads => "Pernas (Quadríceps)",
            MuscleGroup::Hamstrings => "Pernas (Posteriores)",
            MuscleGroup::Glutes => "Glúteos",
            MuscleGroup::Shoulders => "Ombros",
            MuscleGroup::Biceps => "Bíceps",
            MuscleGroup::Triceps => "Tríceps",
            MuscleGroup::Abs => "Abdômen",
            MuscleGroup::LowerBack => "Lombar",
            MuscleGroup::Forearms => "Antebraço",
            MuscleGroup::Calves => "Panturrilhas",
            MuscleGroup::Traps => "Trapézio",
            MuscleGroup::Cardio => "Cardio",
        }
    }

    /// Large groups whose exercises warrant a dedicated warm-up set.
    #[must_use]
    pub fn is_major(self) -> bool {
        matches!(
            self,
            MuscleGroup::Chest
                | MuscleGroup::Back
                | MuscleGroup::Quads
                | MuscleGroup::Hamstrings
                | MuscleGroup::Glutes
                | MuscleGroup::Shoulders
        )
    }

    /// Groups that make a compact workout need two recovery days instead of one.
    #[must_use]
    pub fn is_slow_recovering(self) -> bool {
        matches!(
            self,
            MuscleGroup::Chest
                | MuscleGroup::Back
                | MuscleGroup::Quads
                | MuscleGroup::Hamstrings
                | MuscleGroup::Glutes
                | MuscleGroup::LowerBack
        )
    }

    #[must_use]
    pub fn is_accessory(self) -> bool {
        matches!(
            self,
            MuscleGroup::Abs | MuscleGroup::LowerBack | MuscleGroup::Forearms
        )
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lowercase = s.to_lowercase();
        MuscleGroup::iter()
            .find(|m| m.name().to_lowercase() == lowercase)
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group \"{0}\"")]
    Unknown(String),
}
