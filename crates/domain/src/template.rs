use crate::MuscleGroup;

const MINI_SUFFIX: &str = "_Mini";
const CORE_PREFIX: &str = "Core_";

/// Static description of a workout that can be generated from the catalog.
///
/// Keys ending in `_Mini` denote compact variants. Keys starting with `Core_` denote core and
/// accessory templates, which draw their exercises from curated pools instead of the whole
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub targets: &'static [(MuscleGroup, usize)],
    pub has_global_warmup: bool,
}

impl WorkoutTemplate {
    #[must_use]
    pub fn is_mini(&self) -> bool {
        is_mini_key(self.key)
    }

    #[must_use]
    pub fn is_core(&self) -> bool {
        is_core_key(self.key)
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.targets.iter().map(|(_, count)| count).sum()
    }
}

#[must_use]
pub fn is_mini_key(key: &str) -> bool {
    key.ends_with(MINI_SUFFIX)
}

#[must_use]
pub fn is_core_key(key: &str) -> bool {
    key.starts_with(CORE_PREFIX)
}

pub(crate) static TEMPLATES: [WorkoutTemplate; 17] = [
    WorkoutTemplate {
        key: "Peitoral",
        name: "Peitoral e Tríceps",
        description: "Foco em empurrar: peitoral completo com finalização de tríceps.",
        targets: &[(MuscleGroup::Chest, 3), (MuscleGroup::Triceps, 2)],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Peitoral_Mini",
        name: "Peitoral (Mini)",
        description: "Versão rápida com um exercício de peitoral.",
        targets: &[(MuscleGroup::Chest, 1)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Costas",
        name: "Costas e Bíceps",
        description: "Foco em puxar: dorsais e bíceps.",
        targets: &[(MuscleGroup::Back, 3), (MuscleGroup::Biceps, 2)],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Costas_Mini",
        name: "Costas (Mini)",
        description: "Versão rápida de costas com um exercício de bíceps.",
        targets: &[(MuscleGroup::Back, 1), (MuscleGroup::Biceps, 1)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Pernas",
        name: "Pernas Completo",
        description: "Quadríceps, posteriores, glúteos e panturrilhas.",
        targets: &[
            (MuscleGroup::Quads, 2),
            (MuscleGroup::Hamstrings, 2),
            (MuscleGroup::Glutes, 1),
            (MuscleGroup::Calves, 1),
        ],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Pernas_Mini",
        name: "Pernas (Mini)",
        description: "Um exercício de quadríceps e um de posteriores.",
        targets: &[(MuscleGroup::Quads, 1), (MuscleGroup::Hamstrings, 1)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Ombros",
        name: "Ombros e Trapézio",
        description: "Deltoides nas três porções e trapézio.",
        targets: &[(MuscleGroup::Shoulders, 3), (MuscleGroup::Traps, 1)],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Ombros_Mini",
        name: "Ombros (Mini)",
        description: "Versão rápida com um exercício de ombros.",
        targets: &[(MuscleGroup::Shoulders, 1)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Bracos",
        name: "Braços",
        description: "Bíceps, tríceps e antebraço.",
        targets: &[
            (MuscleGroup::Biceps, 2),
            (MuscleGroup::Triceps, 2),
            (MuscleGroup::Forearms, 1),
        ],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Bracos_Mini",
        name: "Braços (Mini)",
        description: "Um exercício de bíceps e um de tríceps.",
        targets: &[(MuscleGroup::Biceps, 1), (MuscleGroup::Triceps, 1)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "FullBody",
        name: "Corpo Inteiro",
        description: "Um exercício para cada grande grupo muscular e abdômen.",
        targets: &[
            (MuscleGroup::Chest, 1),
            (MuscleGroup::Back, 1),
            (MuscleGroup::Quads, 1),
            (MuscleGroup::Hamstrings, 1),
            (MuscleGroup::Shoulders, 1),
            (MuscleGroup::Abs, 1),
        ],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Superiores",
        name: "Membros Superiores",
        description: "Peito, costas, ombros e braços.",
        targets: &[
            (MuscleGroup::Chest, 2),
            (MuscleGroup::Back, 2),
            (MuscleGroup::Shoulders, 1),
            (MuscleGroup::Biceps, 1),
            (MuscleGroup::Triceps, 1),
        ],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Inferiores",
        name: "Membros Inferiores",
        description: "Quadríceps, posteriores, glúteos e panturrilhas com volume maior.",
        targets: &[
            (MuscleGroup::Quads, 2),
            (MuscleGroup::Hamstrings, 2),
            (MuscleGroup::Glutes, 2),
            (MuscleGroup::Calves, 1),
        ],
        has_global_warmup: true,
    },
    WorkoutTemplate {
        key: "Cardio",
        name: "Cardio",
        description: "Dois blocos de condicionamento cardiovascular.",
        targets: &[(MuscleGroup::Cardio, 2)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Core_Abdomen",
        name: "Abdômen",
        description: "Três exercícios de abdômen.",
        targets: &[(MuscleGroup::Abs, 3)],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Core_Completo",
        name: "Core e Acessórios",
        description: "Abdômen, lombar e antebraço.",
        targets: &[
            (MuscleGroup::Abs, 2),
            (MuscleGroup::LowerBack, 1),
            (MuscleGroup::Forearms, 1),
        ],
        has_global_warmup: false,
    },
    WorkoutTemplate {
        key: "Core_Completo_Mini",
        name: "Core (Mini)",
        description: "Um exercício de abdômen e um de lombar.",
        targets: &[(MuscleGroup::Abs, 1), (MuscleGroup::LowerBack, 1)],
        has_global_warmup: false,
    },
];
