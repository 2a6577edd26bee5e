use crate::{MuscleGroup, WorkoutTemplate, template::TEMPLATES};

/// Reference exercise from which concrete exercises are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelExercise {
    pub name: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
    pub description: &'static str,
    pub default_weight: Option<&'static str>,
}

impl ModelExercise {
    #[must_use]
    pub fn targets(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle_group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCategory {
    pub name: &'static str,
    pub exercises: &'static [ModelExercise],
}

/// Read-only view of the exercise catalog, the rest-day table and the template registry.
pub struct Catalog {
    categories: &'static [ExerciseCategory],
    accessory_pools: &'static [(MuscleGroup, &'static [&'static str])],
    rest_days: &'static [(MuscleGroup, u32)],
    templates: &'static [WorkoutTemplate],
}

pub static CATALOG: Catalog = Catalog::new(&CATEGORIES, &ACCESSORY_POOLS, &REST_DAYS, &TEMPLATES);

impl Catalog {
    #[must_use]
    pub const fn new(
        categories: &'static [ExerciseCategory],
        accessory_pools: &'static [(MuscleGroup, &'static [&'static str])],
        rest_days: &'static [(MuscleGroup, u32)],
        templates: &'static [WorkoutTemplate],
    ) -> Self {
        Self {
            categories,
            accessory_pools,
            rest_days,
            templates,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &'static [ExerciseCategory] {
        self.categories
    }

    pub fn exercises(&self) -> impl Iterator<Item = &'static ModelExercise> + use<> {
        let categories = self.categories;
        categories.iter().flat_map(|c| c.exercises.iter())
    }

    #[must_use]
    pub fn find_exercise(&self, name: &str) -> Option<&'static ModelExercise> {
        let name = name.trim().to_lowercase();
        self.exercises().find(|e| e.name.to_lowercase() == name)
    }

    /// Warm-up default for an exercise added by name, e.g. in the workout builder.
    #[must_use]
    pub fn default_warmup(&self, name: &str) -> bool {
        needs_warmup(self.find_exercise(name))
    }

    /// Curated exercises for core and accessory templates.
    ///
    /// Groups without a curated list yield an empty pool.
    #[must_use]
    pub fn accessory_pool(&self, muscle_group: MuscleGroup) -> Vec<&'static ModelExercise> {
        self.accessory_pools
            .iter()
            .filter(|(m, _)| *m == muscle_group)
            .flat_map(|(_, names)| names.iter())
            .filter_map(|name| self.find_exercise(name))
            .collect()
    }

    #[must_use]
    pub fn rest_days(&self, muscle_group: MuscleGroup) -> Option<u32> {
        self.rest_days
            .iter()
            .find(|(m, _)| *m == muscle_group)
            .map(|(_, days)| *days)
    }

    #[must_use]
    pub fn templates(&self) -> &'static [WorkoutTemplate] {
        self.templates
    }

    #[must_use]
    pub fn template(&self, key: &str) -> Option<&'static WorkoutTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }
}

const NO_WARMUP_NAMES: [&str; 2] = ["prancha abdominal", "alongamento (geral)"];

/// Whether an exercise should be preceded by a warm-up set.
///
/// Exercises without a catalog entry default to a warm-up.
#[must_use]
pub fn needs_warmup(exercise: Option<&ModelExercise>) -> bool {
    let Some(exercise) = exercise else {
        return true;
    };

    let name = exercise.name.to_lowercase();

    if NO_WARMUP_NAMES.contains(&name.as_str()) {
        return false;
    }

    if exercise.targets(MuscleGroup::Cardio) && !name.contains("hiit") {
        return false;
    }

    let accessory = exercise.muscle_groups.iter().any(|m| m.is_accessory());
    let major = exercise.muscle_groups.iter().any(|m| m.is_major());

    !(accessory && !major)
}

static REST_DAYS: [(MuscleGroup, u32); 13] = [
    (MuscleGroup::Chest, 2),
    (MuscleGroup::Back, 2),
    (MuscleGroup::Quads, 3),
    (MuscleGroup::Hamstrings, 3),
    (MuscleGroup::Glutes, 2),
    (MuscleGroup::Shoulders, 2),
    (MuscleGroup::Biceps, 1),
    (MuscleGroup::Triceps, 1),
    (MuscleGroup::Abs, 1),
    (MuscleGroup::LowerBack, 2),
    (MuscleGroup::Forearms, 1),
    (MuscleGroup::Calves, 1),
    (MuscleGroup::Traps, 2),
];

static ACCESSORY_POOLS: [(MuscleGroup, &[&str]); 3] = [
    (
        MuscleGroup::Abs,
        &[
            "Abdominal Bicicleta",
            "Abdominal na Polia",
            "Abdominal Supra",
            "Elevação de Pernas",
            "Prancha Abdominal",
            "Prancha Lateral",
            "Roda Abdominal",
        ],
    ),
    (
        MuscleGroup::LowerBack,
        &[
            "Good Morning com Bastão",
            "Hiperextensão Lombar",
            "Perdigueiro (Bird Dog)",
            "Superman",
        ],
    ),
    (
        MuscleGroup::Forearms,
        &[
            "Caminhada do Fazendeiro",
            "Rosca de Punho",
            "Rosca de Punho Inversa",
            "Suspensão na Barra",
        ],
    ),
];

static CATEGORIES: [ExerciseCategory; 7] = [
    ExerciseCategory {
        name: "Peito",
        exercises: &[
            ModelExercise {
                name: "Supino Reto com Barra",
                muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
                description: "Deitado no banco, desça a barra até o meio do peito e empurre até estender os cotovelos.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Supino Inclinado com Halteres",
                muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
                description: "Banco a 30-45 graus, desça os halteres ao lado do peito superior e empurre.",
                default_weight: Some("10kg"),
            },
            ModelExercise {
                name: "Supino Declinado com Barra",
                muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
                description: "Banco declinado, desça a barra até a parte inferior do peito.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Crucifixo com Halteres",
                muscle_groups: &[MuscleGroup::Chest],
                description: "Braços levemente flexionados, abra até sentir o alongamento do peito e feche em arco.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Crossover na Polia",
                muscle_groups: &[MuscleGroup::Chest],
                description: "Puxe as polias altas para a frente do quadril, cruzando levemente as mãos.",
                default_weight: None,
            },
            ModelExercise {
                name: "Peck Deck (Voador)",
                muscle_groups: &[MuscleGroup::Chest],
                description: "Feche os braços na máquina mantendo os cotovelos na altura dos ombros.",
                default_weight: None,
            },
            ModelExercise {
                name: "Flexão de Braço",
                muscle_groups: &[
                    MuscleGroup::Chest,
                    MuscleGroup::Triceps,
                    MuscleGroup::Shoulders,
                    MuscleGroup::Abs,
                ],
                description: "Corpo alinhado, desça o peito até perto do chão e empurre.",
                default_weight: None,
            },
            ModelExercise {
                name: "Mergulho nas Paralelas",
                muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
                description: "Incline o tronco à frente e desça até os cotovelos formarem 90 graus.",
                default_weight: None,
            },
        ],
    },
    ExerciseCategory {
        name: "Costas",
        exercises: &[
            ModelExercise {
                name: "Puxada Frontal",
                muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
                description: "Puxe a barra até a parte superior do peito, levando os cotovelos para baixo.",
                default_weight: Some("30kg"),
            },
            ModelExercise {
                name: "Remada Curvada com Barra",
                muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::LowerBack],
                description: "Tronco inclinado e coluna neutra, puxe a barra em direção ao umbigo.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Remada Unilateral com Halter",
                muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
                description: "Apoie joelho e mão no banco e puxe o halter até o quadril.",
                default_weight: Some("12kg"),
            },
            ModelExercise {
                name: "Remada Baixa na Polia",
                muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
                description: "Sentado, puxe o triângulo até o abdômen mantendo o peito aberto.",
                default_weight: None,
            },
            ModelExercise {
                name: "Barra Fixa",
                muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms],
                description: "Pendurado na barra, suba até o queixo passar a barra.",
                default_weight: None,
            },
            ModelExercise {
                name: "Pulldown com Braços Estendidos",
                muscle_groups: &[MuscleGroup::Back],
                description: "Braços estendidos, leve a barra da polia alta até as coxas.",
                default_weight: None,
            },
            ModelExercise {
                name: "Levantamento Terra",
                muscle_groups: &[
                    MuscleGroup::Back,
                    MuscleGroup::LowerBack,
                    MuscleGroup::Glutes,
                    MuscleGroup::Hamstrings,
                    MuscleGroup::Quads,
                    MuscleGroup::Forearms,
                ],
                description: "Barra junto às canelas, estenda quadril e joelhos juntos mantendo a coluna neutra.",
                default_weight: Some("40kg"),
            },
        ],
    },
    ExerciseCategory {
        name: "Pernas",
        exercises: &[
            ModelExercise {
                name: "Agachamento Livre",
                muscle_groups: &[
                    MuscleGroup::Quads,
                    MuscleGroup::Glutes,
                    MuscleGroup::Hamstrings,
                    MuscleGroup::LowerBack,
                ],
                description: "Barra nas costas, desça até as coxas ficarem paralelas ao chão.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Leg Press 45°",
                muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
                description: "Desça a plataforma até 90 graus de joelho sem tirar o quadril do encosto.",
                default_weight: Some("60kg"),
            },
            ModelExercise {
                name: "Cadeira Extensora",
                muscle_groups: &[MuscleGroup::Quads],
                description: "Estenda os joelhos completamente e controle a descida.",
                default_weight: None,
            },
            ModelExercise {
                name: "Afundo com Halteres",
                muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
                description: "Dê um passo à frente e desça até o joelho de trás quase tocar o chão.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Agachamento Búlgaro",
                muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
                description: "Pé de trás apoiado no banco, desça com o tronco estável.",
                default_weight: None,
            },
            ModelExercise {
                name: "Mesa Flexora",
                muscle_groups: &[MuscleGroup::Hamstrings],
                description: "Deitado, flexione os joelhos levando o rolo em direção aos glúteos.",
                default_weight: None,
            },
            ModelExercise {
                name: "Cadeira Flexora",
                muscle_groups: &[MuscleGroup::Hamstrings],
                description: "Sentado, flexione os joelhos empurrando o rolo para baixo.",
                default_weight: None,
            },
            ModelExercise {
                name: "Stiff com Barra",
                muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::LowerBack],
                description: "Joelhos quase estendidos, desça a barra rente às pernas levando o quadril para trás.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Elevação Pélvica (Hip Thrust)",
                muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
                description: "Costas apoiadas no banco, eleve o quadril até alinhar com o tronco.",
                default_weight: Some("30kg"),
            },
            ModelExercise {
                name: "Abdução de Quadril na Máquina",
                muscle_groups: &[MuscleGroup::Glutes],
                description: "Afaste as pernas contra a resistência e retorne devagar.",
                default_weight: None,
            },
            ModelExercise {
                name: "Glúteo na Polia (Coice)",
                muscle_groups: &[MuscleGroup::Glutes],
                description: "Tornozeleira na polia baixa, estenda o quadril levando a perna para trás.",
                default_weight: None,
            },
            ModelExercise {
                name: "Panturrilha em Pé",
                muscle_groups: &[MuscleGroup::Calves],
                description: "Suba na ponta dos pés e desça alongando totalmente.",
                default_weight: None,
            },
            ModelExercise {
                name: "Panturrilha Sentado",
                muscle_groups: &[MuscleGroup::Calves],
                description: "Sentado na máquina, eleve os calcanhares com pausa no topo.",
                default_weight: None,
            },
        ],
    },
    ExerciseCategory {
        name: "Ombros",
        exercises: &[
            ModelExercise {
                name: "Desenvolvimento com Halteres",
                muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
                description: "Sentado, empurre os halteres acima da cabeça sem travar os cotovelos.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Desenvolvimento Militar com Barra",
                muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps, MuscleGroup::Traps],
                description: "Em pé, empurre a barra da clavícula até acima da cabeça.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Elevação Lateral",
                muscle_groups: &[MuscleGroup::Shoulders],
                description: "Eleve os halteres lateralmente até a altura dos ombros.",
                default_weight: Some("4kg"),
            },
            ModelExercise {
                name: "Elevação Frontal",
                muscle_groups: &[MuscleGroup::Shoulders],
                description: "Eleve os halteres à frente até a altura dos olhos.",
                default_weight: Some("4kg"),
            },
            ModelExercise {
                name: "Crucifixo Inverso",
                muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Back],
                description: "Tronco inclinado, abra os braços para trás contraindo a parte posterior do ombro.",
                default_weight: Some("4kg"),
            },
            ModelExercise {
                name: "Face Pull",
                muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Traps, MuscleGroup::Back],
                description: "Puxe a corda da polia alta em direção ao rosto, abrindo os cotovelos.",
                default_weight: None,
            },
            ModelExercise {
                name: "Encolhimento com Halteres",
                muscle_groups: &[MuscleGroup::Traps],
                description: "Eleve os ombros em direção às orelhas e segure um segundo no topo.",
                default_weight: Some("16kg"),
            },
            ModelExercise {
                name: "Remada Alta",
                muscle_groups: &[MuscleGroup::Traps, MuscleGroup::Shoulders],
                description: "Puxe a barra rente ao corpo até a altura do peito.",
                default_weight: Some("15kg"),
            },
        ],
    },
    ExerciseCategory {
        name: "Braços",
        exercises: &[
            ModelExercise {
                name: "Rosca Direta com Barra",
                muscle_groups: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
                description: "Cotovelos fixos ao lado do corpo, flexione levando a barra ao peito.",
                default_weight: Some("10kg"),
            },
            ModelExercise {
                name: "Rosca Alternada com Halteres",
                muscle_groups: &[MuscleGroup::Biceps],
                description: "Flexione um braço de cada vez girando o punho durante a subida.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Rosca Martelo",
                muscle_groups: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
                description: "Pegada neutra, flexione os cotovelos sem balançar o tronco.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Rosca Concentrada",
                muscle_groups: &[MuscleGroup::Biceps],
                description: "Sentado, cotovelo apoiado na coxa, flexione o braço lentamente.",
                default_weight: Some("6kg"),
            },
            ModelExercise {
                name: "Tríceps na Polia (Corda)",
                muscle_groups: &[MuscleGroup::Triceps],
                description: "Estenda os cotovelos abrindo a corda no final do movimento.",
                default_weight: None,
            },
            ModelExercise {
                name: "Tríceps Testa",
                muscle_groups: &[MuscleGroup::Triceps],
                description: "Deitado, desça a barra em direção à testa e estenda os cotovelos.",
                default_weight: Some("10kg"),
            },
            ModelExercise {
                name: "Tríceps Francês",
                muscle_groups: &[MuscleGroup::Triceps],
                description: "Halter atrás da cabeça, estenda os cotovelos apontando para cima.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Mergulho no Banco",
                muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Chest],
                description: "Mãos apoiadas no banco atrás do corpo, desça flexionando os cotovelos.",
                default_weight: None,
            },
            ModelExercise {
                name: "Rosca de Punho",
                muscle_groups: &[MuscleGroup::Forearms],
                description: "Antebraços apoiados, flexione apenas os punhos.",
                default_weight: Some("10kg"),
            },
            ModelExercise {
                name: "Rosca de Punho Inversa",
                muscle_groups: &[MuscleGroup::Forearms],
                description: "Pegada pronada, estenda os punhos com os antebraços apoiados.",
                default_weight: Some("6kg"),
            },
            ModelExercise {
                name: "Rosca Inversa",
                muscle_groups: &[MuscleGroup::Forearms, MuscleGroup::Biceps],
                description: "Pegada pronada, flexione os cotovelos mantendo os punhos firmes.",
                default_weight: Some("8kg"),
            },
            ModelExercise {
                name: "Caminhada do Fazendeiro",
                muscle_groups: &[MuscleGroup::Forearms, MuscleGroup::Traps],
                description: "Caminhe segurando halteres pesados com o tronco ereto.",
                default_weight: Some("20kg"),
            },
            ModelExercise {
                name: "Suspensão na Barra",
                muscle_groups: &[MuscleGroup::Forearms],
                description: "Fique pendurado na barra pelo maior tempo possível.",
                default_weight: None,
            },
        ],
    },
    ExerciseCategory {
        name: "Core",
        exercises: &[
            ModelExercise {
                name: "Prancha Abdominal",
                muscle_groups: &[MuscleGroup::Abs, MuscleGroup::LowerBack],
                description: "Apoie antebraços e pontas dos pés mantendo o corpo alinhado.",
                default_weight: None,
            },
            ModelExercise {
                name: "Prancha Lateral",
                muscle_groups: &[MuscleGroup::Abs],
                description: "Apoiado em um antebraço, mantenha o quadril elevado e alinhado.",
                default_weight: None,
            },
            ModelExercise {
                name: "Abdominal Supra",
                muscle_groups: &[MuscleGroup::Abs],
                description: "Eleve as escápulas do chão contraindo o abdômen.",
                default_weight: None,
            },
            ModelExercise {
                name: "Elevação de Pernas",
                muscle_groups: &[MuscleGroup::Abs],
                description: "Deitado, eleve as pernas estendidas sem arquear a lombar.",
                default_weight: None,
            },
            ModelExercise {
                name: "Abdominal Bicicleta",
                muscle_groups: &[MuscleGroup::Abs],
                description: "Alterne cotovelo e joelho opostos em movimento de pedalada.",
                default_weight: None,
            },
            ModelExercise {
                name: "Abdominal na Polia",
                muscle_groups: &[MuscleGroup::Abs],
                description: "Ajoelhado, flexione o tronco puxando a corda da polia alta.",
                default_weight: None,
            },
            ModelExercise {
                name: "Roda Abdominal",
                muscle_groups: &[MuscleGroup::Abs, MuscleGroup::LowerBack],
                description: "Ajoelhado, role a roda à frente e volte contraindo o abdômen.",
                default_weight: None,
            },
            ModelExercise {
                name: "Hiperextensão Lombar",
                muscle_groups: &[MuscleGroup::LowerBack, MuscleGroup::Glutes],
                description: "No banco romano, estenda o tronco até alinhar com as pernas.",
                default_weight: None,
            },
            ModelExercise {
                name: "Superman",
                muscle_groups: &[MuscleGroup::LowerBack],
                description: "Deitado de bruços, eleve braços e pernas simultaneamente.",
                default_weight: None,
            },
            ModelExercise {
                name: "Perdigueiro (Bird Dog)",
                muscle_groups: &[MuscleGroup::LowerBack, MuscleGroup::Abs],
                description: "Em quatro apoios, estenda braço e perna opostos mantendo o quadril estável.",
                default_weight: None,
            },
            ModelExercise {
                name: "Good Morning com Bastão",
                muscle_groups: &[MuscleGroup::LowerBack],
                description: "Bastão nas costas, incline o tronco à frente com a coluna neutra.",
                default_weight: None,
            },
        ],
    },
    ExerciseCategory {
        name: "Cardio e Alongamento",
        exercises: &[
            ModelExercise {
                name: "Corrida na Esteira",
                muscle_groups: &[MuscleGroup::Cardio],
                description: "Ritmo constante e confortável.",
                default_weight: None,
            },
            ModelExercise {
                name: "Bicicleta Ergométrica",
                muscle_groups: &[MuscleGroup::Cardio],
                description: "Pedalada contínua com carga moderada.",
                default_weight: None,
            },
            ModelExercise {
                name: "Elíptico",
                muscle_groups: &[MuscleGroup::Cardio],
                description: "Movimento contínuo usando braços e pernas.",
                default_weight: None,
            },
            ModelExercise {
                name: "Pular Corda",
                muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Calves],
                description: "Saltos curtos na ponta dos pés.",
                default_weight: None,
            },
            ModelExercise {
                name: "HIIT na Bicicleta",
                muscle_groups: &[MuscleGroup::Cardio],
                description: "Alterne 30s de sprint com 60s de pedalada leve.",
                default_weight: None,
            },
            ModelExercise {
                name: "Burpees (HIIT)",
                muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Chest, MuscleGroup::Quads],
                description: "Agache, estenda as pernas, faça uma flexão e salte.",
                default_weight: None,
            },
            ModelExercise {
                name: "Alongamento (Geral)",
                muscle_groups: &[MuscleGroup::Cardio],
                description: "Sequência de alongamentos para todo o corpo.",
                default_weight: None,
            },
        ],
    },
];
