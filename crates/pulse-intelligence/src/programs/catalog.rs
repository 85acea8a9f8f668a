// ABOUTME: Static content tables for program generation
// ABOUTME: Program names, content titles, phase wording, and success metrics per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Static tables the generator draws from.
//!
//! Content is in Spanish, the product's primary locale.

use pulse_core::models::ProgramTrack;

/// Pool a program name is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamePool {
    /// Training-oriented names
    Fitness,
    /// Well-being names
    Wellness,
    /// Longevity names
    Longevity,
    /// Nutrition names
    Nutrition,
}

impl NamePool {
    /// Names available in this pool
    #[must_use]
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::Fitness => FITNESS_PROGRAM_NAMES,
            Self::Wellness => WELLNESS_PROGRAM_NAMES,
            Self::Longevity => LONGEVITY_PROGRAM_NAMES,
            Self::Nutrition => NUTRITION_PROGRAM_NAMES,
        }
    }
}

const FITNESS_PROGRAM_NAMES: &[&str] = &[
    "Transformación Elite",
    "Fuerza y Resistencia Pro",
    "Definición Muscular Avanzada",
    "Acondicionamiento Total",
    "Potencia y Agilidad",
    "Fortaleza Funcional",
];

const WELLNESS_PROGRAM_NAMES: &[&str] = &[
    "Equilibrio Vital",
    "Bienestar Integral",
    "Mente y Cuerpo Armonía",
    "Energía Renovada",
    "Vida Plena 360",
    "Optimización Personal",
];

const LONGEVITY_PROGRAM_NAMES: &[&str] = &[
    "Longevidad Activa",
    "Salud Preventiva Plus",
    "Vitalidad Sostenible",
    "Envejecimiento Saludable",
    "Regeneración Celular",
    "Vida Longeva",
];

const NUTRITION_PROGRAM_NAMES: &[&str] = &[
    "Nutrición Inteligente",
    "Alimentación Funcional",
    "Metabolismo Optimizado",
    "Equilibrio Nutricional",
    "Fuel Performance",
    "Bienestar Alimentario",
    "Macro Perfect",
    "Nutrición Consciente",
    "Alimentación Sostenible",
    "Vitality Nutrition",
];

const FITNESS_CONTENT_RECOMMENDATIONS: &[&str] = &[
    "Fundamentos de Entrenamiento Funcional",
    "Técnicas de Recuperación Avanzada",
    "Planificación de Entrenamientos",
    "Biomecánica del Movimiento",
    "Periodización del Entrenamiento",
    "Entrenamiento de Fuerza",
    "Cardio Inteligente",
    "Flexibilidad y Movilidad",
];

const NUTRITION_CONTENT_RECOMMENDATIONS: &[&str] = &[
    "Macronutrientes Esenciales",
    "Timing Nutricional",
    "Hidratación Inteligente",
    "Suplementación Estratégica",
    "Recetas Saludables",
    "Meal Prep Eficiente",
    "Micronutrientes Clave",
    "Digestión Optimizada",
    "Balance Hormonal Nutricional",
    "Nutrición Antiinflamatoria",
];

/// Content titles recommended for a track
#[must_use]
pub const fn content_recommendations(track: ProgramTrack) -> &'static [&'static str] {
    match track {
        ProgramTrack::Fitness => FITNESS_CONTENT_RECOMMENDATIONS,
        ProgramTrack::Nutrition => NUTRITION_CONTENT_RECOMMENDATIONS,
    }
}

/// Two-week phase a program week falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Weeks 1-2
    Foundation,
    /// Weeks 3-4
    Development,
    /// Weeks 5-6
    Optimization,
    /// Week 7 onward
    Consolidation,
}

impl Phase {
    /// Phase for a 1-based week number
    #[must_use]
    pub const fn for_week(week: u32) -> Self {
        match week {
            0..=2 => Self::Foundation,
            3..=4 => Self::Development,
            5..=6 => Self::Optimization,
            _ => Self::Consolidation,
        }
    }
}

/// Focus text and milestones of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseContent {
    /// Focus line
    pub focus: &'static str,
    /// Milestones for every week of the phase
    pub milestones: [&'static str; 3],
}

/// Wording for a phase on a given track
#[must_use]
pub const fn phase_content(track: ProgramTrack, phase: Phase) -> PhaseContent {
    match (track, phase) {
        (ProgramTrack::Nutrition, Phase::Foundation) => PhaseContent {
            focus: "Fundamentos nutricionales y hábitos",
            milestones: [
                "Establecer rutina alimentaria",
                "Aprender sobre macronutrientes",
                "Evaluar hábitos actuales",
            ],
        },
        (ProgramTrack::Nutrition, Phase::Development) => PhaseContent {
            focus: "Optimización de macros y timing",
            milestones: [
                "Ajustar distribución de macros",
                "Mejorar timing nutricional",
                "Consolidar meal prep",
            ],
        },
        (ProgramTrack::Nutrition, Phase::Optimization) => PhaseContent {
            focus: "Personalización y ajustes finos",
            milestones: [
                "Alcanzar objetivos nutricionales",
                "Refinar estrategias alimentarias",
                "Evaluar biomarcadores",
            ],
        },
        (ProgramTrack::Nutrition, Phase::Consolidation) => PhaseContent {
            focus: "Mantenimiento y lifestyle",
            milestones: [
                "Lograr estilo alimentario sostenible",
                "Planificar nutrición a largo plazo",
                "Celebrar transformación",
            ],
        },
        (ProgramTrack::Fitness, Phase::Foundation) => PhaseContent {
            focus: "Adaptación y fundamentos",
            milestones: [
                "Establecer rutina de entrenamiento",
                "Aprender técnicas básicas",
                "Evaluar condición física inicial",
            ],
        },
        (ProgramTrack::Fitness, Phase::Development) => PhaseContent {
            focus: "Desarrollo e intensificación",
            milestones: [
                "Aumentar intensidad",
                "Mejorar técnica",
                "Consolidar hábitos de entrenamiento",
            ],
        },
        (ProgramTrack::Fitness, Phase::Optimization) => PhaseContent {
            focus: "Optimización y progreso",
            milestones: [
                "Alcanzar objetivos intermedios",
                "Refinar rutinas",
                "Evaluar progreso físico",
            ],
        },
        (ProgramTrack::Fitness, Phase::Consolidation) => PhaseContent {
            focus: "Consolidación y mantenimiento",
            milestones: [
                "Lograr objetivos principales",
                "Planificar entrenamiento a largo plazo",
                "Celebrar logros físicos",
            ],
        },
    }
}

/// Success metrics contributed by a goal id; unknown ids contribute none
#[must_use]
pub fn goal_metrics(goal_id: &str) -> &'static [&'static str] {
    match goal_id {
        // Fitness and wellness goals
        "weight_loss" => &[
            "Reducción de 2-4kg de peso corporal",
            "Disminución del porcentaje de grasa corporal",
        ],
        "muscle_gain" => &[
            "Aumento de 1-2kg de masa muscular",
            "Incremento de fuerza en ejercicios principales",
        ],
        "endurance" => &[
            "Mejora de VO2 máximo en 10-15%",
            "Aumento de resistencia cardiovascular",
        ],
        "strength" => &[
            "Incremento de 20-30% en levantamientos principales",
            "Mejora de fuerza funcional",
        ],
        "energy_boost" => &[
            "Aumento de niveles de energía diaria",
            "Mejora de calidad del sueño",
        ],
        "stress_management" => &[
            "Reducción de niveles de estrés percibido",
            "Mejora de técnicas de manejo del estrés",
        ],
        // Nutrition goals
        "fat_loss_nutrition" => &[
            "Reducción de grasa corporal a través de nutrición",
            "Mejora en composición corporal",
        ],
        "muscle_nutrition" => &[
            "Optimización de proteína para hipertrofia",
            "Mejora en recuperación muscular",
        ],
        "energy_nutrition" => &[
            "Estabilización de energía durante el día",
            "Reducción de fatiga post-comida",
        ],
        "digestive_health" => &[
            "Mejora en digestión y regularidad",
            "Reducción de inflamación intestinal",
        ],
        "blood_sugar" => &[
            "Estabilización de glucosa en sangre",
            "Mejora en sensibilidad a la insulina",
        ],
        "inflammation" => &[
            "Reducción de marcadores inflamatorios",
            "Mejora en bienestar general",
        ],
        "sports_nutrition" => &[
            "Optimización de rendimiento deportivo",
            "Mejora en recuperación post-entrenamiento",
        ],
        "hormonal_balance" => &[
            "Estabilización de hormonas clave",
            "Mejora en ciclos naturales del cuerpo",
        ],
        _ => &[],
    }
}

/// Metrics appended for every program on a track
#[must_use]
pub const fn track_metrics(track: ProgramTrack) -> &'static [&'static str] {
    match track {
        ProgramTrack::Nutrition => &[
            "Adherencia nutricional >85%",
            "Mejora en biomarcadores nutricionales",
            "Establecimiento de hábitos alimentarios sostenibles",
        ],
        ProgramTrack::Fitness => &[
            "Adherencia al programa >80%",
            "Mejora en biomarcadores de salud",
            "Satisfacción personal con el progreso",
        ],
    }
}
