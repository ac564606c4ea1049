// ABOUTME: Domain models for the Plano fitness plan API
// ABOUTME: Training levels, fitness goals, generated plan shapes, and declared persistence records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Domain models shared across the plan generation pipeline.
//!
//! The plan shapes (`WorkoutPlan`, `DietPlan`, `GeneratedPlan`) mirror the
//! exact JSON schema the model is instructed to return; deserializing a
//! completion into them is the structural validation boundary. `Profile` and
//! `PlanRecord` are a forward-declared persistence contract: no code path
//! creates, reads, updates, or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// User Vocabulary
// ============================================================================

/// User-declared training experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLevel {
    /// New to structured training
    Iniciante,
    /// Consistent training for several months
    Intermediario,
    /// Years of consistent training
    Avancado,
}

impl TrainingLevel {
    /// Wire token used by the client form and the persistence contract
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Iniciante => "iniciante",
            Self::Intermediario => "intermediario",
            Self::Avancado => "avancado",
        }
    }

    /// Human-readable label (pt-BR, as shown in the client form)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Iniciante => "Iniciante",
            Self::Intermediario => "Intermediário",
            Self::Avancado => "Avançado",
        }
    }
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-declared fitness objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Build muscle mass
    GanharMassa,
    /// Lose body fat
    PerderGordura,
    /// Improve general conditioning
    Condicionamento,
    /// Tone and define
    Tonificar,
}

impl FitnessGoal {
    /// Wire token used by the client form and the persistence contract
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GanharMassa => "ganhar_massa",
            Self::PerderGordura => "perder_gordura",
            Self::Condicionamento => "condicionamento",
            Self::Tonificar => "tonificar",
        }
    }

    /// Human-readable label (pt-BR, as shown in the client form)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GanharMassa => "Ganhar Massa Muscular",
            Self::PerderGordura => "Perder Gordura",
            Self::Condicionamento => "Melhorar Condicionamento",
            Self::Tonificar => "Tonificar o Corpo",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age as submitted by the client: JSON string or number, carried verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    /// Numeric age, e.g. `30`
    Number(i64),
    /// Age as free text, e.g. `"30"`
    Text(String),
}

impl fmt::Display for AgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Generated Plan Shapes
// ============================================================================

/// A single prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Set prescription, e.g. `"3-4"`
    pub sets: String,
    /// Repetition prescription, e.g. `"10-12"`
    pub reps: String,
    /// Rest between sets, e.g. `"60s"`
    pub rest: String,
    /// How to execute the movement, including safety cues
    pub execution: String,
}

/// Training plan metrics block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    /// Sessions per week, e.g. `"3-4x por semana"`
    pub frequency: String,
    /// Session duration, e.g. `"45-60 min"`
    pub duration: String,
    /// Progression guidance
    pub progression: String,
}

/// The workout half of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan title
    pub title: String,
    /// One-sentence plan description
    pub description: String,
    /// Ordered exercise prescription
    pub exercises: Vec<Exercise>,
    /// Frequency/duration/progression metrics
    pub metrics: WorkoutMetrics,
    /// Ordered practical tips
    pub tips: Vec<String>,
}

/// A single meal in the diet plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name, e.g. `"Café da Manhã"`
    pub name: String,
    /// Suggested time window, e.g. `"7h-8h"`
    pub time: String,
    /// Ordered foods with quantities
    pub foods: Vec<String>,
}

/// The diet half of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Plan title
    pub title: String,
    /// One-sentence plan description
    pub description: String,
    /// Daily calorie target, e.g. `"2000-2200 calorias"`
    #[serde(rename = "dailyCalories")]
    pub daily_calories: String,
    /// Ordered meals
    pub meals: Vec<Meal>,
    /// Ordered nutrition tips
    pub tips: Vec<String>,
}

/// The full response body for one plan generation request.
///
/// Constructed once per request from the model's completion and owned by a
/// single HTTP response/render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// The workout plan
    pub workout: WorkoutPlan,
    /// The diet plan
    pub diet: DietPlan,
}

// ============================================================================
// Declared Persistence Records (no active read/write path)
// ============================================================================

/// User profile record shape for the hosted database service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile id
    pub id: Uuid,
    /// Declared age, if provided
    pub age: Option<i32>,
    /// Declared training level, if provided
    pub level: Option<TrainingLevel>,
    /// Declared fitness goal, if provided
    pub goal: Option<FitnessGoal>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Stored plan record shape for the hosted database service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Record id
    pub id: Uuid,
    /// Owning user id
    pub user_id: Uuid,
    /// Stored workout plan blob
    pub workout_plan: serde_json::Value,
    /// Stored diet plan blob
    pub diet_plan: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
