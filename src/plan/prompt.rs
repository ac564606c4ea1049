// ABOUTME: Prompt construction for personalized workout and diet plan generation
// ABOUTME: Combines user inputs with the fixed coaching rules document and target JSON schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plano Fitness

//! Plan prompt construction.
//!
//! `build_plan_prompt` is a pure function of `(age, level, goal)`: the inputs
//! are interpolated verbatim into the user block, and the full rules document
//! (per-level, per-goal, and age-adaptation guidance) plus the exact target
//! JSON schema are always included. No enumeration validation happens here:
//! an unknown level or goal flows through as literal text.

/// Fixed system instruction sent with every plan generation request
const SYSTEM_PROMPT: &str =
    "Você é um especialista em fitness e nutrição. Sempre retorne JSON válido e completo.";

/// Exact JSON structure the model must return
const PLAN_JSON_SCHEMA: &str = r#"{
  "workout": {
    "title": "Nome do Plano de Treino",
    "description": "Descrição curta do plano (1 frase)",
    "exercises": [
      {
        "name": "Nome do Exercício",
        "sets": "3-4",
        "reps": "10-12",
        "rest": "60s",
        "execution": "Explicação DETALHADA de como fazer o exercício, incluindo posição inicial, movimento e dicas de segurança"
      }
    ],
    "metrics": {
      "frequency": "3-4x por semana",
      "duration": "45-60 min",
      "progression": "Aumente 2-5kg a cada 2 semanas"
    },
    "tips": [
      "Dica prática 1",
      "Dica prática 2",
      "Dica prática 3"
    ]
  },
  "diet": {
    "title": "Plano Alimentar",
    "description": "Descrição do plano alimentar (1 frase)",
    "dailyCalories": "2000-2200 calorias",
    "meals": [
      {
        "name": "Café da Manhã",
        "time": "7h-8h",
        "foods": [
          "Alimento 1 com quantidade",
          "Alimento 2 com quantidade"
        ]
      }
    ],
    "tips": [
      "Dica de alimentação 1",
      "Dica de alimentação 2"
    ]
  }
}"#;

/// Coaching rules per training level
const LEVEL_RULES: &str = "REGRAS ESPECÍFICAS POR NÍVEL:

INICIANTE:
- 6-8 exercícios básicos (agachamento, flexão, prancha, etc)
- 2-3 séries de 10-15 repetições
- Foco em aprender movimento correto
- Treino 3x por semana
- Descanso de 60-90s

INTERMEDIÁRIO:
- 8-10 exercícios variados
- 3-4 séries de 8-12 repetições
- Pode incluir pesos moderados
- Treino 4x por semana
- Descanso de 45-60s

AVANÇADO:
- 10-12 exercícios complexos
- 4-5 séries de 6-10 repetições
- Técnicas avançadas (drop sets, super sets)
- Treino 5-6x por semana
- Descanso de 30-45s";

/// Coaching rules per fitness goal
const GOAL_RULES: &str = "REGRAS POR OBJETIVO:

GANHAR MASSA:
- Foco em exercícios compostos (agachamento, supino, levantamento terra)
- Maior volume de treino
- Dieta hipercalórica (+300-500 calorias)
- Proteína: 1.8-2.2g por kg de peso
- 5-6 refeições por dia

PERDER GORDURA:
- Combinar musculação com cardio
- Circuitos e treinos metabólicos
- Dieta hipocalórica (-300-500 calorias)
- Proteína: 1.6-2g por kg de peso
- Evitar carboidratos simples

CONDICIONAMENTO:
- Foco em exercícios funcionais
- HIIT e treinos intervalados
- Cardio 3-4x por semana
- Dieta balanceada (manutenção)
- Hidratação reforçada

TONIFICAR:
- Mix de musculação e cardio
- Repetições moderadas (12-15)
- Treino de corpo inteiro
- Dieta levemente hipocalórica
- Proteína moderada (1.5-1.8g/kg)";

/// Age-based adaptation guidance
const AGE_RULES: &str = "ADAPTAÇÕES POR IDADE:

15-25 anos: Recuperação rápida, pode treinar mais intenso
26-40 anos: Equilíbrio entre intensidade e recuperação
41-55 anos: Foco em mobilidade e prevenção de lesões
56+ anos: Priorizar segurança, exercícios de baixo impacto";

/// The fixed system instruction for plan generation
#[must_use]
pub const fn plano_system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Build the plan generation instruction for the given user inputs.
///
/// Pure string construction: no side effects and no error conditions. The
/// age, level, and goal values are carried into the prompt exactly as
/// received.
#[must_use]
pub fn build_plan_prompt(age: &str, level: &str, goal: &str) -> String {
    format!(
        "Você é um personal trainer e nutricionista especializado. Crie um plano COMPLETO e DETALHADO de treino e dieta personalizado.

INFORMAÇÕES DO USUÁRIO:
- Idade: {age} anos
- Nível: {level}
- Objetivo: {goal}

INSTRUÇÕES CRÍTICAS:
1. Seja EXTREMAMENTE específico e detalhado
2. Use linguagem simples e direta, sem termos técnicos
3. Priorize SEGURANÇA acima de tudo
4. Progressão deve ser GRADUAL e sustentável
5. Explique COMO FAZER cada exercício de forma clara

RETORNE UM JSON com esta estrutura EXATA:

{PLAN_JSON_SCHEMA}

{LEVEL_RULES}

{GOAL_RULES}

{AGE_RULES}

Crie um plano COMPLETO, PRÁTICO e SEGURO. Seja específico nas quantidades e horários."
    )
}
