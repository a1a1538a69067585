//! # Day plans and notes
//!
//! The backend has served two incompatible shapes for a day plan over its lifetime:
//!
//! | Shape | Fields |
//! |-------|--------|
//! | Generic (current) | `topic` + `content { overview, tasks[], details, tips }` |
//! | Subjects (legacy) | `dsa { problem, difficulty, solution, explanation }`, `system_design { topic, notes, tradeoffs[] }`, `genai { question, answer, resources[] }` |
//!
//! The generic shape is the one the app renders. Every response is classified once,
//! while decoding, into a [`PlanSchema`]; legacy plans are migrated into a
//! [`PlanContent`] so nothing past this module ever looks at subject fields.
//!
//! `content` is free-form JSON generated by a model on the server. An object is read
//! field by field, so one oddly typed field never costs the others: text fields take a
//! string or a list of strings (joined by lines), `tasks` keeps the string items of a
//! list, and anything else leaves that field empty. A bare string becomes the details.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which wire shape a plan arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSchema {
    Generic,
    Subjects,
}

/// Body of a day's plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanContent {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Markdown.
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub tips: String,
}

impl PlanContent {
    pub fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.tasks.is_empty()
            && self.details.is_empty()
            && self.tips.is_empty()
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(details) => PlanContent {
                details,
                ..Default::default()
            },
            Value::Object(mut fields) => PlanContent {
                overview: text_field(fields.remove("overview")),
                tasks: list_field(fields.remove("tasks")),
                details: text_field(fields.remove("details")),
                tips: text_field(fields.remove("tips")),
            },
            _ => PlanContent::default(),
        }
    }
}

fn text_field(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn list_field(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireDayPlan")]
pub struct DayPlan {
    pub id: String,
    pub goal_id: String,
    pub day_number: u32,
    pub date: NaiveDate,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub schema: PlanSchema,
    pub topic: String,
    pub content: PlanContent,
}

/// A note attached to a day plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub day_plan_id: Option<String>,
    pub content: String,
    pub created_at: String,
}

/// Request body for `POST /plans/{id}/notes`.
#[derive(Debug, Serialize)]
pub(crate) struct NoteRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireDayPlan {
    id: String,
    #[serde(default)]
    goal_id: String,
    day_number: u32,
    #[serde(deserialize_with = "super::de_date")]
    date: NaiveDate,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completed_at: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    dsa: Option<DsaSection>,
    #[serde(default)]
    system_design: Option<SystemDesignSection>,
    #[serde(default)]
    genai: Option<GenAiSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DsaSection {
    problem: String,
    difficulty: String,
    solution: Option<String>,
    explanation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SystemDesignSection {
    topic: String,
    notes: Option<String>,
    tradeoffs: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenAiSection {
    question: String,
    answer: Option<String>,
    resources: Vec<String>,
}

impl WireDayPlan {
    fn schema(&self) -> PlanSchema {
        let has_subjects =
            self.dsa.is_some() || self.system_design.is_some() || self.genai.is_some();
        let has_generic = self.topic.is_some() || self.content.is_some();
        if has_subjects && !has_generic {
            PlanSchema::Subjects
        } else {
            PlanSchema::Generic
        }
    }
}

impl From<WireDayPlan> for DayPlan {
    fn from(wire: WireDayPlan) -> Self {
        let schema = wire.schema();
        let (topic, content) = match schema {
            PlanSchema::Generic => (
                wire.topic.unwrap_or_default(),
                wire.content.map(PlanContent::from_value).unwrap_or_default(),
            ),
            PlanSchema::Subjects => migrate_subjects(wire.dsa, wire.system_design, wire.genai),
        };
        DayPlan {
            id: wire.id,
            goal_id: wire.goal_id,
            day_number: wire.day_number,
            date: wire.date,
            completed: wire.completed,
            completed_at: wire.completed_at,
            schema,
            topic,
            content,
        }
    }
}

fn migrate_subjects(
    dsa: Option<DsaSection>,
    system_design: Option<SystemDesignSection>,
    genai: Option<GenAiSection>,
) -> (String, PlanContent) {
    let mut areas = Vec::new();
    let mut tasks = Vec::new();
    let mut details = String::new();

    if let Some(dsa) = dsa {
        areas.push("DSA");
        if dsa.difficulty.is_empty() {
            tasks.push(format!("Solve: {}", dsa.problem));
        } else {
            tasks.push(format!("Solve ({}): {}", dsa.difficulty, dsa.problem));
        }
        if let Some(solution) = dsa.solution.filter(|s| !s.is_empty()) {
            details.push_str(&format!("### Solution\n\n```\n{solution}\n```\n\n"));
        }
        if let Some(explanation) = dsa.explanation.filter(|s| !s.is_empty()) {
            details.push_str(&format!("{explanation}\n\n"));
        }
    }

    if let Some(sd) = system_design {
        areas.push("System Design");
        tasks.push(format!("Study: {}", sd.topic));
        if let Some(notes) = sd.notes.filter(|s| !s.is_empty()) {
            details.push_str(&format!("### System design notes\n\n{notes}\n\n"));
        }
        if !sd.tradeoffs.is_empty() {
            details.push_str("**Tradeoffs**\n\n");
            for t in &sd.tradeoffs {
                details.push_str(&format!("- {t}\n"));
            }
            details.push('\n');
        }
    }

    if let Some(genai) = genai {
        areas.push("GenAI");
        tasks.push(format!("Answer: {}", genai.question));
        if let Some(answer) = genai.answer.filter(|s| !s.is_empty()) {
            details.push_str(&format!("### GenAI answer\n\n{answer}\n\n"));
        }
        if !genai.resources.is_empty() {
            details.push_str("**Resources**\n\n");
            for r in &genai.resources {
                details.push_str(&format!("- {r}\n"));
            }
            details.push('\n');
        }
    }

    let topic = areas.join(" · ");
    let content = PlanContent {
        overview: format!("Practice across {}.", areas.join(", ")),
        tasks,
        details: details.trim_end().to_string(),
        tips: String::new(),
    };
    (topic, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_generic_plan() {
        let plan: DayPlan = serde_json::from_str(
            r#"{
                "id": "p-1", "goal_id": "g-1", "day_number": 3, "date": "2025-02-01",
                "topic": "Sliding window", "completed": false, "dynamic": true,
                "content": {"overview": "Windows!", "tasks": ["LC 3", "LC 76"],
                            "details": "Use **two pointers**.", "tips": "Draw it"}
            }"#,
        )
        .unwrap();
        assert_eq!(plan.schema, PlanSchema::Generic);
        assert_eq!(plan.topic, "Sliding window");
        assert_eq!(plan.content.tasks, vec!["LC 3", "LC 76"]);
        assert_eq!(plan.content.tips, "Draw it");
        assert_eq!(plan.date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }

    #[test]
    fn test_generic_plan_without_content_yet() {
        let plan: DayPlan = serde_json::from_str(
            r#"{"id": "p-1", "goal_id": "g-1", "day_number": 1, "date": "2025-02-01",
                "topic": "Daily progress for Prep", "content": null, "completed": true}"#,
        )
        .unwrap();
        assert_eq!(plan.schema, PlanSchema::Generic);
        assert!(plan.completed);
        assert!(plan.content.is_empty());
    }

    #[test]
    fn test_string_content_becomes_details() {
        let plan: DayPlan = serde_json::from_str(
            r#"{"id": "p-1", "day_number": 1, "date": "2025-02-01",
                "topic": "x", "content": "just text"}"#,
        )
        .unwrap();
        assert_eq!(plan.content.details, "just text");
        assert_eq!(plan.goal_id, "");
    }

    #[test]
    fn test_mistyped_content_field_keeps_the_rest() {
        let plan: DayPlan = serde_json::from_str(
            r#"{"id": "p-1", "day_number": 1, "date": "2025-02-01", "topic": "Legs",
                "content": {"overview": "Leg day", "tasks": ["Squats", 5, null],
                            "details": "Do **5x5**", "tips": ["Hydrate", "Sleep"]}}"#,
        )
        .unwrap();
        assert_eq!(plan.content.overview, "Leg day");
        assert_eq!(plan.content.tasks, vec!["Squats"]);
        assert_eq!(plan.content.details, "Do **5x5**");
        assert_eq!(plan.content.tips, "Hydrate\nSleep");
    }

    #[test]
    fn test_unexpected_field_types_are_left_empty() {
        let plan: DayPlan = serde_json::from_str(
            r#"{"id": "p-1", "day_number": 1, "date": "2025-02-01", "topic": "x",
                "content": {"overview": 3, "tasks": "Run 5k", "details": {"a": 1}}}"#,
        )
        .unwrap();
        assert_eq!(plan.content.overview, "");
        assert_eq!(plan.content.tasks, vec!["Run 5k"]);
        assert_eq!(plan.content.details, "");
        assert_eq!(plan.content.tips, "");
    }

    #[test]
    fn test_legacy_plan_is_migrated() {
        let plan: DayPlan = serde_json::from_str(
            r#"{
                "id": "p-9", "goal_id": "g-1", "day_number": 1,
                "date": "2025-02-01T00:00:00", "completed": false,
                "dsa": {"problem": "Two Sum", "difficulty": "Easy",
                        "solution": "def two_sum(): ...", "explanation": "Hash map."},
                "system_design": {"topic": "URL shortener", "tradeoffs": ["SQL vs NoSQL"]},
                "genai": {"question": "What is RAG?", "resources": ["paper"]}
            }"#,
        )
        .unwrap();
        assert_eq!(plan.schema, PlanSchema::Subjects);
        assert_eq!(plan.topic, "DSA · System Design · GenAI");
        assert_eq!(
            plan.content.tasks,
            vec![
                "Solve (Easy): Two Sum",
                "Study: URL shortener",
                "Answer: What is RAG?"
            ]
        );
        assert!(plan.content.details.contains("def two_sum(): ..."));
        assert!(plan.content.details.contains("- SQL vs NoSQL"));
        assert!(plan.content.details.contains("- paper"));
    }

    #[test]
    fn test_partial_legacy_plan() {
        let plan: DayPlan = serde_json::from_str(
            r#"{"id": "p-9", "day_number": 2, "date": "2025-02-02",
                "dsa": null, "system_design": null,
                "genai": {"question": "Attention?"}}"#,
        )
        .unwrap();
        assert_eq!(plan.schema, PlanSchema::Subjects);
        assert_eq!(plan.topic, "GenAI");
        assert_eq!(plan.content.tasks, vec!["Answer: Attention?"]);
    }

    #[test]
    fn test_decode_note() {
        let note: Note = serde_json::from_str(
            r#"{"id": "n-1", "day_plan_id": "p-1", "content": "Remember edge cases",
                "created_at": "2025-02-01T10:00:00", "updated_at": null}"#,
        )
        .unwrap();
        assert_eq!(note.content, "Remember edge cases");
    }
}
