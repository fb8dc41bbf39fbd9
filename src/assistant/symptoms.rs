//! Symptom checker
//!
//! Users list symptoms; after the configured latency two or three distinct
//! conditions are drawn from a fixed catalogue. The draw ignores the
//! symptoms entirely. Removing the last symptom, or resetting the checker,
//! clears the conditions and drops any draw still in flight.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use super::error::{AssistantError, AssistantResult};
use super::random::{RandomSource, StdRandom};
use crate::events::{self, DemoEvent};
use crate::latency::SharedLatency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub id: &'static str,
    pub name: &'static str,
    pub likelihood: Likelihood,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Everything the checker can "find"
pub const CONDITIONS: [Condition; 4] = [
    Condition {
        id: "1",
        name: "Common Cold",
        likelihood: Likelihood::Medium,
        description: "Viral infection of the nose and throat.",
        recommendations: &["Rest", "Stay hydrated", "Over-the-counter cold medicine"],
    },
    Condition {
        id: "2",
        name: "Influenza (Flu)",
        likelihood: Likelihood::High,
        description: "Viral infection that attacks the respiratory system.",
        recommendations: &[
            "Rest",
            "Antiviral medication if caught early",
            "Stay hydrated",
        ],
    },
    Condition {
        id: "3",
        name: "Migraine",
        likelihood: Likelihood::Medium,
        description: "Recurrent headache that can cause severe throbbing pain.",
        recommendations: &[
            "Rest in a quiet, dark room",
            "Over-the-counter pain relievers",
            "Stay hydrated",
        ],
    },
    Condition {
        id: "4",
        name: "Anxiety",
        likelihood: Likelihood::Low,
        description: "Feelings of worry, anxiety, or fear that are strong enough to interfere with daily activities.",
        recommendations: &[
            "Practice deep breathing",
            "Exercise regularly",
            "Consider speaking with a professional",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: String,
    pub duration: String,
}

impl Symptom {
    fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            severity: "moderate".to_string(),
            duration: "1-3 days".to_string(),
        }
    }
}

/// Result of adding a symptom
#[derive(Debug, Clone, Serialize)]
pub struct SymptomUpdate {
    pub symptom: Symptom,
    pub conditions: Vec<Condition>,
}

struct Checker {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
    /// Bumped whenever the symptom list empties or the checker is reset; a
    /// draw started under an older generation is dropped.
    generation: u64,
    random: Box<dyn RandomSource>,
}

pub struct SymptomChecker {
    checker: Arc<Mutex<Checker>>,
    latency: SharedLatency,
    events: broadcast::Sender<DemoEvent>,
}

impl SymptomChecker {
    pub fn new(latency: SharedLatency) -> Self {
        Self::with_random(latency, Box::new(StdRandom::new()))
    }

    pub fn with_random(latency: SharedLatency, random: Box<dyn RandomSource>) -> Self {
        Self {
            checker: Arc::new(Mutex::new(Checker {
                symptoms: Vec::new(),
                conditions: Vec::new(),
                generation: 0,
                random,
            })),
            latency,
            events: events::channel(),
        }
    }

    /// Add a symptom, then wait and redraw the possible conditions
    pub async fn add_symptom(&self, name: &str) -> AssistantResult<SymptomUpdate> {
        if name.trim().is_empty() {
            return Err(AssistantError::EmptySymptom);
        }

        let (symptom, generation) = {
            let mut checker = self.checker.lock().await;
            let symptom = Symptom::new(name);
            checker.symptoms.push(symptom.clone());
            (symptom, checker.generation)
        };
        tracing::debug!(symptom = %symptom.name, "Symptom added");

        self.latency.wait().await;

        let conditions = {
            let mut checker = self.checker.lock().await;
            if checker.generation == generation {
                let drawn = draw_conditions(checker.random.as_mut());
                checker.conditions = drawn;
            }
            checker.conditions.clone()
        };

        events::publish(
            &self.events,
            DemoEvent::ConditionsChanged {
                conditions: conditions.clone(),
            },
        );
        Ok(SymptomUpdate {
            symptom,
            conditions,
        })
    }

    /// Remove a symptom by id
    pub async fn remove_symptom(&self, id: &str) -> AssistantResult<()> {
        let cleared = {
            let mut checker = self.checker.lock().await;
            let position = checker
                .symptoms
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| AssistantError::SymptomNotFound(id.to_string()))?;
            checker.symptoms.remove(position);

            if checker.symptoms.is_empty() {
                checker.conditions.clear();
                checker.generation += 1;
                true
            } else {
                false
            }
        };

        if cleared {
            events::publish(
                &self.events,
                DemoEvent::ConditionsChanged {
                    conditions: Vec::new(),
                },
            );
        }
        Ok(())
    }

    /// Start over with no symptoms and no conditions
    pub async fn reset(&self) {
        {
            let mut checker = self.checker.lock().await;
            checker.symptoms.clear();
            checker.conditions.clear();
            checker.generation += 1;
        }
        tracing::debug!("Symptom checker reset");

        events::publish(
            &self.events,
            DemoEvent::ConditionsChanged {
                conditions: Vec::new(),
            },
        );
    }

    pub async fn symptoms(&self) -> Vec<Symptom> {
        self.checker.lock().await.symptoms.clone()
    }

    pub async fn conditions(&self) -> Vec<Condition> {
        self.checker.lock().await.conditions.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DemoEvent> {
        self.events.subscribe()
    }
}

/// Two or three distinct conditions, via a partial Fisher-Yates shuffle
fn draw_conditions(random: &mut dyn RandomSource) -> Vec<Condition> {
    let count = (2 + random.next_index(2)).min(CONDITIONS.len());
    let mut indices: Vec<usize> = (0..CONDITIONS.len()).collect();
    for i in 0..count {
        let j = i + random.next_index(indices.len() - i);
        indices.swap(i, j);
    }
    indices[..count]
        .iter()
        .map(|&i| CONDITIONS[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::{Immediate, Latency};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use tokio::sync::Notify;

    /// Replays a fixed sequence of indices, clamped to the requested range
    struct Sequence(Vec<usize>);

    impl RandomSource for Sequence {
        fn next_index(&mut self, len: usize) -> usize {
            let next = if self.0.is_empty() { 0 } else { self.0.remove(0) };
            next.min(len - 1)
        }
    }

    /// Holds every wait until the test releases it
    struct Held(Arc<Notify>);

    #[async_trait]
    impl Latency for Held {
        async fn wait(&self) {
            self.0.notified().await;
        }
    }

    #[test]
    fn test_draw_is_distinct() {
        let mut random = StdRandom::seeded(42);
        for _ in 0..100 {
            let drawn = draw_conditions(&mut random);
            assert!(drawn.len() == 2 || drawn.len() == 3);
            let ids: HashSet<_> = drawn.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), drawn.len());
        }
    }

    #[test]
    fn test_draw_with_sequence() {
        // count = 3; swaps (0,3), (1,1), (2,3)
        let mut random = Sequence(vec![1, 3, 0, 1]);
        let drawn = draw_conditions(&mut random);
        let names: Vec<_> = drawn.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Anxiety", "Influenza (Flu)", "Common Cold"]);
    }

    #[tokio::test]
    async fn test_add_symptom_draws_conditions() {
        let checker = SymptomChecker::new(Arc::new(Immediate));
        let update = checker.add_symptom("  headache ").await.unwrap();

        assert_eq!(update.symptom.name, "headache");
        assert!(update.conditions.len() >= 2);
        assert_eq!(checker.symptoms().await.len(), 1);
        assert_eq!(checker.conditions().await, update.conditions);
    }

    #[tokio::test]
    async fn test_empty_symptom_rejected() {
        let checker = SymptomChecker::new(Arc::new(Immediate));
        assert_eq!(
            checker.add_symptom("  ").await.unwrap_err(),
            AssistantError::EmptySymptom
        );
        assert!(checker.symptoms().await.is_empty());
    }

    #[tokio::test]
    async fn test_removing_last_symptom_clears_conditions() {
        let checker = SymptomChecker::new(Arc::new(Immediate));
        let first = checker.add_symptom("cough").await.unwrap().symptom;
        let second = checker.add_symptom("fever").await.unwrap().symptom;

        checker.remove_symptom(&first.id).await.unwrap();
        assert!(!checker.conditions().await.is_empty());

        checker.remove_symptom(&second.id).await.unwrap();
        assert!(checker.conditions().await.is_empty());
        assert!(checker.symptoms().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_symptom() {
        let checker = SymptomChecker::new(Arc::new(Immediate));
        assert_eq!(
            checker.remove_symptom("missing").await.unwrap_err(),
            AssistantError::SymptomNotFound("missing".to_string())
        );
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let checker = SymptomChecker::new(Arc::new(Immediate));
        checker.add_symptom("cough").await.unwrap();
        checker.add_symptom("fever").await.unwrap();
        let mut rx = checker.subscribe();

        checker.reset().await;

        assert!(checker.symptoms().await.is_empty());
        assert!(checker.conditions().await.is_empty());
        assert_eq!(checker.checker.lock().await.generation, 1);
        match rx.recv().await.unwrap() {
            DemoEvent::ConditionsChanged { conditions } => assert!(conditions.is_empty()),
            other => panic!("Expected ConditionsChanged, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reset_drops_pending_draw() {
        let release = Arc::new(Notify::new());
        let checker = Arc::new(SymptomChecker::new(Arc::new(Held(Arc::clone(&release)))));

        let task = {
            let checker = Arc::clone(&checker);
            tokio::spawn(async move { checker.add_symptom("headache").await })
        };
        while checker.symptoms().await.is_empty() {
            tokio::task::yield_now().await;
        }

        checker.reset().await;
        release.notify_one();

        let update = task.await.unwrap().unwrap();
        assert!(update.conditions.is_empty());
        assert!(checker.conditions().await.is_empty());
        assert!(checker.symptoms().await.is_empty());
    }
}
