use chrono::{DateTime, Duration, SubsecRound, Utc};

use super::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Both backends keep microseconds, so timestamps survive a round trip unchanged.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn apply_if_changed<T: PartialEq + Clone>(field: &mut T, new: &Option<T>) {
    if let Some(value) = new {
        if *field != *value {
            *field = value.clone();
        }
    }
}

impl Todo {
    pub(crate) fn apply(&mut self, patch: &UpdateTodo, at: DateTime<Utc>) {
        apply_if_changed(&mut self.title, &patch.title);
        apply_if_changed(&mut self.description, &patch.description);
        apply_if_changed(&mut self.completed, &patch.completed);
        self.touch(at);
    }

    /// `updated_at` must move forward on every mutation, even within one clock tick.
    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = if at > self.updated_at {
            at
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
