//! Per-session state: the counter and the chat echo history.
//!
//! One running process is one session. The model is owned by the main loop
//! and handed to the rendering layer as an immutable [`SessionSnapshot`];
//! every mutation goes through exactly one method call dispatched from an
//! [`Action`](crate::app::action::Action).

pub mod name;

use chrono::Local;

/// Greeting seeded as the first turn of every session.
pub const GREETING: &str = "Hi! Ask me something (I just echo).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "echo",
        }
    }
}

/// One entry in the chat history. Content is never mutated after append.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

pub struct SessionModel {
    counter: u64,
    turns: Vec<Turn>,
    timestamp_format: String,
}

/// Immutable view of the session handed to the rendering layer.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub counter: u64,
    pub turns: &'a [Turn],
}

impl SessionModel {
    pub fn new(timestamp_format: &str) -> Self {
        let mut model = Self {
            counter: 0,
            turns: Vec::new(),
            timestamp_format: timestamp_format.to_string(),
        };
        model.append(Role::Assistant, GREETING.to_string());
        model
    }

    /// Bump the counter by one and return the new value.
    pub fn increment(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Append a user turn and its echo reply.
    ///
    /// Blank input is ignored. Both turns are appended in the same call so
    /// the history never holds a user turn without its reply. Returns the
    /// two appended turns, newest last.
    pub fn submit_message(&mut self, text: &str) -> Option<&[Turn]> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.append(Role::User, text.to_string());
        self.append(Role::Assistant, format!("You said: {}", text));
        Some(&self.turns[self.turns.len() - 2..])
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            counter: self.counter,
            turns: &self.turns,
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    fn append(&mut self, role: Role, content: String) {
        self.turns.push(Turn {
            role,
            content,
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> SessionModel {
        SessionModel::new("%H:%M")
    }

    #[test]
    fn starts_with_greeting_and_zero_counter() {
        let model = fresh();
        assert_eq!(model.counter(), 0);
        assert_eq!(model.turn_count(), 1);
        let snap = model.snapshot();
        assert_eq!(snap.turns[0].role, Role::Assistant);
        assert_eq!(snap.turns[0].content, GREETING);
    }

    #[test]
    fn counter_counts_increments() {
        let mut model = fresh();
        for expected in 1..=5 {
            assert_eq!(model.increment(), expected);
        }
        assert_eq!(model.counter(), 5);
    }

    #[test]
    fn submit_appends_user_then_echo() {
        let mut model = fresh();
        let appended = model.submit_message("hello").unwrap();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].role, Role::User);
        assert_eq!(appended[0].content, "hello");
        assert_eq!(appended[1].role, Role::Assistant);
        assert_eq!(appended[1].content, "You said: hello");
        assert_eq!(model.turn_count(), 3);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut model = fresh();
        assert!(model.submit_message("").is_none());
        assert!(model.submit_message("   ").is_none());
        assert_eq!(model.turn_count(), 1);
    }

    #[test]
    fn history_is_append_only() {
        let mut model = fresh();
        model.submit_message("one");
        let before: Vec<String> = model
            .snapshot()
            .turns
            .iter()
            .map(|t| t.content.clone())
            .collect();
        model.increment();
        model.submit_message("two");
        let after = model.snapshot();
        assert!(after.turns.len() > before.len());
        for (i, content) in before.iter().enumerate() {
            assert_eq!(&after.turns[i].content, content);
        }
    }

    #[test]
    fn turns_alternate_after_seed() {
        let mut model = fresh();
        model.submit_message("a");
        model.submit_message("b");
        let turns = model.snapshot().turns;
        for pair in turns[1..].chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    #[test]
    fn scenario_from_fresh_session() {
        let mut model = fresh();
        assert_eq!(model.snapshot().counter, 0);
        model.increment();
        model.increment();
        assert_eq!(model.snapshot().counter, 2);
        model.submit_message("test");
        let snap = model.snapshot();
        assert_eq!(snap.turns.len(), 3);
        let last = snap.turns.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "You said: test");
    }
}
