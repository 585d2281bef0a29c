//! Async task lifecycle tracking.
//!
//! Each cancellable background operation (submission exchange, scheduled
//! redirect) gets a `TaskId`. Completions for ids that are no longer active
//! are dropped by the reducer, so a torn-down form never sees a stale update.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Signup,
    Redirect,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Login, TaskKind::Signup, TaskKind::Redirect];
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

/// Task lifecycle state (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    /// Clears the task if `id` is the active one. Returns false for stale ids.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub signup: TaskState,
    pub redirect: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Signup => &mut self.signup,
            TaskKind::Redirect => &mut self.redirect,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login.is_running() || self.signup.is_running() || self.redirect.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: stale ids don't clear the active task.
    #[test]
    fn test_finish_if_active_rejects_stale_ids() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();

        let mut state = TaskState::default();
        state.on_started(&TaskStarted {
            id: second,
            cancel: None,
        });

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }
}
