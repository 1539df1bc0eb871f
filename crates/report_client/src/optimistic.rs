//! Optimistic local changes with a compensating action.
//!
//! Apply a pure transition to local state, send the remote request and
//! either keep the new state or restore the snapshot.

/// Snapshot of the state before an optimistic change.
///
/// Consume it with [Compensation::commit] when the remote effect succeeded
/// or with [Compensation::compensate] when it failed.
#[derive(Debug)]
#[must_use]
pub struct Compensation<S> {
    snapshot: S,
}

impl<S> Compensation<S> {
    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn commit(self) {}

    /// Restore the snapshot.
    pub fn compensate(self, state: &mut S) {
        *state = self.snapshot;
    }
}

/// Replace `state` with `transition(state)` and return the previous state
/// as a [Compensation].
pub fn apply<S: Clone>(state: &mut S, transition: impl FnOnce(&S) -> S) -> Compensation<S> {
    let next = transition(state);
    let snapshot = std::mem::replace(state, next);
    Compensation { snapshot }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_returns_previous_state() {
        let mut state = vec![1, 2];
        let compensation = apply(&mut state, |s| {
            let mut s = s.clone();
            s.push(3);
            s
        });
        assert_eq!(state, vec![1, 2, 3]);
        assert_eq!(compensation.snapshot(), &vec![1, 2]);
        compensation.compensate(&mut state);
        assert_eq!(state, vec![1, 2]);
    }

    #[test]
    fn commit_keeps_new_state() {
        let mut state = 1;
        let compensation = apply(&mut state, |s| s + 1);
        compensation.commit();
        assert_eq!(state, 2);
    }
}
