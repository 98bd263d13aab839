// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Execution context tracking.
//
// Every bridge operation takes the caller's `ExecutionContext` explicitly.
// The worklet runtime marks its threads with a `WorkletScope`, and callers
// that don't carry a token around read it back with
// `ExecutionContext::current()`. The value is per thread.

use std::cell::Cell;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Runtime a call is executing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionContext {
    /// The main control-flow runtime (where declarative rendering happens).
    #[default]
    Main,
    /// The high-priority runtime next to the rendering pipeline.
    Worklet,
}

thread_local! {
    static CURRENT: Cell<ExecutionContext> = const { Cell::new(ExecutionContext::Main) };
}

impl ExecutionContext {
    /// Context of the calling thread.
    pub fn current() -> Self {
        CURRENT.with(Cell::get)
    }

    pub fn is_worklet(&self) -> bool {
        matches!(self, Self::Worklet)
    }
}

/// Marks the current thread as running worklet code until dropped.
///
/// Scopes nest; dropping one restores whatever context was active when it
/// was entered. The guard is `!Send` so it is always dropped on the thread
/// it marked.
#[derive(Debug)]
#[must_use = "the worklet context ends when the scope is dropped"]
pub struct WorkletScope {
    previous: ExecutionContext,
    _not_send: PhantomData<*const ()>,
}

impl WorkletScope {
    pub fn enter() -> Self {
        let previous = CURRENT.with(|c| c.replace(ExecutionContext::Worklet));
        Self {
            previous,
            _not_send: PhantomData,
        }
    }
}

impl Drop for WorkletScope {
    fn drop(&mut self) {
        CURRENT.with(|c| c.set(self.previous));
    }
}

/// Run `f` with the current thread marked as a worklet thread.
pub fn run_on_worklet<R>(f: impl FnOnce(ExecutionContext) -> R) -> R {
    let _scope = WorkletScope::enter();
    f(ExecutionContext::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_main() {
        assert_eq!(ExecutionContext::current(), ExecutionContext::Main);
    }

    #[test]
    fn scope_sets_and_restores() {
        {
            let _outer = WorkletScope::enter();
            assert!(ExecutionContext::current().is_worklet());
            {
                let _inner = WorkletScope::enter();
                assert!(ExecutionContext::current().is_worklet());
            }
            // Inner scope restores the outer worklet context, not Main.
            assert!(ExecutionContext::current().is_worklet());
        }
        assert_eq!(ExecutionContext::current(), ExecutionContext::Main);
    }

    #[test]
    fn context_is_per_thread() {
        let _scope = WorkletScope::enter();
        let other = std::thread::spawn(ExecutionContext::current)
            .join()
            .unwrap();
        assert_eq!(other, ExecutionContext::Main);
        assert!(ExecutionContext::current().is_worklet());
    }

    #[test]
    fn run_on_worklet_passes_token() {
        let seen = run_on_worklet(|ctx| ctx);
        assert_eq!(seen, ExecutionContext::Worklet);
        assert_eq!(ExecutionContext::current(), ExecutionContext::Main);
    }
}
