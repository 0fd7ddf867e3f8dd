//! # Classroom Runtime
//!
//! Runtime implementation for the classroom exercises.
//!
//! This crate provides the [`Store`] that coordinates reducer execution and
//! effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, executes the returned effects
//! - **Feedback loop**: Actions produced by `Effect::Future` are sent back
//!   through the reducer before `send` returns
//!
//! Exercises are interactive and strictly ordered (a purchase must be
//! announced before the next buyer is prompted), so `send` executes every
//! effect to completion instead of spawning it in the background.
//!
//! ## Example
//!
//! ```ignore
//! use classroom_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action; its effects have run when this returns
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use classroom_core::{effect::Effect, reducer::Reducer};
use futures::future::{BoxFuture, try_join_all};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept producing actions past the feedback limit
        ///
        /// Usually a reducer that answers its own fact action with an effect
        /// producing that same fact again.
        #[error("Effect feedback exceeded {0} nested actions")]
        FeedbackLimitExceeded(usize),
    }
}

pub use error::StoreError;

/// Maximum chain of effect-produced actions handled for one `send`
pub const MAX_FEEDBACK_DEPTH: usize = 32;

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, BoxFuture, Effect, MAX_FEEDBACK_DEPTH, Reducer, RwLock, StoreError, record_effect,
        try_join_all,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// Cloning a store is cheap and yields a handle to the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state write lock, releases the lock, then
        /// executes the returned effects in order. Actions produced by
        /// `Effect::Future` are reduced recursively. When this returns, every
        /// effect caused by `action` has completed.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects keep
        /// producing actions beyond [`MAX_FEEDBACK_DEPTH`].
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            self.dispatch(action, 0).await
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let remaining = store.state(|s| s.remaining_tickets).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        fn dispatch(&self, action: A, depth: usize) -> BoxFuture<'_, Result<(), StoreError>> {
            Box::pin(async move {
                if depth > MAX_FEEDBACK_DEPTH {
                    tracing::error!(depth, "Effect feedback limit exceeded");
                    return Err(StoreError::FeedbackLimitExceeded(MAX_FEEDBACK_DEPTH));
                }

                tracing::debug!(depth, "Processing action");
                metrics::counter!("store.actions.total").increment(1);

                let effects = {
                    let mut state = self.state.write().await;
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();
                    self.reducer.reduce(&mut *state, action, &self.environment)
                };

                tracing::trace!("Executing {} effects", effects.len());
                for effect in effects {
                    self.execute(effect, depth).await?;
                }
                Ok(())
            })
        }

        fn execute(&self, effect: Effect<A>, depth: usize) -> BoxFuture<'_, Result<(), StoreError>> {
            Box::pin(async move {
                match effect {
                    Effect::None => {
                        record_effect("none");
                    },
                    Effect::Future(future) => {
                        record_effect("future");
                        if let Some(action) = future.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            self.dispatch(action, depth + 1).await?;
                        }
                    },
                    Effect::Parallel(effects) => {
                        record_effect("parallel");
                        try_join_all(effects.into_iter().map(|effect| self.execute(effect, depth)))
                            .await?;
                    },
                    Effect::Sequential(effects) => {
                        record_effect("sequential");
                        for effect in effects {
                            self.execute(effect, depth).await?;
                        }
                    },
                }
                Ok(())
            })
        }
    }
}

pub use store::Store;

fn record_effect(kind: &'static str) {
    metrics::counter!("store.effects.executed", "type" => kind).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_core::{SmallVec, async_effect, smallvec};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct LogState {
        entries: Vec<String>,
    }

    #[derive(Debug)]
    enum LogAction {
        Write(String),
        WriteTwiceInOrder(String, String),
        WriteBoth(String, String),
        WriteAlongsideRunaway(String),
        Echo(String),
        Forever,
    }

    #[derive(Debug, Default)]
    struct LogEnv {
        side_channel: Mutex<Vec<String>>,
    }

    struct LogReducer;

    impl Reducer for LogReducer {
        type State = LogState;
        type Action = LogAction;
        type Environment = LogEnv;

        fn reduce(
            &self,
            state: &mut LogState,
            action: LogAction,
            env: &LogEnv,
        ) -> SmallVec<[Effect<LogAction>; 4]> {
            match action {
                LogAction::Write(entry) => {
                    if let Ok(mut side) = env.side_channel.lock() {
                        side.push(entry.clone());
                    }
                    state.entries.push(entry);
                    smallvec![Effect::None]
                },
                LogAction::WriteTwiceInOrder(first, second) => smallvec![Effect::chain(vec![
                    async_effect! { Some(LogAction::Write(first)) },
                    async_effect! { Some(LogAction::Write(second)) },
                ])],
                LogAction::WriteBoth(left, right) => smallvec![Effect::merge(vec![
                    async_effect! { Some(LogAction::Write(left)) },
                    Effect::None,
                    async_effect! { Some(LogAction::Write(right)) },
                ])],
                LogAction::WriteAlongsideRunaway(entry) => smallvec![Effect::merge(vec![
                    async_effect! { Some(LogAction::Write(entry)) },
                    async_effect! { Some(LogAction::Forever) },
                ])],
                LogAction::Echo(entry) => {
                    smallvec![async_effect! { Some(LogAction::Write(format!("echo:{entry}"))) }]
                },
                LogAction::Forever => smallvec![async_effect! { Some(LogAction::Forever) }],
            }
        }
    }

    fn store() -> Store<LogState, LogAction, LogEnv, LogReducer> {
        Store::new(LogState::default(), LogReducer, LogEnv::default())
    }

    #[tokio::test]
    async fn test_send_updates_state() {
        let store = store();
        store.send(LogAction::Write("a".into())).await.ok();
        let entries = store.state(|s| s.entries.clone()).await;
        assert_eq!(entries, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_future_feedback_completes_before_send_returns() {
        let store = store();
        let result = store.send(LogAction::Echo("hi".into())).await;
        assert!(result.is_ok());
        let entries = store.state(|s| s.entries.clone()).await;
        assert_eq!(entries, vec!["echo:hi".to_string()]);
    }

    #[tokio::test]
    async fn test_sequential_effects_keep_order() {
        let store = store();
        store
            .send(LogAction::WriteTwiceInOrder("first".into(), "second".into()))
            .await
            .ok();
        let entries = store.state(|s| s.entries.clone()).await;
        assert_eq!(entries, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn test_parallel_effects_all_complete() {
        let store = store();
        let result = store
            .send(LogAction::WriteBoth("left".into(), "right".into()))
            .await;
        assert!(result.is_ok());

        let mut entries = store.state(|s| s.entries.clone()).await;
        entries.sort();
        assert_eq!(entries, vec!["left".to_string(), "right".to_string()]);
    }

    #[tokio::test]
    async fn test_parallel_branch_failure_is_reported() {
        let store = store();
        let result = store
            .send(LogAction::WriteAlongsideRunaway("kept".into()))
            .await;
        assert_eq!(result, Err(StoreError::FeedbackLimitExceeded(MAX_FEEDBACK_DEPTH)));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other.send(LogAction::Write("shared".into())).await.ok();
        assert_eq!(store.state(|s| s.entries.len()).await, 1);
    }

    #[test]
    fn test_runaway_feedback_is_stopped() {
        let store = store();
        let result = tokio_test::block_on(store.send(LogAction::Forever));
        assert_eq!(result, Err(StoreError::FeedbackLimitExceeded(MAX_FEEDBACK_DEPTH)));
    }
}
