//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block
///
/// The block is moved into the future, so clone any `Arc` dependencies out
/// of the environment before invoking the macro.
///
/// # Example
///
/// ```rust,ignore
/// use classroom_core::async_effect;
///
/// let console = Arc::clone(&env.console);
/// async_effect! {
///     match console.say("Sold out!").await {
///         Ok(()) => None,
///         Err(error) => Some(SaleAction::AnnouncementFailed { error: error.to_string() }),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::Effect;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum TestAction {
        AsyncResult { value: i32 },
    }

    #[test]
    fn test_async_effect_macro() {
        let effect = async_effect! {
            Some(TestAction::AsyncResult { value: 42 })
        };

        assert!(matches!(effect, Effect::Future(_)));
    }

    #[tokio::test]
    async fn test_async_effect_output_is_fed_back() {
        let captured = 7;
        let effect = async_effect! {
            Some(TestAction::AsyncResult { value: captured * 6 })
        };

        let Effect::Future(future) = effect else {
            unreachable!("async_effect! always builds Effect::Future");
        };
        assert_eq!(future.await, Some(TestAction::AsyncResult { value: 42 }));
    }
}
