use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::Future;
use futures::FutureExt;

use crate::error::AppError;

fn panic_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic payload")
    }
}

fn app_error_from_panic(payload: Box<dyn Any + Send>) -> AppError {
    AppError::new("RUNTIME/PANIC", panic_payload(payload.as_ref()))
}

/// Run a closure, converting a panic into a structured error instead of
/// letting it unwind across the command boundary.
pub fn dispatch_with_fence<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => Ok(result),
        Err(payload) => Err(app_error_from_panic(payload)),
    }
}

/// Async variant: fences both future construction and polling.
pub async fn dispatch_async_with_fence<F, Fut, T>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let fut = dispatch_with_fence(|| AssertUnwindSafe(f()).catch_unwind())?;
    match fut.await {
        Ok(value) => Ok(value),
        Err(payload) => Err(app_error_from_panic(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::panic_any;

    #[test]
    fn dispatch_with_fence_passes_through() {
        let value = dispatch_with_fence(|| 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn dispatch_with_fence_catches_str_panic() {
        let err = dispatch_with_fence(|| panic!("boom"))
            .err()
            .expect("should convert panic into error");
        assert_eq!(err.code(), "RUNTIME/PANIC");
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn dispatch_with_fence_catches_non_string_panic() {
        let err = dispatch_with_fence(|| panic_any(123_i32))
            .err()
            .expect("should convert panic into error");
        assert_eq!(err.code(), "RUNTIME/PANIC");
        assert_eq!(err.message(), "unknown panic payload");
    }
}
