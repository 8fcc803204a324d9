//! Panic boundary for public client operations.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use riskguard_domain::{Result, RiskGuardError};
use tracing::error;

/// Run `future`, turning a panic anywhere inside it into
/// [`RiskGuardError::Internal`].
pub(crate) async fn guarded<T, F>(operation: &'static str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(operation, panic = %message, "Operation panicked");
            Err(RiskGuardError::Internal(format!("{operation} panicked: {message}")))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
