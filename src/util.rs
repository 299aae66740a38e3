//! Small async helpers shared by AMQP clients.
use std::time::Duration;

/// Wait for `duration`, then resolve with `value`.
///
/// There is no cancellation hook: drop the returned future to stop waiting.
///
/// ```rust
/// use amqp_connection_core::util::delay;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let value = delay(Duration::from_millis(1), "done").await;
/// assert_eq!(value, "done");
/// # }
/// ```
pub async fn delay<T>(duration: Duration, value: T) -> T {
    tokio::time::sleep(duration).await;
    value
}
