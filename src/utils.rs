/// Utility helpers for Friendly

/// Suspend the current task for `ms` milliseconds on the platform timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Suspend the current task for `ms` milliseconds on the platform timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Show a blocking message to the user.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Show a blocking message to the user.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!(message, "alert");
}
