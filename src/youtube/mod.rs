//! Supplier of [`MediaHandle`](crate::player::MediaHandle)s backed by the
//! YouTube IFrame player. Only browser builds can reach the real player;
//! native builds get a handle type whose constructor always reports
//! [`PlayerError::Unsupported`](crate::player::PlayerError::Unsupported).

#[cfg(target_arch = "wasm32")]
mod iframe;
#[cfg(not(target_arch = "wasm32"))]
mod unsupported;

#[cfg(target_arch = "wasm32")]
pub use iframe::*;
#[cfg(not(target_arch = "wasm32"))]
pub use unsupported::*;
