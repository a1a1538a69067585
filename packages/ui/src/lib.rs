//! Shared UI for the Goal Achiever app: the session gate, every screen, and the
//! plain state types behind them.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionProvider`], gate state and sign-in/out transitions |
//! | [`client`] | Config loading and [`AppClient`] construction |
//! | [`forms`] | Login/registration validation |
//! | [`wizard`] | New Goal wizard steps |
//! | [`calendar`] | Sunday-first month grid |
//! | [`chat`] | Tutor transcript and send guard |
//! | [`dashboard`] | Goal totals |
//! | [`markdown`] | Plan details and tutor replies to HTML |
//! | [`views`] | Screen components; navigation is passed in as callbacks |

pub mod calendar;
pub mod chat;
pub mod client;
pub mod dashboard;
pub mod forms;
pub mod markdown;
pub mod session;
pub mod views;
pub mod wizard;

pub use client::AppClient;
pub use session::{
    check_auth, handle_unauthorized, sign_out, signed_in, use_client, use_config, use_session,
    SessionGate, SessionProvider,
};
