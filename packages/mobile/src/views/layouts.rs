//! The auth split. Each subtree renders only in its gate state and sends the user
//! to the other one otherwise, so back-navigation cannot cross it.

use dioxus::prelude::*;
use ui::views::LoadingView;
use ui::{use_session, SessionGate};

use crate::Route;

/// `/`: wait for the stored session, then pick a subtree.
#[component]
pub fn Gate() -> Element {
    let gate = use_session();
    let nav = use_navigator();
    match gate() {
        SessionGate::Loading => rsx! { LoadingView {} },
        SessionGate::Authenticated(_) => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
        SessionGate::Unauthenticated => {
            nav.replace(Route::Landing {});
            rsx! {}
        }
    }
}

#[component]
pub fn AuthLayout() -> Element {
    let gate = use_session();
    let nav = use_navigator();
    match gate() {
        SessionGate::Loading => rsx! { LoadingView {} },
        SessionGate::Authenticated(_) => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
        SessionGate::Unauthenticated => rsx! { Outlet::<Route> {} },
    }
}

#[component]
pub fn MainLayout() -> Element {
    let gate = use_session();
    let nav = use_navigator();
    match gate() {
        SessionGate::Loading => rsx! { LoadingView {} },
        SessionGate::Authenticated(_) => rsx! { Outlet::<Route> {} },
        SessionGate::Unauthenticated => {
            nav.replace(Route::Landing {});
            rsx! {}
        }
    }
}
