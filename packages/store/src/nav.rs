//! Routes and the one navigation primitive the core needs.
//!
//! The core never talks to a router directly. Launchers wrap their router in a
//! type implementing [`Navigate`] and hand it to [`crate::guard`],
//! [`crate::submit_login`] and [`crate::logout`].

/// The three screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Home,
    Profile,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Home => "/home",
            AppRoute::Profile => "/profile",
        }
    }
}

pub trait Navigate {
    fn navigate_to(&self, route: AppRoute);
}

impl<N: Navigate + ?Sized> Navigate for &N {
    fn navigate_to(&self, route: AppRoute) {
        (**self).navigate_to(route)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::{AppRoute, Navigate};

    /// Remembers every route it was asked to go to.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) visited: RefCell<Vec<AppRoute>>,
    }

    impl RecordingNavigator {
        pub(crate) fn last(&self) -> Option<AppRoute> {
            self.visited.borrow().last().copied()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate_to(&self, route: AppRoute) {
            self.visited.borrow_mut().push(route);
        }
    }
}
