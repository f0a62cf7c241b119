//! Access decision for protected views.

pub const LOGIN_PATH: &str = "/login";

/// Navigate elsewhere instead of rendering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Redirect {
    pub to: &'static str,
    /// Replace the current history entry rather than pushing a new one.
    pub replace: bool,
}

impl Redirect {
    pub fn to_login() -> Self {
        Self {
            to: LOGIN_PATH,
            replace: true,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Guarded<T> {
    Render(T),
    Redirect(Redirect),
}

impl<T> Guarded<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn rendered(self) -> Option<T> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }
}

/// Renders `view` only for authenticated callers; everyone else is sent to
/// the login page. Evaluated fresh on every call.
pub fn protect<T>(is_authenticated: bool, view: impl FnOnce() -> T) -> Guarded<T> {
    if !is_authenticated {
        return Guarded::Redirect(Redirect::to_login());
    }
    Guarded::Render(view())
}
