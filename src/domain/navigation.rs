//! Logical routes between views

/// The views the portal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Default entry point, redirects to the signup view
    Root,
    Signup,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Where a visitor of this route should be sent instead, if anywhere
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Self::Root => Some(Self::Signup),
            Self::Signup | Self::Dashboard => None,
        }
    }

    /// Follow redirects to the route that is actually rendered
    pub fn resolve(self) -> Route {
        self.redirect_target().unwrap_or(self)
    }
}
