//! Navigation destinations, route guard, and the 401 redirect handler

use cortado_client::{ClientError, TokenStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Staff dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Tables,
    Products,
    Orders,
    Users,
}

impl DashboardView {
    fn segment(&self) -> &'static str {
        match self {
            Self::Tables => "tables",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
        }
    }
}

/// Navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Login view
    Login,
    /// Staff dashboard (token required)
    Dashboard(DashboardView),
    /// Guest menu for a table (public, reached via QR)
    GuestMenu { table_id: String },
    /// A table's order view (public, guests land here after ordering)
    TableOrders { table_id: String },
}

impl Destination {
    /// Route path for this destination
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Dashboard(view) => format!("/dashboard/{}", view.segment()),
            Self::GuestMenu { table_id } => format!("/table/{}/menu", table_id),
            Self::TableOrders { table_id } => format!("/table/{}/orders", table_id),
        }
    }

    /// Whether this destination sits behind the session guard
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard(_))
    }
}

/// Performs (or records) navigation for the flow layer
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

/// Route guard over the cached session token
///
/// Guest-facing table routes are public; dashboard routes require a cached
/// token. The guard only checks token presence - validity is the server's
/// call, and a stale token surfaces as a 401 on the first request.
pub struct RouteGuard {
    tokens: Arc<dyn TokenStore>,
}

impl RouteGuard {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Resolve a requested destination against the cached session
    pub fn resolve(&self, requested: Destination) -> Destination {
        if requested.requires_auth() && !self.tokens.is_present() {
            tracing::debug!(to = %requested.path(), "No cached token, routing to login");
            return Destination::Login;
        }
        requested
    }
}

/// Collapses 401 results into a single login redirect
///
/// The API client has already evicted the token by the time this sees the
/// error; racing calls that all come back 401 must not stack redirects.
/// Re-arm with [`UnauthorizedHandler::reset`] after a fresh login.
pub struct UnauthorizedHandler {
    navigator: Arc<dyn Navigator>,
    redirected: AtomicBool,
}

impl UnauthorizedHandler {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            redirected: AtomicBool::new(false),
        }
    }

    /// Inspect a client error; on the 401 signal, issue the login redirect.
    /// Returns whether a redirect was issued for this call.
    pub fn handle(&self, err: &ClientError) -> bool {
        if !err.is_unauthorized() {
            return false;
        }
        if self.redirected.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!("Session expired, redirecting to login");
        self.navigator.navigate(Destination::Login);
        true
    }

    /// Re-arm after a successful login
    pub fn reset(&self) {
        self.redirected.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortado_client::MemoryTokenStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<Destination>>,
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<Destination> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: Destination) {
            self.visited.lock().unwrap().push(destination);
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(
            Destination::Dashboard(DashboardView::Orders).path(),
            "/dashboard/orders"
        );
        assert_eq!(
            Destination::GuestMenu {
                table_id: "t-3".to_string()
            }
            .path(),
            "/table/t-3/menu"
        );
    }

    #[test]
    fn test_guard_routes_dashboard_to_login_without_token() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let guard = RouteGuard::new(tokens.clone());

        let requested = Destination::Dashboard(DashboardView::Tables);
        assert_eq!(guard.resolve(requested.clone()), Destination::Login);

        tokens.set("tok-1");
        assert_eq!(guard.resolve(requested.clone()), requested);
    }

    #[test]
    fn test_guest_routes_are_public() {
        let guard = RouteGuard::new(Arc::new(MemoryTokenStore::new()));
        let menu = Destination::GuestMenu {
            table_id: "t-1".to_string(),
        };
        assert_eq!(guard.resolve(menu.clone()), menu);
    }

    #[test]
    fn test_unauthorized_redirects_exactly_once() {
        let navigator = Arc::new(RecordingNavigator::default());
        let handler = UnauthorizedHandler::new(navigator.clone());

        // Two racing calls both come back 401
        assert!(handler.handle(&ClientError::Unauthorized));
        assert!(!handler.handle(&ClientError::Unauthorized));
        assert_eq!(navigator.visited(), vec![Destination::Login]);

        // Non-auth errors never redirect
        let other = ClientError::InvalidResponse("x".to_string());
        assert!(!handler.handle(&other));

        // After a fresh login the handler re-arms
        handler.reset();
        assert!(handler.handle(&ClientError::Unauthorized));
        assert_eq!(navigator.visited().len(), 2);
    }
}
