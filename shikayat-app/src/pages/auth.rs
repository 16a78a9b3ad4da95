//! Sign-in, registration and sign-out.
//!
//! The terminal has no form inputs, so each page offers links carrying the
//! submission in the query string (`/login?as=citizen`). A submission signs
//! in and redirects through the navigator, replacing the submission's history
//! entry the way a browser does after a successful POST. Revisiting such an
//! entry through back/forward shows the form again without submitting.

use shikayat_router::{Context, Navigator, Page, Params, View};

use crate::model::{Role, SharedState};
use crate::pages::{present, query_value};

const DEMO_CITIZEN: &str = "Asha Verma";
const DEMO_ADMIN: &str = "Ward Officer";

pub struct LoginPage {
    state: SharedState,
    navigator: Navigator,
}

impl LoginPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self, cx: &Context) -> shikayat_router::Result<Option<View>> {
        if !cx.is_pop() && query_value(cx, "as") == Some("citizen") {
            self.state.update(|s| s.sign_in(DEMO_CITIZEN, Role::Citizen))?;
            tracing::info!(user = DEMO_CITIZEN, "signed in");
            self.navigator.replace("/dashboard");
            return Ok(None);
        }

        Ok(Some(
            View::new("Sign in")
                .line("Sign in with your registered mobile number or email.")
                .line("")
                .line("No account yet? Registration takes a minute.")
                .link(format!("Continue as {DEMO_CITIZEN}"), "/login?as=citizen")
                .link("Create an account", "/register")
                .link("Administrator sign in", "/admin/login")
                .link("Home", "/"),
        ))
    }
}

impl Page for LoginPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        let view = self.view(cx);
        present(cx, view);
    }
}

pub struct RegisterPage {
    state: SharedState,
    navigator: Navigator,
}

impl RegisterPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self, cx: &Context) -> shikayat_router::Result<Option<View>> {
        if let Some(name) = query_value(cx, "name").filter(|_| !cx.is_pop()) {
            let name = name.replace('+', " ");
            self.state.update(|s| s.sign_in(name.clone(), Role::Citizen))?;
            tracing::info!(user = %name, "registered");
            self.navigator.replace("/dashboard");
            return Ok(None);
        }

        Ok(Some(
            View::new("Create an account")
                .line("Citizens can file and track complaints once registered.")
                .link("Register as Ravi Kumar", "/register?name=Ravi+Kumar")
                .link("Register as Fatima Sheikh", "/register?name=Fatima+Sheikh")
                .link("Already registered? Sign in", "/login")
                .link("Home", "/"),
        ))
    }
}

impl Page for RegisterPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        let view = self.view(cx);
        present(cx, view);
    }
}

pub struct AdminLoginPage {
    state: SharedState,
    navigator: Navigator,
}

impl AdminLoginPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self, cx: &Context) -> shikayat_router::Result<Option<View>> {
        if !cx.is_pop() && query_value(cx, "as") == Some("admin") {
            self.state.update(|s| s.sign_in(DEMO_ADMIN, Role::Admin))?;
            tracing::info!(user = DEMO_ADMIN, "administrator signed in");
            self.navigator.replace("/admin/dashboard");
            return Ok(None);
        }

        Ok(Some(
            View::new("Administrator sign in")
                .line("Restricted to department staff.")
                .link(format!("Continue as {DEMO_ADMIN}"), "/admin/login?as=admin")
                .link("Citizen sign in", "/login")
                .link("Home", "/"),
        ))
    }
}

impl Page for AdminLoginPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        let view = self.view(cx);
        present(cx, view);
    }
}

/// Clears the session and goes home.
pub struct LogoutPage {
    state: SharedState,
    navigator: Navigator,
}

impl LogoutPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }
}

impl Page for LogoutPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        if cx.is_pop() {
            let view = View::new("Sign out")
                .line("Follow the link below to end your session.")
                .link("Sign out", "/logout")
                .link("Home", "/");
            present(cx, Ok(Some(view)));
            return;
        }
        let result = self.state.update(|s| s.sign_out()).map(|()| {
            self.navigator.replace("/");
            None
        });
        present(cx, result);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Role;
    use crate::pages::testing::{app_router, shown};
    use shikayat_router::History;

    #[test]
    fn test_login_submission_redirects_to_dashboard() {
        let (mut router, state) = app_router("/login");
        router.init();
        assert_eq!(shown(&router).title, "Sign in");

        assert!(router.navigate("/login?as=citizen"));
        assert_eq!(router.current_path(), Some("/dashboard"));
        let user = state.read(|s| s.user.clone()).unwrap().unwrap();
        assert_eq!(user.role, Role::Citizen);
    }

    #[test]
    fn test_register_uses_submitted_name() {
        let (mut router, state) = app_router("/register?name=Ravi+Kumar");
        router.init();
        assert_eq!(router.current_path(), Some("/dashboard"));
        let name = state.read(|s| s.user.as_ref().map(|u| u.name.clone())).unwrap();
        assert_eq!(name.as_deref(), Some("Ravi Kumar"));
    }

    #[test]
    fn test_admin_login_redirects_to_admin_dashboard() {
        let (mut router, state) = app_router("/admin/login?as=admin");
        router.init();
        assert_eq!(router.current_path(), Some("/admin/dashboard"));
        assert!(state.read(|s| s.is_admin()).unwrap());
    }

    #[test]
    fn test_logout_clears_session() {
        let (mut router, state) = app_router("/login?as=citizen");
        router.init();
        router.navigate("/logout");
        assert_eq!(router.current_path(), Some("/"));
        assert!(state.read(|s| s.user.is_none()).unwrap());
        assert_eq!(router.history().location(), "/");
    }

    #[test]
    fn test_back_past_login_does_not_sign_in_again() {
        let (mut router, state) = app_router("/");
        router.init();
        router.navigate("/login");
        router.navigate("/login?as=citizen");
        assert_eq!(router.current_path(), Some("/dashboard"));
        router.navigate("/logout");
        assert!(state.read(|s| s.user.is_none()).unwrap());

        // logout replaced itself with home; one step back is the dashboard,
        // whose guard now sends the signed-out user to the sign-in form
        assert!(router.back());
        assert_eq!(router.current_path(), Some("/login"));
        assert!(state.read(|s| s.user.is_none()).unwrap());
        assert_eq!(shown(&router).title, "Sign in");
    }

    #[test]
    fn test_revisited_submission_shows_the_form() {
        let (mut router, state) = app_router("/");
        router.init();
        router.history_mut().push("/register?name=Ravi+Kumar".to_string());
        router.pop_state();

        assert_eq!(router.current_path(), Some("/register"));
        assert_eq!(shown(&router).title, "Create an account");
        assert!(state.read(|s| s.user.is_none()).unwrap());
    }

    #[test]
    fn test_revisited_logout_keeps_session() {
        let (mut router, state) = app_router("/login?as=citizen");
        router.init();
        router.history_mut().push("/logout".to_string());
        router.pop_state();

        assert!(state.read(|s| s.user.is_some()).unwrap());
        assert_eq!(shown(&router).title, "Sign out");
    }
}
