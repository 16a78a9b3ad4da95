use shikayat_router::{Context, Page, Params, View};

use crate::model::{Role, SharedState};
use crate::pages::present;

pub struct HomePage {
    state: SharedState,
}

impl HomePage {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    fn view(&self) -> shikayat_router::Result<Option<View>> {
        let user = self.state.read(|s| s.user.clone())?;

        let mut view = View::new("Meri Shikayat").lines([
            "Report civic issues to the department that can fix them.",
            "Track every complaint from filing to resolution.",
            "",
        ]);

        view = match user {
            Some(user) if user.role == Role::Admin => view
                .line(format!("Signed in as administrator {}.", user.name))
                .link("Admin dashboard", "/admin/dashboard")
                .link("Sign out", "/logout"),
            Some(user) => view
                .line(format!("Welcome back, {}.", user.name))
                .link("My dashboard", "/dashboard")
                .link("File a complaint", "/file-complaint")
                .link("Sign out", "/logout"),
            None => view
                .link("Sign in", "/login")
                .link("Create an account", "/register"),
        };

        Ok(Some(
            view.link("Authorities", "/authorities")
                .link("How it works", "/how-it-works")
                .link("About", "/about")
                .link("FAQ", "/faq")
                .link("Help", "/help")
                .link("Contact", "/contact")
                .link("Community guidelines", "/guidelines")
                .link("Terms", "/terms")
                .link("Privacy", "/privacy")
                .link("Administrator sign in", "/admin/login"),
        ))
    }
}

impl Page for HomePage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        present(cx, self.view());
    }
}

#[cfg(test)]
mod tests {
    use crate::pages::testing::{app_router, shown};

    #[test]
    fn test_home_offers_sign_in_to_visitors() {
        let (mut router, _state) = app_router("/");
        router.init();
        let view = shown(&router);
        assert_eq!(view.title, "Meri Shikayat");
        assert!(view.links.iter().any(|l| l.href == "/login"));
        assert!(!view.links.iter().any(|l| l.href == "/dashboard"));
    }
}
