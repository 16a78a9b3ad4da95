pub mod auth;
pub mod authorities;
pub mod complaints;
pub mod dashboard;
pub mod home;
pub mod info;

pub use auth::{AdminLoginPage, LoginPage, LogoutPage, RegisterPage};
pub use authorities::{AuthoritiesPage, AuthorityDetailPage};
pub use complaints::{ComplaintDetailPage, FileComplaintPage};
pub use dashboard::{AdminDashboardPage, DashboardPage};
pub use home::HomePage;
pub use info::{
    AboutPage, ContactPage, FaqPage, GuidelinesPage, HelpPage, HowItWorksPage, PrivacyPage,
    TermsPage,
};

use shikayat_router::{Context, View};

/// Value of `key` in the query string of the location being rendered.
pub(crate) fn query_value<'a>(cx: &'a Context, key: &str) -> Option<&'a str> {
    cx.query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Put a page's view into the outlet. `None` means the page redirected and
/// has nothing to show.
pub(crate) fn present(cx: &mut Context, view: shikayat_router::Result<Option<View>>) {
    let view = match view {
        Ok(Some(view)) => view,
        Ok(None) => return,
        Err(err) => {
            tracing::error!(%err, location = cx.location(), "page failed to render");
            View::new("Something went wrong")
                .line(err.to_string())
                .link("Home", "/")
        }
    };
    if let Err(err) = cx.show(view) {
        tracing::error!(%err, "failed to update outlet");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use shikayat_router::{Navigator, Outlet};

    #[test]
    fn test_query_value() {
        let (navigator, _rx) = Navigator::channel();
        let cx = Context::new(
            "/file-complaint?department=roads&ward=12",
            Outlet::default(),
            navigator,
        );
        assert_eq!(query_value(&cx, "department"), Some("roads"));
        assert_eq!(query_value(&cx, "ward"), Some("12"));
        assert_eq!(query_value(&cx, "missing"), None);
    }
}
