//! Route table of the front end.

use shikayat_macros::route_table;
use shikayat_router::{History, Router};

use crate::model::SharedState;
use crate::pages::*;

/// Register every page. Order matters: the first matching pattern wins.
pub fn register_routes<H: History>(
    router: &mut Router<H>,
    state: &SharedState,
) -> shikayat_router::Result<()> {
    let nav = router.navigator();

    route_table!(router => {
        "/" => HomePage::new(state.clone()),
        "/login" => LoginPage::new(state.clone(), nav.clone()),
        "/register" => RegisterPage::new(state.clone(), nav.clone()),
        "/logout" => LogoutPage::new(state.clone(), nav.clone()),
        "/dashboard" => DashboardPage::new(state.clone(), nav.clone()),
        "/file-complaint" => FileComplaintPage::new(state.clone(), nav.clone()),
        "/complaints/:id" => ComplaintDetailPage::new(state.clone()),
        "/authorities" => AuthoritiesPage,
        "/authorities/:id" => AuthorityDetailPage,
        "/admin/login" => AdminLoginPage::new(state.clone(), nav.clone()),
        "/admin/dashboard" => AdminDashboardPage::new(state.clone(), nav.clone()),
        "/about" => AboutPage,
        "/how-it-works" => HowItWorksPage,
        "/faq" => FaqPage,
        "/help" => HelpPage,
        "/contact" => ContactPage,
        "/guidelines" => GuidelinesPage,
        "/terms" => TermsPage,
        "/privacy" => PrivacyPage,
    })
}
