//! Informational pages. Nothing here reads state.

use shikayat_macros::page;

#[page(
    title = "About Meri Shikayat",
    line = "Meri Shikayat connects citizens with the departments responsible for",
    line = "roads, water, electricity, sanitation and public safety.",
    line = "",
    line = "Every complaint is routed, tracked and published once resolved.",
    link("How it works", "/how-it-works"),
    link("Home", "/"),
)]
pub struct AboutPage;

#[page(
    title = "How it works",
    line = "1. Sign in or register with your mobile number.",
    line = "2. Pick the department and describe the issue.",
    line = "3. The department acknowledges and assigns an officer.",
    line = "4. Track the status from your dashboard until it is resolved.",
    link("File a complaint", "/file-complaint"),
    link("Home", "/"),
)]
pub struct HowItWorksPage;

#[page(
    title = "Frequently asked questions",
    line = "Is filing free?  Yes, always.",
    line = "Can I file anonymously?  You need an account so officers can reach you.",
    line = "How long does a resolution take?  See each authority's average response time.",
    link("Authorities", "/authorities"),
    link("Help", "/help"),
    link("Home", "/"),
)]
pub struct FaqPage;

#[page(
    title = "Help",
    line = "Use ↑/↓ to pick a link and Enter to open it.",
    line = "← goes back, → goes forward, q quits.",
    link("FAQ", "/faq"),
    link("Contact", "/contact"),
    link("Home", "/"),
)]
pub struct HelpPage;

#[page(
    title = "Contact",
    line = "Helpline: 1800-11-0000 (toll free)",
    line = "Email:    support@merishikayat.in",
    link("Home", "/"),
)]
pub struct ContactPage;

#[page(
    title = "Community guidelines",
    line = "Describe the issue, not the person.",
    line = "One complaint per issue; duplicates are merged.",
    line = "No abusive language or personal data of others.",
    link("Terms", "/terms"),
    link("Home", "/"),
)]
pub struct GuidelinesPage;

#[page(
    title = "Terms of use",
    line = "False or malicious complaints may lead to account suspension.",
    line = "Complaints and their resolution may be published without personal details.",
    link("Privacy", "/privacy"),
    link("Home", "/"),
)]
pub struct TermsPage;

#[page(
    title = "Privacy policy",
    line = "Your contact details are shared only with the department handling your complaint.",
    link("Terms", "/terms"),
    link("Home", "/"),
)]
pub struct PrivacyPage;

#[cfg(test)]
mod tests {
    use super::*;
    use shikayat_router::{Context, Navigator, Outlet, Page, Params};

    #[test]
    fn test_static_page_shows_fixed_view() {
        let (navigator, _rx) = Navigator::channel();
        let outlet = Outlet::default();
        let mut cx = Context::new("/about", outlet.clone(), navigator);

        AboutPage.render(&Params::new(), &mut cx);

        let view = outlet.read(Clone::clone).unwrap();
        assert_eq!(view.title, "About Meri Shikayat");
        assert_eq!(view.body.len(), 4);
        assert_eq!(view.links[0].href, "/how-it-works");
    }
}
