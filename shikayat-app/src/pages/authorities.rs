use shikayat_router::{Context, Page, Params, View};

use crate::model::{authority, AUTHORITIES};
use crate::pages::present;

/// Directory of connected departments.
#[derive(Default)]
pub struct AuthoritiesPage;

impl Page for AuthoritiesPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        let mut view = View::new("Authorities")
            .line("Departments connected to Meri Shikayat.")
            .line("");
        for authority in AUTHORITIES {
            view = view
                .line(format!(
                    "{:<36} resolves {} · avg. response {}",
                    authority.name, authority.resolution_rate, authority.avg_response_time
                ))
                .link(authority.name, format!("/authorities/{}", authority.id));
        }
        present(cx, Ok(Some(view.link("Home", "/"))));
    }
}

/// `/authorities/:id`
#[derive(Default)]
pub struct AuthorityDetailPage;

impl Page for AuthorityDetailPage {
    fn render(&mut self, params: &Params, cx: &mut Context) {
        let id = params.get("id").unwrap_or_default();
        let Some(authority) = authority(id) else {
            let view = View::new("Authority not found")
                .line("The requested department could not be found.")
                .link("Back to authorities", "/authorities");
            present(cx, Ok(Some(view)));
            return;
        };

        let view = View::new(format!("{} · {}", authority.name, authority.name_hindi))
            .line(format!("Office hours: {}", authority.hours))
            .line(format!(
                "Resolution rate {} · average response {}",
                authority.resolution_rate, authority.avg_response_time
            ))
            .line("")
            .line("Responsibilities:")
            .lines(authority.responsibilities.iter().map(|r| format!("  • {r}")))
            .line("")
            .line("Officials:")
            .lines(
                authority
                    .personnel
                    .iter()
                    .map(|o| format!("  {}: {} <{}>", o.role, o.name, o.email)),
            )
            .link(
                "File a complaint here",
                format!("/file-complaint?department={}", authority.id),
            )
            .link("Back to authorities", "/authorities");
        present(cx, Ok(Some(view)));
    }
}

#[cfg(test)]
mod tests {
    use crate::pages::testing::{app_router, shown};

    #[test]
    fn test_authority_detail_by_id() {
        let (mut router, _state) = app_router("/");
        router.init();
        assert!(router.navigate("/authorities/police"));
        let view = shown(&router);
        assert!(view.title.starts_with("Police Department"));
    }

    #[test]
    fn test_unknown_authority() {
        let (mut router, _state) = app_router("/");
        router.init();
        assert!(router.navigate("/authorities/fire"));
        assert_eq!(shown(&router).title, "Authority not found");
    }

    #[test]
    fn test_authorities_without_id_is_the_listing() {
        let (mut router, _state) = app_router("/");
        router.init();
        assert!(router.navigate("/authorities"));
        assert_eq!(shown(&router).title, "Authorities");
        assert!(!router.navigate("/authorities/police/staff"));
        assert_eq!(router.current_path(), Some("/authorities"));
    }
}
