use shikayat_router::{Context, Navigator, Page, Params, View};

use crate::model::{authority, SharedState, AUTHORITIES};
use crate::pages::{present, query_value};

/// Pick a department and file. `?department=<id>` submits, except when the
/// entry is revisited through back/forward.
pub struct FileComplaintPage {
    state: SharedState,
    navigator: Navigator,
}

impl FileComplaintPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self, cx: &Context) -> shikayat_router::Result<Option<View>> {
        if self.state.read(|s| s.user.is_none())? {
            self.navigator.replace("/login");
            return Ok(None);
        }

        if let Some(department) = query_value(cx, "department").filter(|_| !cx.is_pop()) {
            let Some(authority) = authority(department) else {
                return Ok(Some(
                    View::new("File a complaint")
                        .line(format!("Unknown department '{department}'."))
                        .link("Choose again", "/file-complaint"),
                ));
            };
            if let Some(id) = self.state.update(|s| s.file(authority.id))? {
                tracing::info!(id, department = authority.id, "complaint filed");
            }
            self.navigator.replace("/dashboard");
            return Ok(None);
        }

        let mut view = View::new("File a complaint")
            .line("Which department should handle the issue?")
            .line("");
        for authority in AUTHORITIES {
            view = view.link(
                format!("{} ({})", authority.name, authority.name_hindi),
                format!("/file-complaint?department={}", authority.id),
            );
        }
        Ok(Some(view.link("Back to dashboard", "/dashboard")))
    }
}

impl Page for FileComplaintPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        let view = self.view(cx);
        present(cx, view);
    }
}

/// One complaint. Administrators can move it along with `?action=advance`.
pub struct ComplaintDetailPage {
    state: SharedState,
}

impl ComplaintDetailPage {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    fn view(&self, params: &Params, cx: &Context) -> shikayat_router::Result<Option<View>> {
        let id = params.get("id").and_then(|id| id.parse::<u32>().ok());
        let Some(id) = id else {
            return Ok(Some(not_found(params.get("id").unwrap_or_default())));
        };

        if !cx.is_pop() && query_value(cx, "action") == Some("advance") {
            self.state.update(|s| {
                if !s.is_admin() {
                    return;
                }
                if let Some(complaint) = s.complaint_mut(id) {
                    complaint.status = complaint.status.advance();
                    tracing::info!(id, status = complaint.status.label(), "complaint updated");
                }
            })?;
        }

        let (complaint, is_admin) = self.state.read(|s| (s.complaint(id).cloned(), s.is_admin()))?;
        let Some(complaint) = complaint else {
            return Ok(Some(not_found(&id.to_string())));
        };

        let department = authority(complaint.department);
        let mut view = View::new(format!("Complaint #{}", complaint.id))
            .line(format!(
                "Department: {}",
                department.map(|a| a.name).unwrap_or(complaint.department)
            ))
            .line(format!("Filed by:   {}", complaint.filed_by))
            .line(format!("Status:     {}", complaint.status.label()));

        if is_admin {
            view = view
                .link(
                    format!("Move to '{}'", complaint.status.advance().label()),
                    format!("/complaints/{}?action=advance", complaint.id),
                )
                .link("Admin dashboard", "/admin/dashboard");
        } else {
            view = view.link("Dashboard", "/dashboard");
        }
        if let Some(department) = department {
            view = view.link(department.name, format!("/authorities/{}", department.id));
        }
        Ok(Some(view))
    }
}

fn not_found(id: &str) -> View {
    View::new("Complaint not found")
        .line(format!("There is no complaint '{id}'."))
        .link("Home", "/")
}

impl Page for ComplaintDetailPage {
    fn render(&mut self, params: &Params, cx: &mut Context) {
        let view = self.view(params, cx);
        present(cx, view);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Role, Status};
    use crate::pages::testing::{app_router, shown};
    use shikayat_router::History;

    #[test]
    fn test_filing_redirects_to_dashboard() {
        let (mut router, state) = app_router("/");
        state.update(|s| s.sign_in("Asha Verma", Role::Citizen)).unwrap();
        router.init();

        router.navigate("/file-complaint");
        assert_eq!(shown(&router).title, "File a complaint");

        router.navigate("/file-complaint?department=roads");
        assert_eq!(router.current_path(), Some("/dashboard"));
        let filed = state.read(|s| s.complaints.len()).unwrap();
        assert_eq!(filed, 1);
    }

    #[test]
    fn test_back_after_filing_does_not_file_again() {
        let (mut router, state) = app_router("/");
        state.update(|s| s.sign_in("Asha Verma", Role::Citizen)).unwrap();
        router.init();
        router.navigate("/file-complaint");
        router.navigate("/file-complaint?department=roads");
        assert_eq!(state.read(|s| s.complaints.len()).unwrap(), 1);

        assert!(router.back());
        assert_eq!(router.current_path(), Some("/file-complaint"));
        assert_eq!(shown(&router).title, "File a complaint");
        assert_eq!(state.read(|s| s.complaints.len()).unwrap(), 1);

        // the dashboard is still ahead
        assert!(router.forward());
        assert_eq!(router.current_path(), Some("/dashboard"));
        assert_eq!(state.read(|s| s.complaints.len()).unwrap(), 1);
    }

    #[test]
    fn test_revisited_submission_entry_does_not_file() {
        let (mut router, state) = app_router("/");
        state.update(|s| s.sign_in("Asha Verma", Role::Citizen)).unwrap();
        router.init();
        router
            .history_mut()
            .push("/file-complaint?department=water".to_string());
        router.pop_state();

        assert_eq!(shown(&router).title, "File a complaint");
        assert_eq!(state.read(|s| s.complaints.len()).unwrap(), 0);
    }

    #[test]
    fn test_unknown_department_is_reported() {
        let (mut router, state) = app_router("/");
        state.update(|s| s.sign_in("Asha Verma", Role::Citizen)).unwrap();
        router.init();
        router.navigate("/file-complaint?department=fire");
        assert_eq!(router.current_path(), Some("/file-complaint"));
        assert!(shown(&router).body[0].contains("fire"));
    }

    #[test]
    fn test_admin_advances_complaint() {
        let (mut router, state) = app_router("/");
        state
            .update(|s| {
                s.sign_in("Asha Verma", Role::Citizen);
                s.file("water");
                s.sign_in("Ward Officer", Role::Admin);
            })
            .unwrap();
        router.init();

        router.navigate("/complaints/1?action=advance");
        assert_eq!(shown(&router).title, "Complaint #1");
        let status = state.read(|s| s.complaint(1).unwrap().status).unwrap();
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn test_back_onto_advance_link_does_not_advance_again() {
        let (mut router, state) = app_router("/");
        state
            .update(|s| {
                s.sign_in("Asha Verma", Role::Citizen);
                s.file("water");
                s.sign_in("Ward Officer", Role::Admin);
            })
            .unwrap();
        router.init();
        router.navigate("/complaints/1?action=advance");
        router.navigate("/admin/dashboard");
        router.back();

        assert_eq!(shown(&router).title, "Complaint #1");
        let status = state.read(|s| s.complaint(1).unwrap().status).unwrap();
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn test_citizen_cannot_advance() {
        let (mut router, state) = app_router("/");
        state
            .update(|s| {
                s.sign_in("Asha Verma", Role::Citizen);
                s.file("water");
            })
            .unwrap();
        router.init();
        router.navigate("/complaints/1?action=advance");
        let status = state.read(|s| s.complaint(1).unwrap().status).unwrap();
        assert_eq!(status, Status::Pending);
    }

    #[test]
    fn test_missing_complaint() {
        let (mut router, _state) = app_router("/");
        router.init();
        router.navigate("/complaints/abc");
        assert_eq!(shown(&router).title, "Complaint not found");
    }
}
