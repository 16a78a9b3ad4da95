use shikayat_router::{Context, Navigator, Page, Params, View};

use crate::model::{authority, Complaint, SharedState};
use crate::pages::present;

fn complaint_line(complaint: &Complaint) -> String {
    let department = authority(complaint.department)
        .map(|a| a.name)
        .unwrap_or(complaint.department);
    format!(
        "#{:<4} {:<36} {:<12} {}",
        complaint.id,
        department,
        complaint.status.label(),
        complaint.filed_by
    )
}

/// A citizen's own complaints. Visitors without a session are sent to `/login`.
pub struct DashboardPage {
    state: SharedState,
    navigator: Navigator,
}

impl DashboardPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self) -> shikayat_router::Result<Option<View>> {
        let snapshot = self.state.read(|s| s.clone())?;
        let Some(user) = &snapshot.user else {
            tracing::debug!("dashboard without session, redirecting to login");
            self.navigator.replace("/login");
            return Ok(None);
        };

        let complaints = snapshot.own_complaints();
        let mut view = View::new(format!("Dashboard · {}", user.name));
        if complaints.is_empty() {
            view = view.line("You have not filed any complaints yet.");
        } else {
            view = view
                .line(format!("{} complaint(s) filed", complaints.len()))
                .line("")
                .lines(complaints.iter().map(|c| complaint_line(c)));
        }

        for complaint in &complaints {
            view = view.link(
                format!("Complaint #{}", complaint.id),
                format!("/complaints/{}", complaint.id),
            );
        }
        Ok(Some(
            view.link("File a complaint", "/file-complaint")
                .link("Authorities", "/authorities")
                .link("Home", "/")
                .link("Sign out", "/logout"),
        ))
    }
}

impl Page for DashboardPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        present(cx, self.view());
    }
}

/// Every complaint on record. Only administrators get in.
pub struct AdminDashboardPage {
    state: SharedState,
    navigator: Navigator,
}

impl AdminDashboardPage {
    pub fn new(state: SharedState, navigator: Navigator) -> Self {
        Self { state, navigator }
    }

    fn view(&self) -> shikayat_router::Result<Option<View>> {
        let snapshot = self.state.read(|s| s.clone())?;
        if !snapshot.is_admin() {
            self.navigator.replace("/admin/login");
            return Ok(None);
        }

        let open = snapshot
            .complaints
            .iter()
            .filter(|c| c.status != crate::model::Status::Resolved)
            .count();
        let mut view = View::new("Admin dashboard")
            .line(format!(
                "{} complaint(s) on record, {} open",
                snapshot.complaints.len(),
                open
            ))
            .line("")
            .lines(snapshot.complaints.iter().map(complaint_line));

        for complaint in &snapshot.complaints {
            view = view.link(
                format!("Review #{}", complaint.id),
                format!("/complaints/{}", complaint.id),
            );
        }
        Ok(Some(view.link("Home", "/").link("Sign out", "/logout")))
    }
}

impl Page for AdminDashboardPage {
    fn render(&mut self, _params: &Params, cx: &mut Context) {
        present(cx, self.view());
    }
}
