use serde::Serialize;

use super::role::AuthorRole;

/// Minimum number of dated papers before drift is reported
pub const MIN_DRIFT_PAPERS: usize = 6;

/// Share change that counts as a shift rather than noise
pub const DRIFT_THRESHOLD: f64 = 0.08;

/// Fraction of papers per role in one career phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoleShares {
    pub first: f64,
    pub middle: f64,
    pub last: f64,
    pub solo: f64,
}

impl RoleShares {
    fn from_roles(roles: &[AuthorRole]) -> Self {
        if roles.is_empty() {
            return Self::default();
        }
        let n = roles.len() as f64;
        let share = |role: AuthorRole| roles.iter().filter(|r| **r == role).count() as f64 / n;
        Self {
            first: share(AuthorRole::First),
            middle: share(AuthorRole::Middle),
            last: share(AuthorRole::Last),
            solo: share(AuthorRole::Solo),
        }
    }

    /// Middle plus last
    pub fn collaborator(&self) -> f64 {
        self.middle + self.last
    }

    /// Largest share; earlier entries win ties
    fn dominant(&self) -> &'static str {
        let entries = [
            ("first", self.first),
            ("middle", self.middle),
            ("last", self.last),
            ("solo", self.solo),
            ("collaborator", self.collaborator()),
        ];
        let mut best = entries[0];
        for entry in &entries[1..] {
            if entry.1 > best.1 {
                best = *entry;
            }
        }
        best.0
    }
}

/// Early-career vs late-career authorship comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorshipDrift {
    /// "stable", or "from → to" such as "first → last"
    pub label: String,
    pub early: RoleShares,
    pub late: RoleShares,
}

impl AuthorshipDrift {
    pub fn detail(&self) -> String {
        let pct = |x: f64| (x * 100.0).round() as i64;
        format!(
            "Early: {}% first, {}% middle, {}% last, {}% solo; Late: {}% first, {}% middle, {}% last, {}% solo",
            pct(self.early.first),
            pct(self.early.middle),
            pct(self.early.last),
            pct(self.early.solo),
            pct(self.late.first),
            pct(self.late.middle),
            pct(self.late.last),
            pct(self.late.solo),
        )
    }
}

/// Compare role shares of the earlier and later half of a career.
///
/// Rows are `(year, role)`, sorted by year here and split at `n / 2`. A change
/// of dominant role is reported directly; otherwise a pair of opposite share
/// moves of at least [`DRIFT_THRESHOLD`] names the drift. `None` below
/// [`MIN_DRIFT_PAPERS`] rows.
pub fn authorship_drift(rows: &[(i32, AuthorRole)]) -> Option<AuthorshipDrift> {
    if rows.len() < MIN_DRIFT_PAPERS {
        return None;
    }

    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|(year, _)| *year);
    let mid = sorted.len() / 2;
    let roles: Vec<AuthorRole> = sorted.iter().map(|(_, role)| *role).collect();

    let early = RoleShares::from_roles(&roles[..mid]);
    let late = RoleShares::from_roles(&roles[mid..]);

    let early_dom = early.dominant();
    let late_dom = late.dominant();

    let label = if early_dom != late_dom {
        format!("{} → {}", early_dom, late_dom)
    } else {
        let th = DRIFT_THRESHOLD;
        let first_down = early.first - late.first >= th;
        let first_up = late.first - early.first >= th;
        let last_down = early.last - late.last >= th;
        let last_up = late.last - early.last >= th;
        let collab_down = early.collaborator() - late.collaborator() >= th;
        let collab_up = late.collaborator() - early.collaborator() >= th;

        let shift = if first_down && last_up {
            "first → last"
        } else if first_down && collab_up {
            "first → collaborator"
        } else if last_down && first_up {
            "last → first"
        } else if last_down && collab_up {
            "last → collaborator"
        } else if collab_down && first_up {
            "collaborator → first"
        } else if collab_down && last_up {
            "collaborator → last"
        } else {
            "stable"
        };
        shift.to_string()
    };

    Some(AuthorshipDrift { label, early, late })
}
