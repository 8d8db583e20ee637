//! Single-paper signals: citation velocity, age colouring, the contribution
//! signal score and the velocity trajectory against same-age papers.

use serde::Serialize;

use crate::extract::Artifacts;

/// Velocity (citations per year) at which the normalized velocity term saturates
pub const VELOCITY_SATURATION: f64 = 20.0;

pub const CSS_VELOCITY_WEIGHT: f64 = 0.4;
pub const CSS_VENUE_WEIGHT: f64 = 0.4;
pub const CSS_ARTIFACT_WEIGHT: f64 = 0.2;

/// Artifact term for one kind of artifact; both kinds double it
pub const ARTIFACT_STEP: f64 = 0.1;

/// The score has no reference entropy term; no data source exists for it.
pub const CSS_FORMULA: &str = "CSS = 0.4×V + 0.4×W + 0.2×N (reference entropy E omitted: no data)";

/// Trajectory ratio thresholds against the bucket average
pub const ACCELERATING_RATIO: f64 = 1.25;
pub const DECAYING_RATIO: f64 = 0.75;

const RECENT_COLOR: (f64, f64, f64) = (26.0, 115.0, 232.0);
const OLD_COLOR: (f64, f64, f64) = (154.0, 160.0, 166.0);
const UNKNOWN_AGE_COLOR: &str = "#9aa0a6";
const COLOR_RAMP_START: f64 = 2.0;
const COLOR_RAMP_END: f64 = 10.0;

/// Whole years since publication, at least one
pub fn years_since(year: i32, current_year: i32) -> i32 {
    (current_year - year).max(1)
}

/// Citations per year since publication. `None` without a year or a count.
pub fn velocity(citations: Option<u64>, year: Option<i32>, current_year: i32) -> Option<f64> {
    let citations = citations?;
    let year = year?;
    Some(citations as f64 / years_since(year, current_year) as f64)
}

/// "25/yr" at ten and above, "2.5/yr" below
pub fn format_velocity(velocity: f64) -> String {
    if velocity >= 10.0 {
        format!("{}/yr", velocity.round() as i64)
    } else {
        format!("{:.1}/yr", velocity)
    }
}

/// Hex colour for a paper's age: blue up to 2 years, grey from 10 years,
/// linear in between. Unknown or negative ages are grey.
pub fn age_bias_color(years_ago: Option<i32>) -> String {
    let years_ago = match years_ago {
        Some(y) if y >= 0 => y as f64,
        _ => return UNKNOWN_AGE_COLOR.to_string(),
    };
    let t = ((years_ago - COLOR_RAMP_START) / (COLOR_RAMP_END - COLOR_RAMP_START)).clamp(0.0, 1.0);
    let mix = |a: f64, b: f64| (a + t * (b - a)).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(RECENT_COLOR.0, OLD_COLOR.0),
        mix(RECENT_COLOR.1, OLD_COLOR.1),
        mix(RECENT_COLOR.2, OLD_COLOR.2)
    )
}

/// Log-compressed velocity in [0, 1]
pub fn normalized_velocity(velocity: f64) -> f64 {
    if velocity <= 0.0 {
        return 0.0;
    }
    ((1.0 + velocity).ln() / (1.0 + VELOCITY_SATURATION).ln()).min(1.0)
}

/// 0, 0.1 or 0.2 depending on how many artifact kinds were found
pub fn artifact_term(artifacts: Artifacts) -> f64 {
    (artifacts.code as u8 + artifacts.data as u8) as f64 * ARTIFACT_STEP
}

/// Contribution signal score with its terms
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionScore {
    /// 0-100
    pub score: u32,
    pub v_norm: f64,
    pub venue_weight: f64,
    pub artifacts: f64,
    pub velocity: f64,
}

/// Heuristic contribution estimate for one paper.
///
/// `None` without a publication year. A missing citation count counts as
/// zero velocity.
pub fn contribution_score(
    citations: Option<u64>,
    year: Option<i32>,
    venue_weight: f64,
    artifacts: Artifacts,
    current_year: i32,
) -> Option<ContributionScore> {
    let year = year?;
    let velocity = citations.unwrap_or(0) as f64 / years_since(year, current_year) as f64;
    let v_norm = normalized_velocity(velocity);
    let n = artifact_term(artifacts);
    let raw = CSS_VELOCITY_WEIGHT * v_norm + CSS_VENUE_WEIGHT * venue_weight + CSS_ARTIFACT_WEIGHT * n;

    Some(ContributionScore {
        score: (raw * 100.0).round().clamp(0.0, 100.0) as u32,
        v_norm,
        venue_weight,
        artifacts: n,
        velocity,
    })
}

/// Career-age bucket used to compare velocities of papers of similar age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityBucket {
    Early,
    Mid,
    Late,
}

impl VelocityBucket {
    pub fn for_years_ago(years_ago: i32) -> Self {
        match years_ago {
            y if y <= 3 => VelocityBucket::Early,
            y if y <= 7 => VelocityBucket::Mid,
            _ => VelocityBucket::Late,
        }
    }
}

/// Mean velocity per age bucket; zero for empty buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BucketAverages {
    pub early: f64,
    pub mid: f64,
    pub late: f64,
}

impl BucketAverages {
    /// From `(velocity, years_ago)` pairs
    pub fn from_samples(samples: &[(f64, i32)]) -> Self {
        let mut sums = [0.0f64; 3];
        let mut counts = [0usize; 3];
        for &(velocity, years_ago) in samples {
            let slot = VelocityBucket::for_years_ago(years_ago) as usize;
            sums[slot] += velocity;
            counts[slot] += 1;
        }
        let avg = |i: usize| if counts[i] > 0 { sums[i] / counts[i] as f64 } else { 0.0 };
        Self {
            early: avg(0),
            mid: avg(1),
            late: avg(2),
        }
    }

    pub fn get(&self, bucket: VelocityBucket) -> f64 {
        match bucket {
            VelocityBucket::Early => self.early,
            VelocityBucket::Mid => self.mid,
            VelocityBucket::Late => self.late,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Accelerating,
    Stable,
    Decaying,
}

impl Trajectory {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trajectory::Accelerating => "↑",
            Trajectory::Stable => "→",
            Trajectory::Decaying => "↓",
        }
    }
}

/// Compare a paper's velocity with the average of its age bucket.
/// `None` for zero velocity or an empty bucket.
pub fn velocity_trajectory(velocity: f64, years_ago: i32, averages: &BucketAverages) -> Option<Trajectory> {
    if velocity <= 0.0 || years_ago <= 0 {
        return None;
    }
    let avg = averages.get(VelocityBucket::for_years_ago(years_ago));
    if !avg.is_finite() || avg <= 0.0 {
        return None;
    }
    let ratio = velocity / avg;
    Some(if ratio >= ACCELERATING_RATIO {
        Trajectory::Accelerating
    } else if ratio <= DECAYING_RATIO {
        Trajectory::Decaying
    } else {
        Trajectory::Stable
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity() {
        assert_eq!(velocity(Some(100), Some(2016), 2026), Some(10.0));
        // same-year papers divide by one
        assert_eq!(velocity(Some(7), Some(2026), 2026), Some(7.0));
        assert_eq!(velocity(Some(7), None, 2026), None);
        assert_eq!(velocity(None, Some(2020), 2026), None);
        assert_eq!(format_velocity(25.4), "25/yr");
        assert_eq!(format_velocity(2.54), "2.5/yr");
    }

    #[test]
    fn test_age_bias_color() {
        assert_eq!(age_bias_color(Some(0)), "#1a73e8");
        assert_eq!(age_bias_color(Some(2)), "#1a73e8");
        assert_eq!(age_bias_color(Some(10)), "#9aa0a6");
        assert_eq!(age_bias_color(Some(30)), "#9aa0a6");
        assert_eq!(age_bias_color(None), "#9aa0a6");
        assert_eq!(age_bias_color(Some(-1)), "#9aa0a6");
        // halfway: (26+154)/2=90, (115+160)/2=137.5->138, (232+166)/2=199
        assert_eq!(age_bias_color(Some(6)), "#5a8ac7");
    }

    #[test]
    fn test_normalized_velocity_saturates() {
        assert_eq!(normalized_velocity(0.0), 0.0);
        assert!((normalized_velocity(20.0) - 1.0).abs() < 1e-12);
        assert_eq!(normalized_velocity(500.0), 1.0);
        assert!(normalized_velocity(5.0) > 0.5 && normalized_velocity(5.0) < 0.6);
    }

    #[test]
    fn test_contribution_score() {
        let both = Artifacts { code: true, data: true };
        let css = contribution_score(Some(200), Some(2016), 0.95, both, 2026).unwrap();
        // 0.4*1 + 0.4*0.95 + 0.2*0.2 = 0.82
        assert_eq!(css.score, 82);
        assert_eq!(css.artifacts, 0.2);

        let css = contribution_score(None, Some(2020), 0.2, Artifacts::default(), 2026).unwrap();
        assert_eq!(css.velocity, 0.0);
        assert_eq!(css.score, 8);

        assert!(contribution_score(Some(10), None, 0.5, Artifacts::default(), 2026).is_none());
        assert_eq!(artifact_term(Artifacts { code: true, data: false }), 0.1);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(VelocityBucket::for_years_ago(1), VelocityBucket::Early);
        assert_eq!(VelocityBucket::for_years_ago(3), VelocityBucket::Early);
        assert_eq!(VelocityBucket::for_years_ago(7), VelocityBucket::Mid);
        assert_eq!(VelocityBucket::for_years_ago(8), VelocityBucket::Late);

        let avg = BucketAverages::from_samples(&[(10.0, 1), (20.0, 2), (4.0, 9)]);
        assert_eq!(avg.early, 15.0);
        assert_eq!(avg.mid, 0.0);
        assert_eq!(avg.late, 4.0);
    }

    #[test]
    fn test_trajectory() {
        let avg = BucketAverages { early: 10.0, mid: 5.0, late: 0.0 };
        assert_eq!(velocity_trajectory(13.0, 2, &avg), Some(Trajectory::Accelerating));
        assert_eq!(velocity_trajectory(7.0, 2, &avg), Some(Trajectory::Decaying));
        assert_eq!(velocity_trajectory(5.0, 5, &avg), Some(Trajectory::Stable));
        assert_eq!(velocity_trajectory(5.0, 12, &avg), None);
        assert_eq!(velocity_trajectory(0.0, 2, &avg), None);
        assert_eq!(Trajectory::Decaying.arrow(), "↓");
    }
}
