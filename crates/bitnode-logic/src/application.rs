//! Apply-to-job hints.
//!
//! A company's job listing shows one "apply" action per job track. Its
//! hint tells the player what applying would do: nothing if they already
//! hold the top rung, nothing if the company lacks the next rung, or else
//! which stats and reputation the next rung needs.
//!
//! Hints are derived on demand from the current player snapshot; there is
//! no cached state to keep in sync.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Company, JobTrack, Position, PositionCatalog, PositionId};
use crate::player::PlayerStats;

/// The position an application on `entry`'s track would target.
///
/// If the player currently works at `company` on the same track, that is
/// the rung above their current job (`None` at the top of the ladder).
/// Otherwise it is `entry` itself.
pub fn next_position_for<'a>(
    catalog: &'a PositionCatalog,
    player: &PlayerStats,
    company: &Company,
    entry: PositionId,
) -> Option<&'a Position> {
    let entry = catalog.get(entry)?;
    if player.works_for(company) {
        if let Some(current) = player.job_at(catalog, company) {
            if current.track == entry.track {
                return catalog.next(current.id);
            }
        }
    }
    Some(entry)
}

/// What applying on a track would lead to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApplicationHint {
    /// Already holding the top rung of this track.
    AtHighestPosition { track: JobTrack },
    /// The next rung exists but this company does not offer it.
    NotOffered { position: String, company: String },
    /// The next rung is offered; lists what it requires.
    Requirements { position: String, text: String },
}

impl fmt::Display for ApplicationHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationHint::AtHighestPosition { track } => write!(
                f,
                "You are already at the highest position for {track}! No promotion available"
            ),
            ApplicationHint::NotOffered { position, company } => {
                write!(f, "{position} is not available for {company}")
            }
            ApplicationHint::Requirements { text, .. } => f.write_str(text),
        }
    }
}

/// Hint for applying on `entry`'s track at `company`.
///
/// Returns `None` only if `entry` is not in the catalog.
pub fn application_hint(
    catalog: &PositionCatalog,
    player: &PlayerStats,
    company: &Company,
    entry: PositionId,
) -> Option<ApplicationHint> {
    let track = catalog.get(entry)?.track;
    let hint = match next_position_for(catalog, player, company, entry) {
        None => ApplicationHint::AtHighestPosition { track },
        Some(pos) if !company.has_position(pos) => ApplicationHint::NotOffered {
            position: pos.name.clone(),
            company: company.name.clone(),
        },
        Some(pos) => ApplicationHint::Requirements {
            position: pos.name.clone(),
            text: requirement_text(company, pos, RequirementStyle::Tooltip),
        },
    };
    Some(hint)
}

/// Layout of [`requirement_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementStyle {
    /// One line per requirement, all stats listed.
    Tooltip,
    /// Single line, only the requirements that apply.
    Inline,
}

/// Human-readable requirements of `position` at `company`, with the
/// company's stat offset already applied.
pub fn requirement_text(
    company: &Company,
    position: &Position,
    style: RequirementStyle,
) -> String {
    let req = position
        .requirements
        .with_offset(company.job_stat_req_offset);
    let stats = [
        (req.hacking, "hacking"),
        (req.strength, "strength"),
        (req.defense, "defense"),
        (req.dexterity, "dexterity"),
        (req.agility, "agility"),
        (req.charisma, "charisma"),
    ];

    match style {
        RequirementStyle::Tooltip => {
            let mut lines = vec!["Requires:".to_string()];
            lines.extend(stats.iter().map(|(v, name)| format!("{v} {name}")));
            lines.push(format!("{} reputation", format_reputation(req.reputation)));
            lines.join("\n")
        }
        RequirementStyle::Inline => {
            let mut parts: Vec<String> = stats
                .iter()
                .filter(|(v, _)| *v > 0)
                .map(|(v, name)| format!("{v} {name}"))
                .collect();
            if req.reputation > 0.0 {
                parts.push(format!("{} rep", format_reputation(req.reputation)));
            }
            if parts.is_empty() {
                String::new()
            } else {
                format!("(Requires {})", parts.join(", "))
            }
        }
    }
}

/// Shortest form that round-trips: whole numbers print without a
/// fractional part, `1234.5` stays `1234.5`.
fn format_reputation(rep: f64) -> String {
    format!("{rep}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CompanyDirectory;

    const LADDERS: &str = r#"[
        { "track": "Software", "positions": [
            { "name": "Software Engineering Intern", "requirements": { "hacking": 1 } },
            { "name": "Junior Software Engineer", "requirements": { "hacking": 51, "reputation": 8000 } },
            { "name": "Senior Software Engineer", "requirements": { "hacking": 251, "charisma": 51, "reputation": 40000 } }
        ] },
        { "track": "Business", "positions": [ { "name": "Business Intern", "requirements": { "charisma": 1 } } ] }
    ]"#;

    const COMPANIES: &str = r#"[
        { "name": "ECorp", "positions": [
            "Software Engineering Intern", "Junior Software Engineer", "Senior Software Engineer",
            "Business Intern"
        ], "job_stat_req_offset": 249 },
        { "name": "Noodle Bar", "positions": [ "Software Engineering Intern" ] }
    ]"#;

    fn setup() -> (PositionCatalog, CompanyDirectory) {
        let catalog = PositionCatalog::from_json(LADDERS).unwrap();
        let companies = CompanyDirectory::from_json(COMPANIES, &catalog).unwrap();
        (catalog, companies)
    }

    fn employed(company: &str, position: &str) -> PlayerStats {
        PlayerStats {
            current_company: Some(company.into()),
            jobs: [(company.to_string(), position.to_string())].into(),
            ..Default::default()
        }
    }

    #[test]
    fn newcomer_targets_entry_position() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap();
        let next = next_position_for(&cat, &PlayerStats::default(), ecorp, entry.id).unwrap();
        assert_eq!(next.id, entry.id);
    }

    #[test]
    fn employee_targets_rung_above_current_job() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let player = employed("ECorp", "Junior Software Engineer");
        let next = next_position_for(&cat, &player, ecorp, entry).unwrap();
        assert_eq!(next.name, "Senior Software Engineer");
    }

    #[test]
    fn job_on_another_track_targets_entry() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let player = employed("ECorp", "Business Intern");
        let next = next_position_for(&cat, &player, ecorp, entry).unwrap();
        assert_eq!(next.id, entry);
    }

    #[test]
    fn job_at_another_company_is_ignored() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let mut player = employed("Noodle Bar", "Software Engineering Intern");
        player
            .jobs
            .insert("ECorp".into(), "Junior Software Engineer".into());
        // Holds a job at ECorp but is currently working at the Noodle Bar
        let next = next_position_for(&cat, &player, ecorp, entry).unwrap();
        assert_eq!(next.id, entry);
    }

    #[test]
    fn hint_at_top_of_ladder() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let player = employed("ECorp", "Senior Software Engineer");
        let hint = application_hint(&cat, &player, ecorp, entry).unwrap();
        assert_eq!(
            hint,
            ApplicationHint::AtHighestPosition {
                track: JobTrack::Software
            }
        );
        assert_eq!(
            hint.to_string(),
            "You are already at the highest position for Software! No promotion available"
        );
    }

    #[test]
    fn hint_when_next_rung_not_offered() {
        let (cat, cos) = setup();
        let bar = cos.get("Noodle Bar").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let player = employed("Noodle Bar", "Software Engineering Intern");
        let hint = application_hint(&cat, &player, bar, entry).unwrap();
        assert_eq!(
            hint.to_string(),
            "Junior Software Engineer is not available for Noodle Bar"
        );
    }

    #[test]
    fn hint_lists_offset_requirements() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let entry = cat.entry(JobTrack::Software).unwrap().id;
        let player = employed("ECorp", "Junior Software Engineer");
        let hint = application_hint(&cat, &player, ecorp, entry).unwrap();
        let ApplicationHint::Requirements { position, text } = hint else {
            panic!("expected requirements hint");
        };
        assert_eq!(position, "Senior Software Engineer");
        assert_eq!(
            text,
            "Requires:\n500 hacking\n0 strength\n0 defense\n0 dexterity\n0 agility\n300 charisma\n40000 reputation"
        );
    }

    #[test]
    fn hint_for_unknown_entry_is_none() {
        let (cat, cos) = setup();
        let ecorp = cos.get("ECorp").unwrap();
        let hint = application_hint(&cat, &PlayerStats::default(), ecorp, PositionId(500));
        assert!(hint.is_none());
    }

    #[test]
    fn inline_text_skips_zero_requirements() {
        let (cat, cos) = setup();
        let bar = cos.get("Noodle Bar").unwrap();
        let junior = cat.by_name("Junior Software Engineer").unwrap();
        assert_eq!(
            requirement_text(bar, junior, RequirementStyle::Inline),
            "(Requires 51 hacking, 8000 rep)"
        );
    }

    #[test]
    fn inline_text_empty_without_requirements() {
        let catalog = PositionCatalog::from_json(
            r#"[ { "track": "Waiter", "positions": [ { "name": "Waiter" } ] } ]"#,
        )
        .unwrap();
        let companies = CompanyDirectory::from_json(
            r#"[ { "name": "Diner", "positions": ["Waiter"] } ]"#,
            &catalog,
        )
        .unwrap();
        let waiter = catalog.by_name("Waiter").unwrap();
        let diner = companies.get("Diner").unwrap();
        assert_eq!(requirement_text(diner, waiter, RequirementStyle::Inline), "");
    }

    #[test]
    fn fractional_reputation_keeps_decimals() {
        assert_eq!(format_reputation(1234.5), "1234.5");
        assert_eq!(format_reputation(0.25), "0.25");
        assert_eq!(format_reputation(8000.0), "8000");
    }
}
