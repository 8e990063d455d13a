//! Position ladder resolution.
//!
//! When the player applies for a job, they are hired at the highest rung of
//! the ladder they currently qualify for, starting from some position
//! (usually the track's entry level). Climbing stops at the first rung
//! that either does not exist, is not offered by the company, or that the
//! player does not qualify for.
//!
//! ```
//! use bitnode_logic::catalog::{CompanyDirectory, JobTrack, PositionCatalog};
//! use bitnode_logic::ladder::resolve_current_position;
//!
//! let catalog = PositionCatalog::from_json(r#"[ { "track": "It", "positions": [
//!     { "name": "IT Intern" }, { "name": "IT Analyst" }, { "name": "IT Manager" }
//! ] } ]"#).unwrap();
//! let companies = CompanyDirectory::from_json(
//!     r#"[ { "name": "Aevum Police", "positions": ["IT Intern", "IT Analyst"] } ]"#,
//!     &catalog,
//! ).unwrap();
//! let company = companies.get("Aevum Police").unwrap();
//! let start = catalog.entry(JobTrack::It).unwrap().id;
//!
//! // Qualified for everything, but the company stops at IT Analyst
//! let pos = resolve_current_position(&catalog, start, company, |_, _| true);
//! assert_eq!(catalog.get(pos).unwrap().name, "IT Analyst");
//! ```

use crate::catalog::{Company, Position, PositionCatalog, PositionId};
use crate::player::PlayerStats;

/// Highest position reachable from `start` at `offered_by`.
///
/// `is_qualified` decides whether the actor meets a candidate position's
/// requirements; it is only asked about positions the company offers.
/// `start` itself is never checked, neither for qualification nor for
/// being offered, and is returned unchanged if nothing above it is
/// reachable. Always terminates: ladders are finite and each step moves
/// one rank up.
pub fn resolve_current_position<F>(
    catalog: &PositionCatalog,
    start: PositionId,
    offered_by: &Company,
    is_qualified: F,
) -> PositionId
where
    F: Fn(&Company, &Position) -> bool,
{
    let mut current = start;
    while let Some(next) = catalog.next(current) {
        if !offered_by.has_position(next) || !is_qualified(offered_by, next) {
            break;
        }
        current = next.id;
    }
    current
}

/// [`resolve_current_position`] with the player's own stats as the
/// qualification predicate.
pub fn resolve_for_player(
    catalog: &PositionCatalog,
    player: &PlayerStats,
    company: &Company,
    start: PositionId,
) -> PositionId {
    resolve_current_position(catalog, start, company, |c, p| player.is_qualified(c, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CompanyDirectory, JobTrack};
    use std::cell::RefCell;

    const ABC: &str = r#"[
        { "track": "Business", "positions": [
            { "name": "A" },
            { "name": "B", "requirements": { "charisma": 10 } },
            { "name": "C", "requirements": { "charisma": 20 } },
            { "name": "D", "requirements": { "charisma": 30 } }
        ] },
        { "track": "Agent", "positions": [ { "name": "Solo" } ] }
    ]"#;

    fn catalog() -> PositionCatalog {
        PositionCatalog::from_json(ABC).unwrap()
    }

    fn company(cat: &PositionCatalog, offers: &[&str]) -> Company {
        let names: Vec<String> = offers.iter().map(|s| format!("{s:?}")).collect();
        let json = format!(r#"[ {{ "name": "Corp", "positions": [{}] }} ]"#, names.join(","));
        CompanyDirectory::from_json(&json, cat)
            .unwrap()
            .get("Corp")
            .unwrap()
            .clone()
    }

    fn id(cat: &PositionCatalog, name: &str) -> PositionId {
        cat.by_name(name).unwrap().id
    }

    fn name(cat: &PositionCatalog, id: PositionId) -> &str {
        &cat.get(id).unwrap().name
    }

    #[test]
    fn always_qualified_reaches_top() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C", "D"]);
        let pos = resolve_current_position(&cat, id(&cat, "A"), &corp, |_, _| true);
        assert_eq!(name(&cat, pos), "D");
    }

    #[test]
    fn qualification_failure_stops_one_below() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C", "D"]);
        // Qualifies for B and D, but not C: D is never reached
        let pos = resolve_current_position(&cat, id(&cat, "A"), &corp, |_, p| p.name != "C");
        assert_eq!(name(&cat, pos), "B");
    }

    #[test]
    fn unoffered_rung_blocks_even_when_qualified() {
        let cat = catalog();
        let corp = company(&cat, &["A", "C", "D"]);
        let pos = resolve_current_position(&cat, id(&cat, "A"), &corp, |_, _| true);
        assert_eq!(name(&cat, pos), "A");
    }

    #[test]
    fn qualifies_for_b_not_c() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C"]);
        let player = PlayerStats {
            charisma: 15,
            ..Default::default()
        };
        let pos = resolve_for_player(&cat, &player, &corp, id(&cat, "A"));
        assert_eq!(name(&cat, pos), "B");
    }

    #[test]
    fn top_of_ladder_returns_itself() {
        let cat = catalog();
        let corp = company(&cat, &["Solo"]);
        let start = id(&cat, "Solo");
        assert_eq!(
            resolve_current_position(&cat, start, &corp, |_, _| true),
            start
        );
    }

    #[test]
    fn start_need_not_be_offered() {
        let cat = catalog();
        let corp = company(&cat, &["B", "C"]);
        let pos = resolve_current_position(&cat, id(&cat, "A"), &corp, |_, _| true);
        assert_eq!(name(&cat, pos), "C");
    }

    #[test]
    fn result_is_a_fixed_point() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C", "D"]);
        let player = PlayerStats {
            charisma: 25,
            ..Default::default()
        };
        for start in ["A", "B", "C", "D"] {
            let first = resolve_for_player(&cat, &player, &corp, id(&cat, start));
            let again = resolve_for_player(&cat, &player, &corp, first);
            assert_eq!(first, again, "from {start}");
        }
    }

    #[test]
    fn predicate_only_sees_offered_rungs() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B"]);
        let asked = RefCell::new(Vec::new());
        resolve_current_position(&cat, id(&cat, "A"), &corp, |_, p| {
            asked.borrow_mut().push(p.name.clone());
            true
        });
        assert_eq!(*asked.borrow(), vec!["B".to_string()]);
    }

    #[test]
    fn predicate_receives_the_offering_company() {
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C", "D"]);
        let pos = resolve_current_position(&cat, id(&cat, "A"), &corp, |c, _| c.name == "Corp");
        assert_eq!(name(&cat, pos), "D");
    }

    #[test]
    fn chain_length_sweep() {
        // For every cut point k, failing at rank k yields rank k - 1
        let cat = catalog();
        let corp = company(&cat, &["A", "B", "C", "D"]);
        let entry = cat.entry(JobTrack::Business).unwrap().id;
        for k in 1..4u8 {
            let pos = resolve_current_position(&cat, entry, &corp, |_, p| p.rank < k);
            assert_eq!(cat.get(pos).unwrap().rank, k - 1);
        }
    }
}
