//! Job tracks, positions, and the companies that offer them.
//!
//! Positions are grouped into ladders, one per [`JobTrack`]. A ladder is an
//! ordered list: rank 0 is the entry position and each rank's successor is
//! the next entry in the list. Promotion chains therefore cannot loop.
//!
//! Both the position catalog and the company directory are static data,
//! loaded once from JSON and read-only afterwards.
//!
//! ```
//! use bitnode_logic::catalog::{JobTrack, PositionCatalog};
//!
//! let catalog = PositionCatalog::from_json(r#"[
//!     { "track": "Waiter", "positions": [ { "name": "Waiter" } ] }
//! ]"#).unwrap();
//! let waiter = catalog.entry(JobTrack::Waiter).unwrap();
//! assert!(catalog.next(waiter.id).is_none());
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The family of jobs a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobTrack {
    Software,
    SoftwareConsultant,
    It,
    SecurityEngineer,
    NetworkEngineer,
    Business,
    BusinessConsultant,
    Security,
    Agent,
    Employee,
    PartTimeEmployee,
    Waiter,
    PartTimeWaiter,
}

impl JobTrack {
    pub fn label(self) -> &'static str {
        match self {
            JobTrack::Software => "Software",
            JobTrack::SoftwareConsultant => "Software Consultant",
            JobTrack::It => "IT",
            JobTrack::SecurityEngineer => "Security Engineer",
            JobTrack::NetworkEngineer => "Network Engineer",
            JobTrack::Business => "Business",
            JobTrack::BusinessConsultant => "Business Consultant",
            JobTrack::Security => "Security",
            JobTrack::Agent => "Agent",
            JobTrack::Employee => "Employee",
            JobTrack::PartTimeEmployee => "Part-time Employee",
            JobTrack::Waiter => "Waiter",
            JobTrack::PartTimeWaiter => "Part-time Waiter",
        }
    }
}

impl fmt::Display for JobTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum stats and company reputation a position asks for.
///
/// Stat requirements here are the base values; a company's
/// `job_stat_req_offset` is added on top of every non-zero stat (see
/// [`Requirements::with_offset`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub hacking: u32,
    pub strength: u32,
    pub defense: u32,
    pub dexterity: u32,
    pub agility: u32,
    pub charisma: u32,
    pub reputation: f64,
}

impl Requirements {
    /// Apply a company's stat offset. Zero requirements stay zero and the
    /// reputation requirement is never offset.
    pub fn with_offset(&self, offset: u32) -> Self {
        let bump = |r: u32| if r > 0 { r.saturating_add(offset) } else { 0 };
        Self {
            hacking: bump(self.hacking),
            strength: bump(self.strength),
            defense: bump(self.defense),
            dexterity: bump(self.dexterity),
            agility: bump(self.agility),
            charisma: bump(self.charisma),
            reputation: self.reputation,
        }
    }

    /// Stat requirements in hacking, strength, defense, dexterity, agility,
    /// charisma order.
    pub fn stats(&self) -> [u32; 6] {
        [
            self.hacking,
            self.strength,
            self.defense,
            self.dexterity,
            self.agility,
            self.charisma,
        ]
    }
}

/// Index of a position within a [`PositionCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u16);

/// One rung on a job ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    pub track: JobTrack,
    /// 0 for the entry position of the track.
    pub rank: u8,
    pub requirements: Requirements,
    /// Money per second before multipliers.
    pub base_salary: f64,
    /// Company reputation per second before multipliers.
    pub rep_gain: f64,
}

/// Error loading or cross-referencing job data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed job data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("position {0:?} is defined more than once")]
    DuplicatePosition(String),
    #[error("job track {0} has more than one ladder")]
    DuplicateTrack(JobTrack),
    #[error("job track {0} has no positions")]
    EmptyLadder(JobTrack),
    #[error("catalog holds more positions than can be indexed")]
    TooManyPositions,
    #[error("job track {0} has more rungs than can be ranked")]
    LadderTooLong(JobTrack),
    #[error("company {0:?} is defined more than once")]
    DuplicateCompany(String),
    #[error("company {company:?} offers unknown position {position:?}")]
    UnknownPosition { company: String, position: String },
}

#[derive(Debug, Deserialize)]
struct LadderSpec {
    track: JobTrack,
    positions: Vec<PositionSpec>,
}

#[derive(Debug, Deserialize)]
struct PositionSpec {
    name: String,
    #[serde(default)]
    requirements: Requirements,
    #[serde(default)]
    base_salary: f64,
    #[serde(default)]
    rep_gain: f64,
}

/// Every position in the game, grouped into ordered ladders.
#[derive(Debug, Clone, Default)]
pub struct PositionCatalog {
    /// Ladders are stored back to back; a track's positions are contiguous
    /// and in rank order.
    positions: Vec<Position>,
    by_name: HashMap<String, PositionId>,
    entries: HashMap<JobTrack, PositionId>,
}

impl PositionCatalog {
    /// Load from a JSON array of `{ track, positions: [...] }` ladders.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let ladders: Vec<LadderSpec> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for ladder in ladders {
            catalog.push_ladder(ladder)?;
        }
        Ok(catalog)
    }

    fn push_ladder(&mut self, ladder: LadderSpec) -> Result<(), CatalogError> {
        if self.entries.contains_key(&ladder.track) {
            return Err(CatalogError::DuplicateTrack(ladder.track));
        }
        if ladder.positions.is_empty() {
            return Err(CatalogError::EmptyLadder(ladder.track));
        }
        for (rank, spec) in ladder.positions.into_iter().enumerate() {
            if self.by_name.contains_key(&spec.name) {
                return Err(CatalogError::DuplicatePosition(spec.name));
            }
            let id = u16::try_from(self.positions.len())
                .map(PositionId)
                .map_err(|_| CatalogError::TooManyPositions)?;
            let rank =
                u8::try_from(rank).map_err(|_| CatalogError::LadderTooLong(ladder.track))?;
            if rank == 0 {
                self.entries.insert(ladder.track, id);
            }
            self.by_name.insert(spec.name.clone(), id);
            self.positions.push(Position {
                id,
                name: spec.name,
                track: ladder.track,
                rank,
                requirements: spec.requirements,
                base_salary: spec.base_salary,
                rep_gain: spec.rep_gain,
            });
        }
        Ok(())
    }

    pub fn get(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&Position> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// Entry-level position of a track.
    pub fn entry(&self, track: JobTrack) -> Option<&Position> {
        self.entries.get(&track).and_then(|&id| self.get(id))
    }

    /// The position one rank above `id` on the same ladder, if any.
    pub fn next(&self, id: PositionId) -> Option<&Position> {
        let current = self.get(id)?;
        self.positions
            .get(id.0 as usize + 1)
            .filter(|next| next.track == current.track)
    }

    /// All positions of a track, in rank order.
    pub fn ladder(&self, track: JobTrack) -> impl Iterator<Item = &Position> {
        self.positions.iter().filter(move |p| p.track == track)
    }

    /// Tracks present in the catalog, in load order.
    pub fn tracks(&self) -> Vec<JobTrack> {
        let mut tracks: Vec<JobTrack> = Vec::new();
        for p in &self.positions {
            if tracks.last() != Some(&p.track) {
                tracks.push(p.track);
            }
        }
        tracks
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// An employer and the positions it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    /// Names of the positions this company has.
    pub positions: BTreeSet<String>,
    /// Added to every non-zero stat requirement at this company.
    #[serde(default)]
    pub job_stat_req_offset: u32,
    /// Reputation the player currently has here.
    #[serde(default)]
    pub reputation: f64,
}

impl Company {
    pub fn has_position(&self, position: &Position) -> bool {
        self.positions.contains(&position.name)
    }
}

/// All companies, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    /// Load from a JSON array of companies, checking every offered position
    /// against `catalog`.
    pub fn from_json(json: &str, catalog: &PositionCatalog) -> Result<Self, CatalogError> {
        let companies: Vec<Company> = serde_json::from_str(json)?;
        let mut seen = BTreeSet::new();
        for company in &companies {
            if !seen.insert(company.name.as_str()) {
                return Err(CatalogError::DuplicateCompany(company.name.clone()));
            }
            if let Some(unknown) = company
                .positions
                .iter()
                .find(|name| catalog.by_name(name).is_none())
            {
                return Err(CatalogError::UnknownPosition {
                    company: company.name.clone(),
                    position: unknown.clone(),
                });
            }
        }
        Ok(Self { companies })
    }

    pub fn get(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Company> {
        self.companies.iter_mut().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// A non-fatal data problem found by [`validate_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// Company offers no positions at all.
    NoPositions(String),
    /// Company offers a rung without the entry position of its track, so
    /// nobody can be hired onto that ladder there.
    NoEntryPosition { company: String, track: JobTrack },
    /// A ladder's requirements drop from one rank to the next.
    RequirementsDecrease { track: JobTrack, rank: u8 },
}

/// Check loaded data for suspicious but loadable content, returning every
/// problem found.
pub fn validate_directory(
    catalog: &PositionCatalog,
    companies: &CompanyDirectory,
) -> Vec<DataWarning> {
    let mut warnings = Vec::new();

    for track in catalog.tracks() {
        let rungs: Vec<&Position> = catalog.ladder(track).collect();
        for pair in rungs.windows(2) {
            let (lower, upper) = (&pair[0].requirements, &pair[1].requirements);
            let stat_drop = lower
                .stats()
                .iter()
                .zip(upper.stats())
                .any(|(&lo, hi)| hi < lo);
            if stat_drop || upper.reputation < lower.reputation {
                warnings.push(DataWarning::RequirementsDecrease {
                    track,
                    rank: pair[1].rank,
                });
            }
        }
    }

    for company in companies.iter() {
        if company.positions.is_empty() {
            warnings.push(DataWarning::NoPositions(company.name.clone()));
            continue;
        }
        let tracks: BTreeSet<JobTrack> = company
            .positions
            .iter()
            .filter_map(|name| catalog.by_name(name))
            .map(|p| p.track)
            .collect();
        for track in tracks {
            let has_entry = catalog.entry(track).is_some_and(|e| company.has_position(e));
            if !has_entry {
                warnings.push(DataWarning::NoEntryPosition {
                    company: company.name.clone(),
                    track,
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const LADDERS: &str = r#"[
        { "track": "Software", "positions": [
            { "name": "Intern", "requirements": { "hacking": 1 }, "base_salary": 33.0, "rep_gain": 0.9 },
            { "name": "Junior", "requirements": { "hacking": 51, "reputation": 8000 } },
            { "name": "Senior", "requirements": { "hacking": 251, "charisma": 51, "reputation": 40000 } }
        ] },
        { "track": "Waiter", "positions": [ { "name": "Waiter" } ] }
    ]"#;

    fn catalog() -> PositionCatalog {
        PositionCatalog::from_json(LADDERS).unwrap()
    }

    #[test]
    fn ladders_are_ranked_in_order() {
        let cat = catalog();
        let ranks: Vec<(&str, u8)> = cat
            .ladder(JobTrack::Software)
            .map(|p| (p.name.as_str(), p.rank))
            .collect();
        assert_eq!(ranks, vec![("Intern", 0), ("Junior", 1), ("Senior", 2)]);
        assert_eq!(cat.len(), 4);
        assert_eq!(cat.tracks(), vec![JobTrack::Software, JobTrack::Waiter]);
    }

    #[test]
    fn next_stays_on_the_same_ladder() {
        let cat = catalog();
        let senior = cat.by_name("Senior").unwrap();
        // The waiter ladder follows directly in storage but is another track
        assert!(cat.next(senior.id).is_none());
        let intern = cat.entry(JobTrack::Software).unwrap();
        assert_eq!(cat.next(intern.id).unwrap().name, "Junior");
    }

    #[test]
    fn missing_fields_default() {
        let cat = catalog();
        let waiter = cat.by_name("Waiter").unwrap();
        assert_eq!(waiter.requirements, Requirements::default());
        assert_eq!(waiter.base_salary, 0.0);
        let intern = cat.by_name("Intern").unwrap();
        assert_eq!(intern.base_salary, 33.0);
    }

    #[test]
    fn unknown_id_has_no_position() {
        let cat = catalog();
        assert!(cat.get(PositionId(999)).is_none());
        assert!(cat.next(PositionId(999)).is_none());
        assert!(cat.entry(JobTrack::Agent).is_none());
    }

    #[test]
    fn duplicate_position_rejected() {
        let json = r#"[
            { "track": "Software", "positions": [ { "name": "Intern" } ] },
            { "track": "It", "positions": [ { "name": "Intern" } ] }
        ]"#;
        assert!(matches!(
            PositionCatalog::from_json(json),
            Err(CatalogError::DuplicatePosition(name)) if name == "Intern"
        ));
    }

    #[test]
    fn duplicate_track_rejected() {
        let json = r#"[
            { "track": "Waiter", "positions": [ { "name": "A" } ] },
            { "track": "Waiter", "positions": [ { "name": "B" } ] }
        ]"#;
        assert!(matches!(
            PositionCatalog::from_json(json),
            Err(CatalogError::DuplicateTrack(JobTrack::Waiter))
        ));
    }

    #[test]
    fn empty_ladder_rejected() {
        let json = r#"[ { "track": "Agent", "positions": [] } ]"#;
        assert!(matches!(
            PositionCatalog::from_json(json),
            Err(CatalogError::EmptyLadder(JobTrack::Agent))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PositionCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            PositionCatalog::from_json(r#"[ { "track": "Astronaut", "positions": [] } ]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn offset_skips_zero_requirements() {
        let req = Requirements {
            hacking: 251,
            charisma: 51,
            reputation: 40000.0,
            ..Default::default()
        };
        let adjusted = req.with_offset(249);
        assert_eq!(adjusted.hacking, 500);
        assert_eq!(adjusted.charisma, 300);
        assert_eq!(adjusted.strength, 0);
        assert_eq!(adjusted.reputation, 40000.0);
    }

    #[test]
    fn company_offers_by_name() {
        let cat = catalog();
        let companies = CompanyDirectory::from_json(
            r#"[ { "name": "ECorp", "positions": ["Intern", "Junior"], "job_stat_req_offset": 249 } ]"#,
            &cat,
        )
        .unwrap();
        let ecorp = companies.get("ECorp").unwrap();
        assert!(ecorp.has_position(cat.by_name("Junior").unwrap()));
        assert!(!ecorp.has_position(cat.by_name("Senior").unwrap()));
        assert_eq!(ecorp.reputation, 0.0);
    }

    #[test]
    fn company_with_unknown_position_rejected() {
        let err = CompanyDirectory::from_json(
            r#"[ { "name": "ECorp", "positions": ["Janitor"] } ]"#,
            &catalog(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"company "ECorp" offers unknown position "Janitor""#
        );
    }

    #[test]
    fn duplicate_company_rejected() {
        let err = CompanyDirectory::from_json(
            r#"[ { "name": "ECorp", "positions": [] }, { "name": "ECorp", "positions": [] } ]"#,
            &catalog(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCompany(_)));
    }

    #[test]
    fn validation_reports_every_problem() {
        let cat = catalog();
        let companies = CompanyDirectory::from_json(
            r#"[
                { "name": "Empty", "positions": [] },
                { "name": "TopOnly", "positions": ["Senior"] },
                { "name": "Fine", "positions": ["Intern", "Junior", "Waiter"] }
            ]"#,
            &cat,
        )
        .unwrap();
        let warnings = validate_directory(&cat, &companies);
        assert_eq!(
            warnings,
            vec![
                DataWarning::NoPositions("Empty".into()),
                DataWarning::NoEntryPosition {
                    company: "TopOnly".into(),
                    track: JobTrack::Software
                },
            ]
        );
    }

    #[test]
    fn validation_flags_decreasing_requirements() {
        let json = r#"[ { "track": "It", "positions": [
            { "name": "A", "requirements": { "hacking": 100 } },
            { "name": "B", "requirements": { "hacking": 50 } }
        ] } ]"#;
        let cat = PositionCatalog::from_json(json).unwrap();
        let warnings = validate_directory(&cat, &CompanyDirectory::default());
        assert_eq!(
            warnings,
            vec![DataWarning::RequirementsDecrease {
                track: JobTrack::It,
                rank: 1
            }]
        );
    }

    #[test]
    fn validation_flags_combat_requirement_drops() {
        let json = r#"[ { "track": "Security", "positions": [
            { "name": "Guard", "requirements": { "strength": 300, "defense": 300 } },
            { "name": "Officer", "requirements": { "strength": 50, "defense": 50 } },
            { "name": "Chief", "requirements": { "strength": 50, "defense": 50, "agility": 10 } }
        ] } ]"#;
        let cat = PositionCatalog::from_json(json).unwrap();
        let warnings = validate_directory(&cat, &CompanyDirectory::default());
        assert_eq!(
            warnings,
            vec![DataWarning::RequirementsDecrease {
                track: JobTrack::Security,
                rank: 1
            }]
        );
    }

    #[test]
    fn ladder_longer_than_rank_range_rejected() {
        let rungs: Vec<String> = (0..300)
            .map(|i| format!(r#"{{ "name": "Rung {i}" }}"#))
            .collect();
        let json = format!(
            r#"[ {{ "track": "Employee", "positions": [ {} ] }} ]"#,
            rungs.join(", ")
        );
        assert!(matches!(
            PositionCatalog::from_json(&json),
            Err(CatalogError::LadderTooLong(JobTrack::Employee))
        ));
    }

    #[test]
    fn stats_follow_field_order() {
        let req = Requirements {
            hacking: 1,
            strength: 2,
            defense: 3,
            dexterity: 4,
            agility: 5,
            charisma: 6,
            reputation: 7.0,
        };
        assert_eq!(req.stats(), [1, 2, 3, 4, 5, 6]);
    }
}
