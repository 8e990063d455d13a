//! BitNode Headless Validation Harness
//!
//! Validates career logic, shipped job data, and every multiplier table
//! without a game client. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p bitnode-simtest
//!   cargo run -p bitnode-simtest -- --verbose
//!   cargo run -p bitnode-simtest -- --bitnode 12 --sf12 3

use bitnode_logic::application::{application_hint, ApplicationHint};
use bitnode_logic::bitnode::{BitNode, SourceFile, SourceFiles};
use bitnode_logic::catalog::{
    validate_directory, Company, CompanyDirectory, JobTrack, PositionCatalog,
};
use bitnode_logic::constants::MAX_BITNODE;
use bitnode_logic::ladder::{resolve_current_position, resolve_for_player};
use bitnode_logic::multipliers::{BitNodeMultipliers, Multiplier};
use bitnode_logic::player::PlayerStats;
use bitnode_logic::stock_market::StockMarketCosts;
use clap::Parser;
use tracing_subscriber::EnvFilter;

// ── Job data (same JSON the game loads) ─────────────────────────────────
const POSITIONS_JSON: &str = include_str!("../../../data/positions.json");
const COMPANIES_JSON: &str = include_str!("../../../data/companies.json");

#[derive(Debug, Parser)]
#[command(name = "bitnode-simtest", about = "Headless validation of BitNode logic and data")]
struct Args {
    /// Print every check, not just failures.
    #[arg(short, long)]
    verbose: bool,

    /// Also dump the multiplier table for this BitNode as JSON.
    #[arg(long)]
    bitnode: Option<u8>,

    /// Source-File 12 level used for BitNode 12 tables.
    #[arg(long, default_value_t = 0)]
    sf12: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== BitNode Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Job data
    let data = match load_job_data() {
        Ok(data) => data,
        Err(failure) => {
            report(&[failure], args.verbose);
            std::process::exit(1);
        }
    };
    results.extend(validate_job_data(&data));

    // 2. Ladder resolution sweep
    results.extend(validate_ladders(&data));

    // 3. Apply hints
    results.extend(validate_hints(&data));

    // 4. Multiplier tables
    results.extend(validate_multipliers());

    // 5. Stock market costs
    results.extend(validate_stock_market());

    if let Some(n) = args.bitnode {
        dump_multipliers(n, args.sf12);
    }

    if !report(&results, args.verbose) {
        std::process::exit(1);
    }
}

/// Print the summary. Returns `true` when everything passed.
fn report(results: &[TestResult], verbose: bool) -> bool {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    failed == 0
}

// ── 1. Job Data ─────────────────────────────────────────────────────────

struct JobData {
    catalog: PositionCatalog,
    companies: CompanyDirectory,
}

fn load_job_data() -> Result<JobData, TestResult> {
    println!("--- Job Data ---");
    let catalog = PositionCatalog::from_json(POSITIONS_JSON)
        .map_err(|e| check("positions_parse", false, e.to_string()))?;
    let companies = CompanyDirectory::from_json(COMPANIES_JSON, &catalog)
        .map_err(|e| check("companies_parse", false, e.to_string()))?;
    tracing::info!(
        positions = catalog.len(),
        companies = companies.len(),
        "job data loaded"
    );
    Ok(JobData { catalog, companies })
}

fn validate_job_data(data: &JobData) -> Vec<TestResult> {
    let mut results = Vec::new();
    let tracks = data.catalog.tracks();

    results.push(check(
        "catalog_not_empty",
        data.catalog.len() > 20,
        format!(
            "{} positions across {} tracks",
            data.catalog.len(),
            tracks.len()
        ),
    ));

    results.push(check(
        "directory_not_empty",
        !data.companies.is_empty(),
        format!("{} companies", data.companies.len()),
    ));

    let warnings = validate_directory(&data.catalog, &data.companies);
    for w in &warnings {
        tracing::warn!("job data: {w:?}");
    }
    results.push(check(
        "directory_consistent",
        warnings.is_empty(),
        if warnings.is_empty() {
            "every company can hire onto each ladder it offers".to_string()
        } else {
            format!("{} data warnings", warnings.len())
        },
    ));

    let positive_gain: Vec<_> = data
        .catalog
        .positions()
        .iter()
        .filter(|p| p.base_salary <= 0.0 || p.rep_gain <= 0.0)
        .map(|p| p.name.as_str())
        .collect();
    results.push(check(
        "positions_pay",
        positive_gain.is_empty(),
        if positive_gain.is_empty() {
            "all positions have salary and reputation gain".to_string()
        } else {
            format!("unpaid positions: {}", positive_gain.join(", "))
        },
    ));

    results
}

// ── 2. Ladders ──────────────────────────────────────────────────────────

fn validate_ladders(data: &JobData) -> Vec<TestResult> {
    println!("--- Ladder Resolution ---");
    let mut results = Vec::new();
    let catalog = &data.catalog;

    // Unrestricted climb stops at the top or the first unoffered rung
    let mut early_stops = Vec::new();
    let mut climbs = 0;
    for company in data.companies.iter() {
        for track in catalog.tracks() {
            let Some(entry) = catalog.entry(track) else {
                continue;
            };
            let top = resolve_current_position(catalog, entry.id, company, |_, _| true);
            climbs += 1;
            let blocked = catalog
                .next(top)
                .map_or(true, |next| !company.has_position(next));
            if !blocked {
                early_stops.push(format!("{}/{}", company.name, track));
            }
        }
    }
    results.push(check(
        "ladder_unrestricted_climb",
        early_stops.is_empty(),
        if early_stops.is_empty() {
            format!("{climbs} climbs reached their cap")
        } else {
            format!("stopped early: {}", early_stops.join(", "))
        },
    ));

    // Failing at rank k leaves the actor at rank k - 1
    let mut wrong_cut = Vec::new();
    for company in data.companies.iter() {
        for track in catalog.tracks() {
            let rungs: Vec<_> = catalog.ladder(track).collect();
            let offered = rungs.iter().all(|p| company.has_position(p));
            if !offered || rungs.len() < 2 {
                continue;
            }
            for k in 1..rungs.len() as u8 {
                let pos =
                    resolve_current_position(catalog, rungs[0].id, company, |_, p| p.rank < k);
                let rank = catalog.get(pos).map(|p| p.rank);
                if rank != Some(k - 1) {
                    wrong_cut.push(format!("{}/{} cut {}", company.name, track, k));
                }
            }
        }
    }
    results.push(check(
        "ladder_blocked_promotion",
        wrong_cut.is_empty(),
        if wrong_cut.is_empty() {
            "blocked promotions stop one rung below".to_string()
        } else {
            wrong_cut.join(", ")
        },
    ));

    // Resolving again from the result is a fixed point, for a range of players
    let mut not_fixed = 0;
    for level in [1u32, 50, 150, 300, 600, 1000] {
        let player = sample_player(level);
        for company in data.companies.iter() {
            let company = with_reputation(company, level);
            for track in catalog.tracks() {
                let Some(entry) = catalog.entry(track) else {
                    continue;
                };
                let first = resolve_for_player(catalog, &player, &company, entry.id);
                let again = resolve_for_player(catalog, &player, &company, first);
                if first != again {
                    not_fixed += 1;
                }
            }
        }
    }
    results.push(check(
        "ladder_fixed_point",
        not_fixed == 0,
        format!("{not_fixed} non-idempotent resolutions"),
    ));

    // Higher stats never land lower on the same ladder
    let mut regressions = Vec::new();
    for company in data.companies.iter() {
        let Some(entry) = catalog.entry(JobTrack::Software) else {
            break;
        };
        let mut last_rank = 0;
        for level in [1u32, 100, 300, 600, 1000, 2000] {
            let company = with_reputation(company, level);
            let pos = resolve_for_player(catalog, &sample_player(level), &company, entry.id);
            let rank = catalog.get(pos).map_or(0, |p| p.rank);
            if rank < last_rank {
                regressions.push(company.name.clone());
                break;
            }
            last_rank = rank;
        }
    }
    results.push(check(
        "ladder_monotonic_in_stats",
        regressions.is_empty(),
        if regressions.is_empty() {
            "software rank never drops as stats rise".to_string()
        } else {
            regressions.join(", ")
        },
    ));

    results
}

/// A player with every stat at `level`.
fn sample_player(level: u32) -> PlayerStats {
    PlayerStats {
        hacking: level,
        strength: level,
        defense: level,
        dexterity: level,
        agility: level,
        charisma: level,
        ..Default::default()
    }
}

/// `company` with reputation scaled to a player of the given stat level.
fn with_reputation(company: &Company, level: u32) -> Company {
    let mut company = company.clone();
    company.reputation = level as f64 * 5_000.0;
    company
}

// ── 3. Apply Hints ──────────────────────────────────────────────────────

fn validate_hints(data: &JobData) -> Vec<TestResult> {
    println!("--- Apply Hints ---");
    let catalog = &data.catalog;
    let (mut at_top, mut not_offered, mut requirements, mut missing) = (0, 0, 0, 0);

    for company in data.companies.iter() {
        for track in catalog.tracks() {
            let Some(entry) = catalog.entry(track) else {
                continue;
            };
            if !company.has_position(entry) {
                continue;
            }
            // Employed at the entry rung of this very track
            let player = PlayerStats {
                current_company: Some(company.name.clone()),
                jobs: [(company.name.clone(), entry.name.clone())].into(),
                ..Default::default()
            };
            match application_hint(catalog, &player, company, entry.id) {
                Some(ApplicationHint::AtHighestPosition { .. }) => at_top += 1,
                Some(ApplicationHint::NotOffered { .. }) => not_offered += 1,
                Some(ApplicationHint::Requirements { .. }) => requirements += 1,
                None => missing += 1,
            }
        }
    }

    vec![
        check(
            "hints_resolved",
            missing == 0,
            format!(
                "{at_top} at top, {not_offered} not offered, {requirements} with requirements"
            ),
        ),
        check(
            "hints_cover_single_rung_tracks",
            at_top > 0,
            format!("{at_top} single-rung listings"),
        ),
        check(
            "hints_cover_promotions",
            requirements > 0,
            format!("{requirements} promotion listings"),
        ),
    ]
}

// ── 4. Multipliers ──────────────────────────────────────────────────────

fn validate_multipliers() -> Vec<TestResult> {
    println!("--- Multiplier Tables ---");
    let mut results = Vec::new();
    let none = SourceFiles::default();

    let mut bad = Vec::new();
    for node in BitNode::ALL {
        let mults = BitNodeMultipliers::for_bitnode(node.number(), &none);
        for m in Multiplier::ALL {
            let v = mults.get(m);
            let sane = v.is_finite() && (m == Multiplier::StaneksGiftExtraSize || v >= 0.0);
            if !sane {
                bad.push(format!("{}:{}={}", node.number(), m.name(), v));
            }
        }
    }
    results.push(check(
        "multipliers_sane",
        bad.is_empty(),
        if bad.is_empty() {
            format!("{MAX_BITNODE} tables, all finite")
        } else {
            bad.join(", ")
        },
    ));

    let genesis = BitNodeMultipliers::for_bitnode(1, &none);
    results.push(check(
        "multipliers_genesis_default",
        genesis == BitNodeMultipliers::default(),
        "BitNode 1 uses the default table",
    ));

    // Unknown keys fall back with a warning instead of failing
    let unknown = BitNodeMultipliers::for_bitnode(MAX_BITNODE + 1, &none);
    results.push(check(
        "multipliers_unknown_default",
        unknown == BitNodeMultipliers::default() && unknown.staneks_gift_extra_size == 0.0,
        "unknown BitNode yields default table",
    ));

    // BitNode 12 hardens with Source-File level and caps Daedalus
    let mut harder = true;
    let mut previous = f64::INFINITY;
    for level in 0..=50 {
        let files = SourceFiles::new(vec![SourceFile { n: 12, level }]);
        let mults = BitNodeMultipliers::for_bitnode(12, &files);
        if mults.hacking_level_multiplier > previous {
            harder = false;
        }
        previous = mults.hacking_level_multiplier;
    }
    let capped = BitNodeMultipliers::for_bitnode(
        12,
        &SourceFiles::new(vec![SourceFile { n: 12, level: 50 }]),
    );
    results.push(check(
        "multipliers_recursion_scaling",
        harder && capped.daedalus_augs_required() == 40,
        format!(
            "level 50: hacking ×{:.3}, Daedalus {} augs",
            capped.hacking_level_multiplier,
            capped.daedalus_augs_required()
        ),
    ));

    results
}

fn dump_multipliers(n: u8, sf12: u32) {
    let files = SourceFiles::new(vec![SourceFile { n: 12, level: sf12 }]);
    let mults = BitNodeMultipliers::for_bitnode(n, &files);
    let name = BitNode::from_number(n).map_or("unknown", BitNode::name);
    println!("\n--- BitNode {n}: {name} ---");
    for (m, v) in mults.overridden() {
        println!("  {:<28} {}", m.name(), v);
    }
    match serde_json::to_string_pretty(&mults) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("could not encode multipliers: {e}"),
    }
}

// ── 5. Stock Market ─────────────────────────────────────────────────────

fn validate_stock_market() -> Vec<TestResult> {
    println!("--- Stock Market ---");
    let none = SourceFiles::default();
    let base = StockMarketCosts::new(&BitNodeMultipliers::default());

    let mut fixed_moved = Vec::new();
    for node in BitNode::ALL {
        let costs = StockMarketCosts::new(&BitNodeMultipliers::for_bitnode(node.number(), &none));
        if costs.wse_account != base.wse_account || costs.tix_api != base.tix_api {
            fixed_moved.push(node.name());
        }
    }

    let hacktocracy = StockMarketCosts::new(&BitNodeMultipliers::for_bitnode(9, &none));
    vec![
        check(
            "stock_fixed_costs",
            fixed_moved.is_empty(),
            format!("WSE {:.0}, TIX {:.0}", base.wse_account, base.tix_api),
        ),
        check(
            "stock_4s_scaled",
            hacktocracy.four_sigma_data == base.four_sigma_data * 5.0,
            format!(
                "4S data {:.0} → {:.0} in Hacktocracy",
                base.four_sigma_data, hacktocracy.four_sigma_data
            ),
        ),
    ]
}
