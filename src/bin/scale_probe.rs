//! Scaling check for the grouping optimizer.
//!
//! Prints one CSV row per distribution and size. Only `GroupingOptimizer::new`
//! plus `run` is timed; up to `--verify-limit` rectangles the quadratic
//! baseline runs afterwards and gets its own column. `growth` is the
//! optimizer time relative to the previous size of the same distribution
//! (sizes grow 4x, so O(n log n) shows up as a little over 4).
//!
//! ```text
//! cargo run --release --features scale-probe --bin scale_probe -- --verify-limit 1024
//! ```

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rect_cht::reference::quadratic_dp;
use rect_cht::{GroupingOptimizer, Rectangle};
use sysinfo::{get_current_pid, System};

const SIZES: &[usize] = &[1 << 8, 1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 20];
const DEFAULT_VERIFY_LIMIT: usize = 4096;

fn main() -> ExitCode {
    let verify_limit = match parse_verify_limit(env::args().skip(1)) {
        Ok(limit) => limit,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            eprintln!("usage: scale_probe [--verify-limit <N>]");
            return ExitCode::from(2);
        }
    };

    let mut sys = System::new();
    let mut failures = 0usize;
    println!(
        "distribution,n,frontier,groups,cost,optimizer_s,growth,rss_delta_kib,baseline_s,verified"
    );
    for &distribution in Distribution::ALL {
        let mut previous: Option<f64> = None;
        for &len in SIZES {
            let row = match run(distribution, len, verify_limit, &mut sys) {
                Ok(row) => row,
                Err(err) => {
                    eprintln!("{} n={len}: {err}", distribution.name());
                    failures += 1;
                    continue;
                }
            };
            if let Verdict::Mismatch { expected } = row.verdict {
                eprintln!(
                    "{} n={len}: expected {expected}, got {}",
                    distribution.name(),
                    row.cost
                );
                failures += 1;
            }
            let growth = previous
                .filter(|&p| p > 0.0)
                .map(|p| format!("{:.2}", row.optimizer_s / p))
                .unwrap_or_default();
            previous = Some(row.optimizer_s);

            println!(
                "{},{},{},{},{},{:.6},{},{},{},{}",
                distribution.name(),
                len,
                row.frontier,
                row.groups,
                row.cost,
                row.optimizer_s,
                growth,
                row.rss_delta_kib,
                row.baseline_s.map(|s| format!("{s:.6}")).unwrap_or_default(),
                row.verdict.label(),
            );
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failures} run(s) failed");
        ExitCode::FAILURE
    }
}

fn parse_verify_limit<I>(mut args: I) -> Result<usize, String>
where
    I: Iterator<Item = String>,
{
    let mut limit = DEFAULT_VERIFY_LIMIT;
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--verify-limit=") {
            Some(value) => value.to_string(),
            None if arg == "--verify-limit" => {
                args.next().ok_or("missing value after --verify-limit")?
            }
            None => return Err(format!("unrecognized argument '{arg}'")),
        };
        limit = value
            .parse()
            .map_err(|_| format!("invalid verify limit '{value}'"))?;
    }
    Ok(limit)
}

#[derive(Clone, Copy, Debug)]
enum Distribution {
    /// Independent sides; the filter removes most of the input.
    Uniform,
    /// Already a frontier; every rectangle reaches the envelope.
    Staircase,
    /// Sixteen side lengths, heavy duplication.
    Clustered,
}

impl Distribution {
    const ALL: &'static [Distribution] = &[
        Distribution::Uniform,
        Distribution::Staircase,
        Distribution::Clustered,
    ];

    fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Staircase => "staircase",
            Distribution::Clustered => "clustered",
        }
    }

    fn generate(self, len: usize) -> Vec<Rectangle<u32>> {
        let mut rng = StdRng::seed_from_u64(0x5EED ^ len as u64);
        match self {
            Distribution::Uniform => (0..len)
                .map(|_| {
                    Rectangle::new(rng.gen_range(1..=1_000_000), rng.gen_range(1..=1_000_000))
                })
                .collect(),
            Distribution::Staircase => {
                // Each step drops the height by at most 7, so it stays above `len`.
                let mut width = 0u32;
                let mut height = len as u32 * 8 + 1;
                (0..len)
                    .map(|_| {
                        width += rng.gen_range(1..=7);
                        height -= rng.gen_range(1..=7);
                        Rectangle::new(width, height)
                    })
                    .collect()
            }
            Distribution::Clustered => (0..len)
                .map(|_| {
                    Rectangle::new(
                        rng.gen_range(1..=16u32) * 1_000,
                        rng.gen_range(1..=16u32) * 1_000,
                    )
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Passed,
    Mismatch { expected: i128 },
    Skipped,
}

impl Verdict {
    fn label(self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Mismatch { .. } => "mismatch",
            Verdict::Skipped => "skipped",
        }
    }
}

struct Row {
    frontier: usize,
    groups: usize,
    cost: i128,
    optimizer_s: f64,
    rss_delta_kib: u64,
    baseline_s: Option<f64>,
    verdict: Verdict,
}

fn run(
    distribution: Distribution,
    len: usize,
    verify_limit: usize,
    sys: &mut System,
) -> rect_cht::Result<Row> {
    let rects = distribution.generate(len);
    let input = rects.clone();

    let before = rss_kib(sys);
    let start = Instant::now();
    let optimizer = GroupingOptimizer::<u32, i128>::new(input)?;
    let (cost, groups) = optimizer.run()?;
    let optimizer_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss_kib(sys).saturating_sub(before);

    let (baseline_s, verdict) = if len > verify_limit {
        (None, Verdict::Skipped)
    } else {
        let start = Instant::now();
        let expected = quadratic_dp::<u32, i128>(&rects)?;
        let elapsed = start.elapsed().as_secs_f64();
        let verdict = if expected == cost {
            Verdict::Passed
        } else {
            Verdict::Mismatch { expected }
        };
        (Some(elapsed), verdict)
    };

    Ok(Row {
        frontier: optimizer.frontier().len(),
        groups: groups.len(),
        cost,
        optimizer_s,
        rss_delta_kib,
        baseline_s,
        verdict,
    })
}

fn rss_kib(sys: &mut System) -> u64 {
    let Ok(pid) = get_current_pid() else {
        return 0;
    };
    sys.refresh_process(pid);
    sys.process(pid).map_or(0, |process| process.memory() / 1024)
}
