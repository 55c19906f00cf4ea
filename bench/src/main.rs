use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use serde_json::json;

const BUILTIN_PATH: &str = "M 50,20 C 60,0 100,10 90,40 Q 80,60 50,90 L 20,60 A 10 10 0 0 1 10,40 H 15 V 25 C 20,5 40,5 50,20 Z";

#[derive(Clone, Debug)]
struct BenchArgs {
    svg: Option<PathBuf>,
    config: Option<PathBuf>,
    warmup: u32,
    repeats: u32,
    half_range: Option<u32>,
    subdivisions: Option<usize>,
    parallel: bool,
    threads: Option<usize>,
    json: bool,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    sample: Duration,
    decompose: Duration,
    evaluate: Duration,
    wall_total: Duration,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.repeats == 0 {
        anyhow::bail!("--repeats must be >= 1");
    }
    if let Some(n) = args.threads
        && n == 0
    {
        anyhow::bail!("--threads must be >= 1 when set");
    }

    let mut cfg = match &args.config {
        Some(p) => {
            let s = std::fs::read_to_string(p)
                .with_context(|| format!("read config '{}'", p.display()))?;
            epicycles::EpicycleConfig::from_json_str(&s)?
        }
        None => epicycles::EpicycleConfig::default(),
    };
    if let Some(k) = args.half_range {
        cfg.decomposer.half_range = k;
    }
    if let Some(s) = args.subdivisions {
        cfg.sampler.subdivisions = s;
    }
    cfg.decomposer.parallel |= args.parallel;
    if args.threads.is_some() {
        cfg.decomposer.threads = args.threads;
    }
    cfg.validate()?;

    let path_data = match &args.svg {
        Some(p) => {
            let svg_text = std::fs::read_to_string(p)
                .with_context(|| format!("read svg '{}'", p.display()))?;
            epicycles::extract_path_data(&svg_text)?
        }
        None => BUILTIN_PATH.to_string(),
    };

    let sampler = epicycles::PathSampler::new(cfg.sampler.clone())?;
    let decomposer = epicycles::Decomposer::new(cfg.decomposer.clone())?;

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for _ in 0..args.warmup {
            let _ = run_once(&sampler, &decomposer, &path_data)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), K={k}, subdivisions={sub}, mode={mode}, threads={threads}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        k = cfg.decomposer.half_range,
        sub = cfg.sampler.subdivisions,
        mode = if cfg.decomposer.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = cfg
            .decomposer
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
    );

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    let mut sample_count = 0usize;
    for _ in 0..args.repeats {
        let (metrics, n) = run_once(&sampler, &decomposer, &path_data)?;
        sample_count = n;
        runs.push(metrics);
    }

    report_percentiles(&runs);
    if args.json {
        let wall = collect(&runs, |m| m.wall_total);
        println!(
            "{}",
            json!({
                "samples": sample_count,
                "components": 2 * u64::from(cfg.decomposer.half_range) + 1,
                "repeats": args.repeats,
                "parallel": cfg.decomposer.parallel,
                "wall_p50_ms": percentile(&wall, 0.50).as_secs_f64() * 1000.0,
                "wall_p99_ms": percentile(&wall, 0.99).as_secs_f64() * 1000.0,
            })
        );
    }
    Ok(())
}

fn run_once(
    sampler: &epicycles::PathSampler,
    decomposer: &epicycles::Decomposer,
    path_data: &str,
) -> anyhow::Result<(RunMetrics, usize)> {
    let wall = Instant::now();

    let t0 = Instant::now();
    let samples = sampler.sample(path_data)?;
    let sample = t0.elapsed();

    let t0 = Instant::now();
    let set = decomposer.decompose(&samples)?;
    let decompose = t0.elapsed();

    // One traversal at 60 fps.
    let t0 = Instant::now();
    let frames = (set.period() * 60.0).ceil() as u32;
    let mut acc = epicycles::ComplexSample::ZERO;
    for f in 0..frames {
        acc += set.evaluate(f64::from(f) / 60.0);
    }
    std::hint::black_box(acc);
    let evaluate = t0.elapsed();

    Ok((
        RunMetrics {
            sample,
            decompose,
            evaluate,
            wall_total: wall.elapsed(),
        },
        samples.len(),
    ))
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        svg: None,
        config: None,
        warmup: 1,
        repeats: 50,
        half_range: None,
        subdivisions: None,
        parallel: false,
        threads: None,
        json: false,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--svg" => {
                out.svg = Some(PathBuf::from(args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --svg (expected a path)")
                })?))
            }
            "--config" => {
                out.config = Some(PathBuf::from(args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --config (expected a path)")
                })?))
            }
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--half-range" => out.half_range = Some(parse_u32(args.next(), "--half-range")?),
            "--subdivisions" => {
                out.subdivisions = Some(parse_usize(args.next(), "--subdivisions")?)
            }
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--json" => out.json = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"epicycles-bench

Samples and decomposes a path repeatedly and reports p50/p90/p99 for each stage.

Usage:
  cargo run -q --release
  cargo run -q --release -- --svg drawing.svg --half-range 200
  cargo run -q --release -- --parallel --threads 4 --json

Args:
  --svg PATH          (default: built-in outline)
  --config PATH       (JSON EpicycleConfig; flags below override it)
  --warmup N          (default 1)
  --repeats N         (default 50)
  --half-range K      (DFT indices in [-K, K])
  --subdivisions N    (samples per curve command)
  --parallel          (rayon DFT)
  --threads N         (parallel mode only)
  --json              (print a JSON summary on stdout)"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn collect(runs: &[RunMetrics], f: fn(&RunMetrics) -> Duration) -> Vec<Duration> {
    let mut v = runs.iter().map(f).collect::<Vec<_>>();
    v.sort_by_key(|d| d.as_nanos());
    v
}

fn percentile(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;
    type Field = (&'static str, Getter);

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[Field] = &[
        ("sample", |m| m.sample),
        ("decompose", |m| m.decompose),
        ("evaluate", |m| m.evaluate),
        ("wall_total", |m| m.wall_total),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = collect(runs, *getter);
        eprintln!(
            "  {name:<12} {} / {} / {}",
            fmt_ms(percentile(&v, 0.50)),
            fmt_ms(percentile(&v, 0.90)),
            fmt_ms(percentile(&v, 0.99)),
        );
    }
}
