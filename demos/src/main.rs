//! # strider - find a path through an ASCII level
//!
//! Usage:
//!   strider demos/levels/halls.txt                      # S to G, unit body
//!   strider demos/levels/halls.txt --body 2x2           # larger entity
//!   strider demos/levels/open.txt --config demos/strider.toml
//!   strider level.txt --from 1,1 --to 7.5,3 -v          # explicit endpoints
//!
//! `RUST_LOG` overrides the log filter.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use strider_core::{Point, Pos};
use strider_level::{Body, BodyProbe, Level};
use strider_paths::{AStar, Outcome};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// CLI arguments
#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Find the shortest orthogonal path through an ASCII level")]
struct Args {
    /// Level file (`#` wall, `.` floor, `S` start, `G` goal)
    level: PathBuf,

    /// Search and body settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start position as `x,y`; defaults to the `S` marker
    #[arg(long, value_parser = parse_pos)]
    from: Option<Pos>,

    /// Goal position as `x,y`; defaults to the `G` marker
    #[arg(long, value_parser = parse_pos)]
    to: Option<Pos>,

    /// Body footprint as `WxH`, overriding the config file
    #[arg(long, value_parser = parse_size)]
    body: Option<Point>,

    /// Stop after expanding this many positions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pos(s: &str) -> Result<Pos, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y: {e}"))?;
    Ok(Pos::new(x, y))
}

fn parse_size(s: &str) -> Result<Point, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("bad height: {e}"))?;
    Ok(Point::new(w, h))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "strider=debug,strider_paths=debug,strider_level=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(n) = args.max_expansions {
        cfg.search.max_expansions = Some(n);
    }
    if let Some(size) = args.body {
        cfg.body.width = size.x;
        cfg.body.height = size.y;
    }

    let text = std::fs::read_to_string(&args.level)
        .with_context(|| format!("failed to read level {}", args.level.display()))?;
    let level = Level::parse(&text)
        .with_context(|| format!("failed to parse level {}", args.level.display()))?;

    let Some(start) = args.from.or_else(|| level.start().map(Pos::from)) else {
        bail!("no start: pass --from or put an S in the level");
    };
    let Some(goal) = args.to.or_else(|| level.goal().map(Pos::from)) else {
        bail!("no goal: pass --to or put a G in the level");
    };

    let body = Body::new(start.cell(), cfg.body.width, cfg.body.height);
    info!(
        "searching {} -> {} for a {}x{} body in a {}x{} level",
        start,
        goal,
        body.size.x,
        body.size.y,
        level.width(),
        level.height()
    );

    let probe = BodyProbe::new(&level, &body);
    let report = AStar::new(start, goal, &probe)
        .with_config(cfg.search)
        .search();

    match &report.path {
        Some(path) => {
            let cells: Vec<Point> = path.iter().map(|p| p.cell()).collect();
            println!("{}", level.render_path(&cells));
            println!("waypoints: {}", path.len());
        }
        None => {
            println!("{level}");
            match report.outcome {
                Outcome::ExpansionLimit => println!("no path within {} expansions", report.expanded),
                _ => println!("no path"),
            }
        }
    }
    info!(
        "expanded {} positions, skipped {} stale entries, frontier peaked at {}",
        report.expanded, report.stale_skipped, report.frontier_peak
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!(parse_pos("1,2"), Ok(Pos::new(1.0, 2.0)));
        assert_eq!(parse_pos(" 7.5 , -3 "), Ok(Pos::new(7.5, -3.0)));
        assert!(parse_pos("1;2").is_err());
        assert!(parse_pos("a,2").is_err());
    }

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("2x3"), Ok(Point::new(2, 3)));
        assert_eq!(parse_size("1X1"), Ok(Point::new(1, 1)));
        assert!(parse_size("2*3").is_err());
    }

    fn distance_in(text: &str) -> i32 {
        let level = Level::parse(text).unwrap();
        let (start, goal) = (level.start().unwrap(), level.goal().unwrap());
        let probe = BodyProbe::new(&level, &Body::unit(start));
        strider_paths::path_distance(start, goal, &probe)
    }

    #[test]
    fn shipped_levels() {
        assert_eq!(distance_in(include_str!("../levels/halls.txt")), 56);
        assert_eq!(distance_in(include_str!("../levels/open.txt")), 33);
        assert_eq!(distance_in(include_str!("../levels/vault.txt")), strider_paths::NO_PATH);

        let cfg = DemoConfig::from_toml(include_str!("../strider.toml")).unwrap();
        assert_eq!(cfg.search.max_expansions, Some(20000));
    }

    #[test]
    fn cli_shape() {
        use clap::CommandFactory;
        Args::command().debug_assert();

        let args = Args::try_parse_from([
            "strider",
            "level.txt",
            "--from",
            "1,1",
            "--body",
            "2x2",
            "--max-expansions",
            "10",
        ])
        .unwrap();
        assert_eq!(args.from, Some(Pos::new(1.0, 1.0)));
        assert_eq!(args.to, None);
        assert_eq!(args.body, Some(Point::new(2, 2)));
        assert_eq!(args.max_expansions, Some(10));
    }
}
