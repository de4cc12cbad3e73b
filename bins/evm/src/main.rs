//! CLI surface (spec §6, documented as an external collaborator of the
//! core): run every fixture, the first N, or a single ad-hoc bytecode.

mod fixture;
mod report;

use anyhow::{Context as _, Result};
use evm_core::execute;
use primitives::Environment;
use tracing_subscriber::EnvFilter;

use fixture::Fixture;

const DEFAULT_FIXTURE_PATH: &str = "evm.json";

enum Mode {
    RunAll,
    RunFirst(usize),
    RunOne(Vec<u8>),
}

fn parse_args(args: &[String]) -> Result<Mode> {
    let single = match args {
        [] => return Ok(Mode::RunAll),
        [single] => single,
        _ => anyhow::bail!("usage: evm [N | test=<hex>]"),
    };

    if let Some(hex_code) = single.strip_prefix("test=") {
        let bytes = hex::decode(hex_code.trim_start_matches("0x"))
            .context("decoding test=<hex> bytecode")?;
        return Ok(Mode::RunOne(bytes));
    }

    let n: usize = single.parse().context("expected an integer fixture count")?;
    Ok(Mode::RunFirst(n))
}

fn run_fixture(fixture: &Fixture) -> Result<bool> {
    let code = fixture.code_bytes().context("decoding fixture bytecode")?;
    let env = fixture.environment().context("building fixture environment")?;
    let result = execute(&code, &env.tx.data, &env);

    let expected_stack = fixture.expected_stack().context("decoding expected stack")?;
    let success_matches = result.success == fixture.expect.success;
    let stack_matches = match &expected_stack {
        Some(expected) => &result.stack == expected,
        None => true,
    };

    if success_matches && stack_matches {
        println!("\u{2713}  {}", fixture.name);
        Ok(true)
    } else {
        report::print_failure(fixture, &result, expected_stack.as_deref());
        Ok(false)
    }
}

fn run_ad_hoc(code: Vec<u8>) -> Result<bool> {
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    println!("success={} stack={:?}", result.success, result.stack);
    Ok(result.success)
}

fn run_fixtures(limit: Option<usize>) -> Result<bool> {
    let fixtures = fixture::load(DEFAULT_FIXTURE_PATH)
        .with_context(|| format!("loading fixtures from {DEFAULT_FIXTURE_PATH}"))?;
    let count = limit.unwrap_or(fixtures.len()).min(fixtures.len());

    for fixture in &fixtures[..count] {
        if !run_fixture(fixture)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args)?;

    let all_passed = match mode {
        Mode::RunOne(code) => run_ad_hoc(code)?,
        Mode::RunAll => run_fixtures(None)?,
        Mode::RunFirst(n) => run_fixtures(Some(n))?,
    };

    if all_passed {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
