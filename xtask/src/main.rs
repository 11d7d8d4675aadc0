//! A task runner for the assertion library, using the [xtask spec][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{bail, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

#[inline]
fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {:?}", args);
  }
  Ok(())
}

fn ci() -> Result<()> {
  cmd!("cargo build --workspace").run()?;
  cmd!("cargo fmt -- --check").run()?;
  cmd!("cargo clippy --workspace --all-targets").run()?;
  cmd!("cargo test --workspace").run()?;
  Ok(())
}

fn test(krate: Option<String>) -> Result<()> {
  match krate {
    Some(krate) => cmd!("cargo test --package {krate}").run()?,
    None => cmd!("cargo test --workspace").run()?,
  }
  Ok(())
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(subcommand) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  let Some(root) = Path::new(env!("CARGO_MANIFEST_DIR")).parent() else {
    bail!("xtask has no parent dir");
  };
  let _d = pushd(root)?;
  match subcommand.as_str() {
    "ci" => {
      finish_args(args)?;
      ci()?;
    }
    "test" => {
      let krate: Option<String> = args.opt_free_from_str()?;
      finish_args(args)?;
      test(krate)?;
    }
    s => bail!("unknown subcommand: {}", s),
  }
  Ok(())
}

fn main() {
  match run() {
    Ok(()) => {}
    Err(e) => {
      eprintln!("{e}");
      std::process::exit(1);
    }
  }
}
