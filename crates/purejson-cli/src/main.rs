use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
    name = "purejson-cli",
    about = "Decode JSON and write it back in canonical form",
    version
)]
struct Args {
    /// Only validate the input; print nothing on success
    #[arg(long)]
    check: bool,

    /// Reject input nested deeper than this many containers
    #[arg(long)]
    max_depth: Option<usize>,

    /// Expect exactly one value; anything but whitespace after it is an error
    #[arg(long)]
    require_eof: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let mut buf = Vec::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }
    log::debug!("read {} bytes", buf.len());

    let options = purejson::Options {
        max_depth: args.max_depth,
        require_eof: args.require_eof,
    };

    let decoded: Vec<purejson::Value> = if options.require_eof {
        vec![purejson::decode_with_options(&buf, &options).context("invalid JSON")?]
    } else {
        purejson::decode::values_with_options(&buf, options)
            .collect::<purejson::Result<Vec<_>>>()
            .context("invalid JSON")?
    };
    log::info!("decoded {} value(s)", decoded.len());

    if args.check {
        return Ok(());
    }

    let mut out = stdout().lock();
    for value in &decoded {
        purejson::encode_to_writer(&mut out, value)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
