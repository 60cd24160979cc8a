use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use linked_sparse::io::{read_matrix, write_entries, TokenReader};
use linked_sparse::{CrossListMatrix, Result, SparseError, SparseMatrix, TripleListMatrix};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Repr {
    /// Orthogonal cross list
    Cross,
    /// Row-major triple list
    Triple,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Mul,
    Add,
}

/// Reads two sparse matrices from stdin and prints their product (or sum)
///
/// Each matrix is a `rows cols` line followed by 1-based `row col value`
/// triples, terminated by `0 0 0` or end of input.
#[derive(Parser)]
#[command(name = "linked-sparse", version)]
struct Cli {
    /// Matrix representation to compute with
    #[arg(long, value_enum, default_value_t = Repr::Cross)]
    repr: Repr,

    /// Operation to apply to the two matrices
    #[arg(long, value_enum, default_value_t = Op::Mul)]
    op: Op,
}

fn run<M: SparseMatrix<i64>>(op: Op) -> Result<()> {
    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());

    let mut next_matrix = |name: &str| -> Result<M> {
        read_matrix(&mut tokens)?.ok_or_else(|| SparseError::Parse {
            line: tokens.line(),
            message: format!("missing matrix {}", name),
        })
    };
    let a = next_matrix("A")?;
    let b = next_matrix("B")?;

    let c = match op {
        Op::Mul => a.mul(&b)?,
        Op::Add => a.add(&b)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_entries(&c, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.repr {
        Repr::Cross => run::<CrossListMatrix<i64>>(cli.op),
        Repr::Triple => run::<TripleListMatrix<i64>>(cli.op),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
