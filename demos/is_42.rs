//! Maps "is it 42?" over a few [`Maybe`]s and prints each result on its own
//! line.

use std::io::{self, Write as _};

use maybe::{render_to, Maybe};

fn main() -> io::Result<()> {
    let numbers = vec![Maybe::nothing(), Maybe::just(42), Maybe::just(13)];
    let is_42: Vec<Maybe<bool>> =
        numbers.iter().map(|m| m.as_ref().map(|n| *n == 42)).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for m in &is_42 {
        render_to(&mut out, m)?;
        writeln!(out)?;
    }
    Ok(())
}
