//! PLA export of a minimal cover
//!
//! Writes the Berkeley PLA format understood by Espresso and most logic
//! tools: one input cube per product term, a single output column.

use crate::cover::Cover;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output label written to `.ob`
pub const OUTPUT_LABEL: &str = "F";

/// Write `cover` over `variables` as a single-output PLA
///
/// ```
/// use logicloom::{render::pla, Simplifier};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"])?;
/// let mut buffer = Vec::new();
/// pla::write_pla(s.simplify()?, s.variables(), &mut buffer)?;
///
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains(".ilb x y z\n"));
/// assert!(text.contains("--0 1\n10- 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn write_pla<W: Write, S: AsRef<str>>(
    cover: &Cover,
    variables: &[S],
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, ".i {}", variables.len())?;
    writeln!(writer, ".o 1")?;

    if !variables.is_empty() {
        write!(writer, ".ilb")?;
        for var in variables {
            write!(writer, " {}", var.as_ref())?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, ".ob {}", OUTPUT_LABEL)?;

    writeln!(writer, ".p {}", cover.len())?;
    for term in cover {
        writeln!(writer, "{} 1", term)?;
    }

    writeln!(writer, ".e")?;
    Ok(())
}

/// Render `cover` as a PLA string
pub fn to_pla_string<S: AsRef<str>>(cover: &Cover, variables: &[S]) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_pla(cover, variables, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write `cover` to a PLA file at `path`
pub fn to_pla_file<P: AsRef<Path>, S: AsRef<str>>(
    cover: &Cover,
    variables: &[S],
    path: P,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pla(cover, variables, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Simplifier;

    #[test]
    fn test_pla_string() {
        let s = Simplifier::new(&[0, 2, 4, 5, 6], &["x", "y", "z"]).unwrap();
        let text = to_pla_string(s.simplify().unwrap(), s.variables()).unwrap();
        assert_eq!(
            text,
            ".i 3\n.o 1\n.ilb x y z\n.ob F\n.p 2\n--0 1\n10- 1\n.e\n"
        );
    }

    #[test]
    fn test_constant_false() {
        let s = Simplifier::new(&[], &["a"]).unwrap();
        let text = to_pla_string(s.simplify().unwrap(), s.variables()).unwrap();
        assert!(text.contains(".p 0\n.e\n"));
    }

    #[test]
    fn test_constant_true() {
        let s = Simplifier::new(&[0, 1, 2, 3], &["a", "b"]).unwrap();
        let text = to_pla_string(s.simplify().unwrap(), s.variables()).unwrap();
        assert!(text.contains(".p 1\n-- 1\n"));
    }
}
