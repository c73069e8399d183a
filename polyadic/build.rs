use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The widest tuple for which grouping tests are generated.
const MAX_ARITY: usize = 12;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests asserting the exact parenthesization of every fold mode for every
    // arity up to a bound, using a non-associative operator which records its grouping.

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("fold_grouping.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "use super::*;")?;
    writeln!(f)?;
    writeln!(f, "fn group(a: String, b: String) -> String {{")?;
    writeln!(f, "    format!(\"({{}}+{{}})\", a, b)")?;
    writeln!(f, "}}")?;

    for mode in Mode::ALL {
        for arity in mode.min_arity()..=MAX_ARITY {
            writeln!(f)?;
            writeln!(f, "#[test]")?;
            writeln!(f, "fn {}_{}() {{", mode, arity)?;
            writeln!(
                f,
                "    assert_eq!({}({}{}group), {:?});",
                mode,
                Elements(arity),
                mode.seed_argument(),
                mode.expected(arity),
            )?;
            writeln!(f, "}}")?;
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum Mode {
    Right,
    Left,
    RightFrom,
    LeftFrom,
}

impl Mode {
    const ALL: [Mode; 4] = [Mode::Right, Mode::Left, Mode::RightFrom, Mode::LeftFrom];

    /// Unseeded folds are not defined on the empty tuple.
    fn min_arity(self) -> usize {
        match self {
            Mode::Right | Mode::Left => 1,
            Mode::RightFrom | Mode::LeftFrom => 0,
        }
    }

    fn seed_argument(self) -> &'static str {
        match self {
            Mode::Right | Mode::Left => ", ",
            Mode::RightFrom | Mode::LeftFrom => ", String::from(\"s\"), ",
        }
    }

    fn expected(self, arity: usize) -> String {
        let mut operands: Vec<String> = (0..arity).map(|i| format!("a{}", i)).collect();
        match self {
            Mode::Right | Mode::Left => {}
            Mode::RightFrom => operands.push("s".to_string()),
            Mode::LeftFrom => operands.insert(0, "s".to_string()),
        }
        match self {
            Mode::Right | Mode::RightFrom => {
                let mut operands = operands.into_iter().rev();
                let last = operands.next().unwrap_or_default();
                operands.fold(last, |acc, x| format!("({}+{})", x, acc))
            }
            Mode::Left | Mode::LeftFrom => {
                let mut operands = operands.into_iter();
                let first = operands.next().unwrap_or_default();
                operands.fold(first, |acc, x| format!("({}+{})", acc, x))
            }
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Mode::Right => write!(f, "fold_right"),
            Mode::Left => write!(f, "fold_left"),
            Mode::RightFrom => write!(f, "fold_right_from"),
            Mode::LeftFrom => write!(f, "fold_left_from"),
        }
    }
}

/// A tuple expression of `String` elements named `a0`, `a1`, and so on.
struct Elements(usize);

impl Display for Elements {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for i in 0..self.0 {
            write!(f, "String::from(\"a{}\")", i)?;
            if i + 1 < self.0 {
                write!(f, ", ")?;
            }
        }
        if self.0 == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
