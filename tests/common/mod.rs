#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use cayley::Hypercomplex;

const UPDATE_VAR: &str = "CAYLEY_UPDATE_SNAPSHOTS";

fn golden_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare `rendered` against `tests/snapshots/<name>`, line by line.
///
/// With `CAYLEY_UPDATE_SNAPSHOTS` set the golden file is rewritten instead.
pub fn assert_snapshot(name: &str, rendered: &str) {
    let path = golden_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, rendered)
            .unwrap_or_else(|err| panic!("cannot write golden file {:?}: {}", path, err));
        return;
    }

    let golden = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read golden file {:?}: {}", path, err));
    let mut expected = golden.lines().map(str::trim_end);
    let mut actual = rendered.lines().map(str::trim_end);
    let mut line = 1;
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return,
            (e, a) if e == a => line += 1,
            (e, a) => panic!(
                "{} differs at line {}: expected {:?}, got {:?} (set {}=1 to regenerate)",
                name, line, e, a, UPDATE_VAR
            ),
        }
    }
}

/// All basis elements `e_0 .. e_{order-1}`
pub fn basis(order: usize) -> Vec<Hypercomplex> {
    (0..order)
        .map(|index| Hypercomplex::basis(order, index).expect("valid basis element"))
        .collect()
}

/// Signed basis element `±e_index`, written as `"+e3"` / `"-e0"`
pub fn signed(order: usize, label: &str) -> Hypercomplex {
    let (negative, rest) = match label.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, label.trim_start_matches('+')),
    };
    let index: usize = rest
        .trim_start_matches('e')
        .parse()
        .expect("label like +e3");
    let unit = Hypercomplex::basis(order, index).expect("valid basis element");
    if negative {
        -unit
    } else {
        unit
    }
}

/// Inverse of [`signed`] for products of basis elements
pub fn label(product: &Hypercomplex) -> String {
    match product.as_signed_basis() {
        Some((index, sign)) => format!("{}e{}", if sign > 0.0 { '+' } else { '-' }, index),
        None => panic!("{} is not a signed basis element", product),
    }
}

/// Render the full basis multiplication table, one row per line
pub fn render_table(order: usize) -> String {
    let bases = basis(order);
    let mut out = String::new();
    for row in &bases {
        let cells: Vec<String> = bases
            .iter()
            .map(|col| label(&row.multiply(col).expect("same order")))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
