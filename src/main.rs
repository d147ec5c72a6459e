use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cayley::{rotation, Hypercomplex, Tolerance};

#[derive(Parser, Debug)]
#[command(name = "cayley", about = "Cayley-Dickson hypercomplex algebra toolkit")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the signed basis multiplication table for an algebra.
    Table {
        /// Algebra order (power of two, at least 2).
        order: usize,
    },
    /// Rotate a 3-vector by an axis-angle quaternion.
    Rotate {
        /// Rotation axis (need not be normalized).
        #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
        axis: Vec<f64>,
        /// Rotation angle in radians.
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        /// Vector to rotate.
        #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
        vector: Vec<f64>,
    },
    /// Check the algebraic identities for every order up to a bound.
    Verify {
        /// Largest order to check.
        #[arg(long, default_value_t = 16)]
        max_order: usize,
        /// Componentwise tolerance for floating-point identities.
        #[arg(long, default_value_t = 1e-9)]
        tolerance: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Table { order } => run_table(order)?,
        Commands::Rotate {
            axis,
            angle,
            vector,
        } => run_rotate(&axis, angle, &vector)?,
        Commands::Verify {
            max_order,
            tolerance,
        } => run_verify(max_order, Tolerance::new(tolerance, tolerance))?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_table(order: usize) -> Result<()> {
    let bases = basis_elements(order)?;
    let width = format!("-e{}", order - 1).len();

    for row in &bases {
        let cells = bases
            .iter()
            .map(|col| -> Result<String> {
                let product = row.multiply(col)?;
                Ok(format!("{:>width$}", signed_basis_label(&product), width = width))
            })
            .collect::<Result<Vec<String>>>()?;
        println!("{}", cells.join(" "));
    }

    Ok(())
}

fn run_rotate(axis: &[f64], angle: f64, vector: &[f64]) -> Result<()> {
    let axis = to_vec3(axis).context("axis needs three components")?;
    let vector = to_vec3(vector).context("vector needs three components")?;

    let by = rotation::from_axis_angle(axis, angle).context("failed to build rotation")?;
    let rotated = rotation::rotate_vector(vector, &by).context("rotation failed")?;

    println!("rotor\t{}", by);
    println!(
        "result\t[{:.6}, {:.6}, {:.6}]",
        rotated[0], rotated[1], rotated[2]
    );
    Ok(())
}

fn run_verify(max_order: usize, tolerance: Tolerance) -> Result<()> {
    if max_order < 2 {
        bail!("max order must be at least 2, got {}", max_order);
    }

    let mut order = 2;
    while order <= max_order {
        verify_order(order, &tolerance)
            .with_context(|| format!("identity check failed at order {}", order))?;
        println!("order {:>4}: ok", order);
        order = match order.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}

fn verify_order(order: usize, tolerance: &Tolerance) -> Result<()> {
    let bases = basis_elements(order)?;
    let one = &bases[0];

    for (i, e_i) in bases.iter().enumerate() {
        if &one.multiply(e_i)? != e_i || &e_i.multiply(one)? != e_i {
            bail!("e0 is not an identity for e{}", i);
        }
        if &e_i.multiply(&e_i.conjugate())? != one {
            bail!("e{} times its conjugate is not 1", i);
        }
        for (j, e_j) in bases.iter().enumerate().skip(1) {
            if i == 0 || i == j {
                continue;
            }
            if e_i.multiply(e_j)? != e_j.multiply(e_i)?.negate() {
                bail!("e{} and e{} do not anticommute", i, j);
            }
        }
    }

    let x = sample(order, 1.0)?;
    let y = sample(order, -0.5)?;
    if !x.multiply(&x.inverse()?)?.approx_eq(one, tolerance) {
        bail!("x * x^-1 differs from 1");
    }
    if order <= 8 {
        let lhs = x.multiply(&y)?.norm();
        let rhs = x.norm() * y.norm();
        if !tolerance.accepts(lhs, rhs) {
            bail!("norm not multiplicative: {} vs {}", lhs, rhs);
        }
    }
    tracing::debug!(order, "identities hold");

    Ok(())
}

fn basis_elements(order: usize) -> Result<Vec<Hypercomplex>> {
    Hypercomplex::new(order).with_context(|| format!("cannot build algebra of order {}", order))?;
    (0..order)
        .map(|index| {
            Hypercomplex::basis(order, index)
                .with_context(|| format!("cannot build basis element e{} of order {}", index, order))
        })
        .collect()
}

fn sample(order: usize, offset: f64) -> Result<Hypercomplex> {
    let components: Vec<f64> = (0..order).map(|i| (i as f64 + offset) / order as f64).collect();
    Ok(Hypercomplex::from_components(&components)?)
}

fn signed_basis_label(product: &Hypercomplex) -> String {
    match product.as_signed_basis() {
        Some((index, sign)) => format!("{}e{}", if sign > 0.0 { '+' } else { '-' }, index),
        None if product.norm() == 0.0 => "0".to_string(),
        None => product.to_string(),
    }
}

fn to_vec3(values: &[f64]) -> Result<[f64; 3]> {
    match values {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => bail!("expected 3 values, got {}", values.len()),
    }
}
