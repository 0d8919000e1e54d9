use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;
use verity::{Callout, Mode, Position, Side};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // circle and square called inside; sphere and cube held outside
    let mut callout = Callout::new();
    callout
        .populate("c", Position::Left, Side::Inside)?
        .populate("s", Position::Middle, Side::Inside)?
        .populate("cc", Position::Left, Side::Outside)?
        .populate("ss", Position::Middle, Side::Outside)?;
    assert!(!callout.has_issues());

    let path = callout.solve(Mode::Normal)?;
    info!(from = %path.start(), to = %path.end(), steps = path.step_count(), "solved");
    println!("{}", path.end().describe());

    let steps = path.steps()?;
    for step in &steps {
        println!("{}", step);
    }

    assert_eq!(steps.iter().map(ToString::to_string).collect::<Vec<_>>(), [
        "Swap Circle on Left with Triangle on Right",
        "Swap Circle on Left with Square on Middle",
        "Swap Square on Middle with Triangle on Right",
    ]);

    Ok(())
}
