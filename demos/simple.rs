use bridgearch::{evaluate, Coefficients, Evaluation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The demonstration arch x² − 4x meets the ground at 0 and 4
    let evaluation = evaluate(Coefficients::default())?;

    match evaluation {
        Evaluation::Supported(analysis) => {
            println!("{}", analysis.equation);
            println!("supports at {} and {}", analysis.roots.x1, analysis.roots.x2);
            println!(
                "arch sampled at {} points",
                analysis.plot.arch.points.len()
            );
        }
        Evaluation::NoRealSupports { equation, .. } => {
            println!("{equation} has no real solutions");
        }
    }

    Ok(())
}
