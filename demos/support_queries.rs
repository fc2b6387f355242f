use bridgearch::{evaluate, Coefficients, SupportQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for arch in [
        Coefficients::new(1.0, -4.0, 0.0),
        Coefficients::new(1.0, -3.0, 2.0),
        Coefficients::new(1.0, 0.0, 1.0),
    ] {
        let evaluation = evaluate(arch)?;
        println!("{}", evaluation.equation());

        // Arches that never touch the ground have nothing to ask about
        let Some(analysis) = evaluation.analysis() else {
            println!("  no real solutions");
            continue;
        };
        for query in [SupportQuery::AnyEven, SupportQuery::AllEven] {
            println!("  {} {}", query.question(), analysis.query(query).message);
        }
    }

    Ok(())
}
