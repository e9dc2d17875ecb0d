use clap::Parser;
use invest::sample::{sample_factories, SAMPLE_BUDGET, SAMPLE_STEP};
use invest::ProfitFn;

#[derive(Parser, Debug)]
#[clap(name = "invest")]
struct Cli {
    /// Total amount to invest, a multiple of the step size.
    #[clap(long, default_value_t = SAMPLE_BUDGET)]
    budget: u32,
    /// Investment step size.
    #[clap(long, default_value_t = SAMPLE_STEP)]
    step: u32,
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    let factories = sample_factories(args.step);
    let options: Vec<&dyn ProfitFn> = factories.iter().map(|f| f as &dyn ProfitFn).collect();

    let plan = match invest::optimal_investments(args.budget, args.step, &options) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    println!("Optimal profit: {}", plan.optimal_profit);
    for (i, (&amount, factory)) in plan.allocations.iter().zip(&factories).enumerate() {
        if amount > 0 {
            println!(
                "Factory {}: invest {}, profit: {}",
                i + 1,
                amount,
                factory.profit(amount)
            );
        } else {
            println!("Factory {}: no investment", i + 1);
        }
    }
}
