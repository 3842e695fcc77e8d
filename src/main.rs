use std::process::ExitCode;

use descent::{gradient_descent, Dataset, LinearRegression};
use log::{error, info};

fn main() -> ExitCode {
    // Results are logged at info; RUST_LOG=warn or stricter hides them.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rows = [
        [1.0, 1.0, 1.0],
        [2.0, 2.0, 2.0],
        [3.0, 3.0, 3.0],
        [4.0, 4.0, 4.0],
    ];

    let thetas = Dataset::from_rows(&rows)
        .and_then(|dataset| gradient_descent(&dataset, 0.01, LinearRegression, 1e-12, None));

    match thetas {
        Ok(thetas) => {
            for (i, theta) in thetas.iter().enumerate() {
                info!("theta{i} = {theta:.6}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("gradient descent failed: {e}");
            ExitCode::FAILURE
        }
    }
}
