use dockerhub_cli::cli::{Args, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();
    let runner = Runner::new(args);

    if let Err(e) = runner.run().await {
        runner.logger().error(&e.to_string());
        std::process::exit(1);
    }
}
