use log::info;
use std::io;
use tokio::io::{stdin, stdout, BufReader};

#[tokio::main]
async fn main() -> io::Result<()> {
    pretty_env_logger::init();

    info!("Reading integers from stdin.");
    mathhelp::run(BufReader::new(stdin()), &mut stdout()).await?;
    info!("Reached end of input.");

    Ok(())
}
