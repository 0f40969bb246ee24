use anyhow::Result;
use car_wash::{
    io::{CarWashIo, Tone},
    menu,
    terminal_io::TerminalIo,
    CarWash,
};
use clap::Parser;
use log::info;
use std::num::NonZeroUsize;

/// Car wash line simulation: the last car in is the first one washed.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Maximum number of cars in the line. Prompted for when omitted.
    #[arg(short, long, env = "CAR_WASH_CAPACITY")]
    capacity: Option<NonZeroUsize>,

    /// Print messages without color.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut io = TerminalIo::new(!args.no_color);
    io.show(Tone::Plain, menu::BANNER)?;

    let capacity = match args.capacity {
        Some(capacity) => capacity,
        None => match menu::prompt_capacity(&mut io)? {
            Some(capacity) => capacity,
            None => {
                info!("no capacity given, exiting");
                return Ok(());
            }
        },
    };

    let mut wash = CarWash::new(capacity.get());
    menu::run(&mut wash, &mut io)
}
