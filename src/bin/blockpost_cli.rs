use clap::{Parser, Subcommand};
use log::info;
use std::{error::Error, process::ExitCode};

use blockpost::{Builder, Delivery, HttpTransport, block, geometry};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// URL of the command bridge
    #[arg(long, default_value = "http://localhost:8080/mcpi/testPost")]
    server: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Place a single block
    Set {
        x: i64,
        y: i64,
        z: i64,
        /// Block name (e.g. stone) or numeric id
        block: String,
    },
    /// Fill a cuboid with one block type
    Fill {
        x1: i64,
        y1: i64,
        z1: i64,
        x2: i64,
        y2: i64,
        z2: i64,
        /// Block name (e.g. stone) or numeric id
        block: String,
    },
    /// Clear a cuboid to air
    Clear {
        x1: i64,
        y1: i64,
        z1: i64,
        x2: i64,
        y2: i64,
        z2: i64,
    },
    /// Cut a region and paste it at a new origin
    Move {
        x: i64,
        y: i64,
        z: i64,
        xs: i64,
        ys: i64,
        zs: i64,
        xn: i64,
        yn: i64,
        zn: i64,
    },
}

fn parse_block(s: &str) -> Result<i64, String> {
    if let Ok(id) = s.parse::<i64>() {
        return Ok(id);
    }
    block::lookup(s).ok_or_else(|| format!("unknown block '{s}'"))
}

fn run() -> Result<Delivery, Box<dyn Error>> {
    let cli = Cli::parse();
    let mut builder = Builder::new(HttpTransport::new(cli.server));

    let delivery = match cli.action {
        Action::Set { x, y, z, block } => {
            let id = parse_block(&block)?;
            builder.set_block(x, y, z, id);
            builder.flush()?
        }
        Action::Fill {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            block,
        } => {
            let id = parse_block(&block)?;
            builder.set_all_blocks(x1, y1, z1, x2, y2, z2, id);
            builder.flush()?
        }
        Action::Clear {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            builder.set_all_blocks(x1, y1, z1, x2, y2, z2, block::AIR);
            builder.flush()?
        }
        Action::Move {
            x,
            y,
            z,
            xs,
            ys,
            zs,
            xn,
            yn,
            zn,
        } => geometry::teleport(&mut builder, x, y, z, xs, ys, zs, xn, yn, zn)?,
    };

    Ok(delivery)
}

fn main() -> ExitCode {
    // Initialize env_logger; For logging to STDOUT/STDERR
    env_logger::init();

    let delivery = match run() {
        Ok(delivery) => delivery,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match delivery.wait() {
        Ok(reply) => {
            info!("batch {} delivered", reply.seq);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("transmission failed: {e}");
            ExitCode::FAILURE
        }
    }
}
