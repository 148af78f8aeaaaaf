//! Command-line interface definition and dispatch.

use std::io::{self, BufRead, Write as _};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use stackdev::{DEFAULT_CAPACITY, StackConfig, StackDevice};
use tokio::net::TcpListener;

use crate::client::Client;
use crate::protocol::describe_status;

const DEFAULT_ADDR: &str = "127.0.0.1:7100";

/// Shared integer stack device over TCP
#[derive(Parser)]
#[command(name = "stackdev", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Host the stack device and serve clients
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_ADDR)]
        listen: String,

        /// Initial capacity in elements
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY as i32, allow_negative_numbers = true)]
        capacity: i32,
    },

    /// Change the capacity of a running device
    SetCapacity {
        /// Address of the device
        #[arg(short = 'a', long, default_value = DEFAULT_ADDR)]
        connect: String,

        /// New capacity; prompted for on stdin when omitted
        #[arg(allow_negative_numbers = true)]
        capacity: Option<i32>,
    },

    /// Push integers onto the device
    Push {
        /// Address of the device
        #[arg(short = 'a', long, default_value = DEFAULT_ADDR)]
        connect: String,

        /// Values to push, first value lands deepest
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Pop integers from the device
    Pop {
        /// Address of the device
        #[arg(short = 'a', long, default_value = DEFAULT_ADDR)]
        connect: String,

        /// Number of elements to pop
        #[arg(default_value_t = 1)]
        count: u32,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { listen, capacity } => {
            let config = StackConfig::from_raw(capacity)?;
            let device = Arc::new(StackDevice::new(config)?);
            let listener = TcpListener::bind(&listen)
                .await
                .with_context(|| format!("can't listen on {}", listen))?;
            info!("serving stack device with {} slots", capacity);
            crate::server::serve(listener, device).await
        }
        Commands::SetCapacity { connect, capacity } => {
            let capacity = match capacity {
                Some(capacity) => capacity,
                None => prompt_capacity()?,
            };
            let mut client = Client::connect(&connect).await?;
            let response = client.set_capacity(capacity).await?;
            if !response.is_ok() {
                bail!(
                    "set capacity failed: {} (errno {})",
                    describe_status(response.status),
                    response.status
                );
            }
            Ok(())
        }
        Commands::Push { connect, values } => {
            let mut client = Client::connect(&connect).await?;
            let response = client.write(&values).await?;
            if !response.is_ok() {
                bail!("push failed: {}", describe_status(response.status));
            }
            println!("pushed {} of {} values", response.count / 4, values.len());
            Ok(())
        }
        Commands::Pop { connect, count } => {
            let mut client = Client::connect(&connect).await?;
            let len = count.checked_mul(4).context("count too large")?;
            for value in client.read(len).await? {
                println!("{}", value);
            }
            Ok(())
        }
    }
}

fn prompt_capacity() -> Result<i32> {
    print!("Enter stack size: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    line.trim()
        .parse()
        .with_context(|| format!("not a number: {:?}", line.trim()))
}
