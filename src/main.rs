//! QRy 命令行入口
//!
//! 用法：
//!   qry reg [-f qrcode.png] [-c ~/.qry/qry.json]
//!   qry gen [-c ~/.qry/qry.json]
//!
//! 设计原则：
//! - 密码只在这里读取（rpassword 隐藏回显），库内不做任何交互
//! - 所有实际逻辑都委托给库；这里只负责参数、提示与退出码

use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use qry::ZbarImg;
use qry::fs::paths;

#[derive(Parser)]
#[command(name = "qry", about = "QRy - TOTP generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a TOTP secret from a QR code image
    Reg {
        /// Path to the QR code image file
        #[arg(short = 'f', long = "qrcode", default_value = "qrcode.png")]
        qrcode: PathBuf,

        /// Path of the vault file to write
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },

    /// Generate the current OTP from the vault
    Gen {
        /// Path of the vault file to read
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Reg { qrcode, config } => {
            paths::ensure_storage_dir()?;

            let config = match config {
                Some(path) => path,
                None => paths::default_config_path()?,
            };

            let password =
                Zeroizing::new(rpassword::prompt_password("Input password for the seed: ")?);

            qry::register(&ZbarImg, &qrcode, &config, &password)
                .context("registration failed")?;

            println!("Registration successful !!");
        }

        Command::Gen { config } => {
            let config = match config {
                Some(path) => path,
                None => paths::default_config_path()?,
            };

            let password = Zeroizing::new(rpassword::prompt_password(
                "Input password for the qry file: ",
            )?);

            let token = qry::generate(&config, &password).context("failed to generate OTP")?;

            println!("{token}");
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}
