use std::path::PathBuf;

use clap::Parser;
use seedcfg::InstallOptions;

#[derive(Parser)]
#[command(name = "seedcfg")]
#[command(version)]
#[command(
    about = "Bootstrap a live configuration file from its default template",
    long_about = None
)]
struct Cli {
    /// Deployment address; defaults to this host's outward-facing IP
    #[arg(short, long)]
    address: Option<String>,
    /// Administrative account name
    #[arg(short, long, default_value = "root")]
    username: String,
    /// Administrative account password
    #[arg(short, long, default_value = "\"\"")]
    password: String,
    /// Local interface; defaults to this host's outward-facing IP
    #[arg(short, long)]
    local: Option<String>,
    /// Additional substitution, repeatable
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Default configuration template to render
    #[arg(long, default_value = "config.default.yml")]
    template: PathBuf,
    /// Live configuration file to produce
    #[arg(long, default_value = "config.yml")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options = InstallOptions {
        address: cli.address,
        username: cli.username,
        password: cli.password,
        local: cli.local,
        set: cli.set,
        template: cli.template,
        output: cli.output,
    };

    match seedcfg::install(&options) {
        Ok(outcome) => println!("✅ Rendered {}", outcome.output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
