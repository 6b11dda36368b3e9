use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use iniconf::Config;

/// Print the sample values from an INI configuration file, creating the
/// default file first when it does not exist yet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.ini")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let config = Config::open(&args.config, true)
        .with_context(|| format!("failed to load {}", args.config))?;

    println!("Section1.var1 = {}", config.get_int("Section1.var1")?);
    println!("Section1.var2 = {}", config.get_string("Section1.var2")?);
    println!("Section2.var1 = {}", config.get_int("Section2.var1")?);
    println!("Section2.var2 = {}", config.get_string("Section2.var2")?);

    Ok(())
}
