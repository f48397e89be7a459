use anyhow::{Context, Result};
use energy_load_server::packer::pack;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        println!("Usage: artifact_packer <params.json> [output.bin]");
        std::process::exit(1);
    }
    let params_path = Path::new(&args[1]);
    let output_path = Path::new(args.get(2).map(String::as_str).unwrap_or("model.bin"));

    let written = pack(params_path, output_path)
        .with_context(|| format!("failed to pack {}", params_path.display()))?;
    println!("Wrote {written} bytes to {}", output_path.display());

    Ok(())
}
