use anyhow::Context;
use clap::Parser;
use unxz::Unxz;

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let config = cli::Config::parse();
    logging::start(config.log_level);

    let job = Unxz::new(&config.archive, &config.destination).with_options(config.extract_options());
    let report = job.extract().with_context(|| {
        format!(
            "failed to extract '{}' into '{}'",
            config.archive.display(),
            config.destination.display()
        )
    })?;

    println!(
        "extracted {} entries ({} bytes, {} hard links) into {}",
        report.entry_count,
        report.total_bytes,
        report.hard_links,
        report.destination.display()
    );
    Ok(())
}
