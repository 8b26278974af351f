use anyhow::{bail, Context};
use signkit::{
    init_logging, write_preview_svg, EngineConfig, JsonExportSink, PanelGenerator, PanelJob,
};
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "usage: signkit <job.json|job.toml> [output_dir]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let Some(job_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if args.next().is_some() {
        bail!(USAGE);
    }

    info!("SignKit {} (built {})", signkit::VERSION, signkit::BUILD_DATE);

    let config = EngineConfig::load_or_default(None).context("loading engine config")?;
    let generator = PanelGenerator::new(config.to_engine_settings());

    let job = PanelJob::load_from_file(&job_path)
        .with_context(|| format!("loading job {}", job_path.display()))?;
    let assembly = job.generate(&generator)?;

    let mut sink = JsonExportSink::new(&output_dir, config.export.units)?;
    assembly.emit(&mut sink)?;

    let sheet = assembly.layout(config.layout.part_spacing);
    write_preview_svg(&output_dir.join("preview.svg"), &sheet)?;

    info!(
        "Generated {} part(s) into {}",
        sink.written().len(),
        output_dir.display()
    );
    Ok(())
}
