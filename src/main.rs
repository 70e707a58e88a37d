use std::path::Path;

use anyhow::Result;
use clap::Parser;
use log::debug;
use refrax::controller::Controller;
use refrax::output;
use refrax::settings::{self, CliArgs};
use refrax::sweep::Sweep;

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let settings = settings::load_config_from(&args)?;

    if args.dump_config {
        print!("{}", toml::to_string(&settings)?);
        return Ok(());
    }

    println!("{}", settings);

    let controller = Controller::new(settings.n1, settings.n2, settings.incidence_rad());
    println!("{}", controller.readout());
    for segment in controller.diagram().iter() {
        debug!("{:?}", segment);
    }

    let sweep = match &settings.sweep {
        Some(sweep_settings) => {
            let sweep = Sweep::new(settings.n1, settings.n2, sweep_settings)?;
            println!("{}", sweep);
            Some(sweep)
        }
        None => None,
    };

    if let Some(dir) = &settings.output {
        let dir = Path::new(dir);
        if let Some(sweep) = &sweep {
            output::write_sweep(dir, sweep)?;
        }
        if settings.json {
            output::write_snapshot(dir, controller.model(), controller.diagram())?;
        }
    }

    Ok(())
}
