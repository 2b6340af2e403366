use anyhow::Result;
use clap::Parser;

use padel_counter::{
    args::Args,
    config::Config,
    feedback::TracingFeedback,
    logging,
    script::{self, parse_script},
    session::Session,
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let _guard = logging::init(&config.log_dir)?;

    if !args.is_scripted() {
        return run_ui(&config);
    }

    let mut session = Session::new();
    let mut sink = TracingFeedback;

    if let Some(play) = &args.play {
        let commands = parse_script(play)?;
        script::run_script(&mut session, &commands, &mut sink);
    }

    if let Some(points) = args.simulate {
        script::simulate(&mut session, points, args.seed, &mut sink);
    }

    let summary = session.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", script::render_text(&summary, &config.team_names));
    }

    Ok(())
}
