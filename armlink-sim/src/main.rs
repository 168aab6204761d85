// Copyright (C) 2024 Armlink Contributors
// All rights reserved.

use clap::Parser;

use armlink::core::{ArmConfig, Axis};
use armlink::scene::Grabbable;
use armlink::session::{Mode, Session};

#[derive(Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Armlink Arm Simulator", long_about = None)]
struct Args {
    /// Path to an arm profile file.
    #[arg(long)]
    profile: Option<std::path::PathBuf>,
    /// Number of playback ticks to run before exiting.
    #[arg(long, default_value_t = 300)]
    playback_ticks: usize,
    /// Randomize the start position.
    #[arg(long, default_value_t = true)]
    randomize_start: bool,
    /// Daemonize the service.
    #[arg(long)]
    daemon: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.daemon {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    } else {
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = if args.daemon {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let color_choice = if args.daemon {
        simplelog::ColorChoice::Never
    } else {
        simplelog::ColorChoice::Auto
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    if args.daemon {
        log::debug!("Running service as daemon");
    }

    let config = match &args.profile {
        Some(path) => armlink::Profile::from_file(path)?.arm_config(),
        None => ArmConfig::default(),
    };

    run(config, args).await
}

/// Drive one scripted teach-and-playback session.
async fn run(config: ArmConfig, args: Args) -> anyhow::Result<()> {
    let tick = std::time::Duration::from_millis(1_000 / armlink::consts::TICK_RATE);
    let mut interval = tokio::time::interval(tick);

    let mut session = Session::new(config);
    let object = session.add_object(Grabbable::default());

    log::info!("Starting session; arm at rest: {}", session.angles());

    if args.randomize_start {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..60 {
            interval.tick().await;

            session.apply_delta(Axis::Pitch, rng.gen_range(-0.02..0.02));
            session.apply_delta(Axis::Yaw, rng.gen_range(-0.02..0.02));
            session.apply_delta(Axis::Elbow, rng.gen_range(-0.02..0.02));
            session.tick()?;
        }

        log::info!("Randomized start: {}", session.angles());
    }

    // Reach for the object and pick it up.
    let pickup = session.scene().object(object).unwrap().position;
    session.command_target(pickup)?;
    settle(&mut session, &mut interval).await?;

    session.try_grasp(object)?;
    log::info!("Holding object at {}", session.pose());

    // Teach a carry move while recording every tick.
    session.set_mode(Mode::Teach);
    session.command_target((1.0, 1.5, 1.0))?;
    settle(&mut session, &mut interval).await?;

    session.release();
    session.tick()?;

    log::info!("Recorded {} frames", session.frame_count());

    if !session.has_recording() {
        anyhow::bail!("no moves were taught");
    }

    // Replay the sequence in a loop.
    session.set_mode(Mode::Play);
    for iteration in 0..args.playback_ticks {
        interval.tick().await;
        session.tick()?;

        if iteration % armlink::consts::TICK_RATE as usize == 0 {
            log::info!(
                "Playback {}; holding: {}",
                session.pose(),
                session.is_holding()
            );
        }
    }

    log::info!("Session complete");

    Ok(())
}

/// Tick the session until the in-flight reach settles.
async fn settle(
    session: &mut Session,
    interval: &mut tokio::time::Interval,
) -> anyhow::Result<()> {
    while session.is_reaching() {
        interval.tick().await;
        session.tick()?;
    }

    Ok(())
}
