use rigid_physics::*;
use std::error::Error;
use std::fs;
use std::str::FromStr;

mod cli;

fn main() {
    env_logger::init();
    let matches = cli::parse_command_line();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = match matches.value_of("config") {
        Some(path) => PhysicsConfig::from_json(&fs::read_to_string(path)?)?,
        None => PhysicsConfig::default(),
    };
    if matches.is_present("rotational") {
        config.rotational_response = true;
    }
    if matches.is_present("no-correction") {
        config.correct_position = false;
    }
    if matches.is_present("dump-config") {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let steps: usize = parse_arg(matches, "steps")?;
    let report_every: usize = parse_arg::<usize>(matches, "report")?.max(1);
    let example = matches.value_of("scenario").unwrap_or("basic");

    log::info!("running example {} for {} ticks", example, steps);
    let mut set = match example {
        "basic" => basic_scene(),
        "ball_pit" => ball_pit_scene(),
        "newtons_cradle" => newtons_cradle_scene(),
        "box_stack" => box_stack_scene(),
        other => return Err(format!("unknown example: {}", other).into()),
    };

    let physics = Physics::new(config);
    let mut contacts = Vec::new();
    for step in 1..=steps {
        physics.update(&mut set);
        contacts.clear();
        physics.process_set(&mut set, Some(&mut contacts));
        log::debug!("tick {}: {} contact records", step, contacts.len());

        if step % report_every == 0 {
            println!("--- tick {} ({} contact records) ---", step, contacts.len());
            for (i, body) in set.iter().enumerate() {
                let p = body.center();
                println!("  [{}] pos=({:.3}, {:.3}) rot={:.3} {}", i, p.x, p.y, body.transform().rotation(), body);
            }
        }
    }

    // Debug-draw the final frame headlessly to report how much a renderer would get.
    let mut recorder = LineRecorder::default();
    set.draw(&mut recorder);
    for info in &contacts {
        info.draw(&mut recorder);
    }
    log::info!("final frame: {} bodies, {} debug lines", set.len(), recorder.lines.len());
    Ok(())
}

fn parse_arg<T>(matches: &clap::ArgMatches, name: &str) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    let raw = matches.value_of(name).ok_or_else(|| format!("missing --{}", name))?;
    Ok(raw.parse::<T>()?)
}

fn ground(width: f64) -> RigidShape {
    RigidShape::rectangle(Transform::new(Vec2::ZERO, 0.0, width, 1.0), width, 1.0).with_mass(0.0)
}

fn wall(x: f64, height: f64) -> RigidShape {
    let xf = Transform::new(Vec2::new(x, height / 2.0), 0.0, 1.0, height);
    RigidShape::rectangle(xf, 1.0, height).with_mass(0.0)
}

fn ball(x: f64, y: f64, radius: f64) -> RigidShape {
    RigidShape::circle(Transform::new(Vec2::new(x, y), 0.0, radius, radius), radius)
}

/// One ball dropped onto the ground.
fn basic_scene() -> BodySet {
    let mut set = BodySet::new();
    set.add(ball(0.0, 5.0, 1.0));
    set.add(ground(20.0));
    set
}

/// A grid of mixed circles and boxes falling into a walled pit.
fn ball_pit_scene() -> BodySet {
    let materials = [Material::ICE, Material::MUD, Material::WOOD, Material::DIRT];
    let mut set = BodySet::new();
    set.add(ground(30.0));
    set.add(wall(-14.5, 20.0));
    set.add(wall(14.5, 20.0));
    for row in 0..4 {
        for col in 0..8 {
            let x = -10.5 + col as f64 * 3.0;
            let y = 4.0 + row as f64 * 3.0;
            let material = materials[(row + col) % materials.len()];
            let body = if (row + col) % 3 == 0 {
                let xf = Transform::new(Vec2::new(x, y), 0.25 * col as f64, 1.6, 1.2);
                RigidShape::rectangle(xf, 1.6, 1.2)
            } else {
                ball(x, y, 0.8).with_mass(0.5 + 0.25 * row as f64)
            };
            set.add(body.with_material(material));
        }
    }
    set
}

/// A row of touching elastic balls hit from the left.
fn newtons_cradle_scene() -> BodySet {
    let elastic = Material::new(1.0, 0.0);
    let mut set = BodySet::new();
    set.add(ball(-8.0, 1.5, 1.0).with_material(elastic).with_velocity(Vec2::new(10.0, 0.0)));
    for i in 0..5 {
        set.add(ball(i as f64 * 2.0, 1.5, 1.0).with_material(elastic));
    }
    set.add(ground(30.0).with_material(elastic));
    set
}

/// A column of boxes stacked on the ground.
fn box_stack_scene() -> BodySet {
    let mut set = BodySet::new();
    set.add(ground(20.0));
    for i in 0..5 {
        let y = 1.5 + i as f64 * 2.05;
        set.add(RigidShape::rectangle(Transform::new(Vec2::new(0.0, y), 0.0, 2.0, 2.0), 2.0, 2.0));
    }
    set
}
