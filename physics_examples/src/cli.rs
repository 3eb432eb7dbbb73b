use clap::{App, Arg, ArgMatches};

pub const SCENARIOS: [&str; 4] = ["basic", "ball_pit", "newtons_cradle", "box_stack"];

pub fn parse_command_line() -> ArgMatches<'static> {
    let scenario_arg = Arg::with_name("scenario")
        .help("Scenario to run")
        .index(1)
        .default_value("basic")
        .possible_values(&SCENARIOS);

    let steps_option = Arg::with_name("steps")
        .long("steps")
        .short("n")
        .takes_value(true)
        .default_value("300");

    let config_option = Arg::with_name("config")
        .long("config")
        .short("c")
        .takes_value(true)
        .help("JSON file with physics settings");

    let report_option = Arg::with_name("report")
        .long("report")
        .short("r")
        .takes_value(true)
        .default_value("60")
        .help("Print body state every N ticks");

    App::new("physics_examples")
        .version("0.1")
        .about("Headless scenarios for the rigid_physics crate")
        .arg(scenario_arg)
        .arg(steps_option)
        .arg(config_option)
        .arg(report_option)
        .arg(Arg::with_name("rotational").long("rotational").help("Enable rotational response"))
        .arg(Arg::with_name("no-correction").long("no-correction").help("Disable positional correction"))
        .arg(Arg::with_name("dump-config").long("dump-config").help("Print the effective config and exit"))
        .get_matches()
}
