//! cityroute — interactive shortest-route console.
//!
//! Loads a city file and a road file (see `rn_graph::loader` for the
//! formats) and then answers single-letter menu commands:
//!
//! ```text
//! Q  query a city record by code       I  insert a road
//! D  minimum distance between cities   R  remove a road
//! H  show the menu                     E  exit
//! ```
//!
//! Usage: `cityroute [CITY_FILE] [ROAD_FILE]` — defaults to
//! `data/city.dat` and `data/road.dat` relative to the working directory.
//! City codes typed at the prompts are uppercased before lookup.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use rn_core::CityId;
use rn_graph::RoadNetwork;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let city_path = PathBuf::from(args.next().unwrap_or_else(|| "data/city.dat".into()));
    let road_path = PathBuf::from(args.next().unwrap_or_else(|| "data/road.dat".into()));

    let network = rn_graph::load_network(&city_path, &road_path).with_context(|| {
        format!(
            "loading network from {} and {}",
            city_path.display(),
            road_path.display()
        )
    })?;
    println!(
        "Loaded {} cities and {} roads.",
        network.city_count(),
        network.road_count()
    );

    run(network, &mut Console::new());
    Ok(())
}

// ── Command loop ──────────────────────────────────────────────────────────────

fn run(mut network: RoadNetwork, console: &mut Console) {
    loop {
        console.prompt("Command? ");
        let Some(command) = console.token() else { break };
        let done = match command.to_lowercase().as_str() {
            "q" => query(&network, console),
            "d" => min_distance(&network, console),
            "i" => insert_road(&mut network, console),
            "r" => remove_road(&mut network, console),
            "h" => {
                menu();
                Some(())
            }
            "e" => {
                println!("Goodbye.");
                break;
            }
            _ => {
                println!("Incorrect input.");
                Some(())
            }
        };
        if done.is_none() {
            break; // input ended mid-command
        }
    }
}

fn query(network: &RoadNetwork, console: &mut Console) -> Option<()> {
    console.prompt("City Code: ");
    let code = console.token()?.to_uppercase();
    match network.find_city(&code) {
        Some(city) => println!("{city}"),
        None => println!("The city does not exist."),
    }
    Some(())
}

fn min_distance(network: &RoadNetwork, console: &mut Console) -> Option<()> {
    console.prompt("City Codes: ");
    let from_code = console.token()?.to_uppercase();
    let to_code = console.token()?.to_uppercase();
    let (Some(from), Some(to)) = (network.find_city(&from_code), network.find_city(&to_code))
    else {
        println!("One or both of the cities do not exist.");
        return Some(());
    };

    let route = network.shortest_route(from.id, to.id);
    if route.found() {
        // Route codes come back end-to-start; reverse for display.
        let path: Vec<&str> = route.codes.iter().rev().map(String::as_str).collect();
        println!(
            "The minimum distance between {} and {} is {} through the route {}.",
            from.name,
            to.name,
            route.distance,
            path.join(" ")
        );
    } else {
        println!("No path from {} to {}.", from.name, to.name);
    }
    Some(())
}

fn insert_road(network: &mut RoadNetwork, console: &mut Console) -> Option<()> {
    console.prompt("City Codes and Distance: ");
    let from_code = console.token()?.to_uppercase();
    let to_code = console.token()?.to_uppercase();
    let distance = console.token()?;

    let Some((from, to, from_name, to_name)) = resolve_pair(network, &from_code, &to_code) else {
        println!("One or both of the cities do not exist.");
        return Some(());
    };
    // A road of distance 0 cannot exist (0 marks an empty cell).
    let Ok(distance @ 1..) = distance.parse::<u32>() else {
        println!("Not a valid distance.");
        return Some(());
    };

    if network.set_road(from, to, distance) {
        println!(
            "You have inserted a road from {from_name} to {to_name} with a distance of {distance}."
        );
    } else {
        println!("A road already exists.");
    }
    Some(())
}

fn remove_road(network: &mut RoadNetwork, console: &mut Console) -> Option<()> {
    console.prompt("City Codes: ");
    let from_code = console.token()?.to_uppercase();
    let to_code = console.token()?.to_uppercase();

    let Some((from, to, from_name, to_name)) = resolve_pair(network, &from_code, &to_code) else {
        println!("One or both of the cities do not exist.");
        return Some(());
    };

    if network.road_weight(from, to) == 0 {
        println!("The road from {from_name} to {to_name} does not exist.");
    } else {
        network.set_road(from, to, 0);
        println!("You have removed the road from {from_name} to {to_name}.");
    }
    Some(())
}

fn menu() {
    println!("  Q Query city information by entering the city code.");
    println!("  D Find the minimum distance between two cities.");
    println!("  I Insert a road by entering two city codes and a distance.");
    println!("  R Remove an existing road by entering two city codes.");
    println!("  H Display this message.");
    println!("  E Exit.");
}

/// Look both codes up and copy out what the mutating commands need, so the
/// network borrow ends before `set_road`.
fn resolve_pair(
    network: &RoadNetwork,
    from_code: &str,
    to_code: &str,
) -> Option<(CityId, CityId, String, String)> {
    let from = network.find_city(from_code)?;
    let to = network.find_city(to_code)?;
    Some((from.id, to.id, from.name.clone(), to.name.clone()))
}

// ── Console input ─────────────────────────────────────────────────────────────

/// Whitespace-token reader over stdin, so a command and its arguments may
/// arrive on one line or across several.
struct Console {
    stdin:   io::StdinLock<'static>,
    pending: VecDeque<String>,
}

impl Console {
    fn new() -> Self {
        Self { stdin: io::stdin().lock(), pending: VecDeque::new() }
    }

    fn prompt(&self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    /// Next token, reading further lines as needed.  `None` once stdin is
    /// closed.
    fn token(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.stdin.read_line(&mut line).ok()? == 0 {
                return None;
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front()
    }
}
