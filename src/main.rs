// Copyright (c) 2025 Orthodrome Developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

use std::error::Error;

use clap::Parser;
use log::LevelFilter;
use orthodrome::{Degrees, LatLong, Method, UnitSystem};

/// A named pair of positions.
struct Route {
    name: String,
    from: LatLong,
    to: LatLong,
}

#[derive(Parser)]
#[command(version, about = "Compare great-circle distance methods between two positions")]
struct Cli {
    /// Latitude and longitude of the start and end points in decimal degrees.
    /// Without them, JFK to LAX and JFK to LHR are shown.
    #[arg(
        num_args = 4,
        allow_negative_numbers = true,
        value_names = ["LAT1", "LON1", "LAT2", "LON2"]
    )]
    coordinates: Vec<f64>,

    /// Show distances in statute miles instead of kilometres
    #[arg(long)]
    miles: bool,

    /// Log the solver's progress
    #[arg(short, long)]
    verbose: bool,
}

fn airport_routes() -> Vec<Route> {
    let jfk = || LatLong::new(Degrees(40.641766), Degrees(-73.780968));
    let lax = LatLong::new(Degrees(33.942791), Degrees(-118.410042));
    let lhr = LatLong::new(Degrees(51.470020), Degrees(-0.454295));
    vec![
        Route {
            name: "JFK -> LAX".to_owned(),
            from: jfk(),
            to: lax,
        },
        Route {
            name: "JFK -> LHR".to_owned(),
            from: jfk(),
            to: lhr,
        },
    ]
}

fn routes_from(cli: &Cli) -> Vec<Route> {
    match cli.coordinates.as_slice() {
        &[lat1, lon1, lat2, lon2] => vec![Route {
            name: format!("({lat1}, {lon1}) -> ({lat2}, {lon2})"),
            from: LatLong::new(Degrees(lat1), Degrees(lon1)),
            to: LatLong::new(Degrees(lat2), Degrees(lon2)),
        }],
        _ => airport_routes(),
    }
}

fn print_table(route: &Route, unit: UnitSystem) {
    println!("{}", route.name);
    println!("  {:<28}{:>16}", "Method", format!("Distance ({})", unit.symbol()));
    for method in Method::ALL {
        match method.distance(&route.from, &route.to, unit) {
            Ok(distance) => println!("  {:<28}{:>16.6}", method.name(), distance),
            Err(e) => println!("  {:<28}{:>16}", method.name(), e.to_string()),
        }
    }
    println!();
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut logger = colog::basic_builder();
    logger.filter_level(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    logger.try_init()?;

    let unit = if cli.miles {
        UnitSystem::Us
    } else {
        UnitSystem::Si
    };

    for route in routes_from(&cli) {
        print_table(&route, unit);
    }

    Ok(())
}
