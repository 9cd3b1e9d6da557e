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

extern crate orthodrome;

use angle_sc::is_within_tolerance;
use orthodrome::{Degrees, DistanceError, LatLong, Method, UnitSystem};

const FILENAME: &str = "data/airport_pairs.csv";

/// name, lat1, lon1, lat2, lon2, haversine_km, slc_km, vincenty_km, sep_km
type DataRecord = (String, f64, f64, f64, f64, f64, f64, f64, f64);

fn read_records() -> Result<Vec<DataRecord>, Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;
    let mut records = Vec::new();
    for result in rdr.deserialize::<DataRecord>() {
        records.push(result?);
    }
    Ok(records)
}

fn positions(record: &DataRecord) -> (LatLong, LatLong) {
    (
        LatLong::new(Degrees(record.1), Degrees(record.2)),
        LatLong::new(Degrees(record.3), Degrees(record.4)),
    )
}

#[test]
fn test_airport_pair_distances() -> Result<(), Box<dyn std::error::Error>> {
    let records = read_records()?;
    assert!(!records.is_empty());

    for record in &records {
        let (a, b) = positions(record);
        let expected = [record.5, record.6, record.7, record.8];

        for (method, expected) in Method::ALL.iter().zip(expected) {
            let km = method.distance(&a, &b, UnitSystem::Si)?;
            assert!(
                is_within_tolerance(expected, km, 1e-6),
                "{} {method}: expected {expected} km, got {km} km",
                record.0
            );
        }
    }

    Ok(())
}

#[test]
fn test_symmetry() -> Result<(), Box<dyn std::error::Error>> {
    for record in read_records()? {
        let (a, b) = positions(&record);
        for method in Method::ALL {
            let forward = method.distance(&a, &b, UnitSystem::Si)?;
            let reverse = method.distance(&b, &a, UnitSystem::Si)?;
            assert!(
                is_within_tolerance(forward, reverse, forward * 1e-9),
                "{} {method}",
                record.0
            );
        }
    }

    Ok(())
}

#[test]
fn test_unit_consistency() -> Result<(), Box<dyn std::error::Error>> {
    for record in read_records()? {
        let (a, b) = positions(&record);
        for method in Method::ALL {
            let km = method.distance(&a, &b, UnitSystem::Si)?;
            let miles = method.distance(&a, &b, UnitSystem::Us)?;
            assert!(
                is_within_tolerance(1.609_344, km / miles, 1e-12),
                "{} {method}",
                record.0
            );
        }
    }

    Ok(())
}

#[test]
fn test_haversine_and_slc_agree() -> Result<(), Box<dyn std::error::Error>> {
    for record in read_records()? {
        let (a, b) = positions(&record);
        let haversine = Method::Haversine.distance(&a, &b, UnitSystem::Si)?;
        let slc = Method::SphericalLawOfCosines.distance(&a, &b, UnitSystem::Si)?;
        assert!(
            is_within_tolerance(haversine, slc, haversine * 1e-6),
            "{}",
            record.0
        );
    }

    Ok(())
}

#[test]
fn test_coincident_positions() {
    let positions = [
        LatLong::new(Degrees(40.641766), Degrees(-73.780968)),
        LatLong::new(Degrees(-33.946111), Degrees(151.177222)),
        LatLong::new(Degrees(90.0), Degrees(0.0)),
        LatLong::new(Degrees(0.0), Degrees(-180.0)),
    ];
    for p in &positions {
        for method in [
            Method::Haversine,
            Method::Vincenty,
            Method::SphericalEarthProjection,
        ] {
            assert_eq!(Ok(0.0), method.distance(p, p, UnitSystem::Si), "{method}");
        }
        let slc = Method::SphericalLawOfCosines
            .distance(p, p, UnitSystem::Si)
            .unwrap();
        assert!(slc < 2e-4);
    }
}

#[test]
fn test_non_finite_coordinates() {
    let good = LatLong::new(Degrees(51.470020), Degrees(-0.454295));
    let bad = [
        LatLong::new(Degrees(f64::NAN), Degrees(0.0)),
        LatLong::new(Degrees(0.0), Degrees(f64::NAN)),
        LatLong::new(Degrees(f64::INFINITY), Degrees(0.0)),
        LatLong::new(Degrees(0.0), Degrees(f64::NEG_INFINITY)),
    ];
    for p in &bad {
        for method in Method::ALL {
            assert_eq!(
                Err(DistanceError::NonFinite),
                method.distance(p, &good, UnitSystem::Si)
            );
            assert_eq!(
                Err(DistanceError::NonFinite),
                method.distance(&good, p, UnitSystem::Us)
            );
        }
    }
}

#[test]
fn test_antipodal_positions() {
    let a = LatLong::new(Degrees(0.0), Degrees(0.0));
    let b = LatLong::new(Degrees(0.0), Degrees(180.0));

    // The spherical methods give half the circumference.
    for method in [Method::Haversine, Method::SphericalLawOfCosines] {
        let km = method.distance(&a, &b, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(20015.115070, km, 1e-6));
    }

    // Vincenty terminates without converging.
    assert_eq!(
        Err(DistanceError::NoConvergence(100)),
        Method::Vincenty.distance(&a, &b, UnitSystem::Si)
    );

    // Except along a meridian.
    let north = LatLong::new(Degrees(90.0), Degrees(0.0));
    let south = LatLong::new(Degrees(-90.0), Degrees(0.0));
    let km = Method::Vincenty
        .distance(&north, &south, UnitSystem::Si)
        .unwrap();
    assert!(is_within_tolerance(20003.931459, km, 1e-6));
}
