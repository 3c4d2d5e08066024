use comfy_table::{Cell, Table, presets::UTF8_FULL};
use meteoroute::{
    analysis::{Checkpoint, Segment},
    polyline,
    travel::{TravelModeResult, TravelOutcome},
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn segments_table(segments: &[Segment]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "From", "To", "Distance", "Duration"]);

    for (index, segment) in segments.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(segment.start),
            Cell::new(segment.end),
            Cell::new(format!("{:.1} km", segment.distance.value() / 1000.0)),
            Cell::new(format!("{:#}", segment.duration)),
        ]);
    }

    table
}

pub fn checkpoints_table(checkpoints: &[Checkpoint]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["#", "Position", "Arrival"]);

    for (index, checkpoint) in checkpoints.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(checkpoint.coordinate),
            Cell::new(checkpoint.arrival_time.strftime(TIME_FORMAT)),
        ]);
    }

    table
}

/// Encodes the checkpoint positions as a polyline, ready to paste into a map viewer.
pub fn checkpoints_polyline(checkpoints: &[Checkpoint]) -> String {
    let coordinates: Vec<_> = checkpoints.iter().map(|checkpoint| checkpoint.coordinate).collect();
    polyline::encode(&coordinates)
}

pub fn result_table(result: &TravelModeResult) -> Table {
    let mut header = vec![
        "#".to_string(),
        "Position".to_string(),
        "Arrival".to_string(),
        "Score".to_string(),
    ];
    if let Some(first) = result.checkpoints().first() {
        header.extend(first.report.conditions().iter().map(|c| c.name().to_string()));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);

    for (index, checkpoint) in result.checkpoints().iter().enumerate() {
        let mut row = vec![
            Cell::new(index),
            Cell::new(checkpoint.coordinate()),
            Cell::new(checkpoint.arrival_time().strftime(TIME_FORMAT)),
            Cell::new(format!("{} ({})", checkpoint.score(), checkpoint.category())),
        ];
        row.extend(
            checkpoint
                .report
                .conditions()
                .iter()
                .map(|c| Cell::new(format!("{} → {}", c.value(), c.intensity_score()))),
        );
        table.add_row(row);
    }

    table
}

pub fn print_result(title: &str, result: &TravelModeResult) {
    println!(
        "{title}: {} | {} | arrival {} | score {} ({})",
        result.summary(),
        result.duration_text(),
        result.arrival_time().strftime(TIME_FORMAT),
        result.average_score(),
        result.category()
    );
    println!("{}", result_table(result));
}

pub fn print_outcome(outcome: &TravelOutcome) {
    print_result("Main route", &outcome.main);
    for (index, alternative) in outcome.alternatives.iter().enumerate() {
        println!();
        print_result(&format!("Alternative {}", index + 1), alternative);
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};
    use meteoroute::directions::Coordinate;

    use super::*;

    #[test]
    fn test_checkpoints_polyline() {
        let arrival = date(2024, 1, 15).at(8, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        let coordinates = vec![
            Coordinate::new(44.5, 11.34),
            Coordinate::new(44.36, 11.72),
            Coordinate::new(44.22, 12.04),
        ];
        let checkpoints: Vec<Checkpoint> = coordinates
            .iter()
            .map(|&coordinate| Checkpoint::new(coordinate, arrival.clone()))
            .collect();

        let encoded = checkpoints_polyline(&checkpoints);

        assert_eq!(polyline::decode(&encoded).unwrap(), coordinates);
    }

    #[test]
    fn test_checkpoints_polyline_empty() {
        assert_eq!(checkpoints_polyline(&[]), "");
    }
}
