use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lotoforge::draw::{join_numbers, DrawRecord, MainSet};
use lotoforge::filters::{Evaluation, FilterKind, FilterVerdict};
use lotoforge::predictor::PredictionBatch;
use lotoforge::scoring::ScoreComponent;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn verdict_cell(verdict: Option<&FilterVerdict>) -> Cell {
    match verdict {
        Some(v) if !v.evaluated => Cell::new("-").fg(Color::DarkGrey),
        Some(v) if v.pass => Cell::new("ok").fg(Color::Green),
        Some(_) => Cell::new("FAIL").fg(Color::Red),
        None => Cell::new(""),
    }
}

fn score_color(score: f64) -> Color {
    if score >= 70.0 {
        Color::Green
    } else if score >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn reference_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("\n(no historical draws)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["Draw", "Date", "Main", "Bonus"]);
    for d in draws {
        table.add_row(vec![
            Cell::new(d.id()),
            Cell::new(d.date().format("%Y-%m-%d")),
            Cell::new(join_numbers(&d.sorted_main())),
            Cell::new(join_numbers(d.bonus())),
        ]);
    }
    println!("\nRecent draws:\n{}", table);
}

pub fn candidates(batch: &PredictionBatch) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Main"),
        Cell::new("Bonus"),
        Cell::new("Score").fg(Color::Cyan),
    ];
    header.extend(
        ScoreComponent::ALL
            .iter()
            .map(|c| Cell::new(c.to_string())),
    );
    header.push(Cell::new("All"));
    table.set_header(header);

    for i in 3..=12 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for c in &batch.candidates {
        let mut row = vec![
            Cell::new(c.rank).add_attribute(Attribute::Bold),
            Cell::new(join_numbers(c.draw.main())),
            Cell::new(join_numbers(c.draw.bonus())),
        ];
        match &c.scoring {
            Some(s) => {
                row.push(Cell::new(format!("{:.2}", s.final_score)).fg(score_color(s.final_score)));
                for component in ScoreComponent::ALL {
                    row.push(Cell::new(format!("{:.0}", s.score(component))));
                }
            }
            None => {
                row.push(Cell::new("-"));
                row.extend(ScoreComponent::ALL.iter().map(|_| Cell::new("")));
            }
        }
        row.push(if c.overall_pass {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("FAIL").fg(Color::Red)
        });
        table.add_row(row);
    }
    println!("\nCandidates for draw {}:\n{}", batch.next_draw_number, table);
}

pub fn evaluation(main: &MainSet, evaluation: &Evaluation) {
    let mut sorted = *main;
    sorted.sort_unstable();
    let mut table = new_table();
    table.set_header(vec!["Filter", "Result", "Detail"]);
    for (kind, verdict) in evaluation.iter() {
        table.add_row(vec![
            Cell::new(kind.to_string()).add_attribute(Attribute::Bold),
            verdict_cell(Some(verdict)),
            Cell::new(verdict.to_string()),
        ]);
    }
    println!(
        "\nEvaluation of {} ({} of {} filters pass):\n{}",
        join_numbers(&sorted),
        evaluation.passed_count(),
        evaluation.len(),
        table
    );
}

pub fn history(draws: &[DrawRecord]) {
    let mut table = new_table();
    let mut header = vec![Cell::new("Draw"), Cell::new("Date"), Cell::new("Main")];
    header.extend(FilterKind::iter().map(|k| Cell::new(k.to_string())));
    table.set_header(header);

    for d in draws {
        let mut row = vec![
            Cell::new(d.id()),
            Cell::new(d.date().format("%Y-%m-%d")),
            Cell::new(join_numbers(&d.sorted_main())),
        ];
        row.extend(FilterKind::iter().map(|k| verdict_cell(d.evaluation().and_then(|e| e.get(k)))));
        table.add_row(row);
    }
    println!("\n{}", table);
}
