use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lotoforge::api::{DatasetSummary, NumberCount};
use lotoforge::stats::{Insights, Pattern};

pub fn insights(insights: &Insights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Hot").fg(Color::Red).add_attribute(Attribute::Bold),
            Cell::new("Freq"),
            Cell::new("Score"),
            Cell::new("Cold").fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new("Freq"),
            Cell::new("Score"),
            Cell::new("Overdue").fg(Color::Yellow).add_attribute(Attribute::Bold),
            Cell::new("Last seen"),
            Cell::new("Score"),
        ]);

    for i in 0..9 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let rows = insights
        .hot
        .len()
        .max(insights.cold.len())
        .max(insights.overdue.len());
    for i in 0..rows {
        let mut row = Vec::with_capacity(9);
        match insights.hot.get(i) {
            Some(e) => row.extend([
                Cell::new(format!("{:02}", e.number)),
                Cell::new(e.frequency),
                Cell::new(format!("{:.1}", e.score)),
            ]),
            None => row.extend([Cell::new(""), Cell::new(""), Cell::new("")]),
        }
        match insights.cold.get(i) {
            Some(e) => row.extend([
                Cell::new(format!("{:02}", e.number)),
                Cell::new(e.frequency),
                Cell::new(format!("{:.1}", e.score)),
            ]),
            None => row.extend([Cell::new(""), Cell::new(""), Cell::new("")]),
        }
        match insights.overdue.get(i) {
            Some(e) => row.extend([
                Cell::new(format!("{:02}", e.number)),
                Cell::new(e.last_seen.to_string()),
                Cell::new(format!("{:.1}", e.score)),
            ]),
            None => row.extend([Cell::new(""), Cell::new(""), Cell::new("")]),
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn patterns(patterns: &[Pattern]) {
    if patterns.is_empty() {
        println!("\n(not enough draws for pattern analysis)");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["Pattern", "Description"]);
    for p in patterns {
        table.add_row(vec![
            Cell::new(p.kind.to_string()).add_attribute(Attribute::Bold),
            Cell::new(&p.description),
        ]);
    }
    println!("\n{}", table);
}

fn counts_line(counts: &[NumberCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{:02}({})", c.number, c.count))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summary(summary: &DatasetSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![Cell::new("Total draws"), Cell::new(summary.total_draws)]);
    table.add_row(vec![
        Cell::new("Latest draw"),
        Cell::new(
            summary
                .latest_draw
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".into()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("Most common main"),
        Cell::new(counts_line(&summary.most_common_main)),
    ]);
    table.add_row(vec![
        Cell::new("Most common bonus"),
        Cell::new(counts_line(&summary.most_common_bonus)),
    ]);
    println!("\n{}", table);
}
