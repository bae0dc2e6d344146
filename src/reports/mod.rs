use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use langrank::language::LanguageProfile;
use langrank::ranking::RankEntry;
use langrank::store::{FileStore, ProfileStore};
use langrank::{Classifier, LanguageId, LrResult, Ranking};
use serde::Serialize;

#[derive(Serialize)]
struct ClassificationReport<'a> {
    predicted: &'a LanguageId,
    ranking: &'a [RankEntry],
}

pub fn print_prediction(ranking: &Ranking) {
    println!(
        "\nThe input document is written in {}.",
        ranking.predicted().language
    );
}

pub fn print_ranking(ranking: &Ranking, classifier: &Classifier) {
    println!("\nRanking is as follows:");

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Language").add_attribute(Attribute::Bold),
        Cell::new("Symbols"),
        Cell::new("Profile"),
    ]);

    for (i, entry) in ranking.entries().iter().enumerate() {
        let (symbols, provenance) = match classifier.language(&entry.language) {
            Some(profile) => (
                profile.profile.len().to_string(),
                profile.provenance.to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        let language = if i == 0 {
            Cell::new(&entry.language)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green)
        } else {
            Cell::new(&entry.language)
        };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(entry.score).fg(Color::Cyan),
            language,
            Cell::new(symbols),
            Cell::new(provenance),
        ]);
    }

    for i in [0, 1, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
}

pub fn print_json(ranking: &Ranking) -> LrResult<()> {
    let report = ClassificationReport {
        predicted: &ranking.predicted().language,
        ranking: ranking.entries(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn print_training_summary(trained: &[LanguageProfile], store: &FileStore) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Language").add_attribute(Attribute::Bold),
        Cell::new("Symbols"),
        Cell::new("Stored"),
        Cell::new("Path"),
    ]);

    for lp in trained {
        table.add_row(vec![
            Cell::new(&lp.language),
            Cell::new(lp.profile.len()).set_alignment(CellAlignment::Right),
            Cell::new(if store.has(&lp.language) { "yes" } else { "no" }),
            Cell::new(store.path_for(&lp.language).display()),
        ]);
    }

    println!("\n{}", table);
}
