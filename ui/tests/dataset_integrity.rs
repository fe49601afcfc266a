//! Guards the embedded survey dataset: the charts assume it decodes, that the
//! columns the aggregations read are present, and that the resulting
//! summaries are usable. A regenerated or hand-edited CSV that breaks any of
//! these fails here instead of rendering empty charts.

use ui::core::aggregate::{condition_percentages, gender_tally, help_seeking_counts};
use ui::core::dataset;
use ui::core::survey::{Gender, CONDITIONS};

#[test]
fn embedded_dataset_decodes() {
    let rows = dataset::load_rows().expect("embedded CSV must decode");
    assert!(rows.len() >= 50, "dataset suspiciously small: {}", rows.len());
}

#[test]
fn every_row_lands_in_a_gender_bucket() {
    let rows = dataset::load_rows().expect("embedded CSV must decode");
    let tally = gender_tally(&rows);
    assert_eq!(tally.total() as usize, rows.len());
    // The survey skews female but both counted genders must be represented,
    // otherwise the bar chart renders NaN columns.
    assert!(tally.female > 0);
    assert!(tally.male > 0);
}

#[test]
fn condition_summaries_are_finite_and_bounded() {
    let rows = dataset::load_rows().expect("embedded CSV must decode");
    let summaries = condition_percentages(&rows);
    assert_eq!(summaries.len(), CONDITIONS.len());
    for summary in &summaries {
        for gender in [Gender::Female, Gender::Male] {
            let pct = summary.percent_for(gender);
            assert!(
                pct.is_finite() && (0.0..=100.0).contains(&pct),
                "{} {:?}: {pct}",
                summary.condition,
                gender
            );
        }
    }
}

#[test]
fn help_seeking_answers_are_present_but_not_universal() {
    let rows = dataset::load_rows().expect("embedded CSV must decode");
    let counts = help_seeking_counts(&rows);
    assert!(counts.total() > 0, "no usable help-seeking answers");
    // The raw column contains blanks and "Maybe" strays on purpose; they must
    // be dropped rather than counted.
    assert!((counts.total() as usize) < rows.len());
    assert!(counts.percent_did_not_seek() <= 100);
}
