use anyhow::Result;
use serde_json::{json, Value};

use review_pipeline::pipeline::source::{ReviewSource, Sheet, Workbook};
use review_pipeline::pipeline::{BatchOutcome, ReviewPipeline};
use review_pipeline::PipelineError;

fn sheet(rows: &[(Value, Value)]) -> Sheet {
    let mut sheet = Sheet::new(vec!["Calificacion".into(), "Comentarios".into()]);
    for (rating, comment) in rows {
        let mut row = serde_json::Map::new();
        row.insert("Calificacion".into(), rating.clone());
        row.insert("Comentarios".into(), comment.clone());
        sheet.rows.push(row);
    }
    sheet
}

fn survey_workbook() -> ReviewSource {
    let mut wb = Workbook::new();
    wb.insert(
        "ATC",
        sheet(&[
            (json!(5), json!("Muy buen servicio")),
            (json!("abc"), json!("")),
            (json!("7.8"), json!("¡Excelente Servicio! Me gustó mucho.")),
            (json!(9), json!("sin comentarios")),
        ]),
    );
    wb.insert(
        "Encuesta salida",
        sheet(&[
            (json!("3 puntos"), json!("Pesimo trato, muy lento")),
            (json!(10), json!("ok")),
        ]),
    );
    ReviewSource::Workbook(wb)
}

#[test]
fn workbook_source_end_to_end() -> Result<()> {
    let batch = ReviewPipeline::new().run(&survey_workbook())?;

    let got: Vec<(i64, &str, usize)> = batch
        .reviews
        .iter()
        .map(|r| (r.calificacion(), r.comentarios(), r.longitud()))
        .collect();

    // ATC rows first, then "Encuesta salida", with every survivor cleaned.
    assert_eq!(
        got,
        vec![
            (5, "muy buen servicio", 17),
            (7, "excelente servicio me gusto mucho", 33),
            (3, "pesimo trato muy lento", 22),
        ]
    );

    assert_eq!(batch.outcome(), BatchOutcome::Populated(3));
    assert_eq!(batch.diagnostics.rows_unified, 6);
    assert_eq!(batch.diagnostics.rejected_rating, 1);
    assert_eq!(batch.diagnostics.rejected_relevance, 2);
    Ok(())
}

#[test]
fn accepted_reviews_satisfy_the_output_contract() -> Result<()> {
    let batch = ReviewPipeline::new().run(&survey_workbook())?;

    for review in &batch.reviews {
        assert!(review.longitud() >= 5);
        assert_eq!(review.longitud(), review.comentarios().chars().count());
        assert!((0..=10).contains(&review.calificacion()));
        assert!(review
            .comentarios()
            .chars()
            .all(|c| !c.is_ascii_punctuation()));
    }
    Ok(())
}

#[test]
fn identical_sources_yield_identical_batches() -> Result<()> {
    let pipeline = ReviewPipeline::new();
    let first = pipeline.run(&survey_workbook())?;
    let second = pipeline.run(&survey_workbook())?;
    assert_eq!(first.reviews, second.reviews);
    Ok(())
}

#[test]
fn missing_column_aborts_the_whole_ingestion() {
    let mut wb = Workbook::new();
    wb.insert("ATC", sheet(&[(json!(5), json!("Muy buen servicio"))]));
    wb.insert("Encuesta salida", Sheet::new(vec!["Calificacion".into()]));

    let err = ReviewPipeline::new()
        .run(&ReviewSource::Workbook(wb))
        .unwrap_err();
    assert!(matches!(err, PipelineError::StructuralValidation(_)));
    let message = err.to_string();
    assert!(message.contains("Encuesta salida"));
    assert!(message.contains("Comentarios"));
}

#[test]
fn flat_table_skips_workbook_validation() -> Result<()> {
    // A flat export has no sheet-count contract at all.
    let batch = ReviewPipeline::new().run(&ReviewSource::Flat(sheet(&[(
        json!(8),
        json!("Atención rápida y amable"),
    )])))?;

    assert_eq!(batch.reviews.len(), 1);
    assert_eq!(batch.reviews[0].comentarios(), "atencion rapida y amable");
    Ok(())
}

#[test]
fn empty_survivor_set_is_reported_not_failed() -> Result<()> {
    let batch = ReviewPipeline::new().run(&ReviewSource::Flat(sheet(&[
        (json!("sin nota"), json!("Muy buen servicio")),
        (json!(5), json!("na")),
    ])))?;

    assert_eq!(batch.outcome(), BatchOutcome::Empty);
    assert_eq!(batch.diagnostics.rows_out, 0);
    Ok(())
}
