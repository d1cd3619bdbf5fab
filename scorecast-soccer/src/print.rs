use stanza::style::HAlign::{Left, Right};
use stanza::style::{Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use scorecast::linear::matrix::Matrix;

use crate::domain::Fixture;
use crate::predictor::PredictionResult;

pub fn tabulate_predictions(fixtures: &[Fixture], results: &[PredictionResult]) -> Table {
    debug_assert_eq!(fixtures.len(), results.len());
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Fixture".into(),
                "λ home".into(),
                "λ away".into(),
                "Score".into(),
                "Home %".into(),
                "Draw %".into(),
                "Away %".into(),
                ">1.5 %".into(),
                ">2.5 %".into(),
            ],
        ));
    for (index, (fixture, result)) in fixtures.iter().zip(results).enumerate() {
        let label = fixture
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format!("{:.3}", result.lambda_home).into(),
                format!("{:.3}", result.lambda_away).into(),
                format!(
                    "{}-{}",
                    result.predicted_home_goals, result.predicted_away_goals
                )
                .into(),
                format!("{:.1}", result.home_win).into(),
                format!("{:.1}", result.draw).into(),
                format!("{:.1}", result.away_win).into(),
                format!("{:.1}", result.over_1p5).into(),
                format!("{:.1}", result.over_2p5).into(),
            ],
        ));
    }
    table
}

/// Percentage probability of each score, home goals down the rows and away goals across.
pub fn tabulate_scoregrid(scoregrid: &Matrix<f64>) -> Table {
    let mut cols = vec![Col::new(Styles::default().with(MinWidth(4)).with(Left))];
    cols.extend(
        (0..scoregrid.cols()).map(|_| Col::new(Styles::default().with(MinWidth(6)).with(Right))),
    );
    let mut header = vec!["H\\A".into()];
    header.extend((0..scoregrid.cols()).map(|away_goals| away_goals.to_string().into()));
    let mut table = Table::default()
        .with_cols(cols)
        .with_row(Row::new(Styles::default().with(Header(true)), header));

    for home_goals in 0..scoregrid.rows() {
        let mut cells = vec![home_goals.to_string().into()];
        cells.extend(
            scoregrid
                .row_slice(home_goals)
                .iter()
                .map(|prob| format!("{:.2}", prob * 100.0).into()),
        );
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}
